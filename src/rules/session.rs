//! Match handle and builder.
//!
//! `Match` owns the current `GameState` and the clue validator, and swaps in
//! the new state after every successful transition. Callers that want the
//! value-level API can use `GameState` directly.

use tracing::info;

use super::engine::{Events, GameState, Transition};
use super::view::GameStateView;
use crate::board::{BoardGenerator, Position};
use crate::clues::{Clue, ClueValidator, RhymeStrategy};
use crate::core::{
    BoardLayout, ClueLimits, GameRng, MatchConfig, MatchRules, Result, Role, TeamColor, TeamConfig,
    Word, BOARD_CARDS,
};
use crate::words::WordPool;

/// A running match.
#[derive(Debug)]
pub struct Match {
    state: GameState,
    validator: ClueValidator,
    seed: u64,
}

impl Match {
    /// Resume from a saved state.
    #[must_use]
    pub fn resume(state: GameState, validator: ClueValidator, seed: u64) -> Self {
        Self {
            state,
            validator,
            seed,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed the board was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn validator(&self) -> &ClueValidator {
        &self.validator
    }

    #[must_use]
    pub fn snapshot(&self, role: Role) -> GameStateView {
        self.state.snapshot(role)
    }

    pub fn submit_clue(&mut self, clue: Clue) -> Result<Events> {
        let transition = self.state.submit_clue(clue, &self.validator)?;
        Ok(self.apply(transition))
    }

    /// Give a clue for whichever team is expected to act.
    pub fn give_clue(&mut self, word: impl Into<Word>, number: u32) -> Result<Events> {
        // With no active team the engine rejects the call on phase.
        let team = self.state.active_team().unwrap_or(TeamColor::Red);
        self.submit_clue(Clue::new(word, number, team))
    }

    pub fn submit_guess(&mut self, position: Position) -> Result<Events> {
        let transition = self.state.submit_guess(position)?;
        Ok(self.apply(transition))
    }

    pub fn submit_guess_word(&mut self, word: &str) -> Result<Events> {
        let transition = self.state.submit_guess_word(word)?;
        Ok(self.apply(transition))
    }

    pub fn pass_turn(&mut self) -> Result<Events> {
        let transition = self.state.pass_turn()?;
        Ok(self.apply(transition))
    }

    pub fn end_match(&mut self, reason: impl Into<String>) -> Result<Events> {
        let transition = self.state.end_match(reason)?;
        Ok(self.apply(transition))
    }

    /// Take the state out, e.g. for saving.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn apply(&mut self, transition: Transition) -> Events {
        self.state = transition.state;
        transition.events
    }
}

/// Builder for creating a `Match`.
///
/// ```
/// use word_detective::core::{TeamColor, TeamConfig};
/// use word_detective::rules::MatchBuilder;
/// use word_detective::words::WordPool;
///
/// let pool = WordPool::builtin().unwrap();
/// let game = MatchBuilder::new()
///     .red(TeamConfig::pair("Ana", "Ben"))
///     .blue(TeamConfig::pair("Cleo", "Dev"))
///     .seed(7)
///     .starting_team(TeamColor::Blue)
///     .build(&pool)
///     .unwrap();
///
/// assert_eq!(game.state().active_team(), Some(TeamColor::Blue));
/// ```
pub struct MatchBuilder {
    config: MatchConfig,
    red: TeamConfig,
    blue: TeamConfig,
    rhyme: Option<Box<dyn RhymeStrategy>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            red: TeamConfig::new(),
            blue: TeamConfig::new(),
            rhyme: None,
        }
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn red(mut self, team: TeamConfig) -> Self {
        self.red = team;
        self
    }

    #[must_use]
    pub fn blue(mut self, team: TeamConfig) -> Self {
        self.blue = team;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn starting_team(mut self, team: TeamColor) -> Self {
        self.config.starting_team = Some(team);
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: BoardLayout) -> Self {
        self.config.layout = layout;
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: MatchRules) -> Self {
        self.config.rules = rules;
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: ClueLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Use a custom rhyme heuristic for clue validation.
    #[must_use]
    pub fn rhyme(mut self, rhyme: impl RhymeStrategy + 'static) -> Self {
        self.rhyme = Some(Box::new(rhyme));
        self
    }

    /// Draw 25 words, deal the board and start the match.
    ///
    /// Without a seed one is taken from entropy and reported by
    /// `Match::seed`. Without a starting team one is picked from the seed.
    pub fn build(self, pool: &WordPool) -> Result<Match> {
        let MatchBuilder {
            config,
            red,
            blue,
            rhyme,
        } = self;

        let generator = BoardGenerator::new(config.layout)?;
        let rng = config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();

        let starting_team = match config.starting_team {
            Some(team) => team,
            None => {
                let mut pick = rng.for_context("starting_team");
                TeamColor::ALL[pick.gen_range_usize(0..TeamColor::ALL.len())]
            }
        };

        let words = pool.draw(BOARD_CARDS, &mut rng.for_context("draw"))?;
        let board = generator.generate(words, starting_team, &mut rng.for_context("deal"))?;

        let validator = match rhyme {
            Some(rhyme) => ClueValidator::new(config.limits).with_boxed_rhyme(rhyme),
            None => ClueValidator::new(config.limits),
        };

        let transition = GameState::new(board, red, blue)
            .with_rules(config.rules)
            .start_match(starting_team)?;
        info!(seed, %starting_team, "new match dealt");

        Ok(Match {
            state: transition.state,
            validator,
            seed,
        })
    }
}

/// Start a match with default settings.
pub fn new_match(
    pool: &WordPool,
    red: TeamConfig,
    blue: TeamConfig,
    seed: Option<u64>,
) -> Result<Match> {
    let builder = MatchBuilder::new().red(red).blue(blue);
    match seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    }
    .build(pool)
}
