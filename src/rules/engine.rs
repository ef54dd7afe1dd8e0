//! The match state machine.
//!
//! `GameState` is a value. Every transition takes `&self`, builds the next
//! state and returns it inside a `Transition` together with the events it
//! produced. A rejected call returns an error and leaves the original state
//! as it was, so callers can keep older states around for snapshots or undo.
//!
//! Board and history are `im::Vector`s, so cloning a state for the next
//! transition shares structure with the previous one.
//!
//! ## Transitions
//!
//! - `start_match`: Setup -> ClueGiving(starting team)
//! - `submit_clue`: ClueGiving(team) -> Guessing(team)
//! - `submit_guess` / `submit_guess_word`: Guessing -> Guessing, ClueGiving(other) or GameOver
//! - `pass_turn`: Guessing(team) -> ClueGiving(other)
//! - `end_match`: any live phase -> GameOver(Aborted)

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, warn};

use super::evaluator::{evaluate, Verdict};
use super::history::{GuessRecord, TurnOutcome, TurnRecord};
use super::phase::{GamePhase, GuessingTurn, MatchResult};
use crate::board::{Board, Owner, Position};
use crate::clues::{Clue, ClueValidator};
use crate::core::{
    ClueRejection, GameError, MatchRules, Result, Team, TeamColor, TeamConfig, TeamMap, Word,
};

/// Events produced by one transition, in order.
pub type Events = SmallVec<[GameEvent; 4]>;

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MatchStarted { starting_team: TeamColor },
    ClueAccepted { clue: Clue },
    CardRevealed {
        position: Position,
        word: Word,
        owner: Owner,
        guessing_team: TeamColor,
    },
    TurnEnded { team: TeamColor, outcome: TurnOutcome },
    TeamWon { team: TeamColor },
    TeamLost { team: TeamColor },
    MatchAborted { reason: String },
}

/// The result of a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Events,
}

/// Full state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    teams: TeamMap<Team>,
    phase: GamePhase,
    history: Vector<TurnRecord>,
    rules: MatchRules,
    turn_number: u32,
    version: u64,
}

impl GameState {
    /// A match in `Setup` on `board`.
    ///
    /// Each team's target is the number of cards it owns on the board.
    #[must_use]
    pub fn new(board: Board, red: TeamConfig, blue: TeamConfig) -> Self {
        let target = |color| board.count_of(Owner::Team(color)) as u32;
        let teams = TeamMap::from_pair(
            Team::new(TeamColor::Red, red, target(TeamColor::Red)),
            Team::new(TeamColor::Blue, blue, target(TeamColor::Blue)),
        );
        Self {
            board,
            teams,
            phase: GamePhase::Setup,
            history: Vector::new(),
            rules: MatchRules::default(),
            turn_number: 0,
            version: 0,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn team(&self, color: TeamColor) -> &Team {
        &self.teams[color]
    }

    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Concluded turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Turns started so far, counting the one in progress.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Incremented by every successful transition.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn active_team(&self) -> Option<TeamColor> {
        self.phase.active_team()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.phase.result()
    }

    /// Every accepted clue, in order, including the one being guessed on.
    #[must_use]
    pub fn clue_history(&self) -> Vec<Clue> {
        let mut clues: Vec<Clue> = self.history.iter().map(|r| r.clue.clone()).collect();
        if let GamePhase::Guessing(turn) = &self.phase {
            clues.push(turn.clue.clone());
        }
        clues
    }

    // === Transitions ===

    /// Check both rosters and hand the first clue to `starting_team`.
    pub fn start_match(&self, starting_team: TeamColor) -> Result<Transition> {
        self.try_start_match(starting_team)
            .inspect_err(|err| warn!(%err, "match start rejected"))
    }

    fn try_start_match(&self, starting_team: TeamColor) -> Result<Transition> {
        if self.phase != GamePhase::Setup {
            return Err(self.wrong_phase("start the match"));
        }
        for (team, state) in self.teams.iter() {
            if let Some(missing) = state.missing_role() {
                return Err(GameError::IncompleteTeam { team, missing });
            }
        }
        if starting_team != self.board.starting_team() {
            return Err(GameError::StartingTeamMismatch {
                requested: starting_team,
                board: self.board.starting_team(),
            });
        }

        let mut next = self.next();
        next.phase = GamePhase::ClueGiving {
            team: starting_team,
        };
        info!(%starting_team, "match started");
        Ok(next.with_events(smallvec![GameEvent::MatchStarted { starting_team }]))
    }

    /// Accept a clue from the active team's Chief.
    ///
    /// The clue is checked against face-down words only. With
    /// `cap_clue_number`, the number may not exceed the team's remaining words
    /// (or 1, whichever is larger).
    pub fn submit_clue(&self, clue: Clue, validator: &ClueValidator) -> Result<Transition> {
        self.try_submit_clue(clue, validator)
            .inspect_err(|err| warn!(%err, "clue rejected"))
    }

    fn try_submit_clue(&self, clue: Clue, validator: &ClueValidator) -> Result<Transition> {
        let team = match self.phase {
            GamePhase::ClueGiving { team } => team,
            _ => return Err(self.wrong_phase("give a clue")),
        };
        if clue.team != team {
            return Err(GameError::WrongTeamTurn {
                expected: team,
                actual: clue.team,
            });
        }

        validator
            .validate(&clue, &self.board.unrevealed_words())
            .into_result()?;

        if self.rules.cap_clue_number {
            let max = self.teams[team].words_remaining().max(1);
            if clue.number > max {
                return Err(ClueRejection::NumberTooHigh {
                    number: clue.number,
                    max,
                }
                .into());
            }
        }

        let mut next = self.next();
        next.turn_number += 1;
        debug!(%team, %clue, turn = next.turn_number, "clue accepted");
        next.phase = GamePhase::Guessing(GuessingTurn::new(clue.clone()));
        Ok(next.with_events(smallvec![GameEvent::ClueAccepted { clue }]))
    }

    /// Reveal the card at `position` for the active team.
    pub fn submit_guess(&self, position: Position) -> Result<Transition> {
        self.try_submit_guess(position)
            .inspect_err(|err| warn!(%err, "guess rejected"))
    }

    /// Reveal the card showing `word`, compared normalized.
    pub fn submit_guess_word(&self, word: &str) -> Result<Transition> {
        self.guessing_turn("guess")
            .and_then(|_| {
                self.board
                    .find_word(word)
                    .map(|card| card.position())
                    .ok_or_else(|| GameError::WordNotOnBoard {
                        word: word.to_string(),
                    })
            })
            .and_then(|position| self.try_submit_guess(position))
            .inspect_err(|err| warn!(%err, "guess rejected"))
    }

    fn try_submit_guess(&self, position: Position) -> Result<Transition> {
        let mut turn = self.guessing_turn("guess")?.clone();
        let team = turn.team;

        let mut next = self.next();
        let owner = next.board.reveal(position)?;
        let word = next
            .board
            .card_at(position)
            .map(|card| card.word().clone())
            .ok_or(GameError::InvalidPosition { position })?;

        if let Owner::Team(color) = owner {
            next.teams[color].record_found();
        }
        turn.guesses_made += 1;
        turn.guesses.push(GuessRecord {
            position,
            word: word.clone(),
            owner,
        });
        debug!(%team, %position, word = word.display(), %owner, "card revealed");

        let mut events: Events = smallvec![GameEvent::CardRevealed {
            position,
            word,
            owner,
            guessing_team: team,
        }];

        match evaluate(&next.teams, owner, team) {
            Verdict::TeamLoses(loser) => {
                let winner = self.rules.failure_awards_opponent.then(|| loser.other());
                next.conclude_turn(turn, TurnOutcome::HitFailure, &mut events);
                events.push(GameEvent::TeamLost { team: loser });
                if let Some(winner) = winner {
                    events.push(GameEvent::TeamWon { team: winner });
                }
                next.phase = GamePhase::GameOver(MatchResult::Loss { loser, winner });
                info!(%loser, ?winner, "failure card revealed, game over");
            }
            Verdict::TeamWins(winner) => {
                let outcome = if winner == team {
                    TurnOutcome::Won
                } else {
                    TurnOutcome::OpponentWon
                };
                next.conclude_turn(turn, outcome, &mut events);
                events.push(GameEvent::TeamWon { team: winner });
                next.phase = GamePhase::GameOver(MatchResult::Winner(winner));
                info!(%winner, "all words found, game over");
            }
            Verdict::Continue => match owner {
                Owner::Team(color) if color == team => {
                    if turn.guesses_made >= turn.guesses_allowed {
                        next.conclude_turn(turn, TurnOutcome::GuessesExhausted, &mut events);
                        next.phase = GamePhase::ClueGiving { team: team.other() };
                    } else {
                        next.phase = GamePhase::Guessing(turn);
                    }
                }
                Owner::Team(_) => {
                    next.conclude_turn(turn, TurnOutcome::HitOpponent, &mut events);
                    next.phase = GamePhase::ClueGiving { team: team.other() };
                }
                Owner::Neutral | Owner::Failure => {
                    next.conclude_turn(turn, TurnOutcome::HitNeutral, &mut events);
                    next.phase = GamePhase::ClueGiving { team: team.other() };
                }
            },
        }

        Ok(next.with_events(events))
    }

    /// Stop guessing and hand the turn to the other team.
    pub fn pass_turn(&self) -> Result<Transition> {
        self.try_pass_turn()
            .inspect_err(|err| warn!(%err, "pass rejected"))
    }

    fn try_pass_turn(&self) -> Result<Transition> {
        let turn = self.guessing_turn("pass")?.clone();
        if !self.rules.allow_pass {
            return Err(self.wrong_phase("pass"));
        }
        let team = turn.team;

        let mut next = self.next();
        let mut events = Events::new();
        next.conclude_turn(turn, TurnOutcome::Passed, &mut events);
        next.phase = GamePhase::ClueGiving { team: team.other() };
        debug!(%team, "turn passed");
        Ok(next.with_events(events))
    }

    /// End the match immediately with `reason`.
    ///
    /// A turn in progress is recorded as aborted.
    pub fn end_match(&self, reason: impl Into<String>) -> Result<Transition> {
        if self.is_over() {
            let err = self.wrong_phase("end the match");
            warn!(%err, "end rejected");
            return Err(err);
        }
        let reason = reason.into();

        let mut next = self.next();
        let mut events = Events::new();
        if let GamePhase::Guessing(turn) = &self.phase {
            next.conclude_turn(turn.clone(), TurnOutcome::Aborted, &mut events);
        }
        events.push(GameEvent::MatchAborted {
            reason: reason.clone(),
        });
        info!(%reason, "match aborted");
        next.phase = GamePhase::GameOver(MatchResult::Aborted { reason });
        Ok(next.with_events(events))
    }

    // === Persistence ===

    /// Encode the full state, history included.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    // === Internals ===

    fn next(&self) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next
    }

    fn with_events(self, events: Events) -> Transition {
        Transition {
            state: self,
            events,
        }
    }

    fn guessing_turn(&self, action: &'static str) -> Result<&GuessingTurn> {
        match &self.phase {
            GamePhase::Guessing(turn) => Ok(turn),
            _ => Err(self.wrong_phase(action)),
        }
    }

    fn wrong_phase(&self, action: &'static str) -> GameError {
        GameError::WrongPhase {
            action,
            phase: self.phase.to_string(),
        }
    }

    fn conclude_turn(&mut self, turn: GuessingTurn, outcome: TurnOutcome, events: &mut Events) {
        let team = turn.team;
        self.history.push_back(TurnRecord {
            number: self.turn_number,
            team,
            clue: turn.clue,
            guesses: turn.guesses,
            outcome,
        });
        events.push(GameEvent::TurnEnded { team, outcome });
    }
}
