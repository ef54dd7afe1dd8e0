//! Win/loss evaluation.
//!
//! Runs after every reveal, once the owning team's `words_found` has been
//! updated. It only reads state; the state machine turns the verdict into a
//! phase change.

use crate::board::Owner;
use crate::core::{Team, TeamColor, TeamMap};

/// What a reveal means for the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    TeamWins(TeamColor),
    /// The team that revealed the failure card.
    TeamLoses(TeamColor),
}

impl Verdict {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Continue)
    }
}

/// Evaluate the reveal of a card owned by `revealed` by `guessing_team`.
///
/// A team can win on its opponent's turn when the opponent reveals that
/// team's last card.
#[must_use]
pub fn evaluate(teams: &TeamMap<Team>, revealed: Owner, guessing_team: TeamColor) -> Verdict {
    match revealed {
        Owner::Failure => Verdict::TeamLoses(guessing_team),
        Owner::Team(owner) if teams[owner].has_won() => Verdict::TeamWins(owner),
        Owner::Team(_) | Owner::Neutral => Verdict::Continue,
    }
}
