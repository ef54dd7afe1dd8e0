//! Match rules: phases, the state machine, win/loss evaluation and views.
//!
//! `GameState` holds one match and moves between phases through value
//! transitions. `Match` wraps it for callers that prefer a mutable handle.
//! The evaluator is internal to the state machine; callers observe its
//! verdicts through `GamePhase` and `GameEvent`.

pub mod engine;
pub mod evaluator;
pub mod history;
pub mod phase;
pub mod session;
pub mod view;

pub use engine::{Events, GameEvent, GameState, Transition};
pub use evaluator::{evaluate, Verdict};
pub use history::{GuessRecord, Guesses, TurnOutcome, TurnRecord};
pub use phase::{GamePhase, GuessingTurn, MatchResult};
pub use session::{new_match, Match, MatchBuilder};
pub use view::{ChiefView, DetectiveCard, DetectiveView, GameStateView};
