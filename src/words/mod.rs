//! Word lists.
//!
//! A `WordPool` is loaded once, validated, and then drawn from for every
//! board. Bad lines are dropped with a warning rather than failing the load,
//! unless too few words survive to deal a board.

pub mod pool;

pub use pool::{LoadReport, RejectReason, Rejection, WordPool};
