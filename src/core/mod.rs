//! Generic state machine building blocks.
//!
//! - `State`: values describing a position in a machine
//! - `Guard`: pure predicates gating transitions
//! - `StateHistory`: immutable transition log
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
