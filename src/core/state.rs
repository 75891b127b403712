//! The `State` trait shared by every phase-like value in the crate.
//!
//! States are plain values: inspecting one never has side effects, which is
//! what lets the session history record them and the store serialize them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position in a state machine.
///
/// # Example
///
/// ```rust
/// use quizkit::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Round {
///     Asking,
///     Finished,
/// }
///
/// impl State for Round {
///     fn name(&self) -> &str {
///         match self {
///             Self::Asking => "Asking",
///             Self::Finished => "Finished",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Finished)
///     }
/// }
///
/// assert!(Round::Finished.is_final());
/// assert_eq!(Round::Asking.name(), "Asking");
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }
}
