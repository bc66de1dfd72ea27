//! # State — Minimal Finite-State-Machine Helper
//!
//! A named state with an explicit adjacency set of allowed successor
//! ordinals. The "machine" is just a graph of such nodes wired up by
//! application code; nothing walks it automatically.
//!
//! States are immutable once built through the fluent builder:
//!
//! ```
//! use waarde_core::State;
//!
//! let start = State::create(0).with_name("Start").with_allowed_transitions([1]);
//! let in_process = State::create(1).with_name("InProcess").with_allowed_transitions([2]);
//!
//! assert!(start.can_transition_to(&in_process));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::InvalidTransitionError;

/// A named, ordinal-keyed state with an explicit set of allowed successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    ordinal: i32,
    name: String,
    allowed: BTreeSet<i32>,
}

impl State {
    /// Creates a state for the given ordinal, with no name and no allowed
    /// transitions.
    pub fn create(ordinal: i32) -> Self {
        Self {
            ordinal,
            name: String::new(),
            allowed: BTreeSet::new(),
        }
    }

    /// Returns this state with the given name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns this state with the given set of allowed successor ordinals.
    #[must_use]
    pub fn with_allowed_transitions(mut self, ordinals: impl IntoIterator<Item = i32>) -> Self {
        self.allowed = ordinals.into_iter().collect();
        self
    }

    /// The ordinal value of this state.
    pub const fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// The name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pure membership test: is `target`'s ordinal in the allowed set?
    pub fn can_transition_to(&self, target: &State) -> bool {
        self.allowed.contains(&target.ordinal)
    }

    /// Transitions to `target`, returning it if the edge is allowed.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidTransitionError`] naming the rejected edge when
    /// `target` is not in the allowed set.
    pub fn transition_to(&self, target: &State) -> Result<State, InvalidTransitionError> {
        if !self.can_transition_to(target) {
            return Err(InvalidTransitionError {
                from: self.describe(),
                to: target.describe(),
            });
        }
        Ok(target.clone())
    }

    fn describe(&self) -> String {
        if self.name.is_empty() {
            self.ordinal.to_string()
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
