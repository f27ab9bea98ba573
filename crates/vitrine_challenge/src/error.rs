//! # Challenge Error Types
//!
//! All errors that can occur in the challenge engine. The taxonomy is
//! deliberately narrow: bad string input from the presentation layer fails
//! fast and loud; a missing frame scheduler degrades the engine to a
//! stopped state instead of crashing.

use thiserror::Error;
use vitrine_core::SchedulerError;

use crate::domain::Attribute;

/// Errors that can occur in the challenge engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// The attribute name does not exist in the configuration domain.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),

    /// The value is outside the attribute's fixed domain.
    ///
    /// This is a programmer error in the presentation layer, never a user
    /// error: every selectable value is drawn from the domain tables.
    #[error("value {value:?} is outside the {attribute} domain")]
    UnknownValue {
        /// The attribute the value was meant for.
        attribute: Attribute,
        /// The rejected value.
        value: String,
    },

    /// The host cannot provide frame callbacks, so the game cannot start.
    #[error("cannot start challenge: {0}")]
    CannotStart(#[from] SchedulerError),
}

/// Result type for challenge operations.
pub type ChallengeResult<T> = Result<T, ChallengeError>;
