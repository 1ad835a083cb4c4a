//!
//! Defines error types for the authorization engine and its entry points.
//!
//! A denial is never an `AbilityError`: `Ability::can` answers `false`. The
//! variants here are integration faults that must not be confused with "not allowed".

use crate::types::{Action, SubjectType, UserId};

/// Precondition violations detected while building or querying an `Ability`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    /// The principal carries no role classification.
    #[error("Malformed principal {0}: missing role attribute")]
    MalformedPrincipal(String),
    /// A subject tag outside the known vocabulary.
    #[error("Unresolvable subject type: {0}")]
    UnresolvableSubject(String),
    /// An action name or tag outside the known vocabulary.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Outcomes an entry point surfaces to its own caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// The principal's ability does not permit the operation.
    #[error("{message}")]
    Forbidden {
        message: String,
        action: Action,
        subject: SubjectType,
    },
    #[error("User {0} not found")]
    NotFound(UserId),
    /// Request payload rejected before reaching the store.
    #[error("Invalid request: {0}")]
    Invalid(String),
    /// The engine could not reach a decision; deployment or integration bug.
    #[error("Authorization engine error: {0}")]
    Ability(#[from] AbilityError),
}

/// Failures loading seed data into the user store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file `{path}`: {reason}")]
    Io { path: String, reason: String },
    #[error("Invalid seed data: {0}")]
    Parse(String),
    /// Two seed records share an id.
    #[error("Duplicate user id {0} in seed data")]
    DuplicateId(UserId),
}

impl PolicyError {
    /// Message used for denials when the caller supplies none.
    pub const DEFAULT_FORBIDDEN: &'static str = "Forbidden resource";

    pub fn forbidden(message: impl Into<String>, action: Action, subject: SubjectType) -> Self {
        PolicyError::Forbidden {
            message: message.into(),
            action,
            subject,
        }
    }

    /// HTTP-equivalent status code for a transport layer to render.
    pub fn status_code(&self) -> u16 {
        match self {
            PolicyError::Forbidden { .. } => 403,
            PolicyError::NotFound(_) => 404,
            PolicyError::Invalid(_) => 400,
            PolicyError::Ability(_) => 500,
        }
    }

    /// True for the normal "not allowed" outcome.
    pub fn is_denial(&self) -> bool {
        matches!(self, PolicyError::Forbidden { .. })
    }
}
