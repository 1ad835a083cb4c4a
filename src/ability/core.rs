//!
//! The decision surface: an immutable rule set answering `can` / `cannot`.

use crate::error::{AbilityError, PolicyError};
use crate::rules::{self, RuleSet};
use crate::subject::{self, Subject};
use crate::types::Action;

/// Immutable result of defining an ability for one principal.
///
/// Owns its rules exclusively and exposes no way to change them; a different
/// rule set means building a new `Ability`. Safe to query from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    rules: RuleSet,
}

impl Ability {
    pub(crate) fn from_rules(rules: RuleSet) -> Self {
        Ability { rules }
    }

    /// Returns `true` if any rule grants `action` on the subject's type.
    pub fn can<S: Subject + ?Sized>(&self, action: Action, subject: &S) -> bool {
        let subject_type = subject::resolve(subject);
        let allowed = rules::matches(&self.rules, action, subject_type);
        tracing::debug!(%action, subject = %subject_type, allowed, "ability decision");
        allowed
    }

    /// Strict complement of `can`.
    #[inline]
    pub fn cannot<S: Subject + ?Sized>(&self, action: Action, subject: &S) -> bool {
        !self.can(action, subject)
    }

    /// Text-form query, e.g. `can_named("read", "User")`.
    ///
    /// Unknown names are errors, not denials.
    pub fn can_named(&self, action: &str, subject: &str) -> Result<bool, AbilityError> {
        let action: Action = action.parse()?;
        let subject_type = subject::resolve_name(subject)?;
        Ok(self.can(action, &subject_type))
    }

    /// Like `can`, but turns a denial into `PolicyError::Forbidden` carrying `message`.
    pub fn check<S: Subject + ?Sized>(
        &self,
        action: Action,
        subject: &S,
        message: &str,
    ) -> Result<(), PolicyError> {
        if self.can(action, subject) {
            Ok(())
        } else {
            Err(PolicyError::forbidden(message, action, subject::resolve(subject)))
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
