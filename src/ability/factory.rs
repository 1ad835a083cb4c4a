//!
//! Builds an `Ability` from a principal's role.
//!
//! The policy is a fixed table keyed by `Role`:
//! - `Admin`  → `manage` on `all`
//! - `Member` → `read` on `User`

use crate::ability::core::Ability;
use crate::error::AbilityError;
use crate::rules::{Rule, RuleSet};
use crate::types::{Action, Role, SubjectType, UserId};

/// The authenticated actor an ability is defined for.
///
/// Supplied per request by the caller; the engine only reads it.
pub trait Principal {
    fn id(&self) -> UserId;

    /// Role classification, or `None` when the attribute is missing.
    fn role(&self) -> Option<Role>;
}

/// Rules granted to a role. Pure: the same role always yields the same set.
pub fn rules_for_role(role: Role) -> RuleSet {
    let rule = match role {
        Role::Admin => Rule::new(Action::Manage, SubjectType::All),
        Role::Member => Rule::new(Action::Read, SubjectType::USER),
    };
    std::iter::once(rule).collect()
}

/// Stateless factory handed to entry points that need to define abilities.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbilityFactory;

impl AbilityFactory {
    pub fn new() -> Self {
        AbilityFactory
    }

    /// Defines the ability of `principal`.
    ///
    /// A principal without a role is rejected rather than defaulted to either
    /// full access or no access.
    pub fn define_ability<P: Principal + ?Sized>(
        &self,
        principal: &P,
    ) -> Result<Ability, AbilityError> {
        let id = principal.id();
        let role = match principal.role() {
            Some(role) => role,
            None => {
                tracing::warn!(
                    principal = %id,
                    "Principal has no role attribute; refusing to define ability"
                );
                return Err(AbilityError::MalformedPrincipal(id.to_string()));
            }
        };

        let rules = rules_for_role(role);
        tracing::debug!(principal = %id, ?role, rules = rules.len(), "Defined ability");
        Ok(Ability::from_rules(rules))
    }
}

/// Shorthand for `AbilityFactory::new().define_ability(principal)`.
pub fn build_ability<P: Principal + ?Sized>(principal: &P) -> Result<Ability, AbilityError> {
    AbilityFactory.define_ability(principal)
}
