pub mod core;
pub mod factory;


// Re-export the primary types so callers can use `crate::ability::*`.
pub use self::core::Ability;
pub use self::factory::{build_ability, rules_for_role, AbilityFactory, Principal};
