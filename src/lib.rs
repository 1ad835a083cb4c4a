#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Warden-Core is a declarative authorization engine.
//!
//! Given a principal and a requested action on a subject, it decides whether the
//! action is permitted. A principal's role selects a small set of allow-rules,
//! each binding an `Action` (or the `manage` wildcard) to a `SubjectType` (or the
//! `all` wildcard). An `Ability` built from those rules answers `can` / `cannot`.
//!
//! ```
//! use warden_core::{build_ability, Action, SubjectType, User, UserId};
//!
//! let member = User {
//!     id: UserId::new_v4(),
//!     name: "guest".into(),
//!     email: "g@example.com".into(),
//!     is_admin: false,
//! };
//! let ability = build_ability(&member).unwrap();
//! assert!(ability.can(Action::Read, &member));
//! assert!(ability.cannot(Action::Create, &SubjectType::USER));
//! ```

// Shared vocabulary (Action, SubjectType, Role, UserId).
pub mod types;

// Error types.
pub mod error;

// Subject type resolution.
pub mod subject;

// Rule algebra and matcher.
pub mod rules;

// Ability definition and the decision surface.
pub mod ability;

// User records, store, and guarded controller.
pub mod user;

#[cfg(feature = "test-utils")]
pub mod fixtures;

pub use ability::{build_ability, Ability, AbilityFactory, Principal};
pub use error::{AbilityError, PolicyError, StoreError};
pub use rules::{Rule, RuleSet};
pub use subject::Subject;
pub use types::{Action, Role, SubjectType, UserId};
pub use user::{Claims, CreateUserDto, UpdateUserDto, User, UserController, UserService};
