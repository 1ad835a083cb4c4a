//! Seeded principals and helpers shared by integration tests and benches.
//!
//! Only compiled with the `test-utils` feature.

use crate::types::UserId;
use crate::user::{CreateUserDto, User};

/// Id shared by both seeded principals, as in the sample data.
pub const SEED_USER_ID: UserId = UserId(uuid::Uuid::from_u128(1));

/// The regular (non-admin) seeded principal.
pub fn user() -> User {
    User {
        id: SEED_USER_ID,
        name: "user".into(),
        email: "user@example.com".into(),
        is_admin: false,
    }
}

/// The administrator seeded principal.
pub fn user1() -> User {
    User {
        is_admin: true,
        name: "user1".into(),
        email: "user1@example.com".into(),
        ..user()
    }
}

pub fn principal(is_admin: bool) -> User {
    User {
        id: UserId::new_v4(),
        name: "principal".into(),
        email: "principal@example.com".into(),
        is_admin,
    }
}

pub fn create_dto(name: &str) -> CreateUserDto {
    CreateUserDto {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        is_admin: false,
    }
}

/// Installs a test-writer subscriber honouring `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
