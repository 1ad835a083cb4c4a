//! User records, request payloads, and decoded session claims.

use crate::ability::Principal;
use crate::error::PolicyError;
use crate::subject::Subject;
use crate::types::{Role, SubjectType, UserId};

/// A stored user. Acts both as a principal and as a subject of checks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub is_admin: bool,
}

impl Principal for User {
    fn id(&self) -> UserId {
        self.id
    }

    fn role(&self) -> Option<Role> {
        Some(Role::from_is_admin(self.is_admin))
    }
}

impl Subject for User {
    fn subject_type(&self) -> SubjectType {
        SubjectType::USER
    }
}

/// Principal as decoded from an external session or token.
///
/// Unlike `User`, the role attribute may be absent in the payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: UserId,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl Principal for Claims {
    fn id(&self) -> UserId {
        self.id
    }

    fn role(&self) -> Option<Role> {
        self.is_admin.map(Role::from_is_admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), PolicyError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }

    pub(crate) fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
    }
}

fn validate_name(name: &str) -> Result<(), PolicyError> {
    if name.trim().is_empty() {
        return Err(PolicyError::Invalid("name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), PolicyError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(PolicyError::Invalid(format!("email `{}` is not an address", email))),
    }
}
