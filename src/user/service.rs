//! In-memory user store standing in for persistence.
//!
//! Performs no authorization of its own; callers go through `UserController`.

use std::path::Path;

use crate::error::StoreError;
use crate::types::UserId;
use crate::user::entity::{CreateUserDto, UpdateUserDto, User};

#[derive(Debug, Clone, Default)]
pub struct UserService {
    // Insertion order is the listing order.
    users: Vec<User>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a JSON array of users.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let users: Vec<User> =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        let mut service = Self::new();
        for user in users {
            if service.find_one(user.id).is_some() {
                return Err(StoreError::DuplicateId(user.id));
            }
            service.users.push(user);
        }
        tracing::debug!(users = service.users.len(), "Seeded user store");
        Ok(service)
    }

    /// Reads a JSON seed file, see `from_json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn create(&mut self, dto: CreateUserDto) -> User {
        let user = User {
            id: UserId::new_v4(),
            name: dto.name,
            email: dto.email,
            is_admin: dto.is_admin,
        };
        self.users.push(user.clone());
        user
    }

    pub fn find_all(&self) -> &[User] {
        &self.users
    }

    pub fn find_one(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn update(&mut self, id: UserId, dto: &UpdateUserDto) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        dto.apply_to(user);
        Some(user.clone())
    }

    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
