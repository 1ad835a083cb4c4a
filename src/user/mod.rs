//! The user resource: records, the in-memory store, and the guarded controller.

pub mod controller;
pub mod entity;
pub mod service;

pub use controller::UserController;
pub use entity::{Claims, CreateUserDto, UpdateUserDto, User};
pub use service::UserService;
