//! User domain models and parameters.
//!
//! Provides domain models for resident accounts with contact details and
//! activation state. Includes parameter types for registration and
//! administrative user creation.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Resident account with contact details and activation state.
///
/// Carries the stored bcrypt password hash; the hash never crosses the DTO
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub full_name: String,
    /// Unique contact email; accepted in place of the username at login.
    pub email: String,
    /// Bcrypt hash of the account password.
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub apartment_number: Option<String>,
    /// Deactivated accounts cannot authenticate.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here and is never serialized.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            apartment_number: self.apartment_number,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            full_name: entity.full_name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone_number: entity.phone_number,
            address: entity.address,
            apartment_number: entity.apartment_number,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a user account.
///
/// Used by both self-service registration and administrative user creation.
/// The password arrives in plain text and is hashed by the auth service
/// before this param reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// Bcrypt hash, produced by the caller.
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub apartment_number: Option<String>,
}
