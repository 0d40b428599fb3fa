//! User group domain models and parameters.
//!
//! Groups carry permission grants; a user's effective capabilities are the
//! union of the grants of every group they belong to. Groups are soft
//! deleted by clearing `is_active` so that historical memberships remain
//! auditable.

use chrono::{DateTime, Utc};

use crate::{
    model::user_group::{CreateUserGroupDto, UpdateUserGroupDto, UserGroupDto},
    server::{error::AppError, model::permission::PermissionGrant},
};

/// Named collection of permission grants that users can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGroup {
    pub id: i32,
    /// Unique group name.
    pub name: String,
    pub description: Option<String>,
    /// Permission grants carried by this group.
    pub permissions: Vec<PermissionGrant>,
    /// Soft-delete flag; inactive groups grant nothing.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserGroup {
    /// Converts the group domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserGroupDto` - The converted group DTO with permission payloads
    pub fn into_dto(self) -> UserGroupDto {
        UserGroupDto {
            id: self.id,
            name: self.name,
            description: self.description,
            permissions: self.permissions.iter().map(|g| g.to_dto()).collect(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a group row and its permission rows to a domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The group row from the database
    /// - `permissions` - The group's permission rows
    ///
    /// # Returns
    /// - `Ok(UserGroup)` - The converted group domain model
    /// - `Err(AppError::InternalError)` - A stored permission row names an
    ///   unknown resource
    pub fn from_entity(
        entity: entity::user_group::Model,
        permissions: Vec<entity::user_group_permission::Model>,
    ) -> Result<Self, AppError> {
        let permissions = permissions
            .into_iter()
            .map(PermissionGrant::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            permissions,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a user group.
#[derive(Debug, Clone)]
pub struct CreateUserGroupParam {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<PermissionGrant>,
}

impl CreateUserGroupParam {
    /// Validates a group-creation payload against the permission vocabulary.
    ///
    /// # Arguments
    /// - `dto` - The group-creation payload
    ///
    /// # Returns
    /// - `Ok(CreateUserGroupParam)` - All permission grants use known names
    /// - `Err(AppError::BadRequest)` - Unknown resource or action name
    pub fn from_dto(dto: CreateUserGroupDto) -> Result<Self, AppError> {
        let permissions = dto
            .permissions
            .iter()
            .map(PermissionGrant::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: dto.name,
            description: dto.description,
            permissions,
        })
    }
}

/// Parameters for a partial group update; `None` preserves the current value.
///
/// When `permissions` is `Some`, the group's grant list is replaced wholesale
/// rather than merged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserGroupParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<PermissionGrant>>,
    pub is_active: Option<bool>,
}

impl UpdateUserGroupParam {
    pub fn from_dto(dto: UpdateUserGroupDto) -> Result<Self, AppError> {
        let permissions = dto
            .permissions
            .map(|grants| {
                grants
                    .iter()
                    .map(PermissionGrant::from_dto)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            name: dto.name,
            description: dto.description,
            permissions,
            is_active: dto.is_active,
        })
    }
}
