//! User management service.

use bcrypt::DEFAULT_COST;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::{user::UserRepository, user_group::UserGroupRepository},
        error::AppError,
        model::user::CreateUserParam,
    },
};

/// Service for administrative user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user account.
    pub async fn list(&self) -> Result<Vec<UserDto>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(|u| u.into_dto()).collect())
    }

    /// Creates a user account administratively, with optional initial groups.
    ///
    /// # Arguments
    /// - `dto` - Account payload including initial group ids
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email already in use
    /// - `Err(AppError::NotFound)` - An initial group does not exist
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = UserGroupRepository::new(self.db);

        if user_repo.identifier_taken(&dto.username, &dto.email).await? {
            return Err(AppError::Conflict(
                "Username or email is already in use".to_string(),
            ));
        }

        // Resolve groups up front so a bad id fails before the account exists
        for group_id in &dto.user_groups {
            if group_repo.find_by_id(*group_id).await?.is_none() {
                return Err(AppError::NotFound(format!("User group {group_id} not found")));
            }
        }

        let password_hash = bcrypt::hash(&dto.password, DEFAULT_COST)
            .map_err(|err| AppError::InternalError(format!("Failed to hash password: {err}")))?;

        let user = user_repo
            .create(CreateUserParam {
                username: dto.username,
                full_name: dto.full_name,
                email: dto.email,
                password_hash,
                phone_number: dto.phone_number,
                address: dto.address,
                apartment_number: dto.apartment_number,
            })
            .await?;

        for group_id in dto.user_groups {
            group_repo.add_member(user.id, group_id).await?;
        }

        Ok(user.into_dto())
    }
}
