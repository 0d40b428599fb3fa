//! User group management service.
//!
//! Implements group CRUD with soft delete and membership management.
//! Membership changes are idempotence-checked: assigning an existing member
//! or removing a non-member is a conflict rather than a silent no-op, so
//! clients learn their view of the membership was stale.

use sea_orm::DatabaseConnection;

use crate::{
    model::user_group::{
        CreateUserGroupDto, GroupMembershipDto, GroupUserDto, UpdateUserGroupDto, UserGroupDto,
    },
    server::{
        data::{user::UserRepository, user_group::UserGroupRepository},
        error::AppError,
        model::user_group::{CreateUserGroupParam, UpdateUserGroupParam},
    },
};

/// Service for user group CRUD and membership management.
pub struct UserGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserGroupService<'a> {
    /// Creates a new UserGroupService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserGroupService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with validated permission grants.
    ///
    /// # Arguments
    /// - `dto` - Group payload
    ///
    /// # Returns
    /// - `Ok(UserGroupDto)` - The created group
    /// - `Err(AppError::BadRequest)` - Unknown resource or action in a grant
    /// - `Err(AppError::Conflict)` - Group name already taken
    pub async fn create(&self, dto: CreateUserGroupDto) -> Result<UserGroupDto, AppError> {
        let param = CreateUserGroupParam::from_dto(dto)?;
        let repo = UserGroupRepository::new(self.db);

        if repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(
                "A group with this name already exists".to_string(),
            ));
        }

        let group = repo.create(param).await?;

        Ok(group.into_dto())
    }

    /// Lists every group with its grants.
    pub async fn list(&self) -> Result<Vec<UserGroupDto>, AppError> {
        let groups = UserGroupRepository::new(self.db).get_all().await?;

        Ok(groups.into_iter().map(|g| g.into_dto()).collect())
    }

    /// Gets one group by id.
    pub async fn get(&self, id: i32) -> Result<UserGroupDto, AppError> {
        let group = UserGroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User group not found".to_string()))?;

        Ok(group.into_dto())
    }

    /// Applies a partial update to a group.
    ///
    /// # Arguments
    /// - `id` - The group to update
    /// - `dto` - Fields to change
    ///
    /// # Returns
    /// - `Ok(UserGroupDto)` - The updated group
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::Conflict)` - New name already taken by another group
    pub async fn update(&self, id: i32, dto: UpdateUserGroupDto) -> Result<UserGroupDto, AppError> {
        let param = UpdateUserGroupParam::from_dto(dto)?;
        let repo = UserGroupRepository::new(self.db);

        if let Some(ref name) = param.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(
                        "A group with this name already exists".to_string(),
                    ));
                }
            }
        }

        let group = repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User group not found".to_string()))?;

        Ok(group.into_dto())
    }

    /// Soft deletes a group.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserGroupRepository::new(self.db).soft_delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("User group not found".to_string()));
        }

        Ok(())
    }

    /// Assigns a user to a group.
    ///
    /// # Arguments
    /// - `dto` - The (user, group) pair
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(AppError::NotFound)` - User or group does not exist
    /// - `Err(AppError::Conflict)` - User is already a member
    pub async fn assign_user(&self, dto: GroupMembershipDto) -> Result<(), AppError> {
        let group_repo = UserGroupRepository::new(self.db);

        self.check_pair_exists(&dto).await?;

        if group_repo.is_member(dto.user_id, dto.group_id).await? {
            return Err(AppError::Conflict(
                "User is already a member of this group".to_string(),
            ));
        }

        group_repo.add_member(dto.user_id, dto.group_id).await?;

        Ok(())
    }

    /// Removes a user from a group.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - User or group does not exist
    /// - `Err(AppError::Conflict)` - User is not a member
    pub async fn remove_user(&self, dto: GroupMembershipDto) -> Result<(), AppError> {
        let group_repo = UserGroupRepository::new(self.db);

        self.check_pair_exists(&dto).await?;

        if !group_repo.is_member(dto.user_id, dto.group_id).await? {
            return Err(AppError::Conflict(
                "User is not a member of this group".to_string(),
            ));
        }

        group_repo.remove_member(dto.user_id, dto.group_id).await?;

        Ok(())
    }

    /// Lists the users belonging to a group.
    pub async fn users_in_group(&self, group_id: i32) -> Result<Vec<GroupUserDto>, AppError> {
        let repo = UserGroupRepository::new(self.db);

        if repo.find_by_id(group_id).await?.is_none() {
            return Err(AppError::NotFound("User group not found".to_string()));
        }

        let users = repo.users_in_group(group_id).await?;

        Ok(users
            .into_iter()
            .map(|user| GroupUserDto {
                id: user.id,
                username: user.username,
                full_name: user.full_name,
                email: user.email,
            })
            .collect())
    }

    /// Lists the active groups a user belongs to.
    pub async fn groups_of_user(&self, user_id: i32) -> Result<Vec<UserGroupDto>, AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let groups = UserGroupRepository::new(self.db)
            .active_groups_for_user(user_id)
            .await?;

        Ok(groups.into_iter().map(|g| g.into_dto()).collect())
    }

    /// Fails with NotFound when either side of a membership pair is missing.
    async fn check_pair_exists(&self, dto: &GroupMembershipDto) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(dto.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if UserGroupRepository::new(self.db)
            .find_by_id(dto.group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User group not found".to_string()));
        }

        Ok(())
    }
}
