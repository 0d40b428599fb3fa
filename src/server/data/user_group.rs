//! User group data repository for database operations.
//!
//! Provides the `UserGroupRepository` for managing groups, their permission
//! rows, and group memberships. Permission grants are stored one row per
//! (group, resource) with boolean action flags; the repository converts
//! between those rows and `PermissionGrant` values at the boundary.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        permission::{Action, PermissionGrant},
        user::User,
        user_group::{CreateUserGroupParam, UpdateUserGroupParam, UserGroup},
    },
};

/// Repository providing database operations for user groups and memberships.
pub struct UserGroupRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserGroupRepository<'a, C> {
    /// Creates a new UserGroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserGroupRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active group with its permission rows.
    ///
    /// # Arguments
    /// - `param` - Group parameters with validated permission grants
    ///
    /// # Returns
    /// - `Ok(UserGroup)` - The created group with its grants
    /// - `Err(AppError)` - Database error, including unique violation on the
    ///   group name
    pub async fn create(&self, param: CreateUserGroupParam) -> Result<UserGroup, AppError> {
        let now = Utc::now();

        let group = entity::prelude::UserGroup::insert(entity::user_group::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        self.replace_permissions(group.id, &param.permissions)
            .await?;
        let mut permissions = self.load_permissions(&[group.id]).await?;
        let rows = permissions.remove(&group.id).unwrap_or_default();

        Ok(UserGroup::from_entity(group, rows)?)
    }

    /// Lists every group with its permission grants, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<UserGroup>, AppError> {
        let groups = entity::prelude::UserGroup::find()
            .order_by_asc(entity::user_group::Column::Id)
            .all(self.db)
            .await?;

        self.attach_permissions(groups).await
    }

    /// Finds a group by primary key with its permission grants.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserGroup>, AppError> {
        let group = entity::prelude::UserGroup::find_by_id(id).one(self.db).await?;

        match group {
            Some(group) => {
                let mut permissions = self.load_permissions(&[group.id]).await?;
                let rows = permissions.remove(&group.id).unwrap_or_default();
                Ok(Some(UserGroup::from_entity(group, rows)?))
            }
            None => Ok(None),
        }
    }

    /// Finds a group by its unique name with its permission grants.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<UserGroup>, AppError> {
        let group = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        match group {
            Some(group) => {
                let mut permissions = self.load_permissions(&[group.id]).await?;
                let rows = permissions.remove(&group.id).unwrap_or_default();
                Ok(Some(UserGroup::from_entity(group, rows)?))
            }
            None => Ok(None),
        }
    }

    /// Applies a partial update to a group.
    ///
    /// When the update carries permissions, the group's grant rows are
    /// replaced wholesale.
    ///
    /// # Arguments
    /// - `id` - The group's primary key
    /// - `param` - Fields to change; `None` fields are preserved
    ///
    /// # Returns
    /// - `Ok(Some(UserGroup))` - The updated group
    /// - `Ok(None)` - No group with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserGroupParam,
    ) -> Result<Option<UserGroup>, AppError> {
        let Some(group) = entity::prelude::UserGroup::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user_group::ActiveModel = group.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = sea_orm::ActiveModelTrait::update(active_model, self.db).await?;

        if let Some(permissions) = param.permissions {
            entity::prelude::UserGroupPermission::delete_many()
                .filter(entity::user_group_permission::Column::GroupId.eq(id))
                .exec(self.db)
                .await?;
            self.replace_permissions(id, &permissions).await?;
        }

        let mut permissions = self.load_permissions(&[id]).await?;
        let rows = permissions.remove(&id).unwrap_or_default();

        Ok(Some(UserGroup::from_entity(updated, rows)?))
    }

    /// Soft deletes a group by clearing its active flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Group found and deactivated
    /// - `Ok(false)` - No group with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserGroup::update_many()
            .filter(entity::user_group::Column::Id.eq(id))
            .col_expr(
                entity::user_group::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::user_group::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a user to a group.
    ///
    /// Callers check membership first; inserting a duplicate violates the
    /// unique (user, group) index.
    pub async fn add_member(&self, user_id: i32, group_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserGroupMember::insert(entity::user_group_member::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from a group.
    pub async fn remove_member(&self, user_id: i32, group_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserGroupMember::delete_many()
            .filter(entity::user_group_member::Column::UserId.eq(user_id))
            .filter(entity::user_group_member::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a user belongs to a group.
    pub async fn is_member(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserGroupMember::find()
            .filter(entity::user_group_member::Column::UserId.eq(user_id))
            .filter(entity::user_group_member::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists the active groups a user belongs to, with permission grants.
    ///
    /// Inactive groups are excluded here so their grants never reach
    /// permission resolution.
    ///
    /// # Arguments
    /// - `user_id` - The user's primary key
    ///
    /// # Returns
    /// - `Ok(Vec<UserGroup>)` - Active groups, possibly empty
    /// - `Err(AppError)` - Database error during query
    pub async fn active_groups_for_user(&self, user_id: i32) -> Result<Vec<UserGroup>, AppError> {
        let memberships = entity::prelude::UserGroupMember::find()
            .filter(entity::user_group_member::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = memberships.into_iter().map(|m| m.group_id).collect();
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let groups = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::Id.is_in(group_ids))
            .filter(entity::user_group::Column::IsActive.eq(true))
            .all(self.db)
            .await?;

        self.attach_permissions(groups).await
    }

    /// Lists the users belonging to a group, ordered by id.
    pub async fn users_in_group(&self, group_id: i32) -> Result<Vec<User>, DbErr> {
        let memberships = entity::prelude::UserGroupMember::find()
            .filter(entity::user_group_member::Column::GroupId.eq(group_id))
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = memberships.into_iter().map(|m| m.user_id).collect();
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Inserts permission rows for a group from validated grants.
    async fn replace_permissions(
        &self,
        group_id: i32,
        grants: &[PermissionGrant],
    ) -> Result<(), DbErr> {
        if grants.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::user_group_permission::ActiveModel> = grants
            .iter()
            .map(|grant| entity::user_group_permission::ActiveModel {
                group_id: ActiveValue::Set(group_id),
                resource: ActiveValue::Set(grant.resource.as_str().to_string()),
                can_create: ActiveValue::Set(grant.actions.contains(&Action::Create)),
                can_read: ActiveValue::Set(grant.actions.contains(&Action::Read)),
                can_update: ActiveValue::Set(grant.actions.contains(&Action::Update)),
                can_delete: ActiveValue::Set(grant.actions.contains(&Action::Delete)),
                ..Default::default()
            })
            .collect();

        entity::prelude::UserGroupPermission::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads permission rows for a set of groups, keyed by group id.
    async fn load_permissions(
        &self,
        group_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::user_group_permission::Model>>, DbErr> {
        let rows = entity::prelude::UserGroupPermission::find()
            .filter(entity::user_group_permission::Column::GroupId.is_in(group_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut by_group: HashMap<i32, Vec<entity::user_group_permission::Model>> = HashMap::new();
        for row in rows {
            by_group.entry(row.group_id).or_default().push(row);
        }

        Ok(by_group)
    }

    /// Converts group rows to domain models with their permission grants.
    async fn attach_permissions(
        &self,
        groups: Vec<entity::user_group::Model>,
    ) -> Result<Vec<UserGroup>, AppError> {
        let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let mut permissions = self.load_permissions(&ids).await?;

        groups
            .into_iter()
            .map(|group| {
                let rows = permissions.remove(&group.id).unwrap_or_default();
                UserGroup::from_entity(group, rows)
            })
            .collect()
    }
}
