//! User group factory for creating test permission groups.
//!
//! Covers the group itself plus its permission rows and memberships, since
//! permission resolution tests need all three.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_group::UserGroupFactory;
///
/// let group = UserGroupFactory::new(&db)
///     .name("Staff")
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct UserGroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    is_active: bool,
}

impl<'a> UserGroupFactory<'a> {
    /// Creates a new UserGroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    /// - description: `None`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserGroupFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            description: None,
            is_active: true,
        }
    }

    /// Sets the group name.
    ///
    /// # Arguments
    /// - `name` - Unique group name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    ///
    /// # Arguments
    /// - `description` - Group description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag.
    ///
    /// # Arguments
    /// - `is_active` - Whether the group contributes permissions
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_group::Model, DbErr> {
        let now = Utc::now();
        entity::user_group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user_group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::user_group::Model, DbErr> {
    UserGroupFactory::new(db).build().await
}

/// Grants a permission row to a group.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_id` - The group receiving the grant
/// - `resource` - Wire name of the resource, e.g. `"car"` or `"parkingLot"`
/// - `actions` - `(create, read, update, delete)` flags
///
/// # Returns
/// - `Ok(entity::user_group_permission::Model)` - Created permission row
/// - `Err(DbErr)` - Database error during insert
pub async fn grant_permission(
    db: &DatabaseConnection,
    group_id: i32,
    resource: impl Into<String>,
    actions: (bool, bool, bool, bool),
) -> Result<entity::user_group_permission::Model, DbErr> {
    let (can_create, can_read, can_update, can_delete) = actions;
    entity::user_group_permission::ActiveModel {
        id: ActiveValue::NotSet,
        group_id: ActiveValue::Set(group_id),
        resource: ActiveValue::Set(resource.into()),
        can_create: ActiveValue::Set(can_create),
        can_read: ActiveValue::Set(can_read),
        can_update: ActiveValue::Set(can_update),
        can_delete: ActiveValue::Set(can_delete),
    }
    .insert(db)
    .await
}

/// Adds a user to a group.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - The member
/// - `group_id` - The group
///
/// # Returns
/// - `Ok(entity::user_group_member::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_member(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::user_group_member::Model, DbErr> {
    entity::user_group_member::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_group_with_grant_and_member() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let group = create_group(db).await?;
        let grant = grant_permission(db, group.id, "car", (false, true, false, false)).await?;
        let member = add_member(db, user.id, group.id).await?;

        assert_eq!(grant.resource, "car");
        assert!(grant.can_read);
        assert!(!grant.can_delete);
        assert_eq!(member.user_id, user.id);
        assert_eq!(member.group_id, group.id);

        Ok(())
    }
}
