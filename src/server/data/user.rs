//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing resident accounts. Handles
//! account creation, identifier lookups for login, and listing, with
//! conversion to domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active user account.
    ///
    /// # Arguments
    /// - `param` - Account parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including unique
    ///   violations on username or email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            full_name: ActiveValue::Set(param.full_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            phone_number: ActiveValue::Set(param.phone_number),
            address: ActiveValue::Set(param.address),
            apartment_number: ActiveValue::Set(param.apartment_number),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - The user's primary key
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an active user by login identifier.
    ///
    /// The identifier matches either the username or the email. Deactivated
    /// accounts are never returned, so login against them fails the same way
    /// as an unknown identifier.
    ///
    /// # Arguments
    /// - `identifier` - Username or email submitted at login
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Matching active account
    /// - `Ok(None)` - No active account matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(identifier))
                    .add(entity::user::Column::Email.eq(identifier)),
            )
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username or email is already taken.
    ///
    /// # Arguments
    /// - `username` - Candidate username
    /// - `email` - Candidate email
    ///
    /// # Returns
    /// - `Ok(true)` - Another account already uses the username or email
    /// - `Ok(false)` - Both are free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn identifier_taken(&self, username: &str, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists every user account ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Loads users by a set of primary keys, unordered.
    ///
    /// Used to join display data onto rows that reference users by id.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Updates a user's apartment number.
    ///
    /// Used when a car update carries a new apartment so the owner's account
    /// stays in sync with the car snapshot.
    ///
    /// # Arguments
    /// - `id` - The user's primary key
    /// - `apartment_number` - The new apartment number
    ///
    /// # Returns
    /// - `Ok(())` - Updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_apartment_number(&self, id: i32, apartment_number: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::ApartmentNumber,
                sea_orm::sea_query::Expr::value(apartment_number),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
