//! Authentication service for registration, login, and session introspection.
//!
//! Passwords are hashed with bcrypt at the default cost. Successful
//! registration and login issue a bearer token and return the caller's
//! flattened permission map so clients can gate their UI without a second
//! round trip.

pub mod token;

use bcrypt::DEFAULT_COST;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{AuthUserDto, LoginDto, RegisterDto, TokenResponseDto},
    server::{
        data::{user::UserRepository, user_group::UserGroupRepository},
        error::{auth::AuthError, AppError},
        middleware::auth::AuthUser,
        model::{
            permission::PermissionSet,
            user::{CreateUserParam, User},
        },
        service::auth::token::TokenService,
    },
};

/// Service for account registration and credential authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service for issuing bearer tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new resident account and logs it in.
    ///
    /// # Arguments
    /// - `dto` - Registration payload
    ///
    /// # Returns
    /// - `Ok(TokenResponseDto)` - Token and user payload for the new account
    /// - `Err(AppError::Conflict)` - Username or email already in use
    /// - `Err(AppError::BadRequest)` - Empty username or password
    pub async fn register(&self, dto: RegisterDto) -> Result<TokenResponseDto, AppError> {
        if dto.username.trim().is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.identifier_taken(&dto.username, &dto.email).await? {
            return Err(AppError::Conflict(
                "Username or email is already in use".to_string(),
            ));
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

        self.token_response(user, "User registered successfully")
            .await
    }

    /// Authenticates a login attempt against active accounts.
    ///
    /// The identifier matches username or email. Unknown identifiers and
    /// wrong passwords fail identically so callers cannot probe for
    /// registered accounts.
    ///
    /// # Arguments
    /// - `dto` - Login payload
    ///
    /// # Returns
    /// - `Ok(TokenResponseDto)` - Token and user payload
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No active account
    ///   matches the credentials
    pub async fn login(&self, dto: LoginDto) -> Result<TokenResponseDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_active_by_identifier(&dto.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = bcrypt::verify(&dto.password, &user.password_hash)
            .map_err(|err| AppError::InternalError(format!("Failed to verify password: {err}")))?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.token_response(user, "Login successful").await
    }

    /// Builds the authenticated-user payload for an already verified caller.
    pub fn me(auth_user: AuthUser) -> AuthUserDto {
        Self::auth_user_dto(auth_user.user, &auth_user.permissions)
    }

    /// Issues a token for a user and assembles the login/register response.
    async fn token_response(
        &self,
        user: User,
        message: &str,
    ) -> Result<TokenResponseDto, AppError> {
        let token = self.tokens.issue(user.id, &user.username)?;

        let groups = UserGroupRepository::new(self.db)
            .active_groups_for_user(user.id)
            .await?;
        let permissions = PermissionSet::resolve(&groups);

        Ok(TokenResponseDto {
            success: true,
            message: message.to_string(),
            token,
            user: Self::auth_user_dto(user, &permissions),
        })
    }

    fn auth_user_dto(user: User, permissions: &PermissionSet) -> AuthUserDto {
        AuthUserDto {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            permissions: permissions.to_dto(),
        }
    }
}
