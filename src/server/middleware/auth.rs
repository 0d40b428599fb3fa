//! Request authentication and authorization guard.
//!
//! Controllers construct an `AuthGuard` per request from the shared state
//! and the request headers, then call `authenticate` for endpoints that only
//! need a known user or `require` for endpoints gated on a (resource,
//! action) capability. The guard resolves the caller's permission set fresh
//! on every request so group changes take effect immediately.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_group::UserGroupRepository},
    error::{auth::AuthError, AppError},
    model::{
        permission::{Action, PermissionSet, Resource},
        user::User,
    },
    service::auth::token::TokenService,
};

/// An authenticated caller with their resolved capability set.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub permissions: PermissionSet,
}

impl AuthUser {
    /// Whether the caller holds a capability.
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        self.permissions.allows(resource, action)
    }

    /// Whether the caller may see other users' data unredacted.
    ///
    /// Staff visibility is keyed on the user-read capability: anyone allowed
    /// to read accounts is allowed to see whose car occupies a spot.
    pub fn is_staff(&self) -> bool {
        self.can(Resource::User, Action::Read)
    }
}

/// Per-request authentication and authorization gate.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    /// Creates a guard over one request's headers.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service for verifying the bearer token
    /// - `headers` - The request's headers
    ///
    /// # Returns
    /// - `AuthGuard` - New guard instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request's bearer token.
    ///
    /// Extracts `Authorization: Bearer <token>`, verifies it, and loads the
    /// subject, who must exist and be active. The caller's permission set is
    /// resolved from their active group memberships.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Authenticated caller with permissions
    /// - `Err(AppError::AuthErr)` - Missing/invalid/expired token, or the
    ///   subject is gone or deactivated
    pub async fn authenticate(&self) -> Result<AuthUser, AppError> {
        let token = self.bearer_token()?;
        let claims = self.tokens.verify(token)?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AuthError::UserInactive(claims.sub))?;

        let groups = UserGroupRepository::new(self.db)
            .active_groups_for_user(user.id)
            .await?;
        let permissions = PermissionSet::resolve(&groups);

        Ok(AuthUser { user, permissions })
    }

    /// Authenticates, then demands a (resource, action) capability.
    ///
    /// # Arguments
    /// - `resource` - The resource the endpoint operates on
    /// - `action` - The action the endpoint performs
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Caller holds the capability
    /// - `Err(AppError::AuthErr(AccessDenied))` - Authenticated but not
    ///   authorized
    /// - `Err(AppError::AuthErr)` - Authentication failed
    pub async fn require(&self, resource: Resource, action: Action) -> Result<AuthUser, AppError> {
        let auth_user = self.authenticate().await?;

        if !auth_user.can(resource, action) {
            return Err(AuthError::AccessDenied {
                resource: resource.as_str(),
                action: action.as_str(),
            }
            .into());
        }

        Ok(auth_user)
    }

    /// Extracts the raw token from the Authorization header.
    fn bearer_token(&self) -> Result<&str, AuthError> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
