use chrono::Utc;

use crate::server::{
    middleware::auth::AuthUser,
    model::{
        permission::{PermissionGrant, PermissionSet, Resource},
        user::User,
        user_group::UserGroup,
    },
};

mod parking;
mod request;

/// A caller with no capabilities, as residents authenticate by default.
fn resident(entity: entity::user::Model) -> AuthUser {
    AuthUser {
        user: User::from_entity(entity),
        permissions: PermissionSet::default(),
    }
}

/// A caller holding every capability, as an administrator would.
fn staff(entity: entity::user::Model) -> AuthUser {
    let now = Utc::now();
    let group = UserGroup {
        id: 0,
        name: "Staff".to_string(),
        description: None,
        permissions: Resource::ALL.into_iter().map(PermissionGrant::full).collect(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    AuthUser {
        user: User::from_entity(entity),
        permissions: PermissionSet::resolve(&[group]),
    }
}
