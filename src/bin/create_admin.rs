//! One-shot bootstrap for the administrator group and first admin account.
//!
//! Creates an "Administrators" group granting every action on every resource,
//! then an admin user assigned to it. Both steps are idempotent: an existing
//! group or username is reused rather than duplicated.
//!
//! Reads `ADMIN_USERNAME`, `ADMIN_EMAIL`, and `ADMIN_PASSWORD` from the
//! environment alongside the regular application configuration.

use parkdeck::server::{
    config::Config,
    data::{user::UserRepository, user_group::UserGroupRepository},
    error::AppError,
    model::{
        permission::{PermissionGrant, Resource},
        user::CreateUserParam,
        user_group::CreateUserGroupParam,
    },
    startup,
};

const ADMIN_GROUP_NAME: &str = "Administrators";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());
    let password = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| AppError::BadRequest("ADMIN_PASSWORD is required".to_string()))?;

    let db = startup::connect_to_database(&config).await?;

    let group_repo = UserGroupRepository::new(&db);
    let group = match group_repo.find_by_name(ADMIN_GROUP_NAME).await? {
        Some(group) => {
            tracing::info!("Group '{ADMIN_GROUP_NAME}' already exists");
            group
        }
        None => {
            let group = group_repo
                .create(CreateUserGroupParam {
                    name: ADMIN_GROUP_NAME.to_string(),
                    description: Some("Full access to every resource".to_string()),
                    permissions: Resource::ALL
                        .into_iter()
                        .map(PermissionGrant::full)
                        .collect(),
                })
                .await?;
            tracing::info!("Created group '{ADMIN_GROUP_NAME}'");
            group
        }
    };

    let user_repo = UserRepository::new(&db);
    let user = match user_repo.find_by_username(&username).await? {
        Some(user) => {
            tracing::info!("User '{username}' already exists");
            user
        }
        None => {
            let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
                .map_err(|err| AppError::InternalError(err.to_string()))?;

            let user = user_repo
                .create(CreateUserParam {
                    username: username.clone(),
                    full_name: "Administrator".to_string(),
                    email,
                    password_hash,
                    phone_number: None,
                    address: None,
                    apartment_number: None,
                })
                .await?;
            tracing::info!("Created user '{username}'");
            user
        }
    };

    if group_repo.is_member(user.id, group.id).await? {
        tracing::info!("User '{username}' is already in '{ADMIN_GROUP_NAME}'");
    } else {
        group_repo.add_member(user.id, group.id).await?;
        tracing::info!("Added '{username}' to '{ADMIN_GROUP_NAME}'");
    }

    Ok(())
}
