use crate::server::{
    data::user_group::UserGroupRepository,
    error::AppError,
    model::{
        permission::{Action, PermissionGrant, Resource},
        user_group::{CreateUserGroupParam, UpdateUserGroupParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod active_groups_for_user;
mod create;
mod membership;
mod soft_delete;
mod update;
