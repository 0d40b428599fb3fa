use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_user_group_table::UserGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroupPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(UserGroupPermission::Id))
                    .col(integer(UserGroupPermission::GroupId))
                    .col(string(UserGroupPermission::Resource))
                    .col(boolean(UserGroupPermission::CanCreate).default(false))
                    .col(boolean(UserGroupPermission::CanRead).default(false))
                    .col(boolean(UserGroupPermission::CanUpdate).default(false))
                    .col(boolean(UserGroupPermission::CanDelete).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_group_permission_group_id")
                            .from(UserGroupPermission::Table, UserGroupPermission::GroupId)
                            .to(UserGroup::Table, UserGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_group_permission_group_resource")
                    .table(UserGroupPermission::Table)
                    .col(UserGroupPermission::GroupId)
                    .col(UserGroupPermission::Resource)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGroupPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGroupPermission {
    Table,
    Id,
    GroupId,
    Resource,
    CanCreate,
    CanRead,
    CanUpdate,
    CanDelete,
}
