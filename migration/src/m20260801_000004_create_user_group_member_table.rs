use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260801_000002_create_user_group_table::UserGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroupMember::Table)
                    .if_not_exists()
                    .col(pk_auto(UserGroupMember::Id))
                    .col(integer(UserGroupMember::UserId))
                    .col(integer(UserGroupMember::GroupId))
                    .col(
                        timestamp(UserGroupMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_group_member_user_id")
                            .from(UserGroupMember::Table, UserGroupMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_group_member_group_id")
                            .from(UserGroupMember::Table, UserGroupMember::GroupId)
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
                    .name("idx_user_group_member_user_group")
                    .table(UserGroupMember::Table)
                    .col(UserGroupMember::UserId)
                    .col(UserGroupMember::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGroupMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGroupMember {
    Table,
    Id,
    UserId,
    GroupId,
    CreatedAt,
}
