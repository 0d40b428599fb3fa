use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string_uniq(Car::LicensePlate))
                    .col(string_null(Car::Color))
                    .col(string_null(Car::Model))
                    .col(integer(Car::OwnerUserId))
                    .col(string_null(Car::OwnerName))
                    .col(string_null(Car::OwnerContact))
                    .col(string_null(Car::OwnerApartment))
                    .col(string_null(Car::CurrentLotId))
                    .col(string_null(Car::CurrentSpotId))
                    .col(
                        timestamp(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Car::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_owner_user_id")
                            .from(Car::Table, Car::OwnerUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    LicensePlate,
    Color,
    Model,
    OwnerUserId,
    OwnerName,
    OwnerContact,
    OwnerApartment,
    CurrentLotId,
    CurrentSpotId,
    CreatedAt,
    UpdatedAt,
}
