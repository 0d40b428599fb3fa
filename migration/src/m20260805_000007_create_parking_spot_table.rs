use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260805_000005_create_parking_lot_table::ParkingLot,
    m20260805_000006_create_car_table::Car,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpot::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingSpot::Id))
                    .col(integer(ParkingSpot::ParkingLotId))
                    .col(string(ParkingSpot::SpotId))
                    .col(double(ParkingSpot::X))
                    .col(double(ParkingSpot::Y))
                    .col(double(ParkingSpot::Width))
                    .col(double(ParkingSpot::Height))
                    .col(string(ParkingSpot::SpotType).default("standard"))
                    .col(string_null(ParkingSpot::Label))
                    .col(boolean(ParkingSpot::IsActive).default(true))
                    .col(integer_null(ParkingSpot::CurrentCarId))
                    .col(string_null(ParkingSpot::CurrentCarColor))
                    .col(
                        timestamp(ParkingSpot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ParkingSpot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_spot_parking_lot_id")
                            .from(ParkingSpot::Table, ParkingSpot::ParkingLotId)
                            .to(ParkingLot::Table, ParkingLot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_spot_current_car_id")
                            .from(ParkingSpot::Table, ParkingSpot::CurrentCarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Spot identifiers are unique within a lot, lookups are by (lot, spot)
        manager
            .create_index(
                Index::create()
                    .name("idx_parking_spot_lot_spot")
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::ParkingLotId)
                    .col(ParkingSpot::SpotId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSpot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingSpot {
    Table,
    Id,
    ParkingLotId,
    SpotId,
    X,
    Y,
    Width,
    Height,
    SpotType,
    Label,
    IsActive,
    CurrentCarId,
    CurrentCarColor,
    CreatedAt,
    UpdatedAt,
}
