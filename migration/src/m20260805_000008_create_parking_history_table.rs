use sea_orm_migration::{prelude::*, schema::*};

use super::m20260805_000006_create_car_table::Car;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingHistory::Id))
                    .col(integer(ParkingHistory::CarId))
                    .col(string(ParkingHistory::LotId))
                    .col(string(ParkingHistory::SpotId))
                    .col(timestamp(ParkingHistory::EntryTime))
                    .col(timestamp_null(ParkingHistory::ExitTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_history_car_id")
                            .from(ParkingHistory::Table, ParkingHistory::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingHistory {
    Table,
    Id,
    CarId,
    LotId,
    SpotId,
    EntryTime,
    ExitTime,
}
