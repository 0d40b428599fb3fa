use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260805_000006_create_car_table::Car,
    m20260805_000007_create_parking_spot_table::ParkingSpot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingRequest::Id))
                    .col(integer(ParkingRequest::UserId))
                    .col(integer(ParkingRequest::CarId))
                    .col(integer(ParkingRequest::ParkingSpotId))
                    .col(timestamp(ParkingRequest::StartDate))
                    .col(timestamp(ParkingRequest::EndDate))
                    .col(string(ParkingRequest::Status).default("pending"))
                    .col(text_null(ParkingRequest::Notes))
                    .col(integer_null(ParkingRequest::ApprovedBy))
                    .col(timestamp_null(ParkingRequest::ApprovalDate))
                    .col(boolean(ParkingRequest::IsWaiting).default(false))
                    .col(
                        timestamp(ParkingRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ParkingRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_request_user_id")
                            .from(ParkingRequest::Table, ParkingRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_request_car_id")
                            .from(ParkingRequest::Table, ParkingRequest::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_request_parking_spot_id")
                            .from(ParkingRequest::Table, ParkingRequest::ParkingSpotId)
                            .to(ParkingSpot::Table, ParkingSpot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingRequest {
    Table,
    Id,
    UserId,
    CarId,
    ParkingSpotId,
    StartDate,
    EndDate,
    Status,
    Notes,
    ApprovedBy,
    ApprovalDate,
    IsWaiting,
    CreatedAt,
    UpdatedAt,
}
