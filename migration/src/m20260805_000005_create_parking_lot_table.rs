use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLot::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingLot::Id))
                    .col(string_uniq(ParkingLot::LotId))
                    .col(string(ParkingLot::Name))
                    .col(text_null(ParkingLot::Description))
                    .col(text_null(ParkingLot::SvgPath))
                    .col(double(ParkingLot::Price))
                    .col(integer(ParkingLot::Width))
                    .col(integer(ParkingLot::Height))
                    .col(boolean(ParkingLot::IsActive).default(true))
                    .col(
                        timestamp(ParkingLot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ParkingLot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingLot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingLot {
    Table,
    Id,
    LotId,
    Name,
    Description,
    SvgPath,
    Price,
    Width,
    Height,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
