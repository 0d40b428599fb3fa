pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_user_group_table;
mod m20260801_000003_create_user_group_permission_table;
mod m20260801_000004_create_user_group_member_table;
mod m20260805_000005_create_parking_lot_table;
mod m20260805_000006_create_car_table;
mod m20260805_000007_create_parking_spot_table;
mod m20260805_000008_create_parking_history_table;
mod m20260812_000009_create_payment_table;
mod m20260812_000010_create_parking_request_table;
mod m20260812_000011_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_user_group_table::Migration),
            Box::new(m20260801_000003_create_user_group_permission_table::Migration),
            Box::new(m20260801_000004_create_user_group_member_table::Migration),
            Box::new(m20260805_000005_create_parking_lot_table::Migration),
            Box::new(m20260805_000006_create_car_table::Migration),
            Box::new(m20260805_000007_create_parking_spot_table::Migration),
            Box::new(m20260805_000008_create_parking_history_table::Migration),
            Box::new(m20260812_000009_create_payment_table::Migration),
            Box::new(m20260812_000010_create_parking_request_table::Migration),
            Box::new(m20260812_000011_create_notification_table::Migration),
        ]
    }
}
