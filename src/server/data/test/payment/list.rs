use super::*;
use chrono::{DateTime, Utc};

fn day(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

/// Tests the inclusive creation-date bounds on the payment listing.
///
/// Expected: rows on the boundary included, rows outside excluded
#[tokio::test]
async fn bounds_are_inclusive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;

    let before = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-02-28T10:00:00Z"))
        .build()
        .await?;
    let on_start = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-03-01T00:00:00Z"))
        .build()
        .await?;
    let on_end = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-03-31T23:59:59Z"))
        .build()
        .await?;
    let after = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-04-01T08:00:00Z"))
        .build()
        .await?;

    let rows = PaymentRepository::new(db)
        .list(
            Some(day("2026-03-01T00:00:00Z")),
            Some(day("2026-03-31T23:59:59Z")),
        )
        .await?;

    let ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
    assert!(ids.contains(&on_start.id));
    assert!(ids.contains(&on_end.id));
    assert!(!ids.contains(&before.id));
    assert!(!ids.contains(&after.id));

    Ok(())
}

/// Tests the unbounded listing order.
///
/// Expected: newest rows first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;

    let older = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-01-10T12:00:00Z"))
        .build()
        .await?;
    let newer = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .created_at(day("2026-02-10T12:00:00Z"))
        .build()
        .await?;

    let rows = PaymentRepository::new(db).list(None, None).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, newer.id);
    assert_eq!(rows[1].id, older.id);

    Ok(())
}
