use super::*;
use chrono::{Duration, Utc};

/// Tests the append-only parking log ordering.
///
/// Expected: records returned newest entry first
#[tokio::test]
async fn lists_history_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;

    let repo = CarRepository::new(db);
    let earlier = Utc::now() - Duration::hours(2);
    let later = Utc::now() - Duration::hours(1);

    repo.append_history(car.id, "P1", "A-01", earlier).await?;
    repo.append_history(car.id, "P1", "A-02", later).await?;

    let records = repo.history_for_car(car.id).await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].spot_id, "A-02");
    assert_eq!(records[1].spot_id, "A-01");

    Ok(())
}

/// Tests stamping the exit time on open history rows.
///
/// Verifies that already-closed rows keep their original exit time.
///
/// Expected: only open rows receive the exit stamp
#[tokio::test]
async fn closes_only_open_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;

    let repo = CarRepository::new(db);
    let first_entry = Utc::now() - Duration::hours(3);
    let first_exit = Utc::now() - Duration::hours(2);
    let second_entry = Utc::now() - Duration::hours(1);

    repo.append_history(car.id, "P1", "A-01", first_entry).await?;
    repo.close_open_history(car.id, first_exit).await?;
    repo.append_history(car.id, "P1", "A-02", second_entry)
        .await?;

    let exit = Utc::now();
    repo.close_open_history(car.id, exit).await?;

    let records = repo.history_for_car(car.id).await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].exit_time, Some(exit));
    assert_eq!(records[1].exit_time, Some(first_exit));

    Ok(())
}

/// Tests that closing history for one car leaves other cars' open stays alone.
///
/// Expected: the other car's record stays open
#[tokio::test]
async fn scopes_close_to_one_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let other = factory::create_car(db, user.id).await?;

    let repo = CarRepository::new(db);
    repo.append_history(car.id, "P1", "A-01", Utc::now()).await?;
    repo.append_history(other.id, "P1", "A-02", Utc::now())
        .await?;

    repo.close_open_history(car.id, Utc::now()).await?;

    let other_records = repo.history_for_car(other.id).await?;
    assert!(other_records[0].exit_time.is_none());

    Ok(())
}
