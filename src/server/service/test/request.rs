use super::*;

use chrono::Duration;

use crate::{
    model::request::{CreateParkingRequestDto, UpdateRequestStatusDto},
    server::{
        data::notification::NotificationRepository,
        error::{auth::AuthError, AppError},
        model::notification::NotificationKind,
        service::request::RequestService,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn request_dto(car_id: i32, parking_spot_id: i32) -> CreateParkingRequestDto {
    let start = Utc::now() + Duration::days(1);
    CreateParkingRequestDto {
        car_id,
        parking_spot_id,
        start_date: start,
        end_date: start + Duration::days(7),
        notes: None,
    }
}

/// Tests filing a request for the caller's own car.
///
/// Expected: pending request, not waiting for a free spot
#[tokio::test]
async fn files_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let actor = resident(user.clone());
    let request = RequestService::new(db)
        .create(request_dto(car.id, spot.id), &actor)
        .await?;

    assert_eq!(request.user_id, user.id);
    assert_eq!(request.status, "pending");
    assert!(!request.is_waiting);

    Ok(())
}

/// Tests filing a request for an occupied spot.
///
/// Expected: request flagged as waiting
#[tokio::test]
async fn flags_request_for_occupied_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let car = factory::create_car(db, user.id).await?;
    let occupant = factory::create_car(db, user.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::parking_spot::ParkingSpotFactory::new(db, lot.id)
        .occupied_by(occupant.id, None)
        .build()
        .await?;

    let actor = resident(user);
    let request = RequestService::new(db)
        .create(request_dto(car.id, spot.id), &actor)
        .await?;

    assert!(request.is_waiting);

    Ok(())
}

/// Tests filing a request for a car owned by someone else.
///
/// Expected: AccessDenied
#[tokio::test]
async fn rejects_request_for_foreign_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let car = factory::create_car(db, owner.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let err = RequestService::new(db)
        .create(request_dto(car.id, spot.id), &resident(intruder))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied { .. })
    ));

    Ok(())
}

/// Tests the staff decision flow.
///
/// Verifies the decision is recorded and the requester is notified.
///
/// Expected: request approved, one request-status notification delivered
#[tokio::test]
async fn decision_notifies_requester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let car = factory::create_car(db, requester.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let service = RequestService::new(db);
    let request = service
        .create(request_dto(car.id, spot.id), &resident(requester.clone()))
        .await?;

    let decided = service
        .decide(
            request.id,
            UpdateRequestStatusDto {
                status: "approved".to_string(),
                notes: Some("Spot confirmed".to_string()),
            },
            &staff(admin.clone()),
        )
        .await?;

    assert_eq!(decided.status, "approved");
    assert_eq!(decided.approved_by, Some(admin.id));
    assert!(decided.approval_date.is_some());

    let inbox = NotificationRepository::new(db)
        .list_for_user(requester.id)
        .await?;
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, NotificationKind::RequestStatus);
    assert_eq!(inbox[0].related_id, Some(request.id));

    Ok(())
}

/// Tests deciding a request twice.
///
/// Expected: Conflict on the second decision
#[tokio::test]
async fn rejects_second_decision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let car = factory::create_car(db, requester.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let service = RequestService::new(db);
    let request = service
        .create(request_dto(car.id, spot.id), &resident(requester))
        .await?;

    let decision = UpdateRequestStatusDto {
        status: "rejected".to_string(),
        notes: None,
    };
    service
        .decide(request.id, decision, &staff(admin.clone()))
        .await?;

    let err = service
        .decide(
            request.id,
            UpdateRequestStatusDto {
                status: "approved".to_string(),
                notes: None,
            },
            &staff(admin),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests deciding with a status that is not a decision.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_non_decision_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::ParkingRequest)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let admin = factory::create_user(db).await?;
    let car = factory::create_car(db, requester.id).await?;
    let lot = factory::create_lot(db).await?;
    let spot = factory::create_spot(db, lot.id).await?;

    let service = RequestService::new(db);
    let request = service
        .create(request_dto(car.id, spot.id), &resident(requester))
        .await?;

    let err = service
        .decide(
            request.id,
            UpdateRequestStatusDto {
                status: "cancelled".to_string(),
                notes: None,
            },
            &staff(admin),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}
