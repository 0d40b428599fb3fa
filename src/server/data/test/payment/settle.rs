use super::*;
use chrono::Utc;

/// Tests settling a pending payment.
///
/// Expected: status paid with date, method, and reference stamped
#[tokio::test]
async fn stamps_settlement_fields() -> Result<(), AppError> {
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
    let payment = factory::create_payment(db, user.id, car.id, lot.id).await?;

    let paid_at = Utc::now();
    let settled = PaymentRepository::new(db)
        .settle(
            payment.id,
            Some(PaymentMethod::CreditCard),
            Some("tx-4711".to_string()),
            paid_at,
        )
        .await?
        .unwrap();

    assert_eq!(settled.status, PaymentStatus::Paid);
    assert_eq!(settled.method, PaymentMethod::CreditCard);
    assert_eq!(settled.payment_date, Some(paid_at));
    assert_eq!(settled.transaction_id.as_deref(), Some("tx-4711"));

    Ok(())
}

/// Tests settling without reporting a method.
///
/// Expected: original method preserved
#[tokio::test]
async fn keeps_method_when_not_reported() -> Result<(), AppError> {
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
    let payment = factory::payment::PaymentFactory::new(db, user.id, car.id, lot.id)
        .payment_method("bank_transfer")
        .build()
        .await?;

    let settled = PaymentRepository::new(db)
        .settle(payment.id, None, None, Utc::now())
        .await?
        .unwrap();

    assert_eq!(settled.method, PaymentMethod::BankTransfer);
    assert!(settled.transaction_id.is_none());

    Ok(())
}

/// Tests settling a payment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_payment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentRepository::new(db)
        .settle(9999, None, None, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
