use super::*;

/// Tests creating a billing row.
///
/// Expected: payment stored pending with no settlement date
#[tokio::test]
async fn creates_pending_payment() -> Result<(), AppError> {
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

    let payment = PaymentRepository::new(db)
        .create(CreatePaymentParam {
            user_id: user.id,
            car_id: car.id,
            parking_lot_id: lot.id,
            method: PaymentMethod::BankTransfer,
            notes: Some("March".to_string()),
        })
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.method, PaymentMethod::BankTransfer);
    assert!(payment.payment_date.is_none());
    assert!(payment.transaction_id.is_none());

    Ok(())
}
