use crate::domain::payments::{self, Payment, PaymentForm, PaymentStatus, PaymentType};
use crate::errors::ServerError;
use crate::tests::utils::test_db;
use chrono::NaiveDate;

fn pay(db: &crate::store::Database, amount: &str) -> Payment {
    payments::pay(
        db,
        &PaymentForm {
            amount: amount.into(),
            method: "bank-transfer".into(),
            date: "".into(),
        },
    )
    .unwrap()
}

#[test]
fn current_balance_is_zero_for_an_empty_list() {
    assert_eq!(payments::current_balance(&[]), 0.0);
}

#[test]
fn balance_never_increases_and_clamps_at_zero() {
    let db = test_db("pay_clamp");

    // Seeded balance starts at 1250.00.
    let first = pay(&db, "250");
    assert_eq!(first.balance, 1000.0);

    let second = pay(&db, "0");
    assert_eq!(second.balance, 1000.0);

    // Overpayment clamps to zero rather than carrying credit.
    let third = pay(&db, "5000");
    assert_eq!(third.balance, 0.0);

    let fourth = pay(&db, "100");
    assert_eq!(fourth.balance, 0.0);

    let all = payments::list(&db).unwrap();
    let balances: Vec<f64> = all.iter().map(|p| p.balance).collect();
    assert!(balances.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn missing_amount_or_method_is_a_validation_error() {
    let db = test_db("pay_validation");

    let err = payments::pay(
        &db,
        &PaymentForm {
            amount: "".into(),
            method: "check".into(),
            date: "".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));

    let err = payments::pay(
        &db,
        &PaymentForm {
            amount: "100".into(),
            method: "".into(),
            date: "".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));

    let err = payments::pay(
        &db,
        &PaymentForm {
            amount: "not-a-number".into(),
            method: "check".into(),
            date: "".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));
}

#[test]
fn seed_contains_one_paid_and_one_pending_record() {
    let db = test_db("pay_seed");

    let all = payments::list(&db).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].status, PaymentStatus::Paid);
    assert_eq!(all[1].status, PaymentStatus::Pending);
    assert_eq!(payments::pending(&all).len(), 1);
    assert_eq!(payments::current_balance(&all), 1250.0);
}

#[test]
fn recent_paid_takes_the_last_five_in_insertion_order_then_reverses() {
    let mut all = Vec::new();
    // Deliberately out of date order: insertion order wins, not date order.
    let dates = [
        (2024, 3, 10),
        (2024, 3, 1),
        (2024, 3, 20),
        (2024, 3, 5),
        (2024, 3, 15),
        (2024, 3, 2),
    ];
    for (i, (y, m, d)) in dates.iter().enumerate() {
        all.push(Payment {
            id: i as i64 + 1,
            amount: 100.0,
            kind: PaymentType::Rent,
            status: PaymentStatus::Paid,
            date: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(),
            method: Some("check".into()),
            due_date: None,
            balance: 0.0,
        });
    }

    let recent = payments::recent_paid(&all);
    assert_eq!(recent.len(), 5);
    // Newest-inserted first; the oldest insert (id 1) fell off the suffix.
    let ids: Vec<i64> = recent.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![6, 5, 4, 3, 2]);
}
