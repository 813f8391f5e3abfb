use crate::domain::reservations::{self, BookingForm, ReservationStatus};
use crate::errors::ServerError;
use crate::tests::utils::test_db;
use chrono::{Days, Local, NaiveDate};

fn form(amenity: &str, date: &str, time: &str) -> BookingForm {
    BookingForm {
        amenity: amenity.into(),
        date: date.into(),
        time: time.into(),
        duration: "1".into(),
        guests: "1".into(),
    }
}

#[test]
fn double_booking_the_same_slot_conflicts_until_cancelled() {
    let db = test_db("res_conflict");

    let first = reservations::book(&db, &form("pool", "2024-03-01", "2:00 PM")).unwrap();
    assert_eq!(first.status, ReservationStatus::Confirmed);
    assert_eq!(first.amenity_name, "Swimming Pool");

    let err = reservations::book(&db, &form("pool", "2024-03-01", "2:00 PM")).unwrap_err();
    assert!(matches!(err, ServerError::Conflict(_)));

    reservations::cancel(&db, first.id).unwrap();

    let retry = reservations::book(&db, &form("pool", "2024-03-01", "2:00 PM")).unwrap();
    assert_eq!(retry.status, ReservationStatus::Confirmed);
}

#[test]
fn conflicts_are_exact_slot_matches_ignoring_duration_overlap() {
    let db = test_db("res_overlap");

    let mut three_hours = form("clubhouse", "2024-06-01", "1:00 PM");
    three_hours.duration = "3".into();
    reservations::book(&db, &three_hours).unwrap();

    // 2:00 PM falls inside the three-hour booking but is a distinct slot.
    assert!(reservations::book(&db, &form("clubhouse", "2024-06-01", "2:00 PM")).is_ok());
}

#[test]
fn different_amenity_date_or_time_never_conflicts() {
    let db = test_db("res_distinct");

    reservations::book(&db, &form("gym", "2024-03-01", "9:00 AM")).unwrap();
    assert!(reservations::book(&db, &form("pool", "2024-03-01", "9:00 AM")).is_ok());
    assert!(reservations::book(&db, &form("gym", "2024-03-02", "9:00 AM")).is_ok());
    assert!(reservations::book(&db, &form("gym", "2024-03-01", "10:00 AM")).is_ok());
}

#[test]
fn missing_fields_are_validation_errors() {
    let db = test_db("res_validation");

    assert!(matches!(
        reservations::book(&db, &form("", "2024-03-01", "2:00 PM")),
        Err(ServerError::Validation(_))
    ));
    assert!(matches!(
        reservations::book(&db, &form("pool", "", "2:00 PM")),
        Err(ServerError::Validation(_))
    ));
    assert!(matches!(
        reservations::book(&db, &form("pool", "2024-03-01", "")),
        Err(ServerError::Validation(_))
    ));
    assert!(reservations::list(&db).unwrap().is_empty());
}

#[test]
fn duration_and_guests_fall_back_to_one() {
    let db = test_db("res_defaults");

    let mut booking = form("lounge", "2024-03-01", "9:00 AM");
    booking.duration = "9".into();
    booking.guests = "".into();
    let reservation = reservations::book(&db, &booking).unwrap();

    assert_eq!(reservation.duration, 1);
    assert_eq!(reservation.guests, 1);
}

#[test]
fn unknown_amenity_books_with_the_raw_id_as_its_name() {
    let db = test_db("res_unknown");

    let reservation = reservations::book(&db, &form("rooftop", "2024-03-01", "9:00 AM")).unwrap();
    assert_eq!(reservation.amenity_name, "rooftop");
}

#[test]
fn upcoming_is_confirmed_on_or_after_today_ascending() {
    let db = test_db("res_upcoming");
    let today = Local::now().date_naive();
    let in_days = |n: u64| (today + Days::new(n)).format("%Y-%m-%d").to_string();

    let later = reservations::book(&db, &form("gym", &in_days(10), "9:00 AM")).unwrap();
    let sooner = reservations::book(&db, &form("pool", &in_days(2), "9:00 AM")).unwrap();
    let cancelled = reservations::book(&db, &form("lounge", &in_days(5), "9:00 AM")).unwrap();
    reservations::cancel(&db, cancelled.id).unwrap();

    let all = reservations::list(&db).unwrap();
    let upcoming = reservations::upcoming(&all, today);
    let ids: Vec<i64> = upcoming.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
}

#[test]
fn history_takes_past_or_cancelled_newest_first_capped_at_five() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let db = test_db("res_history");

    // Seven past bookings across distinct slots.
    for day in 1..=7 {
        let date = format!("2024-05-0{day}");
        reservations::book(&db, &form("gym", &date, "9:00 AM")).unwrap();
    }

    let all = reservations::list(&db).unwrap();
    let history = reservations::history(&all, today);
    assert_eq!(history.len(), 5);
    let dates: Vec<String> = history.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "2024-05-07",
            "2024-05-06",
            "2024-05-05",
            "2024-05-04",
            "2024-05-03"
        ]
    );
}
