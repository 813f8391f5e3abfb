use crate::domain::maintenance::{self, Category, NewRequest, RequestStatus};
use crate::domain::Priority;
use crate::errors::ServerError;
use crate::tests::utils::test_db;

fn valid_form() -> NewRequest {
    NewRequest {
        title: "Leaky faucet".into(),
        description: "Kitchen faucet drips constantly".into(),
        category: "plumbing".into(),
        priority: "high".into(),
        location: "Kitchen".into(),
    }
}

#[test]
fn submitted_requests_start_pending_with_matching_dates() {
    let db = test_db("maint_submit");

    let request = maintenance::submit(&db, &valid_form()).unwrap();

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.date_submitted, request.date_updated);
    assert_eq!(request.category, Category::Plumbing);
    assert_eq!(request.priority, Priority::High);
    assert_eq!(request.location.as_deref(), Some("Kitchen"));
}

#[test]
fn missing_required_fields_leave_the_bucket_untouched() {
    let db = test_db("maint_validation");

    let mut form = valid_form();
    form.description = "".into();
    let err = maintenance::submit(&db, &form).unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));

    let mut form = valid_form();
    form.category = "".into();
    assert!(maintenance::submit(&db, &form).is_err());

    assert!(maintenance::list(&db).unwrap().is_empty());
}

#[test]
fn unknown_category_is_rejected() {
    let db = test_db("maint_category");

    let mut form = valid_form();
    form.category = "landscaping".into();
    assert!(matches!(
        maintenance::submit(&db, &form),
        Err(ServerError::Validation(_))
    ));
}

#[test]
fn priority_defaults_to_medium_and_blank_location_drops() {
    let db = test_db("maint_defaults");

    let mut form = valid_form();
    form.priority = "".into();
    form.location = "   ".into();
    let request = maintenance::submit(&db, &form).unwrap();

    assert_eq!(request.priority, Priority::Medium);
    assert!(request.location.is_none());
}

#[test]
fn list_keeps_insertion_order_newest_last() {
    let db = test_db("maint_order");

    let mut first = valid_form();
    first.title = "First".into();
    let mut second = valid_form();
    second.title = "Second".into();

    maintenance::submit(&db, &first).unwrap();
    maintenance::submit(&db, &second).unwrap();

    let requests = maintenance::list(&db).unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].title, "First");
    assert_eq!(requests[1].title, "Second");
    assert!(requests[0].id < requests[1].id);
}
