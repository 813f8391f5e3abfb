use crate::router::handle;
use crate::tests::utils::{body_text, get, location, post_form, test_db};

#[test]
fn valid_submission_redirects_with_a_notice_and_shows_up_pending() {
    let db = test_db("r_maint_submit");

    let resp = handle(
        post_form(
            "/maintenance/submit",
            &[
                ("title", "Leaky faucet"),
                ("description", "Kitchen faucet drips"),
                ("category", "plumbing"),
                ("priority", "medium"),
                ("location", "Kitchen"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert!(location(&resp).contains("notice="));

    let body = body_text(handle(get("/maintenance"), &db).unwrap());
    assert!(body.contains("Leaky faucet"));
    assert!(body.contains("pending"));
    assert!(body.contains("Kitchen"));
}

#[test]
fn missing_fields_redirect_back_with_an_error() {
    let db = test_db("r_maint_invalid");

    let resp = handle(
        post_form(
            "/maintenance/submit",
            &[
                ("title", ""),
                ("description", "something"),
                ("category", "plumbing"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    let loc = location(&resp);
    assert!(loc.starts_with("/maintenance?error="));
    assert!(loc.contains("required+fields"));

    // Nothing was stored.
    let body = body_text(handle(get("/maintenance"), &db).unwrap());
    assert!(body.contains("No maintenance requests"));
}

#[test]
fn the_error_banner_renders_on_the_redirected_page() {
    let db = test_db("r_maint_banner");

    let body = body_text(
        handle(get("/maintenance?error=Please+fill+in+all+required+fields"), &db).unwrap(),
    );
    assert!(body.contains("flash-error"));
    assert!(body.contains("Please fill in all required fields"));
}
