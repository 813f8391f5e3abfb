use crate::router::handle;
use crate::tests::utils::{body_text, get, post_form, test_db};

#[test]
fn dashboard_renders_with_fallback_balance_on_a_fresh_store() {
    let db = test_db("r_dash_fresh");

    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Welcome Home"));
    assert!(body.contains("$1250.00"));
    assert!(body.contains("Open Requests"));
    assert!(body.contains("No upcoming reservations"));
}

#[test]
fn dashboard_reflects_mutations_made_through_other_tabs() {
    let db = test_db("r_dash_mutations");

    let resp = handle(
        post_form(
            "/maintenance/submit",
            &[
                ("title", "Broken light"),
                ("description", "Hallway light is out"),
                ("category", "electrical"),
                ("priority", "low"),
                ("location", ""),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let resp = handle(
        post_form(
            "/payments/pay",
            &[("amount", "250"), ("method", "check"), ("date", "")],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_text(handle(get("/dashboard"), &db).unwrap());
    assert!(body.contains("$1000.00"));
    assert!(body.contains(r#"<p class="stat-value">1</p>"#));
}

#[test]
fn unknown_routes_are_not_found() {
    let db = test_db("r_dash_404");
    assert!(handle(get("/nope"), &db).is_err());
}
