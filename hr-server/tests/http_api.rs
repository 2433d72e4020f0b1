mod common;

use common::{TestApp, last_names};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn position_add_then_get() {
    let app = TestApp::new().await;

    let created = app.post("/position/add?title=Engineer").await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json(), json!({"id": 1, "title": "Engineer"}));

    let found = app.get("/position/get?id=1").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json(), json!({"id": 1, "title": "Engineer"}));
}

#[tokio::test]
async fn employment_shows_up_in_listing() {
    let app = TestApp::new().await;
    app.seed_catalog().await;

    let ada = app
        .post("/employee/add?name=Ada&last_name=Lovelace&patronymic=-&birth_date=1815-12-10")
        .await;
    assert_eq!(ada.status, StatusCode::OK);
    assert_eq!(
        ada.json(),
        json!({
            "id": 1,
            "last_name": "Lovelace",
            "name": "Ada",
            "patronymic": "-",
            "address": "",
            "birth_date": "1815-12-10"
        })
    );

    let job = app
        .post("/employment?employee_id=1&position_id=1&division_id=1&date_of_employment=2020-01-15")
        .await;
    assert_eq!(job.status, StatusCode::OK);
    assert_eq!(job.json()["date_of_dismissal"], json!(null));

    let listing = app.get("/employees").await;
    assert_eq!(listing.status, StatusCode::OK);
    let rows = listing.json();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "Ada");

    // the root path serves the same listing
    assert_eq!(app.get("/").await.json(), rows);
}

#[tokio::test]
async fn listing_orders_by_employment_date() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    app.hire("Alan", "A", 1, "2020-01-15").await;
    app.hire("Barbara", "B", 1, "2019-06-01").await;

    let listing = app.get("/employees").await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(last_names(&listing.json()), ["B", "A"]);

    let after = app.get("/employees?employment_after_date=2019-12-31").await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(last_names(&after.json()), ["A"]);
}

#[tokio::test]
async fn division_filter_takes_priority() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    assert_eq!(app.post("/division/add?title=Research").await.status, StatusCode::OK);
    app.hire("Alan", "A", 1, "2020-01-15").await;
    app.hire("Barbara", "B", 1, "2019-06-01").await;
    app.hire("Claude", "C", 2, "2018-03-01").await;

    let both = app
        .get("/employees?division_id=1&employment_after_date=2099-01-01")
        .await;
    let division_only = app.get("/employees?division_id=1").await;
    assert_eq!(both.status, StatusCode::OK);
    assert_eq!(both.json(), division_only.json());
    assert_eq!(last_names(&both.json()), ["B", "A"]);

    // an empty division id is ignored, the date applies
    let empty_division = app
        .get("/employees?division_id=&employment_after_date=2019-01-01")
        .await;
    assert_eq!(last_names(&empty_division.json()), ["B", "A"]);

    let no_match = app.get("/employees?division_id=42").await;
    assert_eq!(no_match.status, StatusCode::OK);
    assert_eq!(no_match.json(), json!([]));
}

#[tokio::test]
async fn listing_without_employees_is_not_found() {
    let app = TestApp::new().await;

    let listing = app.get("/employees").await;
    assert_eq!(listing.status, StatusCode::NOT_FOUND);
    assert_eq!(listing.json()["code"], 1003);
}

#[tokio::test]
async fn dismissal_is_idempotent() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    let id = app.hire("Ada", "Lovelace", 1, "2020-01-15").await;

    let first = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2024-12-31"))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.text(), "employee has been dismissed");

    let job = app.get("/job/get?id=1").await;
    assert_eq!(job.status, StatusCode::OK);
    assert_eq!(job.json()["date_of_dismissal"], "2024-12-31");

    let second = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2024-12-31"))
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(app.get("/job/get?id=1").await.json(), job.json());
}

#[tokio::test]
async fn repeated_dismissal_after_rehire() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    let id = app.hire("Ada", "Lovelace", 1, "2015-03-01").await;
    let past = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2016-03-01"))
        .await;
    assert_eq!(past.status, StatusCode::OK);

    let rehired = app
        .post(&format!(
            "/employment?employee_id={id}&position_id=1&division_id=1&date_of_employment=2020-01-15"
        ))
        .await;
    assert_eq!(rehired.status, StatusCode::OK);

    for _ in 0..2 {
        let response = app
            .put(&format!("/dismissal?id={id}&date_of_dismissal=2024-12-31"))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
    }

    let jobs = app.get(&format!("/employee/jobs?id={id}")).await.json();
    assert_eq!(jobs[0]["date_of_dismissal"], "2016-03-01");
    assert_eq!(jobs[1]["date_of_dismissal"], "2024-12-31");

    // a different date with no open job is still ambiguous
    let other = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2025-01-31"))
        .await;
    assert_eq!(other.status, StatusCode::CONFLICT);
    assert_eq!(other.json()["code"], 4002);
}

#[tokio::test]
async fn dismissal_failures() {
    let app = TestApp::new().await;
    app.seed_catalog().await;

    let unknown = app.put("/dismissal?id=9&date_of_dismissal=2024-12-31").await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let id = app.hire("Ada", "Lovelace", 1, "2020-01-15").await;
    let too_early = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2019-01-01"))
        .await;
    assert_eq!(too_early.status, StatusCode::BAD_REQUEST);
    assert_eq!(too_early.json()["code"], 4003);

    // a second open job makes the dismissal ambiguous
    let again = app
        .post(&format!(
            "/employment?employee_id={id}&position_id=1&division_id=1&date_of_employment=2021-01-01"
        ))
        .await;
    assert_eq!(again.status, StatusCode::OK);
    let ambiguous = app
        .put(&format!("/dismissal?id={id}&date_of_dismissal=2024-12-31"))
        .await;
    assert_eq!(ambiguous.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn employment_with_missing_reference_creates_nothing() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    let created = app
        .post("/employee/add?name=Ada&last_name=Lovelace&patronymic=-&birth_date=1815-12-10")
        .await;
    assert_eq!(created.status, StatusCode::OK);

    for uri in [
        "/employment?employee_id=7&position_id=1&division_id=1&date_of_employment=2020-01-15",
        "/employment?employee_id=1&position_id=7&division_id=1&date_of_employment=2020-01-15",
        "/employment?employee_id=1&position_id=1&division_id=7&date_of_employment=2020-01-15",
    ] {
        assert_eq!(app.post(uri).await.status, StatusCode::NOT_FOUND, "{uri}");
    }

    let jobs = app.get("/employee/jobs?id=1").await;
    assert_eq!(jobs.status, StatusCode::OK);
    assert_eq!(jobs.json(), json!([]));
}

#[tokio::test]
async fn delete_of_absent_row_is_not_found() {
    let app = TestApp::new().await;
    app.seed_catalog().await;

    let deleted = app.delete("/position/delete?id=1").await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.text(), "successfully deleted");

    assert_eq!(app.get("/position/get?id=1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/position/delete?id=1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete("/employee/delete?id=1").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
    let app = TestApp::new().await;
    app.seed_catalog().await;
    let id = app.hire("Ada", "Lovelace", 1, "2020-01-15").await;

    let employee = app.delete(&format!("/employee/delete?id={id}")).await;
    assert_eq!(employee.status, StatusCode::CONFLICT);
    assert_eq!(employee.json()["code"], 1002);
    assert_eq!(app.delete("/position/delete?id=1").await.status, StatusCode::CONFLICT);
    assert_eq!(app.delete("/division/delete?id=1").await.status, StatusCode::CONFLICT);

    assert_eq!(app.get(&format!("/employee/get?id={id}")).await.status, StatusCode::OK);
}

#[tokio::test]
async fn employee_edit_and_round_trip() {
    let app = TestApp::new().await;
    let created = app
        .post("/employee/add?name=%20Ada%20&last_name=Lovelace&patronymic=-&birth_date=1815-12-10&address=London")
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json()["name"], "Ada");

    let fetched = app.get("/employee/get?id=1").await;
    assert_eq!(fetched.json(), created.json());

    let edited = app.put("/employee/edit?id=1&last_name=King").await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.json()["last_name"], "King");
    assert_eq!(edited.json()["address"], "London");

    assert_eq!(
        app.put("/employee/edit?id=5&last_name=King").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn malformed_input_is_bad_request() {
    let app = TestApp::new().await;
    app.seed_catalog().await;

    let bad_date = app
        .post("/employee/add?name=Ada&last_name=Lovelace&patronymic=-&birth_date=10.12.1815")
        .await;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);

    let missing = app.post("/employee/add?name=Ada&birth_date=1815-12-10").await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let long_name = "x".repeat(31);
    let too_long = app
        .post(&format!(
            "/employee/add?name={long_name}&last_name=Lovelace&patronymic=-&birth_date=1815-12-10"
        ))
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(too_long.json()["details"]["field"], "name");

    assert_eq!(app.get("/employee/get?id=abc").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.post("/position/add?title=").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.get("/employees?employment_after_date=yesterday").await.status,
        StatusCode::BAD_REQUEST
    );

    // nothing was written by the rejected requests
    assert_eq!(app.get("/employee/get?id=1").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn json_body_is_accepted() {
    let app = TestApp::new().await;

    let created = app
        .call_json(Method::POST, "/division/add", json!({"title": "Platform"}))
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json(), json!({"id": 1, "title": "Platform"}));

    let renamed = app
        .call_json(Method::PUT, "/division/edit", json!({"id": 1, "title": "Core"}))
        .await;
    assert_eq!(renamed.json()["title"], "Core");

    let listing = app.get("/divisions").await;
    assert_eq!(listing.json(), json!([{"id": 1, "title": "Core"}]));
}

#[tokio::test]
async fn health_and_request_id() {
    let app = TestApp::new().await;

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json()["status"], "ok");
    assert_eq!(health.json()["database"], "ok");
    assert!(health.headers.contains_key("x-request-id"));
}
