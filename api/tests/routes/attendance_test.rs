use crate::helpers::{bearer, json_body, make_test_app, send};
use axum::Router;
use axum::http::StatusCode;
use db::models::user::Role;
use db::test_utils::create_user;
use serde_json::{Value, json};

async fn post_json(app: &Router, uri: &str, auth: &str, body: Value) -> (StatusCode, Value) {
    json_body(send(app, "POST", uri, Some(auth), Some(body)).await).await
}

#[tokio::test]
async fn event_day_scenario() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let staff = create_user(state.db(), "oid-staff", Role::User).await;
    let admin_auth = bearer(admin.id, Role::Admin);
    let staff_auth = bearer(staff.id, Role::User);

    let (status, booth) = post_json(&app, "/api/booths", &admin_auth, json!({ "name": "IT Booth" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booth["data"]["id"], 1);

    let (status, student) = post_json(
        &app,
        "/api/students",
        &admin_auth,
        json!({ "student_id": "SV001", "name": "An", "qr_code": "SV001" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["data"]["id"], 1);

    let scan = json!({ "qr_code": "SV001", "booth_id": 1 });
    let (status, recorded) = post_json(&app, "/api/attendance/scan", &staff_auth, scan.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(recorded["data"]["student"]["id"], 1);
    assert_eq!(recorded["data"]["booth_id"], 1);
    assert_eq!(recorded["data"]["scanned_by"], staff.id);

    let (status, repeat) = post_json(&app, "/api/attendance/scan", &staff_auth, scan).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(repeat["message"], "already attended this booth");

    let (status, rows) = json_body(
        send(&app, "GET", "/api/attendance/booths/1", Some(&staff_auth), None).await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student"]["student_id"], "SV001");
}

#[tokio::test]
async fn student_can_visit_several_booths() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    for name in ["IT Booth", "Design Booth"] {
        post_json(&app, "/api/booths", &auth, json!({ "name": name })).await;
    }
    let (_, student) = post_json(
        &app,
        "/api/students",
        &auth,
        json!({ "student_id": "SV001", "name": "An" }),
    )
    .await;

    for booth_id in [1, 2] {
        let (status, _) = post_json(
            &app,
            "/api/attendance/scan",
            &auth,
            json!({ "qr_code": "SV001", "booth_id": booth_id }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = format!("/api/attendance/students/{}", student["data"]["id"]);
    let (status, json) = json_body(send(&app, "GET", &uri, Some(&auth), None).await).await;
    assert_eq!(status, StatusCode::OK);
    let booths: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["booth"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(booths, vec!["IT Booth", "Design Booth"]);
}

#[tokio::test]
async fn unknown_qr_code_is_not_found() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);
    post_json(&app, "/api/booths", &auth, json!({ "name": "IT Booth" })).await;

    let (status, json) = post_json(
        &app,
        "/api/attendance/scan",
        &auth,
        json!({ "qr_code": "MISSING", "booth_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "student not found");

    let (_, rows) = json_body(send(&app, "GET", "/api/attendance/booths/1", Some(&auth), None).await).await;
    assert!(rows["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn scanning_requires_a_token() {
    let (app, _) = make_test_app().await;

    let response = send(
        &app,
        "POST",
        "/api/attendance/scan",
        None,
        Some(json!({ "qr_code": "SV001", "booth_id": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, "GET", "/api/attendance/booths/1", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_a_visited_student_is_conflict() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);
    post_json(&app, "/api/booths", &auth, json!({ "name": "IT Booth" })).await;
    post_json(&app, "/api/students", &auth, json!({ "student_id": "SV001", "name": "An" })).await;
    post_json(
        &app,
        "/api/attendance/scan",
        &auth,
        json!({ "qr_code": "SV001", "booth_id": 1 }),
    )
    .await;

    let response = send(&app, "DELETE", "/api/students/1", Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, "GET", "/api/students/1", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn token_for_a_removed_user_cannot_scan() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);
    post_json(&app, "/api/booths", &auth, json!({ "name": "IT Booth" })).await;
    post_json(&app, "/api/students", &auth, json!({ "student_id": "SV001", "name": "An" })).await;

    let (status, _) = post_json(
        &app,
        "/api/attendance/scan",
        &bearer(admin.id + 100, Role::User),
        json!({ "qr_code": "SV001", "booth_id": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, rows) = json_body(send(&app, "GET", "/api/attendance/booths/1", Some(&auth), None).await).await;
    assert!(rows["data"].as_array().unwrap().is_empty());
}
