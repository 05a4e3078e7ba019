use crate::helpers::{bearer, json_body, make_test_app, send};
use axum::http::StatusCode;
use db::models::user::Role;
use db::test_utils::create_user;
use serde_json::json;

#[tokio::test]
async fn create_student_defaults_qr_code_and_lookup_by_qr() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let (status, json) = json_body(
        send(
            &app,
            "POST",
            "/api/students",
            Some(&auth),
            Some(json!({ "student_id": "SV001", "name": "An", "year": 2 })),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["qr_code"], "SV001");
    let id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = json_body(send(&app, "GET", "/api/students/qr/SV001", None, None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], id);

    let response = send(&app, "GET", "/api/students/qr/UNKNOWN", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (_, json) = json_body(send(&app, "GET", &format!("/api/students/{id}"), None, None).await).await;
    assert_eq!(json["data"]["name"], "An");
}

#[tokio::test]
async fn duplicate_student_id_is_conflict() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);
    let body = json!({ "student_id": "SV001", "name": "An" });

    let response = send(&app, "POST", "/api/students", Some(&auth), Some(body.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let (status, json) =
        json_body(send(&app, "POST", "/api/students", Some(&auth), Some(body)).await).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn invalid_email_and_year_are_rejected() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let response = send(
        &app,
        "POST",
        "/api/students",
        Some(&auth),
        Some(json!({ "student_id": "SV002", "name": "Binh", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        "POST",
        "/api/students",
        Some(&auth),
        Some(json!({ "student_id": "SV002", "name": "Binh", "year": 42 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_students_is_admin_only() {
    let (app, state) = make_test_app().await;
    let user = create_user(state.db(), "oid-staff", Role::User).await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;

    let response = send(&app, "GET", "/api/students", Some(&bearer(user.id, Role::User)), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, "GET", "/api/students", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, "GET", "/api/students", Some(&bearer(admin.id, Role::Admin)), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_keeps_qr_code_and_missing_student_is_not_found() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let (_, json) = json_body(
        send(
            &app,
            "POST",
            "/api/students",
            Some(&auth),
            Some(json!({ "student_id": "SV003", "name": "Cuong" })),
        )
        .await,
    )
    .await;
    let uri = format!("/api/students/{}", json["data"]["id"]);

    let response = send(&app, "PUT", &uri, Some(&auth), Some(json!({ "major": "Design" }))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, json) = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert_eq!(json["data"]["major"], "Design");
    assert_eq!(json["data"]["qr_code"], "SV003");

    let response = send(
        &app,
        "PUT",
        "/api/students/9999",
        Some(&auth),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
