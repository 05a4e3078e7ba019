use crate::helpers::{bearer, json_body, make_test_app, send};
use axum::http::StatusCode;
use db::models::user::Role;
use db::test_utils::create_user;
use serde_json::json;

#[tokio::test]
async fn admin_creates_booth_and_anyone_can_list_it() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let (status, json) = json_body(
        send(
            &app,
            "POST",
            "/api/booths",
            Some(&auth),
            Some(json!({ "name": "IT Booth", "location": "Hall A", "admin_id": admin.id })),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["name"], "IT Booth");
    assert_eq!(json["data"]["is_active"], true);
    let booth_id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = json_body(send(&app, "GET", "/api/booths", None, None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/booths/{booth_id}");
    let (status, json) = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["location"], "Hall A");

    let (status, json) = json_body(send(&app, "GET", "/api/booths/mine", Some(&auth), None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["id"], booth_id);
}

#[tokio::test]
async fn regular_user_cannot_create_booth() {
    let (app, state) = make_test_app().await;
    let user = create_user(state.db(), "oid-staff", Role::User).await;

    let response = send(
        &app,
        "POST",
        "/api/booths",
        Some(&bearer(user.id, Role::User)),
        Some(json!({ "name": "Nope" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, "POST", "/api/booths", None, Some(json!({ "name": "Nope" }))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (_, json) = json_body(send(&app, "GET", "/api/booths", None, None).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_booth_name_is_bad_request() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;

    let response = send(
        &app,
        "POST",
        "/api/booths",
        Some(&bearer(admin.id, Role::Admin)),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete_booth() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let (_, json) = json_body(
        send(&app, "POST", "/api/booths", Some(&auth), Some(json!({ "name": "Draft" }))).await,
    )
    .await;
    let uri = format!("/api/booths/{}", json["data"]["id"]);

    let response = send(
        &app,
        "PUT",
        &uri,
        Some(&auth),
        Some(json!({ "name": "Final", "is_active": false })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, json) = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert_eq!(json["data"]["name"], "Final");
    assert_eq!(json["data"]["is_active"], false);

    let response = send(&app, "DELETE", &uri, Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", &uri, None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", &uri, Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn null_admin_id_unassigns_the_booth() {
    let (app, state) = make_test_app().await;
    let admin = create_user(state.db(), "oid-admin", Role::Admin).await;
    let auth = bearer(admin.id, Role::Admin);

    let (_, json) = json_body(
        send(
            &app,
            "POST",
            "/api/booths",
            Some(&auth),
            Some(json!({ "name": "IT Booth", "admin_id": admin.id })),
        )
        .await,
    )
    .await;
    let uri = format!("/api/booths/{}", json["data"]["id"]);

    let response = send(&app, "PUT", &uri, Some(&auth), Some(json!({ "location": "Hall C" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let (_, json) = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert_eq!(json["data"]["admin_id"], admin.id);

    let response = send(&app, "PUT", &uri, Some(&auth), Some(json!({ "admin_id": null }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let (_, json) = json_body(send(&app, "GET", &uri, None, None).await).await;
    assert!(json["data"]["admin_id"].is_null());
}
