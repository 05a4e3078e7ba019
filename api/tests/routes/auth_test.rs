use crate::helpers::{bearer, json_body, make_test_app, send};
use axum::http::StatusCode;
use db::models::user::Role;
use db::test_utils::create_user;

#[tokio::test]
async fn me_returns_the_token_user() {
    let (app, state) = make_test_app().await;
    let user = create_user(state.db(), "oid-staff", Role::User).await;

    let auth = bearer(user.id, Role::User);
    let (status, json) = json_body(send(&app, "GET", "/api/auth/me", Some(&auth), None).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["open_id"], "oid-staff");
    assert_eq!(json["data"]["role"], "user");
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let (app, _) = make_test_app().await;

    let (status, json) = json_body(send(&app, "GET", "/api/auth/me", None, None).await).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn garbage_token_is_unauthorized_even_on_public_routes() {
    let (app, _) = make_test_app().await;

    let response = send(&app, "GET", "/api/booths", Some("Bearer not-a-jwt"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_for_deleted_user_is_not_found() {
    let (app, _) = make_test_app().await;

    let auth = bearer(4242, Role::User);
    let response = send(&app, "GET", "/api/auth/me", Some(&auth), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
