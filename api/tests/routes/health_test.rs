use crate::helpers::{json_body, make_test_app, send};
use axum::http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let (app, _) = make_test_app().await;

    let (status, json) = json_body(send(&app, "GET", "/api/health", None, None).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "OK");
    assert_eq!(json["data"]["database"], "up");
    assert_eq!(json["message"], "Health check passed");
}
