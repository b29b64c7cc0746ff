use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use super::*;

#[test]
fn router_builds() {
    assert!(app().is_ok());
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = app().expect("router");
    let response = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
