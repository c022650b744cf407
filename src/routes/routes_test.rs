use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

async fn get_path(router: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get_path(api_routes(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let (status, _) = get_path(api_routes(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_pkg_assets_from_site_root() {
    let root = std::env::temp_dir().join(format!("kamome-routes-test-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg/kamome.css"), "body{}").unwrap();

    let (status, body) = get_path(asset_routes(&root), "/pkg/kamome.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body{}");

    let (status, _) = get_path(asset_routes(&root), "/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&root).unwrap();
}
