use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use storage::repository::Storage;
use storage::seed::seed_if_empty;
use tower::ServiceExt;

async fn seeded_router() -> Router {
    let storage = Storage::in_memory();
    seed_if_empty(storage.curriculum.as_ref())
        .await
        .expect("seed");
    server::create_router(storage)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn patch_toggle(id: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(format!("/api/topics/{id}/toggle"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_curriculum_returns_full_tree() {
    let app = seeded_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/curriculum")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let tree = body_json(response).await;
    let units = tree.as_array().unwrap();
    assert_eq!(units.len(), 8);
    assert_eq!(units[0]["title"], "UNIDADE 1: A QUÍMICA DA VIDA");
    assert_eq!(units[0]["chapters"][0]["concepts"][0]["topics"][0]["completed"], false);
}

#[tokio::test]
async fn toggle_existing_topic_updates_exactly_one_row() {
    let app = seeded_router().await;

    let response = app
        .clone()
        .oneshot(patch_toggle("1", r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let topic = body_json(response).await;
    assert_eq!(topic["id"], 1);
    assert_eq!(topic["completed"], true);

    let refetched = app
        .oneshot(
            Request::builder()
                .uri("/api/curriculum")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let tree = body_json(refetched).await;
    let mut completed = 0;
    for unit in tree.as_array().unwrap() {
        for chapter in unit["chapters"].as_array().unwrap() {
            for concept in chapter["concepts"].as_array().unwrap() {
                for topic in concept["topics"].as_array().unwrap() {
                    if topic["completed"] == true {
                        completed += 1;
                        assert_eq!(topic["id"], 1);
                    }
                }
            }
        }
    }
    assert_eq!(completed, 1);
}

#[tokio::test]
async fn toggle_unknown_topic_is_404_with_message() {
    let app = seeded_router().await;

    let response = app
        .oneshot(patch_toggle("999999", r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Topic not found");
}

#[tokio::test]
async fn toggle_with_malformed_body_is_400() {
    let app = seeded_router().await;

    let response = app
        .clone()
        .oneshot(patch_toggle("1", r#"{"done":true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].is_string());

    // a rejected payload must not mutate anything
    let refetched = app
        .oneshot(
            Request::builder()
                .uri("/api/curriculum")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let tree = body_json(refetched).await;
    assert_eq!(
        tree[0]["chapters"][0]["concepts"][0]["topics"][0]["completed"],
        false
    );
}

#[tokio::test]
async fn toggle_with_non_numeric_id_is_400() {
    let app = seeded_router().await;

    let response = app
        .oneshot(patch_toggle("abc", r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_returns_ok() {
    let app = seeded_router().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
