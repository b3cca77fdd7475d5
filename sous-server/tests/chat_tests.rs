//! Endpoint tests over the assembled router with a mock model.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sous_catalog::Catalog;
use sous_model::{MockChatModel, Role};
use sous_server::{AppState, app};
use tower::util::ServiceExt;

fn test_app(model: Arc<MockChatModel>) -> Router {
    app(AppState::new(Catalog::builtin(), model))
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body collects").to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn chat_returns_reply_and_grounding_items() {
    let model = Arc::new(MockChatModel::new("Marry Me Chicken is ready in 20 minutes!"));
    let app = test_app(model.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "quick gluten-free chicken dinner" })))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["content"], "Marry Me Chicken is ready in 20 minutes!");

    let items = body["items"].as_array().expect("items array");
    assert!(!items.is_empty());
    assert_eq!(items[0]["name"], "Marry Me Chicken");
    // Wire format is camelCase, as the client expects.
    assert_eq!(items[0]["glutenFree"], true);

    // The model saw a grounded system prompt and the user message last.
    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    let transcript = &requests[0];
    assert_eq!(transcript[0].role, Role::System);
    assert!(transcript[0].content.contains("Marry Me Chicken"));
    assert_eq!(transcript.last().expect("transcript not empty").content, "quick gluten-free chicken dinner");
}

#[tokio::test]
async fn chat_rejects_empty_message() {
    let model = Arc::new(MockChatModel::new("unused"));
    let app = test_app(model.clone());

    let response =
        app.oneshot(chat_request(json!({ "message": "   " }))).await.expect("request succeeds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Message is required");
    // The model is never consulted for an empty message.
    assert!(model.requests().is_empty());
}

#[tokio::test]
async fn model_failure_keeps_a_friendly_reply() {
    let model = Arc::new(MockChatModel::failing());
    let app = test_app(model);

    let response = app
        .oneshot(chat_request(json!({ "message": "dessert ideas" })))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    assert!(body["error"].as_str().expect("error string").contains("Mock"));
    assert!(body["content"].as_str().expect("content string").contains("I'm sorry"));
    assert_eq!(body["items"].as_array().expect("items array").len(), 0);
}

#[tokio::test]
async fn history_is_windowed_before_reaching_the_model() {
    let model = Arc::new(MockChatModel::new("ok"));
    let app = test_app(model.clone());

    let history: Vec<Value> = (0..10)
        .map(|i| {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            json!({ "role": role, "content": format!("turn {i}") })
        })
        .collect();

    let response = app
        .oneshot(chat_request(json!({
            "message": "and for dessert?",
            "conversationHistory": history,
        })))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let transcript = &model.requests()[0];
    // system + 6 windowed history turns + the new user message
    assert_eq!(transcript.len(), 8);
    assert_eq!(transcript[1].content, "turn 4");
    assert_eq!(transcript[7].content, "and for dessert?");
}

#[tokio::test]
async fn no_match_queries_still_answer_with_empty_items() {
    let model = Arc::new(MockChatModel::new("Here's a general tip."));
    let app = test_app(model.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "beef stir fry" })))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["items"].as_array().expect("items array").len(), 0);

    // The system prompt falls back to generic-guidance instructions.
    let transcript = &model.requests()[0];
    assert!(transcript[0].content.contains("No specific catalog items matched"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let model = Arc::new(MockChatModel::new("unused"));
    let app = test_app(model);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request builds"))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
