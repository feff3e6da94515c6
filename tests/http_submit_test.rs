use httpmock::prelude::*;
use serde_json::json;

use order_form::model::OrderPayload;
use order_form::submit::{
    HttpSubmitClient, SubmitClient, SubmitError, FALLBACK_FAILURE_MESSAGE,
};

fn sample_payload() -> OrderPayload {
    OrderPayload {
        full_name: "Alice Smith".to_string(),
        size: "L".to_string(),
        toppings: vec!["1".to_string(), "3".to_string()],
    }
}

#[tokio::test]
async fn posts_json_and_reads_the_receipt() {
    let server = MockServer::start_async().await;
    let order_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order").json_body(json!({
                "fullName": "Alice Smith",
                "size": "L",
                "toppings": ["1", "3"],
            }));
            then.status(201).json_body(json!({ "message": "Order received" }));
        })
        .await;

    let client = HttpSubmitClient::new(server.base_url());
    let receipt = client.submit_order(&sample_payload()).await.unwrap();
    assert_eq!(receipt.message, "Order received");

    order_mock.assert_async().await;
}

#[tokio::test]
async fn rejection_envelope_yields_the_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order");
            then.status(422).json_body(json!({ "message": "Size is required" }));
        })
        .await;

    let client = HttpSubmitClient::new(server.base_url());
    let err = client.submit_order(&sample_payload()).await.unwrap_err();
    assert_eq!(err, SubmitError::Rejected("Size is required".to_string()));
    assert_eq!(err.feedback_message(), "Size is required");
}

#[tokio::test]
async fn error_body_without_a_message_falls_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order");
            then.status(500).json_body(json!({ "detail": "boom" }));
        })
        .await;

    let client = HttpSubmitClient::new(server.base_url());
    let err = client.submit_order(&sample_payload()).await.unwrap_err();
    assert_eq!(err, SubmitError::MalformedResponse);
    assert_eq!(err.feedback_message(), FALLBACK_FAILURE_MESSAGE);
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order");
            then.status(500).body("upstream exploded");
        })
        .await;

    let client = HttpSubmitClient::new(server.base_url());
    let err = client.submit_order(&sample_payload()).await.unwrap_err();
    assert_eq!(err, SubmitError::MalformedResponse);
}

#[tokio::test]
async fn success_body_without_a_message_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order");
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = HttpSubmitClient::new(server.base_url());
    let err = client.submit_order(&sample_payload()).await.unwrap_err();
    assert_eq!(err, SubmitError::MalformedResponse);
    assert_eq!(err.feedback_message(), FALLBACK_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on port 1.
    let client = HttpSubmitClient::new("http://127.0.0.1:1");
    let err = client.submit_order(&sample_payload()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.feedback_message(), FALLBACK_FAILURE_MESSAGE);
}
