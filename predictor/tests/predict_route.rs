use model::LinearModel;
use ndarray::array;
use predictor::{
    PredictService, serve_connection,
    service::{ErrorResponse, PredictResponse},
};
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

fn test_service() -> PredictService {
    let model = LinearModel::new(array![1.0, 2.0, 3.0], 0.5).unwrap();
    PredictService::new(model)
}

/// Drives one connection end to end over an in-memory stream and returns
/// everything the server wrote back.
async fn roundtrip(raw: &str) -> String {
    let (client, server) = io::duplex(4096);
    let service = test_service();

    let server_task = tokio::spawn(async move { serve_connection(&service, server).await });

    let (mut rx, mut tx) = io::split(client);
    tx.write_all(raw.as_bytes()).await.unwrap();
    tx.shutdown().await.unwrap();

    let mut out = String::new();
    rx.read_to_string(&mut out).await.unwrap();
    server_task.await.unwrap().unwrap();

    out
}

fn post(target: &str, body: &str) -> String {
    format!(
        "POST {target} HTTP/1.1\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    )
}

fn status_of(response: &str) -> u16 {
    response.split_whitespace().nth(1).unwrap().parse().unwrap()
}

fn body_of(response: &str) -> &str {
    response.split("\r\n\r\n").nth(1).unwrap()
}

#[tokio::test]
async fn valid_input_returns_prediction() {
    let response = roundtrip(&post("/predict", r#"{"input": [1.0, 1.0, 1.0]}"#)).await;

    assert_eq!(status_of(&response), 200);

    let body: PredictResponse = serde_json::from_str(body_of(&response)).unwrap();
    assert!(body.prediction.is_finite());
    assert!((body.prediction - 6.5).abs() < 1e-12);
}

#[tokio::test]
async fn wrong_feature_count_is_rejected() {
    let response = roundtrip(&post("/predict", r#"{"input": [1.0, 2.0]}"#)).await;

    assert_eq!(status_of(&response), 400);

    let body: ErrorResponse = serde_json::from_str(body_of(&response)).unwrap();
    assert!(body.error.contains("got 2"));
    assert!(body.error.contains("expected 3"));
}

#[tokio::test]
async fn non_json_body_is_rejected() {
    let response = roundtrip(&post("/predict", "not json at all")).await;
    assert_eq!(status_of(&response), 400);
}

#[tokio::test]
async fn missing_input_field_is_rejected() {
    let response = roundtrip(&post("/predict", r#"{"features": [1.0, 2.0, 3.0]}"#)).await;
    assert_eq!(status_of(&response), 400);
}

#[tokio::test]
async fn non_numeric_input_is_rejected() {
    let response = roundtrip(&post("/predict", r#"{"input": ["a", "b", "c"]}"#)).await;
    assert_eq!(status_of(&response), 400);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = roundtrip("GET /health HTTP/1.1\r\n\r\n").await;
    assert_eq!(status_of(&response), 404);
}

#[tokio::test]
async fn connection_serves_sequential_requests() {
    let first = post("/predict", r#"{"input": [1.0, 0.0, 0.0]}"#);
    let second = post("/predict", r#"{"input": [0.0, 0.0, 1.0]}"#);
    let response = roundtrip(&format!("{first}{second}")).await;

    assert_eq!(response.matches("HTTP/1.1 200 OK").count(), 2);
    assert!(response.contains("{\"prediction\":1.5}"));
    assert!(response.contains("{\"prediction\":3.5}"));
}
