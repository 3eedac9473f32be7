//! Watson detector tests against a mock EmotionPredict endpoint

use std::time::Duration;

use emotion_detector::server::detectors::watson::MODEL_ID_HEADER;
use emotion_detector::{DetectorConfig, DetectorError, Emotion, EmotionDetector, WatsonDetector};
use httpmock::{Method::POST, MockServer};
use rstest::rstest;
use serde_json::json;

const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

fn detector_for(server: &MockServer) -> WatsonDetector {
    WatsonDetector::new(DetectorConfig {
        base_url: server.url(PREDICT_PATH),
        ..Default::default()
    })
    .unwrap()
}

fn prediction(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> serde_json::Value {
    json!({
        "emotionPredictions": [{
            "emotion": {
                "anger": anger, "disgust": disgust, "fear": fear, "joy": joy, "sadness": sadness
            },
            "target": "",
            "emotionMentions": []
        }],
        "producerId": {"name": "Ensemble Aggregated Emotion Workflow", "version": "0.0.1"}
    })
}

#[tokio::test]
async fn test_sends_raw_document_and_model_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PREDICT_PATH)
                .header(MODEL_ID_HEADER, "emotion_aggregated-workflow_lang_en_stock")
                .header("content-type", "application/json")
                .json_body(json!({"raw_document": {"text": "I am happy"}}));
            then.status(200).json_body(prediction(0.0, 0.0, 0.0, 0.95, 0.02));
        })
        .await;

    let scores = detector_for(&server).detect("I am happy").await.unwrap();

    mock.assert_async().await;
    assert_eq!(scores.joy, 0.95);
    assert_eq!(scores.sadness, 0.02);
    assert_eq!(scores.dominant_emotion, Some(Emotion::Joy));
}

#[tokio::test]
async fn test_sends_bearer_token_when_configured() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PREDICT_PATH)
                .header("authorization", "Bearer secret");
            then.status(200).json_body(prediction(0.6, 0.1, 0.1, 0.1, 0.1));
        })
        .await;

    let detector = WatsonDetector::new(DetectorConfig {
        base_url: server.url(PREDICT_PATH),
        api_key: Some("secret".to_string()),
        ..Default::default()
    })
    .unwrap();

    let scores = detector.detect("I am furious").await.unwrap();
    mock.assert_async().await;
    assert_eq!(scores.dominant_emotion, Some(Emotion::Anger));
}

#[tokio::test]
async fn test_bad_request_means_rejected_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PREDICT_PATH)
                .json_body(json!({"raw_document": {"text": ""}}));
            then.status(400).json_body(json!({"code": 3, "message": "Invalid input"}));
        })
        .await;

    let scores = detector_for(&server).detect("").await.unwrap();
    assert!(!scores.is_accepted());
    assert_eq!(scores.anger, 0.0);
    assert_eq!(scores.joy, 0.0);
}

#[derive(Debug, Clone, Copy)]
enum ExpectedError {
    Request(u16),
    Response,
}

#[rstest]
#[case(500, r#"{"message": "internal"}"#, ExpectedError::Request(500))]
#[case(503, "", ExpectedError::Request(503))]
#[case(404, "not found", ExpectedError::Request(404))]
#[case(200, "not json", ExpectedError::Response)]
#[case(200, r#"{"emotionPredictions": []}"#, ExpectedError::Response)]
#[case(200, r#"{"emotionPredictions": [{"emotion": {"joy": 0.5}}]}"#, ExpectedError::Response)]
#[tokio::test]
async fn test_upstream_failures(
    #[case] status: u16,
    #[case] body: &'static str,
    #[case] expected: ExpectedError,
) {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PREDICT_PATH);
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;

    let err = detector_for(&server).detect("some text").await.unwrap_err();
    assert_eq!(err.detector(), "watson");
    match expected {
        ExpectedError::Request(code) => {
            assert!(matches!(err, DetectorError::Request { .. }), "got {err:?}");
            assert_eq!(err.status(), Some(code));
        }
        ExpectedError::Response => {
            assert!(matches!(err, DetectorError::Response { .. }), "got {err:?}");
        }
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PREDICT_PATH);
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(prediction(0.0, 0.0, 0.0, 1.0, 0.0));
        })
        .await;

    let detector = WatsonDetector::new(DetectorConfig {
        base_url: server.url(PREDICT_PATH),
        timeout: 1,
        ..Default::default()
    })
    .unwrap();

    let err = detector.detect("slow").await.unwrap_err();
    assert!(matches!(err, DetectorError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let detector = WatsonDetector::new(DetectorConfig {
        base_url: "http://127.0.0.1:9/predict".to_string(),
        timeout: 2,
        ..Default::default()
    })
    .unwrap();

    let err = detector.detect("hello").await.unwrap_err();
    assert!(matches!(err, DetectorError::Transport { .. }), "got {err:?}");
}
