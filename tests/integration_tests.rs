// Integration tests for the submission lifecycle against a mock advisory service

use mockito::{Matcher, Server};
use ride_fit_advisor::core::{FitField, FitRequestModel, SubmissionController, SubmissionState, SubmitRejected};
use ride_fit_advisor::models::PainPointKey;
use ride_fit_advisor::services::FitClient;
use serde_json::json;
use std::time::Duration;

const FIT_BODY: &str = r#"{"saddle_height_in":32.1,"saddle_height_cm":81.5,"saddle_height_range_in":[31.8,32.4],"saddle_height_range_cm":[80.8,82.3],"confidence":0.82,"reach_guidance":"fine","bar_drop_guidance":"fine","geometry_guidance":"fine","next_adjustment":"raise saddle 3mm","disclaimer":"general guidance only","notes":[],"pain_analysis":[]}"#;

fn client_for(server: &Server) -> FitClient {
    FitClient::new(server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_success_reaches_success_state() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/fit")
        .match_header("content-type", "application/json")
        .match_header("x-request-id", Matcher::Any)
        .match_body(Matcher::Json(json!({
            "height_in": 74.0,
            "inseam_in": 35.0,
            "riding_style": "endurance",
            "flexibility": "medium",
            "pain_points": []
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FIT_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();
    let model = FitRequestModel::new();

    controller.submit(&client, model.snapshot()).await.unwrap();

    mock.assert_async().await;
    assert!(matches!(controller.state(), SubmissionState::Success(_)));

    let projection = controller.projection().unwrap();
    assert_eq!(projection.confidence_percent, 82);
    assert!(!projection.has_pain_guidance);
    assert!(!projection.has_notes);
    assert_eq!(projection.range_in.to_string(), "31.8–32.4 in");
}

#[tokio::test]
async fn test_bad_request_surfaces_body_verbatim() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(400)
        .with_body("height_in must be positive")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    assert_eq!(
        controller.state(),
        &SubmissionState::Error("height_in must be positive".to_string())
    );
}

#[tokio::test]
async fn test_server_error_with_empty_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    assert_eq!(controller.state(), &SubmissionState::Error("Request failed".to_string()));
}

#[tokio::test]
async fn test_whitespace_error_body_is_shown_as_received() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(400)
        .with_body("  ")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    assert_eq!(controller.error(), Some("  "));
}

#[tokio::test]
async fn test_json_error_body_is_not_reparsed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"bad input"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    assert_eq!(controller.error(), Some(r#"{"detail":"bad input"}"#));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    let message = controller.error().expect("expected error state");
    assert!(message.starts_with("Invalid response from fit service"), "got {}", message);
    assert!(controller.projection().is_none());
}

#[tokio::test]
async fn test_out_of_bounds_confidence_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body(FIT_BODY.replace("0.82", "1.5"))
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    assert!(controller.error().unwrap().starts_with("Invalid response from fit service"));
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    // Nothing listens on port 1
    let client = FitClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();

    let message = controller.error().expect("expected error state");
    assert!(!message.is_empty());
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_submit_while_submitting_makes_one_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body(FIT_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();
    let model = FitRequestModel::new();

    let ticket = controller.begin(model.snapshot()).unwrap();
    assert!(controller.is_submitting());

    let second = controller.begin(model.snapshot());
    assert!(matches!(second, Err(SubmitRejected::AlreadySubmitting)));
    assert!(controller.is_submitting());

    let completion = ticket.send(&client).await;
    assert!(controller.is_submitting());
    assert!(controller.complete(completion));

    mock.assert_async().await;
    assert!(matches!(controller.state(), SubmissionState::Success(_)));
}

#[tokio::test]
async fn test_resubmit_after_error_makes_new_call() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("POST", "/fit")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();
    assert_eq!(controller.error(), Some("Request failed"));
    failing.assert_async().await;
    failing.remove_async().await;

    let ok = server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body(FIT_BODY)
        .expect(1)
        .create_async()
        .await;

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();
    ok.assert_async().await;
    assert!(controller.response().is_some());
}

#[tokio::test]
async fn test_snapshot_body_ignores_later_toggles() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/fit")
        .match_body(Matcher::PartialJson(json!({
            "height_in": 70.0,
            "pain_points": ["hand_numbness", "neck_pain"]
        })))
        .with_status(200)
        .with_body(FIT_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    let mut model = FitRequestModel::new();
    model.set_field(FitField::HeightIn, "70").unwrap();
    model.toggle_pain_point(PainPointKey::NeckPain);
    model.toggle_pain_point(PainPointKey::HandNumbness);

    let ticket = controller.begin(model.snapshot()).unwrap();
    model.toggle_pain_point(PainPointKey::NeckPain);
    model.toggle_pain_point(PainPointKey::HipPain);

    let completion = ticket.send(&client).await;
    controller.complete(completion);

    mock.assert_async().await;
    assert!(controller.response().is_some());
}

#[tokio::test]
async fn test_reset_while_in_flight_discards_late_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body(FIT_BODY)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut controller = SubmissionController::new();

    let ticket = controller.begin(FitRequestModel::new().snapshot()).unwrap();
    controller.reset();

    let completion = ticket.send(&client).await;
    assert!(!controller.complete(completion));
    assert_eq!(controller.state(), &SubmissionState::Idle);
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/fit")
        .with_status(200)
        .with_body(FIT_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = FitClient::new(format!("{}/", server.url()), Duration::from_secs(5)).unwrap();
    let mut controller = SubmissionController::new();

    controller.submit(&client, FitRequestModel::new().snapshot()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_status_endpoint() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"{"message":"AI Bike Fit Advisor is running"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.status().await.unwrap();

    assert_eq!(status.message, "AI Bike Fit Advisor is running");
}
