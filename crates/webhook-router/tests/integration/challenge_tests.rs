//! Endpoint validation challenge tests

use webhook_router::{validation_response, RouterError, URL_VALIDATION_EVENT};
use webhook_test_utils::*;

#[test]
fn test_challenge_response_fixture() {
    let body = EnvelopeBuilder::new(URL_VALIDATION_EVENT)
        .with_payload(fixtures::url_validation_payload(TEST_PLAIN_TOKEN))
        .to_body();

    let response = test_router()
        .respond_to_challenge(&body, &test_secret())
        .unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({
            "plainToken": TEST_PLAIN_TOKEN,
            "encryptedToken": TEST_ENCRYPTED_TOKEN
        })
    );
}

#[test]
fn test_challenge_matches_direct_response() {
    let body = EnvelopeBuilder::new(URL_VALIDATION_EVENT)
        .with_payload(fixtures::url_validation_payload("another-token"))
        .to_body();

    let response = test_router()
        .respond_to_challenge(&body, &test_secret())
        .unwrap();

    assert_eq!(response, validation_response("another-token", &test_secret()));
}

#[test]
fn test_challenge_rejects_other_events() {
    let body = EnvelopeBuilder::new("meeting.started").to_body();

    let err = test_router()
        .respond_to_challenge(&body, &test_secret())
        .unwrap_err();
    assert!(matches!(err, RouterError::NotAValidationEvent(_)));
}
