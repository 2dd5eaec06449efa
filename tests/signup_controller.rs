//! Integration tests for the signup flow controller.

use serde_json::json;
use std::sync::Arc;
use tokio::sync::Notify;

use askboard::adapters::mock::{MockAuthApi, RecordingNavigator};
use askboard::application::{
    SignupController, SignupControllerConfig, SubmitOutcome, SIGNUP_FALLBACK_MESSAGE,
};
use askboard::domain::foundation::{ErrorCode, StatusKind};
use askboard::domain::signup::{
    INVALID_EMAIL_MESSAGE, NAME_TOO_SHORT_MESSAGE, PASSWORD_TOO_SHORT_MESSAGE,
};
use askboard::ports::TransportError;
use secrecy::ExposeSecret;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn controller(api: &MockAuthApi, navigator: &RecordingNavigator) -> SignupController {
    SignupController::new(
        Arc::new(api.clone()),
        Arc::new(navigator.clone()),
        SignupControllerConfig::default(),
    )
}

fn fill(controller: &SignupController, name: &str, email: &str, password: &str) {
    controller.set_name(name);
    controller.set_email(email);
    controller.set_password(password);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn each_rule_blocks_submission_in_priority_order() {
    let cases = [
        ("A", "not-an-email", "123", NAME_TOO_SHORT_MESSAGE),
        ("Ada", "not-an-email", "123", INVALID_EMAIL_MESSAGE),
        ("Ada", "ada@example.com", "123", PASSWORD_TOO_SHORT_MESSAGE),
    ];

    for (name, email, password, expected) in cases {
        let api = MockAuthApi::new();
        let navigator = RecordingNavigator::new();
        let signup = controller(&api, &navigator);
        fill(&signup, name, email, password);

        let outcome = signup.submit().await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)), "{}", expected);
        assert_eq!(outcome.error_code(), Some(ErrorCode::ValidationFailed));
        assert_eq!(signup.error().as_deref(), Some(expected));
        assert_eq!(api.call_count(), 0);
        assert!(navigator.routes().is_empty());
    }
}

#[tokio::test]
async fn whitespace_padded_name_counts_trimmed_length() {
    let api = MockAuthApi::new();
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, "   J   ", "j@example.com", "secret1");

    signup.submit().await.unwrap();

    assert_eq!(signup.error().as_deref(), Some(NAME_TOO_SHORT_MESSAGE));
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn success_navigates_to_login_exactly_once() {
    let api = MockAuthApi::new().with_success();
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, " Ada Lovelace ", " ada@example.com ", "analytical");

    let outcome = signup.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    assert_eq!(navigator.routes(), vec!["/login".to_string()]);
    assert_eq!(signup.kind(), StatusKind::Succeeded);
    assert!(!signup.is_loading());
    assert!(signup.form().is_blank());

    let calls = api.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "Ada Lovelace");
    assert_eq!(calls[0].email, "ada@example.com");
    assert_eq!(calls[0].password.expose_secret(), "analytical");
}

#[tokio::test]
async fn custom_login_route_is_used() {
    let api = MockAuthApi::new();
    let navigator = RecordingNavigator::new();
    let signup = SignupController::new(
        Arc::new(api.clone()),
        Arc::new(navigator.clone()),
        SignupControllerConfig {
            login_route: "/signin".to_string(),
        },
    );
    fill(&signup, "Ada", "ada@example.com", "secret1");

    signup.submit().await.unwrap();

    assert_eq!(navigator.routes(), vec!["/signin".to_string()]);
}

#[tokio::test]
async fn server_msg_field_is_surfaced() {
    let api = MockAuthApi::new().with_error(TransportError::rejected(
        400,
        Some(json!({"msg": "User already exists"})),
    ));
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, "Ada", "ada@example.com", "secret1");

    let outcome = signup.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed("User already exists".to_string()));
    assert_eq!(outcome.error_code(), Some(ErrorCode::TransportFailed));
    assert!(navigator.routes().is_empty());
    assert_eq!(signup.form().get("email"), "ada@example.com");
}

#[tokio::test]
async fn failure_without_msg_uses_generic_message() {
    let api = MockAuthApi::new().with_error(TransportError::rejected(500, Some(json!({"error": "x"}))));
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, "Ada", "ada@example.com", "secret1");

    signup.submit().await.unwrap();

    assert_eq!(signup.error().as_deref(), Some(SIGNUP_FALLBACK_MESSAGE));
}

#[tokio::test]
async fn retry_sends_edited_fields() {
    let api = MockAuthApi::new()
        .with_error(TransportError::rejected(400, Some(json!({"msg": "Email taken"}))))
        .with_success();
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, "Ada", "ada@example.com", "secret1");
    signup.submit().await.unwrap();

    signup.set_email("ada.l@example.com");
    let outcome = signup.retry().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Succeeded);
    assert_eq!(api.get_calls()[1].email, "ada.l@example.com");
    assert_eq!(navigator.routes().len(), 1);
}

#[tokio::test]
async fn clear_while_pending_prevents_navigation() {
    let gate = Arc::new(Notify::new());
    let api = MockAuthApi::new().with_gate(Arc::clone(&gate));
    let navigator = RecordingNavigator::new();
    let signup = controller(&api, &navigator);
    fill(&signup, "Ada", "ada@example.com", "secret1");

    let task = tokio::spawn({
        let signup = signup.clone();
        async move { signup.submit().await }
    });
    while !signup.is_loading() {
        tokio::task::yield_now().await;
    }

    signup.clear();
    gate.notify_one();

    assert_eq!(task.await.unwrap().unwrap(), SubmitOutcome::Superseded);
    assert_eq!(signup.kind(), StatusKind::Idle);
    assert!(signup.form().is_blank());
    assert!(navigator.routes().is_empty());
}
