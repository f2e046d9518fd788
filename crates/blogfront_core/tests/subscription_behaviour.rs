use std::sync::Once;

use blogfront_core::{
    update, AppState, Effect, Msg, RequestFailed, StatusTone, SubscriptionReply,
    SubscriptionState, DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE, SUBMITTING_LABEL,
    TRANSPORT_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(front_logging::initialize_for_tests);
}

fn submitted(email: &str) -> (AppState, Vec<Effect>) {
    let state = AppState::new().with_subscription(SubscriptionState::new("Subscribe"));
    let (state, _) = update(state, Msg::EmailChanged(email.to_string()));
    update(state, Msg::SubscribeSubmitted)
}

#[test]
fn submit_disables_button_and_posts_email() {
    init_logging();
    let (state, effects) = submitted("reader@example.com");
    let view = state.view().subscription.unwrap();

    assert_eq!(
        effects,
        vec![Effect::SubmitSubscription {
            email: "reader@example.com".to_string(),
        }]
    );
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SUBMITTING_LABEL);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    init_logging();
    let (state, _) = submitted("reader@example.com");
    let (_, effects) = update(state, Msg::SubscribeSubmitted);
    assert!(effects.is_empty());
}

#[test]
fn success_without_message_uses_default_and_clears_form() {
    init_logging();
    let (state, _) = submitted("reader@example.com");
    let (state, _) = update(
        state,
        Msg::SubscriptionCompleted(Ok(SubscriptionReply {
            success: true,
            message: None,
        })),
    );
    let view = state.view().subscription.unwrap();
    let status = view.status.unwrap();

    assert_eq!(status.text, DEFAULT_SUCCESS_MESSAGE);
    assert_eq!(status.tone, StatusTone::Success);
    assert_eq!(view.email_value, "");
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, "Subscribe");
}

#[test]
fn rejection_shows_server_message_and_keeps_email() {
    init_logging();
    let (state, _) = submitted("reader@example.com");
    let (state, _) = update(
        state,
        Msg::SubscriptionCompleted(Ok(SubscriptionReply {
            success: false,
            message: Some("Already subscribed".to_string()),
        })),
    );
    let view = state.view().subscription.unwrap();
    let status = view.status.unwrap();

    assert_eq!(status.text, "Already subscribed");
    assert_eq!(status.tone, StatusTone::Error);
    assert_eq!(view.email_value, "reader@example.com");
    assert!(view.submit_enabled);
}

#[test]
fn rejection_without_message_uses_default_failure_text() {
    init_logging();
    let (state, _) = submitted("reader@example.com");
    let (state, _) = update(
        state,
        Msg::SubscriptionCompleted(Ok(SubscriptionReply {
            success: false,
            message: Some(String::new()),
        })),
    );
    let status = state.view().subscription.unwrap().status.unwrap();
    assert_eq!(status.text, DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn transport_failure_shows_generic_error_and_restores_button() {
    init_logging();
    let (state, _) = submitted("reader@example.com");
    let (mut state, _) = update(state, Msg::SubscriptionCompleted(Err(RequestFailed)));
    let view = state.view().subscription.unwrap();

    assert_eq!(view.status.unwrap().text, TRANSPORT_ERROR_MESSAGE);
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, "Subscribe");
    assert_eq!(view.email_value, "reader@example.com");
    assert!(state.consume_dirty());
}

#[test]
fn original_label_is_restored() {
    init_logging();
    let state = AppState::new().with_subscription(SubscriptionState::new("Join the list"));
    let (state, _) = update(state, Msg::SubscribeSubmitted);
    let (state, _) = update(state, Msg::SubscriptionCompleted(Err(RequestFailed)));
    assert_eq!(
        state.view().subscription.unwrap().submit_label,
        "Join the list"
    );
}

#[test]
fn completion_without_submission_is_ignored() {
    init_logging();
    let state = AppState::new().with_subscription(SubscriptionState::new("Subscribe"));
    let (next, _) = update(
        state.clone(),
        Msg::SubscriptionCompleted(Ok(SubscriptionReply {
            success: true,
            message: None,
        })),
    );
    assert_eq!(next.view().subscription, state.view().subscription);
}
