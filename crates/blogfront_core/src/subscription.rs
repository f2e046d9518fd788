//! Newsletter form submission state.

use crate::{Effect, RequestFailed};

pub const DEFAULT_SUBMIT_LABEL: &str = "Subscribe";
pub const SUBMITTING_LABEL: &str = "Subscribing...";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for subscribing!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Subscription failed. Please try again.";
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Decoded body of the subscribe endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionReply {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    email: String,
    idle_label: String,
    submitting: bool,
    status: Option<StatusMessage>,
}

impl SubscriptionState {
    /// `idle_label` is the submit button's label as rendered by the server.
    pub fn new(idle_label: impl Into<String>) -> Self {
        let idle_label = idle_label.into();
        let idle_label = if idle_label.trim().is_empty() {
            DEFAULT_SUBMIT_LABEL.to_string()
        } else {
            idle_label
        };
        Self {
            email: String::new(),
            idle_label,
            submitting: false,
            status: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn submit_label(&self) -> &str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            &self.idle_label
        }
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// The submit control is disabled while a request is in flight.
    pub(crate) fn submit(&mut self) -> Option<Effect> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(Effect::SubmitSubscription {
            email: self.email.clone(),
        })
    }

    pub(crate) fn complete(&mut self, result: Result<SubscriptionReply, RequestFailed>) -> bool {
        if !self.submitting {
            return false;
        }
        self.status = Some(match result {
            Ok(SubscriptionReply {
                success: true,
                message,
            }) => {
                self.email.clear();
                StatusMessage::new(
                    non_empty(message).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                    StatusTone::Success,
                )
            }
            Ok(SubscriptionReply {
                success: false,
                message,
            }) => StatusMessage::new(
                non_empty(message).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
                StatusTone::Error,
            ),
            Err(RequestFailed) => StatusMessage::new(TRANSPORT_ERROR_MESSAGE, StatusTone::Error),
        });
        self.submitting = false;
        true
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|text| !text.is_empty())
}
