use crate::{PostSummary, RequestFailed, ScrollMetrics, SubscriptionReply};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Debounced scroll: the quiet window elapsed after the last scroll event.
    ScrollSettled(ScrollMetrics),
    /// Load the next batch without checking the scroll position.
    LoadMoreRequested,
    /// Engine completion for a posts fetch issued at `offset`.
    PostsLoaded {
        offset: usize,
        result: Result<Vec<PostSummary>, RequestFailed>,
    },
    /// User edited the email input.
    EmailChanged(String),
    /// User submitted the newsletter form.
    SubscribeSubmitted,
    /// Engine completion for a subscription request.
    SubscriptionCompleted(Result<SubscriptionReply, RequestFailed>),
    /// Fallback for placeholder wiring.
    NoOp,
}
