//! Blogfront core: pure controller state machines and view-model helpers.
mod effect;
mod feed;
mod msg;
pub mod nav;
mod state;
mod subscription;
mod update;
mod view_model;

pub use effect::Effect;
pub use feed::{
    FeedState, PaginationCursor, PostItemView, PostSummary, RequestFailed, ScrollMetrics,
    CONTENT_EXTENSION, NEAR_BOTTOM_THRESHOLD_PX, PAGE_SIZE,
};
pub use msg::Msg;
pub use state::AppState;
pub use subscription::{
    StatusMessage, StatusTone, SubscriptionReply, SubscriptionState, DEFAULT_FAILURE_MESSAGE,
    DEFAULT_SUBMIT_LABEL, DEFAULT_SUCCESS_MESSAGE, SUBMITTING_LABEL, TRANSPORT_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, FeedView, StatusView, SubscriptionView};
