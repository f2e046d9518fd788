use crate::{PostItemView, StatusTone};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub feed: Option<FeedView>,
    pub subscription: Option<SubscriptionView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub offset: usize,
    pub loading_indicator_visible: bool,
    pub end_of_posts_visible: bool,
    /// Every item appended since page load, in append order.
    pub appended: Vec<PostItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionView {
    pub email_value: String,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub status: Option<StatusView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub tone: StatusTone,
}
