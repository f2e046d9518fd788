use crate::view_model::{AppViewModel, FeedView, StatusView, SubscriptionView};
use crate::{FeedState, SubscriptionState};

/// Controller state for one page lifetime.
///
/// The feed and the form are independent; either is absent when the page
/// lacks its markup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    feed: Option<FeedState>,
    subscription: Option<SubscriptionState>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed: FeedState) -> Self {
        self.feed = Some(feed);
        self.dirty = true;
        self
    }

    pub fn with_subscription(mut self, subscription: SubscriptionState) -> Self {
        self.subscription = Some(subscription);
        self.dirty = true;
        self
    }

    pub fn feed(&self) -> Option<&FeedState> {
        self.feed.as_ref()
    }

    pub fn subscription(&self) -> Option<&SubscriptionState> {
        self.subscription.as_ref()
    }

    pub(crate) fn feed_mut(&mut self) -> Option<&mut FeedState> {
        self.feed.as_mut()
    }

    pub(crate) fn subscription_mut(&mut self) -> Option<&mut SubscriptionState> {
        self.subscription.as_mut()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            feed: self.feed.as_ref().map(|feed| FeedView {
                offset: feed.offset(),
                loading_indicator_visible: feed.is_loading(),
                end_of_posts_visible: !feed.has_more_posts(),
                appended: feed.appended().to_vec(),
            }),
            subscription: self.subscription.as_ref().map(|form| SubscriptionView {
                email_value: form.email().to_string(),
                submit_enabled: !form.is_submitting(),
                submit_label: form.submit_label().to_string(),
                status: form.status().map(|status| StatusView {
                    text: status.text.clone(),
                    tone: status.tone,
                }),
            }),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
