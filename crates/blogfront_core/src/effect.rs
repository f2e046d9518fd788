/// Side effects requested by [`crate::update`]; executed by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /load_posts?offset=..&limit=..`
    FetchPosts { offset: usize, limit: usize },
    /// `POST /subscribe` with a form-encoded `email`.
    SubmitSubscription { email: String },
}
