//! Blogfront engine: HTTP client, background requests and timers.
mod client;
mod debounce;
mod engine;
mod page;
mod types;

pub use client::{BlogApi, FetchSettings, ReqwestBlogApi};
pub use debounce::Debouncer;
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use page::{NewsletterForm, PageSnapshot};
pub use types::{
    EngineError, EngineEvent, FailureKind, FetchError, FetchedPage, PostRecord, PostsPage,
    SubscribeReply,
};
pub use url::Url;
