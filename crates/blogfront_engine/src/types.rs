use std::fmt;

use serde::Deserialize;
use url::Url;

/// One entry of the `/load_posts` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub file: Option<String>,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<PostRecord>,
}

/// Body of the `/subscribe` response, for both accepted and rejected addresses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscribeReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A server-rendered page and the URL it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: Url,
    pub html: String,
}

impl FetchedPage {
    /// Path component of the final URL, without query or fragment.
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PostsLoaded {
        offset: usize,
        result: Result<Vec<PostRecord>, FetchError>,
    },
    SubscriptionCompleted {
        result: Result<SubscribeReply, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}
