use std::time::Duration;

use bytes::{Bytes, BytesMut};
use front_logging::{front_debug, front_trace};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::{form_urlencoded, Url};

use crate::{
    EngineError, FailureKind, FetchError, FetchedPage, PostRecord, PostsPage, SubscribeReply,
};

const POSTS_ENDPOINT: &str = "/load_posts";
const SUBSCRIBE_ENDPOINT: &str = "/subscribe";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub page_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
            page_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

/// The blog server endpoints the page controllers talk to.
#[async_trait::async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /load_posts?offset=..&limit=..`
    async fn load_posts(&self, offset: usize, limit: usize) -> Result<Vec<PostRecord>, FetchError>;

    /// `POST /subscribe` with a form-encoded `email`.
    async fn subscribe(&self, email: &str) -> Result<SubscribeReply, FetchError>;

    /// Server-rendered HTML for `path`, with the URL it was served from after redirects.
    async fn fetch_page(&self, path: &str) -> Result<FetchedPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBlogApi {
    settings: FetchSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestBlogApi {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let base_url = Url::parse(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(EngineError::Client)?;
        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn is_page_content_type(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .page_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    /// Reads the whole body, failing once it exceeds `max_bytes`.
    async fn read_body(&self, response: reqwest::Response) -> Result<Bytes, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }
}

#[async_trait::async_trait]
impl BlogApi for ReqwestBlogApi {
    async fn load_posts(&self, offset: usize, limit: usize) -> Result<Vec<PostRecord>, FetchError> {
        let mut url = self.endpoint(POSTS_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        front_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body = self.read_body(response).await?;
        let page: PostsPage = decode_json(&body)?;
        front_trace!("offset={} received {} posts", offset, page.posts.len());
        Ok(page.posts)
    }

    async fn subscribe(&self, email: &str) -> Result<SubscribeReply, FetchError> {
        let url = self.endpoint(SUBSCRIBE_ENDPOINT)?;
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("email", email)
            .finish();
        front_debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Rejections (400/409/500) still carry a JSON reply with a message.
        let status = response.status();
        let body = self.read_body(response).await?;
        match decode_json::<SubscribeReply>(&body) {
            Ok(reply) => Ok(reply),
            Err(_) if !status.is_success() => Err(status_error(status)),
            Err(err) => Err(err),
        }
    }

    async fn fetch_page(&self, path: &str) -> Result<FetchedPage, FetchError> {
        let url = self.endpoint(path)?;
        front_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_page_content_type(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let url = response.url().clone();
        let body = self.read_body(response).await?;
        Ok(FetchedPage {
            url,
            html: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))
}

fn status_error(status: StatusCode) -> FetchError {
    FetchError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
