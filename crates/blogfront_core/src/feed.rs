//! Incremental post loading ("infinite scroll").
//!
//! `FeedState` owns the pagination cursor and the two guard flags. It is only
//! mutated from [`crate::update`], one message at a time, so the guard check in
//! [`FeedState::begin_load`] is enough to keep a single fetch in flight.

use crate::Effect;

/// Number of posts requested per fetch.
pub const PAGE_SIZE: usize = 5;
/// Distance from the document bottom, in pixels, that counts as "near bottom".
pub const NEAR_BOTTOM_THRESHOLD_PX: f64 = 500.0;
/// Extension stripped from a post's `file` to derive its slug.
pub const CONTENT_EXTENSION: &str = ".md";

/// Scroll geometry sampled from the page when a scroll event fires.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - threshold
    }
}

/// A post as returned by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub file: Option<String>,
    pub title: String,
    pub date: String,
}

impl PostSummary {
    /// `file` without its content extension; empty when `file` is absent.
    pub fn slug(&self) -> String {
        match self.file.as_deref() {
            Some(file) => file
                .strip_suffix(CONTENT_EXTENSION)
                .unwrap_or(file)
                .to_string(),
            None => String::new(),
        }
    }

    pub fn href(&self) -> String {
        format!("/post/{}", self.slug())
    }
}

/// Transport or decoding failure; the details are logged by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFailed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    offset: usize,
    page_size: usize,
}

impl PaginationCursor {
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            page_size: PAGE_SIZE,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn advance(&mut self, received: usize) {
        self.offset += received;
    }
}

/// Rendered form of an appended post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostItemView {
    pub href: String,
    pub title: String,
    pub date: String,
}

impl From<PostSummary> for PostItemView {
    fn from(post: PostSummary) -> Self {
        Self {
            href: post.href(),
            title: post.title,
            date: post.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    cursor: PaginationCursor,
    is_loading: bool,
    has_more_posts: bool,
    near_bottom_threshold: f64,
    appended: Vec<PostItemView>,
}

impl FeedState {
    /// `initial_offset` is the number of `.post-item` elements already on the page.
    pub fn new(initial_offset: usize) -> Self {
        Self {
            cursor: PaginationCursor::new(initial_offset),
            is_loading: false,
            has_more_posts: true,
            near_bottom_threshold: NEAR_BOTTOM_THRESHOLD_PX,
            appended: Vec::new(),
        }
    }

    pub fn with_near_bottom_threshold(mut self, threshold: f64) -> Self {
        self.near_bottom_threshold = threshold;
        self
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_more_posts(&self) -> bool {
        self.has_more_posts
    }

    pub fn appended(&self) -> &[PostItemView] {
        &self.appended
    }

    pub(crate) fn near_bottom(&self, metrics: &ScrollMetrics) -> bool {
        metrics.is_near_bottom(self.near_bottom_threshold)
    }

    /// Starts a fetch unless one is in flight or the feed is exhausted.
    pub(crate) fn begin_load(&mut self) -> Option<Effect> {
        if self.is_loading || !self.has_more_posts {
            return None;
        }
        self.is_loading = true;
        Some(Effect::FetchPosts {
            offset: self.cursor.offset(),
            limit: self.cursor.page_size(),
        })
    }

    /// Applies a fetch completion. Returns `false` when no fetch was in flight.
    pub(crate) fn finish_load(&mut self, result: Result<Vec<PostSummary>, RequestFailed>) -> bool {
        if !self.is_loading {
            return false;
        }
        if let Ok(posts) = result {
            let received = posts.len();
            self.appended.extend(posts.into_iter().map(PostItemView::from));
            self.cursor.advance(received);
            if received < self.cursor.page_size() {
                self.has_more_posts = false;
            }
        }
        // Cleanup runs for success and failure alike.
        self.is_loading = false;
        true
    }
}
