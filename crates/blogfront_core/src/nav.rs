//! Active navigation link detection.
//!
//! `href` attributes are compared as written; an absolute URL never matches
//! a bare path.

/// Link paths that would prefix-match nearly every page; they only match exactly.
const EXACT_ONLY_PATHS: &[&str] = &["/", "/posts"];

/// Whether a nav link with `href` is the active link for `current_path`.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    current_path == href || (!EXACT_ONLY_PATHS.contains(&href) && current_path.starts_with(href))
}

/// Indices of the links in `hrefs` to mark as active, in document order.
pub fn active_links<S: AsRef<str>>(current_path: &str, hrefs: &[S]) -> Vec<usize> {
    hrefs
        .iter()
        .enumerate()
        .filter(|(_, href)| is_active_link(current_path, href.as_ref()))
        .map(|(idx, _)| idx)
        .collect()
}
