use blogfront_core::nav::{active_links, is_active_link};

#[test]
fn exact_match_is_active() {
    assert!(is_active_link("/about", "/about"));
    assert!(is_active_link("/", "/"));
    assert!(is_active_link("/posts", "/posts"));
}

#[test]
fn prefix_match_is_active_for_section_links() {
    assert!(is_active_link("/newsletter/thanks", "/newsletter"));
    assert!(is_active_link("/post/hello-world", "/post"));
}

#[test]
fn root_and_posts_links_only_match_exactly() {
    assert!(!is_active_link("/about", "/"));
    assert!(!is_active_link("/posts/page/2", "/posts"));
}

#[test]
fn absolute_hrefs_are_compared_as_written() {
    assert!(!is_active_link("/about", "https://blog.example.com/about"));
    assert!(!is_active_link("/about", "https://blog.example.com/"));
    assert!(!is_active_link("/about", "mailto:me@example.com"));
}

#[test]
fn empty_href_prefix_matches_every_page() {
    assert!(is_active_link("/about", ""));
    assert!(is_active_link("/", ""));
    assert_eq!(active_links("/newsletter", &["", "/", "/about"]), vec![0]);
}

#[test]
fn active_links_reports_indices_in_order() {
    let hrefs = ["/", "/about", "/newsletter", "/posts"];
    assert_eq!(active_links("/about", &hrefs), vec![1]);
    assert_eq!(active_links("/", &hrefs), vec![0]);
    assert_eq!(active_links("/newsletter", &hrefs), vec![2]);
    assert!(active_links("/elsewhere", &hrefs).is_empty());
}
