use std::sync::Once;

use blogfront_core::{
    update, AppState, Effect, FeedState, Msg, PostSummary, RequestFailed, ScrollMetrics, PAGE_SIZE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(front_logging::initialize_for_tests);
}

fn posts(count: usize, start: usize) -> Vec<PostSummary> {
    (start..start + count)
        .map(|n| PostSummary {
            file: Some(format!("post-{n}.md")),
            title: format!("Post {n}"),
            date: format!("January {n}, 2024"),
        })
        .collect()
}

fn feed_state(initial: usize) -> AppState {
    AppState::new().with_feed(FeedState::new(initial))
}

fn feed(state: &AppState) -> &FeedState {
    state.feed().expect("feed present")
}

/// Issues a load and answers it with `count` posts.
fn load(state: AppState, count: usize) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let offset = feed(&state).offset();
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            offset,
            result: Ok(posts(count, offset)),
        },
    );
    (state, effects)
}

fn at_bottom() -> ScrollMetrics {
    ScrollMetrics {
        viewport_height: 900.0,
        scroll_y: 4100.0,
        document_height: 5000.0,
    }
}

#[test]
fn load_requests_current_offset_and_fixed_page_size() {
    init_logging();
    let (mut state, effects) = update(feed_state(5), Msg::LoadMoreRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchPosts {
            offset: 5,
            limit: PAGE_SIZE,
        }]
    );
    assert!(feed(&state).is_loading());
    assert!(state.view().feed.unwrap().loading_indicator_visible);
    assert!(state.consume_dirty());
}

#[test]
fn full_pages_advance_offset_and_keep_feed_open() {
    init_logging();
    let mut state = feed_state(7);
    for round in 1..=4 {
        let (next, effects) = load(state, PAGE_SIZE);
        assert_eq!(effects.len(), 1);
        assert_eq!(feed(&next).offset(), 7 + PAGE_SIZE * round);
        assert!(feed(&next).has_more_posts());
        assert!(!feed(&next).is_loading());
        state = next;
    }
    assert_eq!(feed(&state).appended().len(), 20);
}

#[test]
fn five_initial_items_plus_full_page_gives_ten() {
    init_logging();
    let (state, _) = load(feed_state(5), 5);
    let view = state.view().feed.unwrap();

    assert_eq!(view.offset, 10);
    assert_eq!(view.appended.len(), 5);
    assert!(!view.end_of_posts_visible);
    assert!(!view.loading_indicator_visible);
    assert_eq!(view.appended[0].href, "/post/post-5");
    assert_eq!(view.appended[0].title, "Post 5");
    assert_eq!(view.appended[0].date, "January 5, 2024");
}

#[test]
fn short_page_exhausts_feed_permanently() {
    init_logging();
    let (state, _) = load(feed_state(5), 3);
    assert_eq!(feed(&state).offset(), 8);
    assert!(!feed(&state).has_more_posts());
    assert!(state.view().feed.unwrap().end_of_posts_visible);

    let before = state.clone();
    let (state, effects) = update(state, Msg::ScrollSettled(at_bottom()));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert_eq!(state.view().feed, before.view().feed);
}

#[test]
fn empty_page_exhausts_feed() {
    init_logging();
    let (state, _) = load(feed_state(10), 0);
    assert_eq!(feed(&state).offset(), 10);
    assert!(!feed(&state).has_more_posts());
    assert!(feed(&state).appended().is_empty());
}

#[test]
fn triggers_while_loading_issue_no_second_fetch() {
    init_logging();
    let (state, first) = update(feed_state(0), Msg::LoadMoreRequested);
    assert_eq!(first.len(), 1);

    let (state, second) = update(state, Msg::ScrollSettled(at_bottom()));
    let (state, third) = update(state, Msg::LoadMoreRequested);
    assert!(second.is_empty());
    assert!(third.is_empty());
    assert!(feed(&state).is_loading());
}

#[test]
fn failure_resets_loading_without_touching_cursor() {
    init_logging();
    let (state, _) = update(feed_state(5), Msg::LoadMoreRequested);
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            offset: 5,
            result: Err(RequestFailed),
        },
    );

    assert!(!feed(&state).is_loading());
    assert!(feed(&state).has_more_posts());
    assert_eq!(feed(&state).offset(), 5);
    assert!(!state.view().feed.unwrap().loading_indicator_visible);

    // A later scroll retries from the same offset.
    let (_, effects) = update(state, Msg::ScrollSettled(at_bottom()));
    assert_eq!(effects, vec![Effect::FetchPosts { offset: 5, limit: 5 }]);
}

#[test]
fn scroll_away_from_bottom_does_not_load() {
    init_logging();
    let metrics = ScrollMetrics {
        viewport_height: 900.0,
        scroll_y: 0.0,
        document_height: 5000.0,
    };
    let (state, effects) = update(feed_state(5), Msg::ScrollSettled(metrics));
    assert!(effects.is_empty());
    assert!(!feed(&state).is_loading());
}

#[test]
fn custom_threshold_widens_trigger_zone() {
    init_logging();
    let metrics = ScrollMetrics {
        viewport_height: 900.0,
        scroll_y: 0.0,
        document_height: 2000.0,
    };
    let state = AppState::new().with_feed(FeedState::new(0).with_near_bottom_threshold(1200.0));
    let (_, effects) = update(state, Msg::ScrollSettled(metrics));
    assert_eq!(effects.len(), 1);
}

#[test]
fn stray_completion_is_ignored() {
    init_logging();
    let state = feed_state(5);
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            offset: 5,
            result: Ok(posts(2, 5)),
        },
    );
    assert_eq!(feed(&state).offset(), 5);
    assert!(feed(&state).has_more_posts());

    let (state, _) = update(state, Msg::LoadMoreRequested);
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            offset: 99,
            result: Ok(posts(5, 99)),
        },
    );
    assert!(feed(&state).is_loading());
    assert_eq!(feed(&state).offset(), 5);
}

#[test]
fn appended_items_keep_response_order() {
    init_logging();
    let (state, _) = update(feed_state(0), Msg::LoadMoreRequested);
    let batch = vec![
        PostSummary {
            file: Some("zeta.md".into()),
            title: "Zeta".into(),
            date: "d1".into(),
        },
        PostSummary {
            file: None,
            title: "<b>Alpha</b>".into(),
            date: "d2".into(),
        },
    ];
    let (state, _) = update(
        state,
        Msg::PostsLoaded {
            offset: 0,
            result: Ok(batch),
        },
    );
    let hrefs: Vec<_> = feed(&state)
        .appended()
        .iter()
        .map(|item| item.href.as_str())
        .collect();
    assert_eq!(hrefs, vec!["/post/zeta", "/post/"]);
    assert_eq!(feed(&state).appended()[1].title, "<b>Alpha</b>");
}
