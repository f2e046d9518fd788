use std::sync::{mpsc, Arc};

use anyhow::{anyhow, bail, Context};
use blogfront_core::{
    nav, update, AppState, FeedState, Msg, ScrollMetrics, SubscriptionState,
};
use blogfront_engine::{BlogApi, Debouncer, EngineHandle, PageSnapshot};
use front_logging::{front_debug, front_info};

use super::config::ClientConfig;
use super::effects::{EffectRunner, MsgSink};
use super::page::HeadlessPage;
use super::ui;

/// Drives the controllers against a headless page.
///
/// All state changes happen on the caller's thread via [`App::dispatch`];
/// the engine and the scroll debouncer only post messages back.
pub struct App {
    config: ClientConfig,
    state: AppState,
    page: HeadlessPage,
    engine: EngineHandle,
    msg_rx: mpsc::Receiver<Msg>,
    scroll: Debouncer<ScrollMetrics>,
}

impl App {
    /// Fetches `path` from the server and wires the controllers it supports.
    ///
    /// The current path is taken from the URL the page was served from, so a
    /// query string or a redirect does not affect nav highlighting.
    pub fn open(config: ClientConfig, api: Arc<dyn BlogApi>, path: &str) -> anyhow::Result<Self> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let engine = EngineHandle::new(api, Arc::new(MsgSink::new(msg_tx.clone())))?;
        let fetched = engine
            .fetch_page_blocking(path)
            .with_context(|| format!("failed to load page {path}"))?;
        front_debug!("{} served from {}", path, fetched.url);
        let snapshot = PageSnapshot::parse(&fetched.html, fetched.path());
        Ok(Self::assemble(config, engine, msg_tx, msg_rx, &snapshot))
    }

    /// Wires the controllers for an already parsed page.
    #[cfg(test)]
    pub fn from_snapshot(
        config: ClientConfig,
        api: Arc<dyn BlogApi>,
        snapshot: &PageSnapshot,
    ) -> anyhow::Result<Self> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let engine = EngineHandle::new(api, Arc::new(MsgSink::new(msg_tx.clone())))?;
        Ok(Self::assemble(config, engine, msg_tx, msg_rx, snapshot))
    }

    fn assemble(
        config: ClientConfig,
        engine: EngineHandle,
        msg_tx: mpsc::Sender<Msg>,
        msg_rx: mpsc::Receiver<Msg>,
        snapshot: &PageSnapshot,
    ) -> Self {
        let mut page = HeadlessPage::from_snapshot(snapshot);

        let active = nav::active_links(&snapshot.current_path, &snapshot.nav_hrefs);
        front_debug!("active nav links for {}: {:?}", snapshot.current_path, active);
        for cmd in ui::render::highlight_nav(&active) {
            page.apply(cmd);
        }

        let mut state = AppState::new();
        if snapshot.has_posts_container {
            front_info!(
                "infinite scroll enabled, initial offset {}",
                snapshot.post_item_count
            );
            state = state.with_feed(
                FeedState::new(snapshot.post_item_count)
                    .with_near_bottom_threshold(config.near_bottom_px),
            );
        }
        if let Some(form) = &snapshot.newsletter_form {
            state = state.with_subscription(SubscriptionState::new(form.submit_label.clone()));
        }

        let scroll = engine.debouncer(config.debounce(), move |metrics| {
            let _ = msg_tx.send(Msg::ScrollSettled(metrics));
        });

        let mut app = Self {
            config,
            state,
            page,
            engine,
            msg_rx,
            scroll,
        };
        if let Some(form) = &snapshot.newsletter_form {
            app.dispatch(Msg::EmailChanged(form.email_value.clone()));
        }
        app.render_if_dirty();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn page(&self) -> &HeadlessPage {
        &self.page
    }

    /// Applies one message, runs its effects and re-renders when needed.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        EffectRunner::new(&self.engine).run(effects);
        self.render_if_dirty();
    }

    fn render_if_dirty(&mut self) {
        if !self.state.consume_dirty() {
            return;
        }
        let view = self.state.view();
        for cmd in ui::render::render(&view, self.page.appended_count()) {
            self.page.apply(cmd);
        }
    }

    /// A raw scroll event; evaluation is debounced.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.schedule(metrics);
    }

    pub fn has_more_posts(&self) -> bool {
        self.state.feed().is_some_and(FeedState::has_more_posts)
    }

    /// Scrolls to the bottom once and waits for the resulting load, if any.
    pub fn scroll_to_bottom(&mut self) -> anyhow::Result<()> {
        if self.state.feed().is_none() {
            bail!("page {} has no posts container", self.page.current_path());
        }
        let metrics = self.page.scroll_to_bottom(self.config.viewport_height);
        self.on_scroll(metrics);

        let mut settled = false;
        self.pump_until(|state, msg| {
            settled |= matches!(msg, Msg::ScrollSettled(_));
            settled && !state.feed().is_some_and(FeedState::is_loading)
        })
    }

    /// Keeps scrolling until the feed is exhausted or `max_rounds` is reached.
    /// Returns the number of rounds performed.
    pub fn scroll_until_exhausted(&mut self, max_rounds: usize) -> anyhow::Result<usize> {
        let mut rounds = 0;
        while rounds < max_rounds && self.has_more_posts() {
            self.scroll_to_bottom()?;
            rounds += 1;
        }
        front_info!(
            "scrolled {} rounds, {} posts on page, exhausted={}",
            rounds,
            self.page.post_count(),
            !self.has_more_posts()
        );
        Ok(rounds)
    }

    /// Types `email` into the form, submits it and waits for the reply.
    pub fn subscribe(&mut self, email: &str) -> anyhow::Result<()> {
        if self.state.subscription().is_none() {
            bail!("page {} has no newsletter form", self.page.current_path());
        }
        self.dispatch(Msg::EmailChanged(email.to_string()));
        self.dispatch(Msg::SubscribeSubmitted);
        self.pump_until(|state, _| {
            !state
                .subscription()
                .is_some_and(SubscriptionState::is_submitting)
        })
    }

    /// Dispatches queued messages until `done` holds after one of them.
    fn pump_until(&mut self, mut done: impl FnMut(&AppState, &Msg) -> bool) -> anyhow::Result<()> {
        let wait = self.config.response_wait();
        loop {
            let msg = self
                .msg_rx
                .recv_timeout(wait)
                .map_err(|_| anyhow!("no response within {:?}", wait))?;
            let observed = msg.clone();
            self.dispatch(msg);
            if done(&self.state, &observed) {
                return Ok(());
            }
        }
    }
}
