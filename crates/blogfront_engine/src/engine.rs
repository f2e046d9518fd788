use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use front_logging::{front_debug, front_info};
use tokio::runtime::Handle;

use crate::client::BlogApi;
use crate::{Debouncer, EngineError, EngineEvent, FetchError, FetchedPage};

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    LoadPosts { offset: usize, limit: usize },
    Subscribe { email: String },
}

/// Runs requests on a background tokio runtime.
///
/// Requests are never cancelled; each completion is delivered to the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    runtime: Handle,
    api: Arc<dyn BlogApi>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn BlogApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let worker_api = api.clone();
        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = worker_api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, sink.as_ref()).await;
                });
            }
            front_debug!("engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            runtime: handle,
            api,
        })
    }

    pub fn load_posts(&self, offset: usize, limit: usize) {
        let _ = self.cmd_tx.send(EngineCommand::LoadPosts { offset, limit });
    }

    pub fn subscribe(&self, email: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Subscribe {
            email: email.into(),
        });
    }

    /// Fetches a page synchronously. Must not be called from async code.
    pub fn fetch_page_blocking(&self, path: &str) -> Result<FetchedPage, FetchError> {
        self.runtime.block_on(self.api.fetch_page(path))
    }

    /// A debouncer whose timers run on the engine runtime.
    pub fn debouncer<T: Send + 'static>(
        &self,
        wait: Duration,
        action: impl Fn(T) + Send + Sync + 'static,
    ) -> Debouncer<T> {
        Debouncer::new(wait, self.runtime.clone(), action)
    }
}

async fn handle_command(api: &dyn BlogApi, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::LoadPosts { offset, limit } => {
            front_info!("loading posts offset={} limit={}", offset, limit);
            let result = api.load_posts(offset, limit).await;
            sink.emit(EngineEvent::PostsLoaded { offset, result });
        }
        EngineCommand::Subscribe { email } => {
            front_info!("submitting subscription email_len={}", email.len());
            let result = api.subscribe(&email).await;
            sink.emit(EngineEvent::SubscriptionCompleted { result });
        }
    }
}
