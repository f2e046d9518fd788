use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer.
///
/// Every [`Debouncer::schedule`] cancels the pending invocation and starts a
/// new quiet window; the action runs once, with the last scheduled arguments,
/// after `wait` has elapsed without another call.
pub struct Debouncer<T> {
    wait: Duration,
    runtime: Handle,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, runtime: Handle, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            runtime,
            action: Arc::new(action),
            pending: None,
        }
    }

    pub fn schedule(&mut self, args: T) {
        self.cancel();
        let action = self.action.clone();
        let wait = self.wait;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            action(args);
        }));
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
