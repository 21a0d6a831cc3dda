//! Trailing-edge debounce primitive
//!
//! A restartable delayed task: each call supersedes (aborts) the previous
//! pending one, so only the task armed after the final call in a burst ever
//! runs. Decoupled from any UI lifecycle so it can be unit-tested directly.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Restartable delayed task with cancel-on-supersede semantics.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Mutex::new(None) }
    }

    /// Arm the debouncer: cancel any pending task and schedule `task` to run
    /// after the configured delay.
    pub fn call<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.replace(handle) {
                previous.abort();
            }
        }
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }

    /// Whether a task is currently scheduled and not yet finished.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.as_ref().is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn runs_once_after_the_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(2));

        let fired_clone = fired.clone();
        debouncer.call(async move {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn bursts_collapse_to_the_last_call() {
        let fired = Arc::new(AtomicUsize::new(0));
        let last_value = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(2));

        for value in 1..=5 {
            let fired = fired.clone();
            let last_value = last_value.clone();
            debouncer.call(async move {
                fired.fetch_add(1, Ordering::SeqCst);
                last_value.store(value, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(last_value.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_pending_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let debouncer = Debouncer::new(Duration::from_secs(2));

        let fired_clone = fired.clone();
        debouncer.call(async move {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
