//! Cancellable timers.
//!
//! A [`ScheduledTask`] owns the `JoinHandle` of a delayed job. Cancelling it, or simply
//! dropping it, aborts the job, so replacing a stored task with a newer one guarantees
//! the older callback never fires. [`Debouncer`] builds on that to keep only the most
//! recent call within a quiet period.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A job scheduled to run after a delay. Aborted on `cancel()` or drop.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `job` to run once `delay` has elapsed.
    pub fn after<F>(delay: Duration, job: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        });
        Self { handle }
    }

    /// Abort the job if it has not run yet. Idempotent.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs only the last of a burst of calls, `wait` after the burst goes quiet.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `job`, superseding (and aborting) any job still waiting.
    pub fn call<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.pending = Some(ScheduledTask::after(self.wait, job));
    }

    /// Drop the waiting job, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_task_fires_after_delay() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let _task = ScheduledTask::after(Duration::from_millis(500), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_task_cancels_it() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let task = ScheduledTask::after(Duration::from_millis(100), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_keeps_last_call() {
        let seen = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for value in 1..=3 {
            let seen = seen.clone();
            debouncer.call(async move {
                seen.store(value, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(debouncer.is_pending());
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert!(!debouncer.is_pending());
    }
}
