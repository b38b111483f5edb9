//! Debounced background actions.
//!
//! A [`Debouncer`] owns a tokio task fed by a channel. Bursts of
//! [`schedule`](Debouncer::schedule) calls collapse into one run of the
//! action once the window passes without another request.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

const REQUEST_BUFFER: usize = 32;

#[derive(Debug)]
enum Request {
    /// Restart the window.
    Schedule,
    /// Run now and acknowledge once done.
    Flush(oneshot::Sender<()>),
}

/// Runs an async action after a quiet period.
///
/// Dropping the debouncer closes its channel; an action still pending at
/// that point runs once on the background task.
#[derive(Debug)]
pub struct Debouncer {
    tx: mpsc::Sender<Request>,
    task: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn the background task. Must be called inside a tokio runtime.
    pub fn spawn<F, Fut>(window: Duration, action: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(REQUEST_BUFFER);
        let task = tokio::spawn(run(rx, window, action));
        Self { tx, task }
    }

    /// Request a run once the window elapses, restarting it if already pending.
    pub async fn schedule(&self) {
        if self.tx.send(Request::Schedule).await.is_err() {
            warn!("Debounce task is gone, dropping request");
        }
    }

    /// Run the action now and wait for it to finish.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Request::Flush(ack)).await.is_err() {
            warn!("Debounce task is gone, cannot flush");
            return;
        }
        let _ = done.await;
    }

    /// Stop the task, running a pending action first.
    pub async fn shutdown(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            warn!("Debounce task ended abnormally: {}", e);
        }
    }
}

async fn run<F, Fut>(mut rx: mpsc::Receiver<Request>, window: Duration, action: F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut deadline: Option<Instant> = None;

    loop {
        let request = match deadline {
            Some(at) => {
                tokio::select! {
                    () = tokio::time::sleep_until(at) => {
                        deadline = None;
                        trace!("Debounce window elapsed");
                        action().await;
                        continue;
                    }
                    request = rx.recv() => request,
                }
            }
            None => rx.recv().await,
        };

        match request {
            Some(Request::Schedule) => deadline = Some(Instant::now() + window),
            Some(Request::Flush(ack)) => {
                deadline = None;
                action().await;
                let _ = ack.send(());
            }
            None => {
                if deadline.is_some() {
                    debug!("Running pending action before shutdown");
                    action().await;
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    const WINDOW: Duration = Duration::from_millis(250);

    fn counting_debouncer() -> (Arc<AtomicUsize>, Debouncer) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::spawn(WINDOW, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        (runs, debouncer)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once() {
        let (runs, debouncer) = counting_debouncer();

        for _ in 0..10 {
            debouncer.schedule().await;
        }
        tokio::time::sleep(WINDOW * 2).await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_restarts_window() {
        let (runs, debouncer) = counting_debouncer();

        debouncer.schedule().await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule().await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_run_separately() {
        let (runs, debouncer) = counting_debouncer();

        debouncer.schedule().await;
        tokio::time::sleep(WINDOW * 2).await;
        debouncer.schedule().await;
        tokio::time::sleep(WINDOW * 2).await;

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_runs_immediately() {
        let (runs, debouncer) = counting_debouncer();

        debouncer.schedule().await;
        debouncer.flush().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // the flushed request does not fire again
        tokio::time::sleep(WINDOW * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_runs_pending_action() {
        let (runs, debouncer) = counting_debouncer();

        debouncer.schedule().await;
        debouncer.shutdown().await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_without_pending_is_quiet() {
        let (runs, debouncer) = counting_debouncer();
        debouncer.shutdown().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_still_runs_pending_action() {
        let (runs, debouncer) = counting_debouncer();

        debouncer.schedule().await;
        drop(debouncer);
        tokio::time::sleep(WINDOW).await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
