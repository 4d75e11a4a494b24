//! Cooperative cancellation for the session loop and animator.

use tokio::sync::watch;

/// A clonable cancellation flag.
///
/// The Ctrl+C watcher holds one clone and the session loop borrows
/// another; the flag flips true at most once. Readers poll
/// [`CancelToken::is_cancelled`] at suspension points or race
/// [`CancelToken::cancelled`] against a sleep.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: watch::Sender<bool>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once [`CancelToken::cancel`] has been called. Returns
    /// immediately if it already was.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        rx.wait_for(|cancelled| *cancelled).await.ok();
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
