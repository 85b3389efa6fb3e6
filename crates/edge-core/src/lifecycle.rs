//! Response lifecycle tracking.

use tokio::sync::watch;

/// Lifecycle phases of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePhase {
    /// Nothing written yet; status and headers may change.
    Open,
    /// Body bytes have been written; headers are frozen.
    Streaming,
    /// The response has been ended.
    Ended,
}

impl ResponsePhase {
    /// Whether status and headers can still be changed.
    pub fn headers_writable(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Resolves once the response has been ended, by whichever path ended it.
///
/// Obtained from [`Response::completion`](crate::Response::completion) or
/// [`Event::completion`](crate::Event::completion). Cloning yields an
/// independent waiter on the same response.
#[derive(Debug, Clone)]
pub struct CompletionSignal {
    rx: watch::Receiver<bool>,
}

impl CompletionSignal {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    /// Whether the response has already been ended.
    pub fn is_complete(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the response to be ended.
    ///
    /// Returns immediately if it already was. If every handle to the
    /// response is dropped without ending it, this never resolves.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|done| *done).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_headers_writable() {
        assert!(ResponsePhase::Open.headers_writable());
        assert!(!ResponsePhase::Streaming.headers_writable());
        assert!(!ResponsePhase::Ended.headers_writable());
    }

    #[tokio::test]
    async fn test_signal_resolves_after_send() {
        let (tx, rx) = watch::channel(false);
        let mut signal = CompletionSignal::new(rx);
        assert!(!signal.is_complete());

        tx.send_replace(true);
        signal.wait().await;
        assert!(signal.is_complete());
    }
}
