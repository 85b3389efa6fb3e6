//! Render deadline.

use std::time::Duration;

use edge_core::Response;
use http::StatusCode;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// End `response` with `504 Gateway Timeout` if it is still open after
/// `after`.
///
/// Ending the response fires its completion signal, which makes an
/// in-flight render lose its race. Abort the handle once the response no
/// longer needs guarding.
pub fn arm_deadline(response: Response, after: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut completion = response.completion();
        tokio::select! {
            biased;
            _ = completion.wait() => {}
            _ = tokio::time::sleep(after) => expire(&response, after),
        }
    })
}

fn expire(response: &Response, after: Duration) {
    if response.is_finished() {
        return;
    }
    warn!(after_ms = after.as_millis() as u64, "render deadline exceeded");

    // A streaming response keeps its status; only an open one gets the 504 body.
    let ended = match response.set_status(StatusCode::GATEWAY_TIMEOUT) {
        Ok(()) => response.end_with("Gateway Timeout"),
        Err(_) => response.end(),
    };
    if let Err(err) = ended {
        debug!(error = %err, "response ended concurrently");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_ends_open_response() {
        let response = Response::new();
        let mut completion = response.completion();

        arm_deadline(response.clone(), Duration::from_millis(10));
        completion.wait().await;

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(response.body(), b"Gateway Timeout");
    }

    #[tokio::test]
    async fn test_deadline_keeps_streaming_status() {
        let response = Response::new();
        response.write("<html>").unwrap();
        let mut completion = response.completion();

        arm_deadline(response.clone(), Duration::from_millis(10));
        completion.wait().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"<html>");
        assert!(response.is_finished());
    }

    #[tokio::test]
    async fn test_deadline_noop_after_completion() {
        let response = Response::new();
        let handle = arm_deadline(response.clone(), Duration::from_millis(10));
        response.end_with("ok").unwrap();

        handle.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"ok");
    }
}
