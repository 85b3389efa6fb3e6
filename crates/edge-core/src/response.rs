//! Response sink shared by every path that may finalize a request.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use tokio::sync::watch;

use crate::lifecycle::{CompletionSignal, ResponsePhase};

/// Errors raised when a response is written out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("headers already sent")]
    HeadersSent,

    #[error("response already ended")]
    AlreadyEnded,

    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}

#[derive(Debug)]
struct ResponseState {
    status: StatusCode,
    status_message: Option<String>,
    headers: HeaderMap,
    body: Vec<u8>,
    phase: ResponsePhase,
}

/// Response sink for one request.
///
/// Cloning yields another handle to the same response, so a deadline task
/// and the render path can race to finalize it. Write discipline is
/// enforced: status and headers only before the first body byte, nothing
/// after [`end`](Self::end). Ending fires the [`CompletionSignal`].
#[derive(Debug, Clone)]
pub struct Response {
    state: Arc<Mutex<ResponseState>>,
    done: Arc<watch::Sender<bool>>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Create an open `200 OK` response with no headers.
    pub fn new() -> Self {
        let (done, _) = watch::channel(false);
        Self {
            state: Arc::new(Mutex::new(ResponseState {
                status: StatusCode::OK,
                status_message: None,
                headers: HeaderMap::new(),
                body: Vec::new(),
                phase: ResponsePhase::Open,
            })),
            done: Arc::new(done),
        }
    }

    // The lock is never held across an await point.
    fn lock(&self) -> MutexGuard<'_, ResponseState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the status code.
    pub fn set_status(&self, status: StatusCode) -> Result<(), ResponseError> {
        let mut state = self.lock();
        check_headers_writable(state.phase)?;
        state.status = status;
        Ok(())
    }

    /// Set the reason phrase sent with the status line.
    pub fn set_status_message(&self, message: impl Into<String>) -> Result<(), ResponseError> {
        let mut state = self.lock();
        check_headers_writable(state.phase)?;
        state.status_message = Some(message.into());
        Ok(())
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&self, name: &str, value: &str) -> Result<(), ResponseError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ResponseError::InvalidHeaderName(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ResponseError::InvalidHeaderValue(name.to_string()))?;

        let mut state = self.lock();
        check_headers_writable(state.phase)?;
        state.headers.insert(name, value);
        Ok(())
    }

    /// Append a body chunk. Freezes status and headers.
    pub fn write(&self, chunk: impl AsRef<[u8]>) -> Result<(), ResponseError> {
        let mut state = self.lock();
        if state.phase == ResponsePhase::Ended {
            return Err(ResponseError::AlreadyEnded);
        }
        state.body.extend_from_slice(chunk.as_ref());
        state.phase = ResponsePhase::Streaming;
        Ok(())
    }

    /// End the response with no further body.
    pub fn end(&self) -> Result<(), ResponseError> {
        self.end_with(&[] as &[u8])
    }

    /// Write a final body chunk and end the response.
    pub fn end_with(&self, chunk: impl AsRef<[u8]>) -> Result<(), ResponseError> {
        {
            let mut state = self.lock();
            if state.phase == ResponsePhase::Ended {
                return Err(ResponseError::AlreadyEnded);
            }
            state.body.extend_from_slice(chunk.as_ref());
            state.phase = ResponsePhase::Ended;
        }
        self.done.send_replace(true);
        Ok(())
    }

    /// Signal that resolves once this response is ended.
    pub fn completion(&self) -> CompletionSignal {
        CompletionSignal::new(self.done.subscribe())
    }

    /// Current status code.
    pub fn status(&self) -> StatusCode {
        self.lock().status
    }

    /// Reason phrase, if one was set.
    pub fn status_message(&self) -> Option<String> {
        self.lock().status_message.clone()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<String> {
        self.lock()
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Snapshot of all headers.
    pub fn headers(&self) -> HeaderMap {
        self.lock().headers.clone()
    }

    /// Snapshot of the body written so far.
    pub fn body(&self) -> Vec<u8> {
        self.lock().body.clone()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ResponsePhase {
        self.lock().phase
    }

    /// Whether the response has been ended.
    pub fn is_finished(&self) -> bool {
        self.phase() == ResponsePhase::Ended
    }
}

fn check_headers_writable(phase: ResponsePhase) -> Result<(), ResponseError> {
    match phase {
        ResponsePhase::Open => Ok(()),
        ResponsePhase::Streaming => Err(ResponseError::HeadersSent),
        ResponsePhase::Ended => Err(ResponseError::AlreadyEnded),
    }
}
