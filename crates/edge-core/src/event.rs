//! The unit of work flowing through dispatch.

use crate::context::{IncomingRequest, RequestId};
use crate::lifecycle::CompletionSignal;
use crate::response::Response;

/// One request being dispatched: the mutable request, its response sink,
/// and the signal that fires when the response is ended.
#[derive(Debug)]
pub struct Event {
    /// Request ID for correlation.
    pub request_id: RequestId,
    /// Request description. Dispatch may rewrite `req.url`.
    pub req: IncomingRequest,
    /// Response sink.
    pub res: Response,
    completion: CompletionSignal,
}

impl Event {
    /// Create an event with a fresh response.
    pub fn new(req: IncomingRequest) -> Self {
        Self::with_response(req, Response::new())
    }

    /// Create an event around an existing response handle.
    pub fn with_response(req: IncomingRequest, res: Response) -> Self {
        let completion = res.completion();
        Self {
            request_id: RequestId::from_headers(&req.headers),
            req,
            res,
            completion,
        }
    }

    /// Signal that resolves once the response has been ended by any path.
    pub fn completion(&self) -> CompletionSignal {
        self.completion.clone()
    }
}
