//! Scripted transport that records every request

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use apikey_sync_core::Transport;
use apikey_sync_domain::{
    ApikeySyncError, OutboundRequest, RequestMethod, Result, TransportResponse,
};

/// In-memory `Transport` returning queued results in order.
///
/// When the queue runs dry, `fallback` is returned (204 unless configured).
pub struct RecordingTransport {
    script: Mutex<VecDeque<Result<TransportResponse>>>,
    fallback: Mutex<Result<TransportResponse>>,
    requests: Mutex<Vec<OutboundRequest>>,
    close_calls: AtomicUsize,
    close_result: Mutex<Result<()>>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(Ok(TransportResponse::new(204))),
            requests: Mutex::new(Vec::new()),
            close_calls: AtomicUsize::new(0),
            close_result: Mutex::new(Ok(())),
        }
    }
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response with the given status.
    pub fn respond(self: &Arc<Self>, status: u16) -> Arc<Self> {
        self.push(Ok(TransportResponse::new(status)))
    }

    pub fn respond_with_reason(self: &Arc<Self>, status: u16, reason: &str) -> Arc<Self> {
        self.push(Ok(TransportResponse::with_reason(status, reason)))
    }

    /// Queue a transport failure.
    pub fn fail(self: &Arc<Self>, message: &str) -> Arc<Self> {
        self.push(Err(ApikeySyncError::Transport(message.to_string())))
    }

    /// Status returned once the script is exhausted.
    pub fn always(self: &Arc<Self>, status: u16) -> Arc<Self> {
        *self.fallback.lock().unwrap() = Ok(TransportResponse::new(status));
        Arc::clone(self)
    }

    pub fn fail_on_close(self: &Arc<Self>, message: &str) -> Arc<Self> {
        *self.close_result.lock().unwrap() = Err(ApikeySyncError::Transport(message.to_string()));
        Arc::clone(self)
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than validate calls.
    pub fn mutating_requests(&self) -> Vec<OutboundRequest> {
        self.requests()
            .into_iter()
            .filter(|r| !(r.method == RequestMethod::Post && r.url.ends_with("/validate")))
            .collect()
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    fn push(self: &Arc<Self>, result: Result<TransportResponse>) -> Arc<Self> {
        self.script.lock().unwrap().push_back(result);
        Arc::clone(self)
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &OutboundRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => self.fallback.lock().unwrap().clone(),
        }
    }

    fn close(&self) -> Result<()> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        self.close_result.lock().unwrap().clone()
    }
}
