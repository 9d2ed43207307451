//! Shared mock completion backend for pipeline tests.

use async_trait::async_trait;
use skald_client::Completion;
use skald_core::CompletionRequest;
use skald_error::{CompletionError, CompletionErrorKind};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted outcome of a mock completion call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Failure(CompletionErrorKind),
}

/// Deterministic completion backend with call counting.
#[derive(Debug)]
pub struct MockBackend {
    response: MockResponse,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockBackend {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_response(MockResponse::Success(text.into()))
    }

    pub fn failure(kind: CompletionErrorKind) -> Self {
        Self::with_response(MockResponse::Failure(kind))
    }

    pub fn with_response(response: MockResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completion for &MockBackend {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(req.clone());
        match &self.response {
            MockResponse::Success(text) => Ok(text.clone()),
            MockResponse::Failure(kind) => Err(CompletionError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
