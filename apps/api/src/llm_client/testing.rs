//! Test doubles for `CompletionService`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionService, Credential, LlmError};

/// What the stub answers with on every call.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Auth(String),
    Service(String),
}

/// Records every invocation and answers with a fixed reply.
pub struct StubCompletion {
    reply: StubReply,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, f64)>>,
}

impl StubCompletion {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Instruction and temperature of the most recent call.
    pub fn last_call(&self) -> Option<(String, f64)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(
        &self,
        _credential: &Credential,
        instruction: &str,
        temperature: f64,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((instruction.to_string(), temperature));

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Auth(message) => Err(LlmError::Auth {
                status: 401,
                message: message.clone(),
            }),
            StubReply::Service(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
