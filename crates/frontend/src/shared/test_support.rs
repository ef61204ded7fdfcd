//! Scripted in-memory collaborators for engine tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;

use contracts::usecases::u501_submit_request::request::RequestSubmission;

use crate::domain::a001_equipment::cart::{HandoffOutcome, RequestSubmitter};
use crate::shared::api_utils::{Transport, TransportError};

type Reply = Result<Value, TransportError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Replies are consumed in order per path; an unscripted path answers 404.
#[derive(Default)]
pub struct FakeTransport {
    script: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, path: &str, reply: Scripted) {
        self.script
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn ready(&self, path: &str, body: Value) {
        self.push(path, Scripted::Ready(Ok(body)));
    }

    pub fn fail(&self, path: &str, error: TransportError) {
        self.push(path, Scripted::Ready(Err(error)));
    }

    /// The request stays in flight until the returned sender fires
    pub fn defer(&self, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        self.requests.borrow_mut().push(path.to_string());
        let next = self
            .script
            .borrow_mut()
            .get_mut(path)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("reply dropped".to_string()))),
            None => Err(TransportError::Status(404)),
        }
    }
}

/// Submission collaborator answering every request with the same outcome
pub struct FakeSubmitter {
    outcome: HandoffOutcome,
    submitted: RefCell<Vec<RequestSubmission>>,
}

impl FakeSubmitter {
    pub fn new(outcome: HandoffOutcome) -> Self {
        Self {
            outcome,
            submitted: RefCell::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<RequestSubmission> {
        self.submitted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RequestSubmitter for FakeSubmitter {
    async fn submit(&self, request: &RequestSubmission) -> HandoffOutcome {
        self.submitted.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}
