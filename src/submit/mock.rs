//! Mock submission collaborator for testing the form without a server.
//!
//! Use [`MockSubmitClient::expect_submit`] to queue a scripted response,
//! drive the form, then assert on [`MockSubmitClient::payloads`] and call
//! [`MockSubmitClient::verify`] to ensure every expectation was consumed.
//!
//! # Example
//! ```ignore
//! let mock = MockSubmitClient::new();
//! mock.expect_submit().return_message("Order received");
//!
//! let system = FormSystem::new(Arc::new(mock.clone()));
//! // Drive the form...
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::model::{OrderPayload, OrderReceipt};
use crate::submit::{SubmitClient, SubmitError};

type ScriptedResponse = Result<OrderReceipt, SubmitError>;

/// A submit collaborator that replays scripted responses in order and
/// records every payload it receives.
#[derive(Clone, Default)]
pub struct MockSubmitClient {
    expectations: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    payloads: Arc<Mutex<Vec<OrderPayload>>>,
}

impl MockSubmitClient {
    /// Creates a mock with no expectations queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an expectation for the next submission.
    pub fn expect_submit(&self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Payloads received so far, in delivery order.
    pub fn payloads(&self) -> Vec<OrderPayload> {
        self.payloads.lock().unwrap().clone()
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl SubmitClient for MockSubmitClient {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, SubmitError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected submission: no expectation queued"))
    }
}

/// Builder for submit expectations.
pub struct SubmitExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<ScriptedResponse>>>,
}

impl SubmitExpectationBuilder {
    /// Scripts a success response with the given receipt message.
    pub fn return_message(self, message: impl Into<String>) {
        self.push(Ok(OrderReceipt {
            message: message.into(),
        }));
    }

    /// Scripts a rejection carrying the given envelope message.
    pub fn return_rejection(self, message: impl Into<String>) {
        self.push(Err(SubmitError::Rejected(message.into())));
    }

    /// Scripts an arbitrary submission error.
    pub fn return_error(self, error: SubmitError) {
        self.push(Err(error));
    }

    fn push(self, response: ScriptedResponse) {
        self.expectations.lock().unwrap().push_back(response);
    }
}
