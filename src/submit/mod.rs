//! The submission collaborator seam.
//!
//! The form actor never talks to the network directly; it delivers
//! payloads through the [`SubmitClient`] trait. The binary wires in
//! [`HttpSubmitClient`]; tests script a [`MockSubmitClient`] instead.

pub mod http;
pub mod mock;

pub use http::HttpSubmitClient;
pub use mock::MockSubmitClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{OrderPayload, OrderReceipt};

/// Banner text shown when the endpoint is unreachable or its response
/// carries no readable `message`.
pub const FALLBACK_FAILURE_MESSAGE: &str = "order could not be submitted";

/// Errors from a single submission attempt. None of these are fatal; the
/// form stays interactive afterwards.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint rejected the order and supplied a message.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The response body had no readable `message` field.
    #[error("Malformed response from order endpoint")]
    MalformedResponse,

    /// The endpoint could not be reached.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// The string to show in the failure banner for this error.
    ///
    /// Only a rejection carries a server-authored message; everything
    /// else falls back to [`FALLBACK_FAILURE_MESSAGE`] rather than
    /// surfacing an internal error string to the form.
    pub fn feedback_message(&self) -> String {
        match self {
            SubmitError::Rejected(message) => message.clone(),
            _ => FALLBACK_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// A collaborator that can deliver an order payload to the remote
/// endpoint. Retry, auth and timeout policy live behind this seam.
#[async_trait]
pub trait SubmitClient: Send + Sync {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, SubmitError>;
}
