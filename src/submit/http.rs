//! HTTP implementation of the submission collaborator.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::model::{OrderPayload, OrderReceipt};
use crate::submit::{SubmitClient, SubmitError};

/// Default host/port of the order service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9009";

const ORDER_PATH: &str = "/api/order";

/// Error-response envelope: rejections arrive as a JSON body with a
/// `message` field and a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Posts order payloads as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpSubmitClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSubmitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpSubmitClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl SubmitClient for HttpSubmitClient {
    #[instrument(skip(self, payload))]
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, SubmitError> {
        let url = format!("{}{}", self.base_url, ORDER_PATH);
        debug!(%url, "Posting order");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            // A success body without a `message` is malformed.
            return response
                .json::<OrderReceipt>()
                .await
                .map_err(|_| SubmitError::MalformedResponse);
        }

        debug!(%status, "Order endpoint returned an error status");
        match response.json::<ErrorEnvelope>().await {
            Ok(ErrorEnvelope { message: Some(message) }) => Err(SubmitError::Rejected(message)),
            _ => Err(SubmitError::MalformedResponse),
        }
    }
}
