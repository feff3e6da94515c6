use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::form_actor::{FormError, FormRequest};
use crate::model::{Field, FormView};

/// Type-safe client for the form actor. Hides the message passing behind
/// async methods that mirror the user-facing operations.
#[derive(Clone)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>) -> Self {
        Self { sender }
    }

    /// Replaces a text/select field's value, returning the refreshed view.
    #[instrument(skip(self, value))]
    pub async fn set_field(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<FormView, FormError> {
        let value = value.into();
        debug!(%value, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::FieldChange { field, value, respond_to })
            .await
            .map_err(|_| FormError::ActorClosed)?;
        response.await.map_err(|_| FormError::ActorDropped)?
    }

    /// Checks or unchecks a topping, returning the refreshed view.
    #[instrument(skip(self, id))]
    pub async fn toggle_topping(
        &self,
        id: impl Into<String>,
        checked: bool,
    ) -> Result<FormView, FormError> {
        let id = id.into();
        debug!(%id, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::ToppingToggle { id, checked, respond_to })
            .await
            .map_err(|_| FormError::ActorClosed)?;
        response.await.map_err(|_| FormError::ActorDropped)?
    }

    /// Submits the form. Fails with [`FormError::NotEligible`] if the
    /// state does not validate; otherwise the returned view carries the
    /// success or failure banner.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<FormView, FormError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Submit { respond_to })
            .await
            .map_err(|_| FormError::ActorClosed)?;
        response.await.map_err(|_| FormError::ActorDropped)?
    }

    /// Reads the current view without mutating anything.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<FormView, FormError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FormError::ActorClosed)?;
        response.await.map_err(|_| FormError::ActorDropped)?
    }
}
