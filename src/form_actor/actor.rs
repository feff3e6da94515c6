//! The form state controller: a single actor task that owns all mutable
//! form state and processes input events sequentially.
//!
//! ## Concurrency Model
//! One actor, one task: each message is handled to completion in arrival
//! order, so a mutation and its derived-state recomputation are atomic
//! with respect to every other event. Eligibility is recomputed
//! synchronously after every mutation; there is no stale asynchronous
//! check racing to overwrite a newer result. An in-flight submission
//! cannot be aborted and blocks later messages until it resolves.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use std::sync::Arc;

use crate::form_actor::FormError;
use crate::model::{Field, FieldErrors, FormState, FormView, OrderPayload, ServerFeedback};
use crate::schema;
use crate::submit::SubmitClient;

/// One-shot response channel for form operations.
pub type Response<T> = oneshot::Sender<Result<T, FormError>>;

/// Messages accepted by the form actor.
///
/// Every variant replies with a full [`FormView`] snapshot, so a renderer
/// can redraw from the response alone.
#[derive(Debug)]
pub enum FormRequest {
    /// Replace a text/select field's value and revalidate that field.
    FieldChange {
        field: Field,
        value: String,
        respond_to: Response<FormView>,
    },
    /// Add or remove a topping id. No inline error is maintained for
    /// toppings; the rule is disabled by design.
    ToppingToggle {
        id: String,
        checked: bool,
        respond_to: Response<FormView>,
    },
    /// Build the payload and deliver it to the submit collaborator.
    Submit { respond_to: Response<FormView> },
    /// Read the current view without mutating anything.
    Snapshot { respond_to: Response<FormView> },
}

/// The actor that owns the form.
///
/// State is mutated only inside [`FormActor::run`], so no locks are
/// needed. Defaults: empty name, unset size, no toppings, ineligible.
pub struct FormActor {
    receiver: mpsc::Receiver<FormRequest>,
    state: FormState,
    errors: FieldErrors,
    eligible: bool,
    feedback: ServerFeedback,
}

impl FormActor {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<FormRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: FormState::default(),
            errors: FieldErrors::default(),
            eligible: false,
            feedback: ServerFeedback::default(),
        };
        (actor, sender)
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// # Context Injection
    /// The submit collaborator is injected here rather than in `new`, so
    /// the transport can be wired after the actor is constructed (an HTTP
    /// client in the binary, a scripted mock in tests).
    pub async fn run(mut self, submit: Arc<dyn SubmitClient>) {
        info!("Form actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::FieldChange { field, value, respond_to } => {
                    debug!(?field, %value, "FieldChange");
                    self.apply_field_change(field, value);
                    let _ = respond_to.send(Ok(self.view()));
                }
                FormRequest::ToppingToggle { id, checked, respond_to } => {
                    debug!(%id, checked, "ToppingToggle");
                    self.apply_topping_toggle(id, checked);
                    let _ = respond_to.send(Ok(self.view()));
                }
                FormRequest::Submit { respond_to } => {
                    debug!("Submit");
                    let result = self.handle_submit(submit.as_ref()).await;
                    let _ = respond_to.send(result);
                }
                FormRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                }
            }
        }

        info!("Form actor shutdown");
    }

    fn view(&self) -> FormView {
        FormView {
            state: self.state.clone(),
            errors: self.errors.clone(),
            eligible: self.eligible,
            feedback: self.feedback.clone(),
        }
    }

    fn apply_field_change(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.state.full_name = value,
            Field::Size => self.state.size = value,
        }
        // Same rule as the whole-state check, so the inline message can
        // never disagree with eligibility.
        let message = match schema::validate_field(field, &self.state) {
            Ok(()) => String::new(),
            Err(message) => message,
        };
        self.errors.set(field, message);
        self.recompute_eligibility();
    }

    fn apply_topping_toggle(&mut self, id: String, checked: bool) {
        if checked {
            self.state.toppings.insert(id);
        } else {
            self.state.toppings.remove(&id);
        }
        self.recompute_eligibility();
    }

    /// Derived state is recomputed synchronously after every mutation, so
    /// the submit control always reflects the latest edit.
    fn recompute_eligibility(&mut self) {
        self.eligible = schema::validate(&self.state);
    }

    async fn handle_submit(&mut self, submit: &dyn SubmitClient) -> Result<FormView, FormError> {
        if !self.eligible {
            // The submit control is disabled in this state; a raced
            // message must not slip through either.
            warn!("Submit rejected: form not eligible");
            return Err(FormError::NotEligible);
        }

        let payload = OrderPayload::from(&self.state);
        info!(?payload, "Submitting order");

        match submit.submit_order(&payload).await {
            Ok(receipt) => {
                info!(message = %receipt.message, "Order accepted");
                self.feedback.success = receipt.message;
                self.feedback.failure.clear();
                // Values reset to defaults; inline errors are left alone.
                // They are necessarily empty here: submission required
                // both fields valid.
                self.state = FormState::default();
                self.recompute_eligibility();
            }
            Err(e) => {
                warn!(error = %e, "Order rejected");
                self.feedback.failure = e.feedback_message();
                self.feedback.success.clear();
            }
        }

        Ok(self.view())
    }
}
