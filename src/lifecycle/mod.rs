//! Orchestration: spawning the form actor and wiring its collaborator.

pub mod tracing;

pub use self::tracing::setup_tracing;

use std::sync::Arc;

use ::tracing::{error, info};

use crate::clients::FormClient;
use crate::form_actor;
use crate::submit::{HttpSubmitClient, SubmitClient};

/// The running order form: the actor task plus its typed client.
///
/// # Example
/// ```ignore
/// let system = FormSystem::with_endpoint("http://localhost:9009");
/// let view = system.form_client.set_field(Field::FullName, "Alice Smith").await?;
/// system.shutdown().await?;
/// ```
pub struct FormSystem {
    /// Client for driving the form actor.
    pub form_client: FormClient,

    /// Task handle for the running actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Spawns the form actor with the given submit collaborator injected
    /// as its context.
    pub fn new(submit: Arc<dyn SubmitClient>) -> Self {
        let (actor, form_client) = form_actor::new();
        let handle = tokio::spawn(actor.run(submit));
        Self { form_client, handle }
    }

    /// Spawns the form actor posting orders to `base_url` over HTTP.
    pub fn with_endpoint(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpSubmitClient::new(base_url)))
    }

    /// Gracefully shuts down the form.
    ///
    /// Dropping the client closes the channel; the actor drains its
    /// mailbox, exits its loop, and the task is awaited here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down form system...");

        drop(self.form_client);

        if let Err(e) = self.handle.await {
            error!("Form actor task failed: {:?}", e);
            return Err(format!("Form actor task failed: {:?}", e));
        }

        info!("Form system shutdown complete.");
        Ok(())
    }
}
