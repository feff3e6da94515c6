//! Demo binary: drives the order form through an edit/validate/submit
//! scenario against the default endpoint, logging each step.
//!
//! The submission step needs an order service listening on
//! `http://localhost:9009`; without one, the failure banner shows the
//! fallback message and the demo still completes.

use order_form::lifecycle::{setup_tracing, FormSystem};
use order_form::model::{Field, TOPPINGS};
use order_form::submit::http::DEFAULT_BASE_URL;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!(endpoint = DEFAULT_BASE_URL, "Starting order form");

    let system = FormSystem::with_endpoint(DEFAULT_BASE_URL);
    let client = system.form_client.clone();

    let span = tracing::info_span!("form_editing");
    async {
        // A too-short name: inline error, submit stays disabled.
        let view = client
            .set_field(Field::FullName, "Al")
            .await
            .map_err(|e| e.to_string())?;
        info!(
            error = view.errors.get(Field::FullName),
            eligible = view.eligible,
            "Name rejected"
        );

        let view = client
            .set_field(Field::FullName, "Alice Smith")
            .await
            .map_err(|e| e.to_string())?;
        info!(eligible = view.eligible, "Name accepted");

        let view = client
            .set_field(Field::Size, "L")
            .await
            .map_err(|e| e.to_string())?;
        info!(eligible = view.eligible, "Size chosen");

        for topping in &TOPPINGS[..2] {
            let view = client
                .toggle_topping(topping.id, true)
                .await
                .map_err(|e| e.to_string())?;
            info!(
                label = topping.label,
                selected = view.state.toppings.len(),
                "Topping added"
            );
        }

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_submission");
    let outcome = async {
        info!("Submitting order");
        client.submit().await
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(view) if !view.feedback.success.is_empty() => {
            info!(message = %view.feedback.success, "Order accepted")
        }
        Ok(view) => warn!(message = %view.feedback.failure, "Order not accepted"),
        Err(e) => warn!(error = %e, "Submission could not be requested"),
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
