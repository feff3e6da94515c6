//! # Order Form
//!
//! > **A schema-validated order form as a tokio actor.**
//!
//! This crate implements the core of a pizza order form: it holds the
//! form state, revalidates it against a schema on every change, derives
//! whether the submit control is enabled, posts the payload to a remote
//! endpoint, and surfaces success/failure feedback. Rendering is out of
//! scope; every operation returns a [`model::FormView`] snapshot that any
//! renderer can draw from.
//!
//! ## 🏗️ Design Philosophy
//!
//! The original "whenever state changes, revalidate" reactivity is made
//! explicit here: the form is a single actor task that owns all mutable
//! state and recomputes derived values synchronously after each mutation.
//! Messages are processed sequentially, so there is no stale eligibility
//! result racing to overwrite a newer one, and no locks are needed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure structures: [`FormState`](model::FormState), the topping
//! [catalog](model::TOPPINGS), per-field errors, the feedback banner and
//! the wire [`OrderPayload`](model::OrderPayload).
//!
//! ### 2. The Rules ([`schema`])
//! The validation engine. Per-field checks and the whole-state
//! eligibility check share the same rule functions, so inline errors
//! always agree with the submit control.
//!
//! ### 3. The Controller ([`form_actor`])
//! The actor that owns the form and processes
//! [`FormRequest`](form_actor::FormRequest) messages. The
//! [`clients`] layer wraps its channel in the typed
//! [`FormClient`](clients::FormClient).
//!
//! ### 4. The Collaborator ([`submit`])
//! The [`SubmitClient`](submit::SubmitClient) seam to the order
//! endpoint: an HTTP implementation for production and a scripted mock
//! for tests.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`FormSystem`](lifecycle::FormSystem) spawns the actor with its
//! collaborator injected and handles graceful shutdown; tracing setup
//! lives here too.
//!
//! ## 🧪 Testing
//!
//! See [`submit::mock`] for driving the form without a server, and the
//! `tests/` directory for actor-level and whole-system scenarios.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod form_actor;
pub mod lifecycle;
pub mod model;
pub mod schema;
pub mod submit;
