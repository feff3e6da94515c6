//! The form state controller actor and its factory.

pub mod actor;
pub mod error;

pub use actor::*;
pub use error::*;

use crate::clients::FormClient;

/// Creates a new form actor and its client.
///
/// The caller spawns [`FormActor::run`] with the submit collaborator to
/// inject; see [`crate::lifecycle::FormSystem`] for the usual wiring.
pub fn new() -> (FormActor, FormClient) {
    let (actor, sender) = FormActor::new(32);
    (actor, FormClient::new(sender))
}
