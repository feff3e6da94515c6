//! Type-safe client wrappers over the actor's message channel.

pub mod form_client;

pub use form_client::*;
