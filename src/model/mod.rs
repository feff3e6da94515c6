//! Pure data structures for the order form: field values, derived-state
//! snapshots, the topping catalog and the wire payload.

pub mod catalog;
pub mod form;
pub mod payload;
pub mod size;

pub use catalog::*;
pub use form::*;
pub use payload::*;
pub use size::*;
