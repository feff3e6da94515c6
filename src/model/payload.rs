use serde::{Deserialize, Serialize};

use crate::model::FormState;

/// The wire payload POSTed to the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl From<&FormState> for OrderPayload {
    /// Builds the payload from the current form values. Toppings
    /// serialize in set order (ascending id).
    fn from(state: &FormState) -> Self {
        Self {
            full_name: state.full_name.clone(),
            size: state.size.clone(),
            toppings: state.toppings.iter().cloned().collect(),
        }
    }
}

/// Success response body from the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
}
