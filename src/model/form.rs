use std::collections::BTreeSet;

/// The text/select fields a field-change event can address.
///
/// Topping checkboxes are not fields in this sense; they go through the
/// separate toggle path and carry no inline error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Size,
}

impl Field {
    /// The field's name as it appears on the rendered form and the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Size => "size",
        }
    }
}

/// The mutable form values, in the raw-input domain.
///
/// `size` is held as the raw select value so out-of-range input can be
/// represented and validated; the typed [`Size`](crate::model::Size) enum
/// is the parse target. Toppings are a set: no duplicate ids, order
/// irrelevant (`BTreeSet` keeps iteration deterministic).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub full_name: String,
    pub size: String,
    pub toppings: BTreeSet<String>,
}

/// Per-field inline error messages. Empty string means no error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub full_name: String,
    pub size: String,
}

impl FieldErrors {
    /// The current inline message for a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Size => &self.size,
        }
    }

    /// Replaces a field's inline message. Pass an empty string to clear.
    pub fn set(&mut self, field: Field, message: String) {
        match field {
            Field::FullName => self.full_name = message,
            Field::Size => self.size = message,
        }
    }

    /// True when no field carries an error message.
    pub fn is_clear(&self) -> bool {
        self.full_name.is_empty() && self.size.is_empty()
    }
}

/// The success/failure banner. The two channels are mutually exclusive:
/// each submission resolution sets one and clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerFeedback {
    pub success: String,
    pub failure: String,
}

/// Read-only snapshot of the whole form, returned from every operation.
///
/// This is everything a renderer needs: field values, inline errors, the
/// submit control's enabled state and the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub state: FormState,
    pub errors: FieldErrors,
    pub eligible: bool,
    pub feedback: ServerFeedback,
}
