//! Schema-driven validation: per-field rules plus whole-state composition.
//!
//! Single-field checks and the aggregate eligibility check share the same
//! rule functions, so inline errors always agree with the submit control.
//! All functions here are pure; the form actor invokes them after every
//! mutation.

use crate::model::{Field, FormState, Size};

/// Fixed rule-violation messages shown inline under each field.
pub mod messages {
    pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
    pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
    pub const SIZE_INCORRECT: &str = "size must be S or M or L";
}

/// Minimum trimmed length of the full name.
pub const FULL_NAME_MIN: usize = 3;
/// Maximum trimmed length of the full name.
pub const FULL_NAME_MAX: usize = 20;

/// Validates a single field, returning its inline message on failure.
pub fn validate_field(field: Field, state: &FormState) -> Result<(), String> {
    match field {
        Field::FullName => validate_full_name(&state.full_name),
        Field::Size => validate_size(&state.size),
    }
}

/// Whole-state validity; this is what drives submit eligibility.
///
/// Toppings carry no active rule: any subset is accepted, including the
/// empty one, and the selection never gates eligibility.
pub fn validate(state: &FormState) -> bool {
    validate_full_name(&state.full_name).is_ok() && validate_size(&state.size).is_ok()
}

fn validate_full_name(raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(required_message(Field::FullName));
    }
    let len = trimmed.chars().count();
    if len < FULL_NAME_MIN {
        return Err(messages::FULL_NAME_TOO_SHORT.to_string());
    }
    if len > FULL_NAME_MAX {
        return Err(messages::FULL_NAME_TOO_LONG.to_string());
    }
    Ok(())
}

fn validate_size(raw: &str) -> Result<(), String> {
    raw.parse::<Size>().map(|_| ()).map_err(|e| e.to_string())
}

/// Generic required-field message, `"{field} is a required field"`.
fn required_message(field: Field) -> String {
    format!("{} is a required field", field.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(full_name: &str, size: &str) -> FormState {
        FormState {
            full_name: full_name.to_string(),
            size: size.to_string(),
            toppings: Default::default(),
        }
    }

    #[test]
    fn full_name_length_boundaries() {
        let too_short = state("Al", "M");
        assert_eq!(
            validate_field(Field::FullName, &too_short),
            Err(messages::FULL_NAME_TOO_SHORT.to_string())
        );

        let min_ok = state("Ali", "M");
        assert_eq!(validate_field(Field::FullName, &min_ok), Ok(()));

        let max_ok = state(&"x".repeat(20), "M");
        assert_eq!(validate_field(Field::FullName, &max_ok), Ok(()));

        let too_long = state(&"x".repeat(21), "M");
        assert_eq!(
            validate_field(Field::FullName, &too_long),
            Err(messages::FULL_NAME_TOO_LONG.to_string())
        );
    }

    #[test]
    fn full_name_is_trimmed_before_length_check() {
        let padded_short = state("  Al  ", "M");
        assert_eq!(
            validate_field(Field::FullName, &padded_short),
            Err(messages::FULL_NAME_TOO_SHORT.to_string())
        );

        // 21 raw chars, 19 after trimming.
        let padded_ok = state(&format!(" {} ", "x".repeat(19)), "M");
        assert_eq!(validate_field(Field::FullName, &padded_ok), Ok(()));
    }

    #[test]
    fn empty_full_name_yields_generic_required_message() {
        for raw in ["", "   "] {
            assert_eq!(
                validate_field(Field::FullName, &state(raw, "M")),
                Err("fullName is a required field".to_string())
            );
        }
    }

    #[test]
    fn size_must_be_one_of_the_three_codes() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(validate_field(Field::Size, &state("Alice", size.code())), Ok(()));
        }
        for raw in ["", "X", "small", "s", "SM"] {
            assert_eq!(
                validate_field(Field::Size, &state("Alice", raw)),
                Err(messages::SIZE_INCORRECT.to_string())
            );
        }
    }

    #[test]
    fn eligibility_requires_name_and_size_only() {
        // Scenario A: short name, valid size.
        assert!(!validate(&state("Al", "M")));
        // Scenario B: valid name, missing size.
        assert!(!validate(&state("Alice Smith", "")));
        // Both valid.
        assert!(validate(&state("Alice Smith", "L")));
    }

    #[test]
    fn toppings_never_affect_validity() {
        let mut valid = state("Alice Smith", "L");
        let mut invalid = state("Al", "L");
        for id in ["1", "2", "3", "4", "5", "not-in-catalog"] {
            valid.toppings.insert(id.to_string());
            invalid.toppings.insert(id.to_string());
            assert!(validate(&valid));
            assert!(!validate(&invalid));
        }
    }
}
