use std::str::FromStr;

use thiserror::Error;

/// Pizza size as accepted by the order endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Raised when a raw select value is not one of the accepted size codes.
///
/// The display string doubles as the inline validation message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("size must be S or M or L")]
pub struct SizeParseError;

impl Size {
    /// The single-letter wire code for this size.
    pub fn code(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    /// The human-readable label shown in the select control.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Size::Small),
            "M" => Ok(Size::Medium),
            "L" => Ok(Size::Large),
            _ => Err(SizeParseError),
        }
    }
}

/// One row of the size select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options for the size select, in display order. The leading empty value
/// is the placeholder row.
pub const SIZE_OPTIONS: &[SizeOption] = &[
    SizeOption { value: "", label: "----Choose Size----" },
    SizeOption { value: "S", label: "Small" },
    SizeOption { value: "M", label: "Medium" },
    SizeOption { value: "L", label: "Large" },
];
