//! Stable identifiers for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a code names an error or a warning; decides its letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Rendered as `E...`.
    Error,
    /// Rendered as `W...`.
    Warning,
}

impl Category {
    /// The letter codes in this category start with.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A diagnostic code such as `W001`.
///
/// Codes are stable across releases so that tooling can match on them
/// instead of on message text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// Error or warning.
    pub category: Category,
    /// Number within the category, rendered zero-padded to three digits.
    pub number: u16,
}

impl DiagnosticCode {
    /// An asset group still uses the legacy `versionedFiles` option.
    pub const DEPRECATED_VERSIONED_FILES: Self = Self::new(Category::Warning, 1);

    /// A data group's durations do not parse.
    pub const INVALID_DATA_GROUP: Self = Self::new(Category::Error, 1);

    /// Builds a code from its parts.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deprecated_versioned_files_is_w001() {
        assert_eq!(DiagnosticCode::DEPRECATED_VERSIONED_FILES.to_string(), "W001");
    }

    #[test]
    fn invalid_data_group_is_e001() {
        assert_eq!(DiagnosticCode::INVALID_DATA_GROUP.to_string(), "E001");
    }

    #[test]
    fn zero_padding() {
        assert_eq!(DiagnosticCode::new(Category::Error, 7).to_string(), "E007");
        assert_eq!(DiagnosticCode::new(Category::Warning, 120).to_string(), "W120");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(DiagnosticCode::DEPRECATED_VERSIONED_FILES).unwrap();
        assert_eq!(json, serde_json::json!({ "category": "Warning", "number": 1 }));
    }
}
