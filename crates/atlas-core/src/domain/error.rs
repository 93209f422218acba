// ============================================================================
// domain/error.rs - DOMAIN INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (a failed record can be reported and skipped)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid country code '{code}': expected three letters (e.g. FRA)")]
    InvalidCountryCode { code: String },

    #[error("Unknown region '{region}'")]
    UnknownRegion { region: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCountryCode { code } => vec![
                format!("'{}' is not a three-letter country code", code),
                "Codes follow ISO 3166-1 alpha-3, for example FRA, JPN, BRA".into(),
                "Try: atlas list --search <name> to find a code".into(),
            ],
            Self::UnknownRegion { .. } => vec![
                "Supported regions:".into(),
                format!("  • {}", crate::domain::Region::ALL.map(|r| r.as_str()).join(", ")),
            ],
            _ => vec!["The country data source returned an unexpected record".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCountryCode { .. } | Self::UnknownRegion { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
