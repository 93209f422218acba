//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::CountryCode;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// Only the two mandatory fetches can fail an operation; enrichment
/// failures are absorbed by the aggregator and never show up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The full country list could not be loaded.
    #[error("Failed to load countries: {reason}")]
    DirectoryLoad { reason: String },

    /// The primary record for a country could not be loaded.
    #[error("Failed to load country {code}: {reason}")]
    DetailLoad {
        code: CountryCode,
        reason: String,
        not_found: bool,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryLoad { reason } => vec![
                format!("Could not fetch the country list: {}", reason),
                "Check your network connection".into(),
                "Run the command again to retry".into(),
            ],
            Self::DetailLoad {
                code,
                not_found: true,
                ..
            } => vec![
                format!("No country has the code '{}'", code),
                "Try: atlas list --search <name> to find a code".into(),
            ],
            Self::DetailLoad { .. } => vec![
                "The country record could not be fetched".into(),
                "Check your network connection".into(),
                "Run the command again to retry".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryLoad { .. } => ErrorCategory::Unavailable,
            Self::DetailLoad {
                not_found: true, ..
            } => ErrorCategory::NotFound,
            Self::DetailLoad { .. } => ErrorCategory::Unavailable,
        }
    }

    /// Both mandatory-fetch failures can be retried from scratch.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DirectoryLoad { .. }
                | Self::DetailLoad {
                    not_found: false,
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(not_found: bool) -> ApplicationError {
        ApplicationError::DetailLoad {
            code: CountryCode::parse("XYZ").unwrap(),
            reason: "boom".into(),
            not_found,
        }
    }

    #[test]
    fn outages_are_unavailable_and_retryable() {
        let directory = ApplicationError::DirectoryLoad {
            reason: "timeout".into(),
        };
        for err in [directory, detail(false)] {
            assert_eq!(err.category(), ErrorCategory::Unavailable);
            assert!(err.is_retryable());
            assert!(err.suggestions().iter().any(|s| s.contains("retry")));
        }
    }

    #[test]
    fn unknown_code_is_not_found_and_final() {
        let err = detail(true);
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.is_retryable());
        assert!(err.suggestions()[0].contains("XYZ"));
    }
}
