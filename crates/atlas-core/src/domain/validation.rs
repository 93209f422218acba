use crate::domain::{
    entities::{CountryDetail, CountrySummary},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Records coming from external sources pass through here before they are
/// admitted into a directory or a country page.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_summary(summary: &CountrySummary) -> Result<(), DomainError> {
        summary.validate()
    }

    pub fn validate_detail(detail: &CountryDetail) -> Result<(), DomainError> {
        detail.summary.validate()?;
        if !detail.area_km2.is_finite() || detail.area_km2 < 0.0 {
            return Err(DomainError::InvalidField {
                field: "area",
                reason: format!("expected a non-negative number, got {}", detail.area_km2),
            });
        }
        Ok(())
    }
}
