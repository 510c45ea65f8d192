//! Health-data error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No data for country: {0}")]
    CountryNotFound(String),

    #[error("Disease API returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl HealthError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CountryNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        assert!(HealthError::CountryNotFound("ZZ".into()).is_not_found());
        assert!(!HealthError::Status(500).is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HealthError::Status(503).to_string(),
            "Disease API returned status 503"
        );
    }
}
