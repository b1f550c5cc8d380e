//! Variant resolution errors.

use thiserror::Error;

/// Error returned when a style key or theme file cannot be resolved.
#[derive(Debug, Error)]
pub enum VariantError {
    /// The requested variant name is not part of the table
    #[error("unknown variant '{0}' (expected one of: {1})")]
    InvalidVariant(String, &'static str),

    /// The requested size name is not part of the table
    #[error("unknown size '{0}' (expected one of: {1})")]
    InvalidSize(String, &'static str),

    /// The requested effect name is not part of the table
    #[error("unknown effect '{0}' (expected one of: {1})")]
    InvalidEffect(String, &'static str),

    /// A theme file could not be parsed
    #[error("invalid theme: {0}")]
    Theme(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_variant_display() {
        let err = VariantError::InvalidVariant("unknown".to_string(), "default, ghost");
        let msg = err.to_string();
        assert!(msg.contains("'unknown'"));
        assert!(msg.contains("default, ghost"));
    }

    #[test]
    fn test_theme_error_display() {
        let yaml_err = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = VariantError::from(yaml_err);
        assert!(err.to_string().starts_with("invalid theme:"));
    }
}
