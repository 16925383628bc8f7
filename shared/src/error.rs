use thiserror::Error;

/// Text shown in the form's alert banner when validation fails.
pub const MISSING_FIELDS_BANNER: &str = "❌ Error: Both username and password are required!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
}

impl ValidationError {
    pub fn banner(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => MISSING_FIELDS_BANNER,
        }
    }

    /// Line written to the developer console for a rejected submit.
    pub fn console_line(&self) -> String {
        format!("Login failed: {}", self)
    }
}
