use chrono::{DateTime, Local};

pub const SUCCESS_MARKER: &str = "✅ Login Attempt:";
pub const SEPARATOR: &str = "---";

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A submission that passed validation. Fields hold the values exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
    pub at: DateTime<Local>,
}

impl LoginAttempt {
    pub fn timestamp(&self) -> String {
        self.at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Lines written to the developer console, in order.
    pub fn console_lines(&self) -> [String; 5] {
        [
            SUCCESS_MARKER.to_string(),
            format!("Username: {}", self.username),
            format!("Password: {}", self.password),
            format!("Timestamp: {}", self.timestamp()),
            SEPARATOR.to_string(),
        ]
    }
}
