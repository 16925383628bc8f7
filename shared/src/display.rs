//! Helpers for the "current state" panel under the form.

pub const EMPTY_PLACEHOLDER: &str = "(empty)";
pub const MASK_CHAR: char = '●';

pub fn display_username(username: &str) -> &str {
    if username.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        username
    }
}

/// One bullet per character typed, or the placeholder when nothing is typed.
pub fn mask_password(password: &str) -> String {
    if password.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    password.chars().map(|_| MASK_CHAR).collect()
}
