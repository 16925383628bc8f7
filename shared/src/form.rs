use chrono::{DateTime, Local};

use crate::{LoginAttempt, ValidationError};

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    EditUsername(String),
    EditPassword(String),
    Submit(DateTime<Local>),
    /// Fired by the deferred timer after a successful submit.
    ResetAfterSuccess,
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub is_submitted: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.clear_error();
    }

    pub fn edit_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.clear_error();
    }

    /// Checks the current fields without touching state.
    pub fn attempt(&self, at: DateTime<Local>) -> Result<LoginAttempt, ValidationError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginAttempt {
            username: self.username.clone(),
            password: self.password.clone(),
            at,
        })
    }

    pub fn submit(&mut self, at: DateTime<Local>) -> Result<LoginAttempt, ValidationError> {
        self.clear_error();

        match self.attempt(at) {
            Ok(attempt) => {
                self.is_submitted = true;
                Ok(attempt)
            }
            Err(err) => {
                self.error = Some(err.banner().to_string());
                self.is_submitted = false;
                Err(err)
            }
        }
    }

    /// Clears both credentials and hides the success banner. Safe to run twice.
    pub fn complete_reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.is_submitted = false;
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::EditUsername(value) => self.edit_username(value),
            FormAction::EditPassword(value) => self.edit_password(value),
            FormAction::Submit(at) => {
                // Outcome is reported by the caller, which runs `attempt` first.
                let _ = self.submit(at);
            }
            FormAction::ResetAfterSuccess => self.complete_reset(),
        }
    }

    fn clear_error(&mut self) {
        if self.error.is_some() {
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MISSING_FIELDS_BANNER;

    fn filled(username: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.edit_username(username);
        form.edit_password(password);
        form
    }

    #[test]
    fn starts_empty() {
        let form = LoginForm::new();
        assert_eq!(form.username, "");
        assert_eq!(form.password, "");
        assert_eq!(form.error, None);
        assert!(!form.is_submitted);
    }

    #[test]
    fn edits_are_stored_verbatim() {
        let mut form = LoginForm::new();
        form.edit_username("  alice ");
        form.edit_password("\tpw\n");
        assert_eq!(form.username, "  alice ");
        assert_eq!(form.password, "\tpw\n");

        form.edit_username("");
        assert_eq!(form.username, "");
    }

    #[test]
    fn rejects_missing_fields() {
        let cases = [
            ("", ""),
            ("alice", ""),
            ("", "secret"),
            ("   ", "secret"),
            ("alice", " \t"),
        ];
        for (username, password) in cases {
            let mut form = filled(username, password);
            let result = form.submit(Local::now());

            assert_eq!(result, Err(ValidationError::MissingFields));
            assert_eq!(form.error.as_deref(), Some(MISSING_FIELDS_BANNER));
            assert!(!form.is_submitted);
            assert_eq!(form.username, username);
            assert_eq!(form.password, password);
        }
    }

    #[test]
    fn any_edit_clears_the_error() {
        let mut form = LoginForm::new();
        form.submit(Local::now()).unwrap_err();
        form.edit_username("");
        assert_eq!(form.error, None);

        form.submit(Local::now()).unwrap_err();
        form.edit_password("x");
        assert_eq!(form.error, None);
    }

    #[test]
    fn accepted_submit_keeps_raw_values() {
        let mut form = filled(" alice", "secret ");
        let at = Local::now();
        let attempt = form.submit(at).unwrap();

        assert_eq!(attempt.username, " alice");
        assert_eq!(attempt.password, "secret ");
        assert_eq!(attempt.at, at);
        assert!(form.is_submitted);
        assert_eq!(form.error, None);
    }

    #[test]
    fn accepted_submit_clears_previous_error() {
        let mut form = filled("alice", "");
        form.submit(Local::now()).unwrap_err();
        // Bypass the edit handler so the error is still set.
        form.password = "secret".to_string();
        assert!(form.error.is_some());

        form.submit(Local::now()).unwrap();
        assert_eq!(form.error, None);
    }

    #[test]
    fn rejected_submit_after_success_drops_the_banner() {
        let mut form = filled("alice", "secret");
        form.submit(Local::now()).unwrap();
        form.edit_password("");
        form.submit(Local::now()).unwrap_err();
        assert!(!form.is_submitted);
    }

    #[test]
    fn attempt_does_not_mutate() {
        let form = filled("alice", "");
        let before = form.clone();
        form.attempt(Local::now()).unwrap_err();
        assert_eq!(form, before);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = filled("alice", "secret");
        form.submit(Local::now()).unwrap();

        form.complete_reset();
        let once = form.clone();
        form.complete_reset();

        assert_eq!(form, once);
        assert_eq!(form, LoginForm::new());
    }

    #[test]
    fn reset_leaves_a_later_error_alone() {
        let mut form = filled("alice", "secret");
        form.submit(Local::now()).unwrap();
        form.edit_password("");
        form.submit(Local::now()).unwrap_err();

        form.complete_reset();
        assert_eq!(form.error.as_deref(), Some(MISSING_FIELDS_BANNER));
        assert_eq!(form.username, "");
    }

    #[test]
    fn apply_routes_actions() {
        let mut form = LoginForm::new();
        form.apply(FormAction::EditUsername("alice".into()));
        form.apply(FormAction::EditPassword("secret".into()));
        form.apply(FormAction::Submit(Local::now()));
        assert!(form.is_submitted);

        form.apply(FormAction::ResetAfterSuccess);
        assert_eq!(form, LoginForm::new());
    }
}
