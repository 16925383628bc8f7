pub mod login_form;
pub mod state_display;
pub mod text_field;
