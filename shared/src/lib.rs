mod attempt;
mod config;
mod display;
mod error;
mod form;

pub use attempt::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use form::*;
