// Forms library root
// Helpers shared by the rental form screens: Brazilian date/money conversion,
// field validation, and the client context handed to backend calls.

pub mod brazilian_format;
pub mod config;
pub mod error;
pub mod validation;

pub use error::{FormsError, Result};
