//! Write-path validation for animal records
//!
//! Every record appended to the store passes through [`validate_animal`]
//! first. Validation occurs before any state changes.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{is_valid_animal, validate_animal};
