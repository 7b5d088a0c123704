//! Spec artifact validator: required governance files per component.

pub mod structure;
pub mod types;
pub mod validator;

pub use types::{SpecFinding, SpecValidationResult};
pub use validator::validate_spec_dir;
