//! Contract-violation errors for dashboard composition.

use thiserror::Error;

/// The only error class the composer recognizes.
///
/// Records reaching the composer are supposed to be already valid; a
/// violation is a bug in the upstream data source, not a recoverable
/// runtime condition. Violations surface immediately through `Result`
/// and are never caught or degraded inside this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractViolation {
    #[error("{entity}: required field `{field}` is empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: `{field}` is {value} but must be within 0..=100")]
    RatioOutOfRange {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{entity}: `{field}` is {value} but must be finite and non-negative")]
    InvalidAmount {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate key `{key}` in the {section} list")]
    DuplicateKey { section: &'static str, key: String },
}
