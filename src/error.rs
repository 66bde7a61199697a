//! # Error Handling
//!
//! Provides the `ModelError` enum surfaced by the assembly engine.
//!
//! The engine favors silent no-ops over errors for absent optional
//! substructure; only the two conditions below are reported to callers.

use derive_more::Display;

/// Errors surfaced while assembling or reconciling a document tree.
///
/// We use `derive_more` for boilerplate.
#[derive(Debug, Display)]
pub enum ModelError {
    /// The document shape cannot be reconciled, e.g. a content map with a
    /// declared media-type name whose entry is absent.
    #[display("Invalid document shape: {_0}")]
    InvalidDocumentShape(String),

    /// A reference string has no extractable name component.
    #[display("Malformed reference: {_0}")]
    MalformedReference(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ModelError {}

/// Helper type alias for Result using ModelError.
pub type ModelResult<T> = Result<T, ModelError>;
