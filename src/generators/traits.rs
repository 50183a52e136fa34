//! Common traits implemented by every request and generator pair.

use super::{GeneratedDocument, GeneratorError};

/// Request-side validation, run before any content is built.
///
/// The error string is the aggregated, human-readable message produced by
/// [`validation::ValidationErrors`](super::validation::ValidationErrors);
/// generators wrap it in [`GeneratorError::Validation`].
pub trait Validator {
    fn validate(&self) -> Result<(), String>;
}

/// A document generator: validated request in, generated document out.
///
/// Generators are stateless unit structs; no hidden counters survive between
/// calls, so identical requests produce structurally identical documents.
pub trait Generator<Req: Validator> {
    fn generate(&self, request: Req) -> Result<GeneratedDocument, GeneratorError>;

    /// Validate the request and wrap failures in the generator error type.
    fn check(&self, request: &Req) -> Result<(), GeneratorError> {
        request
            .validate()
            .map_err(GeneratorError::Validation)
    }
}
