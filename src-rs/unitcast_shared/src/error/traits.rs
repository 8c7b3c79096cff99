use crate::error::Context;

/// Trait for types that can be converted to unitcast error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context, so that every layer reports
/// failures in the same shape.
pub trait AsUnitcastError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Context might include:
    /// - Notes with the operands involved in the failure
    /// - Help text with suggestions for fixing the error
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        Vec::new()
    }
}
