/// Represents different types of contextual information that can be associated with errors.
///
/// The `Context` enum provides a way to attach additional information to error messages,
/// helping users understand why a conversion failed and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use unitcast_shared::error::Context;
///
/// let note = Context::Note("`m` has dimension Distance".to_string());
/// let help = Context::Help("convert to a unit with dimension Time instead".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information or context about the error.
    ///
    /// Notes provide supplementary details that help users understand the error
    /// better, such as the dimension of each operand of a failed conversion.
    Note(String),

    /// Helpful suggestions for resolving the error.
    ///
    /// Help text provides actionable advice on how to fix the error, such as
    /// choosing units with smaller prefixes.
    Help(String),
}

impl Context {
    /// Returns the text of the context, without its kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Note(text) | Self::Help(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_ignores_kind() {
        let note = Context::Note("same".to_string());
        let help = Context::Help("same".to_string());

        assert_eq!(note.text(), help.text());
        assert_ne!(note, help);
    }
}
