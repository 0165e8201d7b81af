// -------------------------------------------------------------------------------------------------
// TemplateError
// -------------------------------------------------------------------------------------------------
/// Problems detected in a format template before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },

    #[error("unmatched `}}` at byte {offset}; use `}}}}` for a literal brace")]
    UnmatchedClose { offset: usize },

    #[error("unsupported placeholder {placeholder:?} at byte {offset}")]
    BadPlaceholder { offset: usize, placeholder: String },

    #[error("template takes {expected} {}, but {actual} {} given",
            counted(.expected, "argument", "arguments"),
            counted(.actual, "was", "were"))]
    ArityMismatch { expected: usize, actual: usize },
}

fn counted<'a>(n: &usize, singular: &'a str, plural: &'a str) -> &'a str {
    if *n == 1 { singular } else { plural }
}

impl TemplateError {
    /// The byte offset into the template source where the problem was found, if there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            TemplateError::Unterminated { offset }
            | TemplateError::UnmatchedClose { offset }
            | TemplateError::BadPlaceholder { offset, .. } => Some(*offset),
            TemplateError::ArityMismatch { .. } => None,
        }
    }
}
