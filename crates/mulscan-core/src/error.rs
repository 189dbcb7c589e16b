//! Errors from scanning and summation.

/// Errors raised while scanning a source or recording matches.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An operand, product, or running sum does not fit in `u128`.
    #[error("arithmetic overflow at {literal}")]
    Overflow { literal: String },
}

impl ScanError {
    pub(crate) fn overflow(literal: &str) -> Self {
        Self::Overflow {
            literal: literal.to_string(),
        }
    }
}
