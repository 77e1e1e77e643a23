use thiserror::Error;

/// Errors produced when parsing Geoff input.
///
/// Every variant is fatal to the enclosing parse call: no partial rule list
/// is ever returned. Offsets are byte offsets into the original input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An unrecognized character or unterminated delimiter in statement
    /// syntax.
    #[error("lexical error at offset {offset}: {message}")]
    Lex { offset: usize, message: String },

    /// A token sequence that does not form a recognized statement shape.
    /// `pattern` is the signature of the offending sequence, e.g. `N-R`.
    #[error("unrecognized statement shape `{pattern}`")]
    Grammar { pattern: String },

    /// A malformed JSON payload or rule-set literal. `offset` points at the
    /// start of the literal; the message carries the decoder's own position.
    #[error("JSON error at offset {offset}: {message}")]
    Json { offset: usize, message: String },
}
