use std::fmt;

/// Failure modes of the shorthand pipeline
///
/// Token-level problems are never errors (the parser ignores what it cannot
/// classify); only the renderer can fail, and only while encoding the JSON
/// body.
#[derive(Debug, Clone)]
pub enum ShorthandError {
    /// The JSON body could not be serialized
    Serialization(String),
}

impl fmt::Display for ShorthandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShorthandError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ShorthandError {}
