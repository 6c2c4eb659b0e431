use std::fmt;

use crate::shorthand::ShorthandError;

/// Central error type for the http2curl application
///
/// Only two things can go wrong for a whole invocation: no tokens were
/// supplied at all, or the rendered request could not be serialized. Malformed
/// individual tokens are not errors; the parser ignores them.
#[derive(Debug, Clone)]
pub enum Http2CurlError {
    /// No shorthand tokens were supplied
    Usage,
    /// Rendering the curl arguments failed
    Render(ShorthandError),
}

impl fmt::Display for Http2CurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Http2CurlError::Usage => write!(f, "usage: http2curl [...httpie args]"),
            Http2CurlError::Render(_) => write!(f, "invalid httpie args"),
        }
    }
}

impl std::error::Error for Http2CurlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Http2CurlError::Usage => None,
            Http2CurlError::Render(err) => Some(err),
        }
    }
}

impl From<ShorthandError> for Http2CurlError {
    fn from(err: ShorthandError) -> Self {
        Http2CurlError::Render(err)
    }
}

impl Http2CurlError {
    /// Provides a helpful suggestion for how to fix the error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Http2CurlError::Usage => {
                Some("Example: http2curl post http://example.com name=john age:=30")
            }
            Http2CurlError::Render(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let err = Http2CurlError::Usage;
        assert!(err.to_string().contains("usage:"));
    }

    #[test]
    fn test_render_error_display_is_generic() {
        let err = Http2CurlError::Render(ShorthandError::Serialization("boom".to_string()));
        assert_eq!(err.to_string(), "invalid httpie args");
    }

    #[test]
    fn test_render_error_keeps_source() {
        use std::error::Error;
        let err = Http2CurlError::Render(ShorthandError::Serialization("boom".to_string()));
        assert!(err.source().unwrap().to_string().contains("boom"));
    }

    #[test]
    fn test_suggestion_coverage() {
        assert!(Http2CurlError::Usage.suggestion().is_some());
        let render = Http2CurlError::Render(ShorthandError::Serialization("x".to_string()));
        assert!(render.suggestion().is_none());
    }

    #[test]
    fn test_error_conversion() {
        let err: Http2CurlError = ShorthandError::Serialization("x".to_string()).into();
        assert!(matches!(err, Http2CurlError::Render(_)));
    }
}
