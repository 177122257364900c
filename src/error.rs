//! Error types for the JNI boundary.

use std::fmt;

/// Result type for boundary operations.
pub type Result<T> = std::result::Result<T, FfiError>;

/// Errors that can occur while handing a value to the host.
#[derive(Debug)]
pub enum FfiError {
    /// The host VM could not materialize the managed string.
    StringAlloc(String),
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiError::StringAlloc(m) => write!(f, "String allocation failed: {}", m),
        }
    }
}

impl std::error::Error for FfiError {}

impl From<jni::errors::Error> for FfiError {
    fn from(err: jni::errors::Error) -> Self {
        FfiError::StringAlloc(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_alloc_display() {
        let err = FfiError::StringAlloc("out of memory".into());
        assert_eq!(err.to_string(), "String allocation failed: out of memory");
    }
}
