use std::fmt;

/// How a single fetch failed.
///
/// Every failure is absorbed at the fetch level; the kind only decides
/// whether a retry is attempted and how the failure is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The remote answered with a non-2xx status. Never retried.
    HttpStatus,
    /// No valid response was received (connect, DNS, timeout, body read).
    Transport,
    /// A 2xx response whose body is not a JSON document.
    Decode,
    /// Anything else: invalid URL, request building, closed client, panics.
    Unexpected,
}

impl FailureKind {
    /// Only transport failures earn the single extra attempt.
    pub fn is_retryable(self) -> bool {
        matches!(self, FailureKind::Transport)
    }

    /// Prefix used in the per-fetch error log line.
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::HttpStatus => "HTTP error",
            FailureKind::Transport => "Request error",
            FailureKind::Decode | FailureKind::Unexpected => "Unexpected error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_is_retryable() {
        assert!(FailureKind::Transport.is_retryable());
        assert!(!FailureKind::HttpStatus.is_retryable());
        assert!(!FailureKind::Decode.is_retryable());
        assert!(!FailureKind::Unexpected.is_retryable());
    }

    #[test]
    fn test_decode_is_logged_as_unexpected() {
        assert_eq!(FailureKind::Decode.to_string(), "Unexpected error");
        assert_eq!(FailureKind::HttpStatus.to_string(), "HTTP error");
    }
}
