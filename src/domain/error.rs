//! Domain Layer - Error Taxonomy
//!
//! Every failure the client can produce is one of these variants; callers
//! never see an untyped error. Nothing here is retried or swallowed, the
//! consuming layer decides how to recover.

/// Common result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected locally, before any network call
    Validation(String),
    /// Transport failure with no HTTP status (connect, DNS, timeout)
    Network(String),
    /// Non-2xx response; carries the raw body text for diagnostics
    Http {
        status: u16,
        status_text: String,
        body: String,
    },
    /// Malformed JSON in an otherwise-successful response
    Decode(String),
    /// Missing or invalid configuration
    Config(String),
}

impl ApiError {
    /// HTTP status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http {
                status,
                status_text,
                body,
            } => {
                let body = if body.is_empty() { "no body" } else { body.as_str() };
                write!(f, "API {} {}: {}", status, status_text, body)
            }
            ApiError::Decode(msg) => write!(f, "Response decode error: {}", msg),
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "item not found".to_string(),
        };
        assert_eq!(err.to_string(), "API 404 Not Found: item not found");
    }

    #[test]
    fn test_http_error_display_without_body() {
        let err = ApiError::Http {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "API 502 Bad Gateway: no body");
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Http {
            status: 400,
            status_text: "Bad Request".to_string(),
            body: String::new(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(ApiError::Validation("too big".to_string()).status(), None);
    }
}
