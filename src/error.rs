use thiserror::Error;

/// Broad classification used to pick the notice a failure produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    Config,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PulseError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PulseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PulseError::Network(_) | PulseError::Status { .. } | PulseError::Decode(_) => {
                ErrorKind::Network
            }
            PulseError::Validation(_) => ErrorKind::Validation,
            PulseError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<reqwest::Error> for PulseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PulseError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            PulseError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            PulseError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for PulseError {
    fn from(err: url::ParseError) -> Self {
        PulseError::Network(format!("Invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_and_status_are_network_kind() {
        assert_eq!(PulseError::Network("offline".into()).kind(), ErrorKind::Network);
        let status = PulseError::Status {
            status: 500,
            url: "http://localhost/api/products".into(),
        };
        assert_eq!(status.kind(), ErrorKind::Network);
        assert_eq!(PulseError::Decode("eof".into()).kind(), ErrorKind::Network);
    }

    #[test]
    fn test_validation_kind_and_message() {
        let err = PulseError::Validation("Please select at least 2 products to compare.".into());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Please select at least 2 products to compare.");
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = PulseError::Status {
            status: 404,
            url: "http://localhost/api/compare".into(),
        };
        let s = err.to_string();
        assert!(s.contains("404"), "got: {}", s);
    }
}
