use thiserror::Error;

/// PingOne management API errors.
///
/// SECURITY: Error messages must NEVER contain the access token.
#[derive(Debug, Error)]
pub enum PingOneError {
    /// Token rejected or expired (401)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("discovery failed for {resource_type}: {message}")]
    DiscoveryFailed {
        resource_type: String,
        message: String,
    },
}

impl From<crate::connectors::ResponseError> for PingOneError {
    fn from(err: crate::connectors::ResponseError) -> Self {
        use crate::connectors::ResponseError;

        match err {
            ResponseError::Unauthorized { message } => PingOneError::Auth { message },
            ResponseError::Status { status, message } => PingOneError::Api { status, message },
            ResponseError::Decode { path, message } => PingOneError::Decode { path, message },
        }
    }
}

impl From<PingOneError> for crate::connectors::ConnectorError {
    fn from(err: PingOneError) -> Self {
        crate::connectors::ConnectorError::PingOne(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = PingOneError::Auth {
            message: "The request could not be completed. You do not have access to this resource."
                .to_string(),
        };
        assert!(err.to_string().starts_with("authentication failed: "));
    }

    #[test]
    fn test_api_error_display() {
        let err = PingOneError::Api {
            status: 404,
            message: "Unable to find environment".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Unable to find environment");
    }

    #[test]
    fn test_error_does_not_contain_token() {
        let fake_token = "eyJhbGciOiJSUzI1NiJ9.secret";
        let err = PingOneError::Auth {
            message: "Invalid access token".to_string(),
        };

        assert!(
            !err.to_string().contains(fake_token),
            "Error message should not contain token value"
        );
    }

    #[test]
    fn test_conversion_to_connector_error() {
        let err = PingOneError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let connector_err: crate::connectors::ConnectorError = err.into();

        assert!(matches!(
            connector_err,
            crate::connectors::ConnectorError::PingOne(_)
        ));
        assert_eq!(connector_err.to_string(), "pingone error: API error (500): boom");
    }
}
