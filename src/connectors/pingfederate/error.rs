use thiserror::Error;

/// PingFederate admin API errors.
///
/// SECURITY: Error messages must NEVER contain the admin password.
#[derive(Debug, Error)]
pub enum PingFederateError {
    /// Credentials rejected (401)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Any other non-success response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection failed, timed out, etc.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success response whose body is not the expected JSON
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("discovery failed for {resource_type}: {message}")]
    DiscoveryFailed {
        resource_type: String,
        message: String,
    },
}

impl From<crate::connectors::ResponseError> for PingFederateError {
    fn from(err: crate::connectors::ResponseError) -> Self {
        use crate::connectors::ResponseError;

        match err {
            ResponseError::Unauthorized { message } => PingFederateError::Auth { message },
            ResponseError::Status { status, message } => PingFederateError::Api { status, message },
            ResponseError::Decode { path, message } => PingFederateError::Decode { path, message },
        }
    }
}

impl From<PingFederateError> for crate::connectors::ConnectorError {
    fn from(err: PingFederateError) -> Self {
        crate::connectors::ConnectorError::PingFederate(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = PingFederateError::Auth {
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "authentication failed: Invalid credentials");
    }

    #[test]
    fn test_api_error_display() {
        let err = PingFederateError::Api {
            status: 422,
            message: "Validation error(s) occurred.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (422): Validation error(s) occurred."
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = PingFederateError::Decode {
            path: "/oauth/clients".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to decode response from /oauth/clients: expected value"
        );
    }

    #[test]
    fn test_discovery_failed_display() {
        let err = PingFederateError::DiscoveryFailed {
            resource_type: "pingfederate_idp_adapter".to_string(),
            message: "missing field `id`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "discovery failed for pingfederate_idp_adapter: missing field `id`"
        );
    }

    #[test]
    fn test_conversion_to_connector_error() {
        let err = PingFederateError::Auth {
            message: "test error".to_string(),
        };
        let connector_err: crate::connectors::ConnectorError = err.into();

        assert!(matches!(
            connector_err,
            crate::connectors::ConnectorError::PingFederate(_)
        ));
        assert!(connector_err.to_string().contains("authentication failed"));
    }
}
