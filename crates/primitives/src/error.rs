use crate::models::enum_types::Operation;
use reqwest::StatusCode;
use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum ApiError {
    /// Rejected locally, before anything was sent to the gateway.
    InvalidArgument(ValidationErrors),
    Gateway(GatewayError),
}

#[derive(Debug)]
pub enum GatewayError {
    Rejected {
        operation: Operation,
        status: StatusCode,
        body: String,
    },
    UnexpectedResponse {
        operation: Operation,
        reason: String,
        body: String,
    },
    Unreachable {
        operation: Operation,
        source: reqwest::Error,
    },
}

impl GatewayError {
    pub fn operation(&self) -> Operation {
        match self {
            GatewayError::Rejected { operation, .. }
            | GatewayError::UnexpectedResponse { operation, .. }
            | GatewayError::Unreachable { operation, .. } => *operation,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Rejected { status, .. } => Some(*status),
            GatewayError::Unreachable { source, .. } => source.status(),
            GatewayError::UnexpectedResponse { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { body, .. } | GatewayError::UnexpectedResponse { body, .. } => {
                Some(body)
            }
            GatewayError::Unreachable { .. } => None,
        }
    }

    /// True when no HTTP response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Unreachable { .. })
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Rejected {
                operation, status, ..
            } => write!(f, "Failed to {}: gateway returned {}", operation, status),
            GatewayError::UnexpectedResponse {
                operation, reason, ..
            } => write!(f, "Failed to {}: {}", operation, reason),
            GatewayError::Unreachable { operation, source } => {
                write!(f, "Failed to {}: gateway unreachable: {}", operation, source)
            }
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Unreachable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ApiError {
    pub fn as_gateway(&self) -> Option<&GatewayError> {
        match self {
            ApiError::Gateway(e) => Some(e),
            ApiError::InvalidArgument(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            ApiError::Gateway(e) => write!(f, "Gateway error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::InvalidArgument(e) => Some(e),
            ApiError::Gateway(e) => Some(e),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::InvalidArgument(err)
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Gateway(err)
    }
}
