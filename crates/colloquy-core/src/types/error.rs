//! Error envelope payloads returned by upstream completion APIs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Result, TypeError};

/// Well-known values of the [`ErrorData`] classifier field.
///
/// The classifier is free-form on the wire; these constants cover the
/// values upstream APIs are known to emit.
pub mod error_kinds {
    /// The caller is over its rate limit.
    pub const RATE_LIMIT: &str = "rate_limit_error";

    /// The request was malformed or referenced an unknown parameter.
    pub const INVALID_REQUEST: &str = "invalid_request_error";

    /// The API key was missing, malformed, or revoked.
    pub const AUTHENTICATION: &str = "authentication_error";

    /// The upstream service failed while handling the request.
    pub const SERVER: &str = "server_error";

    /// The account has exhausted its usage quota.
    pub const INSUFFICIENT_QUOTA: &str = "insufficient_quota";
}

/// Error payload describing a failed upstream call.
///
/// `code` and `param` are always present on the wire and serialize as
/// explicit `null` when absent, matching the upstream envelope. The
/// `type` classifier is free-form text; see [`error_kinds`] for the
/// values upstream APIs are known to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ErrorData {
    /// Machine-readable error code, if the upstream assigned one.
    pub code: Option<String>,

    /// Human-readable description of the failure.
    pub message: String,

    /// Request parameter the failure relates to, if any.
    pub param: Option<String>,

    /// Free-form error classifier.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorData {
    /// Creates a new error payload with the given classifier and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            param: None,
            kind: kind.into(),
        }
    }

    /// Creates a rate limit error payload.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(error_kinds::RATE_LIMIT, message)
    }

    /// Creates an invalid request error payload.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(error_kinds::INVALID_REQUEST, message)
    }

    /// Creates an authentication error payload.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(error_kinds::AUTHENTICATION, message)
    }

    /// Creates a server error payload.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(error_kinds::SERVER, message)
    }

    /// Adds a machine-readable code to this payload.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Adds the offending parameter name to this payload.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Returns true if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.kind == error_kinds::RATE_LIMIT
    }

    /// Returns true if this is an authentication error.
    pub fn is_authentication(&self) -> bool {
        self.kind == error_kinds::AUTHENTICATION
    }

    /// Returns true if this is an upstream server error.
    pub fn is_server_error(&self) -> bool {
        self.kind == error_kinds::SERVER
    }

    /// Returns true if retrying the request may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limited() || self.is_server_error()
    }

    /// Validates the payload.
    ///
    /// The message and classifier must both be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.message.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Error payload must have a message".to_string(),
            ));
        }

        if self.kind.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Error payload must have a classifier".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ErrorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " (code: {})", code)?;
        }

        if let Some(ref param) = self.param {
            write!(f, " [param: {}]", param)?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorData {}

/// Wrapper carrying exactly one [`ErrorData`] payload.
///
/// Represents the error view of the upstream response envelope.
#[must_use = "error responses do nothing unless serialized or surfaced"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ErrorResponse {
    /// The error payload.
    pub error: ErrorData,
}

impl ErrorResponse {
    /// Creates a new error envelope.
    pub fn new(error: ErrorData) -> Self {
        Self { error }
    }

    /// Parses an error envelope from a raw JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_inner(self) -> ErrorData {
        self.error
    }

    /// Validates the nested payload.
    pub fn validate(&self) -> Result<()> {
        self.error.validate()
    }
}

impl From<ErrorData> for ErrorResponse {
    fn from(error: ErrorData) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for ErrorResponse {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
