//! Payload types for the colloquy vocabulary.
//!
//! This module provides the data shapes exchanged at the application
//! boundary, including error envelopes, content records, and role labels.
//!
//! # Overview
//!
//! The types module includes:
//!
//! - **ErrorData & ErrorResponse**: upstream error payload and envelope
//! - **ResponseContentData**: one turn of an exchange
//! - **ContentData**: a recorded question/role/answer triple
//! - **Role**: originator enumeration for content records
//! - **CodeBlock**: a single code-text payload with fenced-block extraction
//!
//! # Example
//!
//! ```rust,ignore
//! use colloquy_core::types::{ContentData, ErrorData, Role};
//!
//! // Record a completed exchange
//! let record = ContentData::user("2+2?", "4");
//! assert_eq!(record.parsed_role(), Some(Role::User));
//!
//! // Describe an upstream failure
//! let error = ErrorData::rate_limited("rate limited");
//! assert!(error.is_retryable());
//! ```

mod code;
mod error;
mod exchange;
mod message;
mod role;

pub use code::CodeBlock;
pub use error::{ErrorData, ErrorResponse, error_kinds};
pub use exchange::ContentData;
pub use message::ResponseContentData;
pub use role::Role;

/// Result type alias for operations in the types module.
pub type Result<T, E = TypeError> = std::result::Result<T, E>;

/// Error type for payload operations.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// Payload validation failed.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A role label does not name a declared role.
    #[error("Unknown role label: {0}")]
    UnknownRole(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
