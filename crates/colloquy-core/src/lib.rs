#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for payload type operations.
pub const TRACING_TARGET_TYPES: &str = "colloquy_core::types";

pub mod prelude;
pub mod types;

// Re-export key types for convenience
pub use types::{CodeBlock, ContentData, ErrorData, ErrorResponse, ResponseContentData, Role};
