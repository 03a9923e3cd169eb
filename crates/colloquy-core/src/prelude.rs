//! Convenient re-exports for common use.

pub use crate::types::{
    CodeBlock, ContentData, ErrorData, ErrorResponse, ResponseContentData, Result, Role, TypeError,
};
