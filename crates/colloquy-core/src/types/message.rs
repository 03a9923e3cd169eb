//! Response content records.

use serde::{Deserialize, Serialize};

use super::{Result, Role, TypeError};
use crate::TRACING_TARGET_TYPES;

/// One turn of an exchange as returned by the completion endpoint.
///
/// The role label is free-form text on the wire; producers outside this
/// crate are not bound to the [`Role`] enumeration. Use
/// [`parsed_role`](Self::parsed_role) when a typed role is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ResponseContentData {
    /// Role label of the party that produced this turn.
    pub role: String,

    /// Content body of the turn.
    pub content: String,
}

impl ResponseContentData {
    /// Creates a new content record with the given role label.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User.as_str(), content)
    }

    /// Creates an error turn carrying a failure description.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Role::Error.as_str(), content)
    }

    /// Binds the free-form role label to a declared [`Role`].
    ///
    /// Returns `None` when the label does not name a declared role.
    pub fn parsed_role(&self) -> Option<Role> {
        match Role::from_label(&self.role) {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::debug!(
                    target: TRACING_TARGET_TYPES,
                    role = %self.role,
                    "role label does not name a declared role"
                );
                None
            }
        }
    }

    /// Returns true if this turn was produced by the given role.
    pub fn is_from(&self, role: Role) -> bool {
        self.parsed_role() == Some(role)
    }

    /// Validates the record.
    ///
    /// The role label and content body must both be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.role.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Turn must have a role label".to_string(),
            ));
        }

        if self.content.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Turn content cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
