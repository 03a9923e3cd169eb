//! Role labels for content records.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, IntoStaticStr};

use super::{Result, TypeError};

/// Originator of a content record.
///
/// The wire encoding is the lowercase label: `"user"` for records the
/// human produced, `"error"` for records produced by a failed upstream
/// call. The `role` fields on [`ResponseContentData`] and [`ContentData`]
/// stay free-form text for compatibility with outside producers; this
/// enumeration is the typed binding consumers opt into via
/// [`Role::from_label`] or the records' `parsed_role` accessors.
///
/// [`ResponseContentData`]: super::ResponseContentData
/// [`ContentData`]: super::ContentData
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Role {
    /// Record produced by the human user.
    User,

    /// Record produced by a failed upstream call.
    Error,
}

impl Role {
    /// Parses a free-form role label into a declared role.
    ///
    /// Matching is exact: only the two wire labels are accepted.
    pub fn from_label(label: &str) -> Result<Self> {
        label
            .parse()
            .map_err(|_| TypeError::UnknownRole(label.to_owned()))
    }

    /// Returns the wire label for this role.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns true if this is the user role.
    pub fn is_user(self) -> bool {
        self == Self::User
    }

    /// Returns true if this is the error role.
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Error.as_str(), "error");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn serde_round_trip() {
        for role in [Role::User, Role::Error] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }

        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn from_label_exact_match() {
        assert_eq!(Role::from_label("user").unwrap(), Role::User);
        assert_eq!(Role::from_label("error").unwrap(), Role::Error);

        assert!(Role::from_label("assistant").is_err());
        assert!(Role::from_label("User").is_err());
        assert!(Role::from_label("").is_err());
    }

    #[test]
    fn unknown_label_error_carries_input() {
        let error = Role::from_label("system").unwrap_err();
        assert!(matches!(error, TypeError::UnknownRole(label) if label == "system"));
    }
}
