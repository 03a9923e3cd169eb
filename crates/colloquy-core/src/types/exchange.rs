//! Recorded question/answer exchanges.

use serde::{Deserialize, Serialize};

use super::{CodeBlock, Result, Role, TypeError};
use crate::TRACING_TARGET_TYPES;

/// A question/role/answer triple recorded for one exchange.
///
/// The three fields are independent: the role label tags the record as a
/// whole and stays free-form text on the wire, and an answer may be empty
/// while the exchange is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ContentData {
    /// Question that started the exchange.
    pub question: String,

    /// Role label for this record.
    pub role: String,

    /// Answer text, empty until the exchange completes.
    pub answer: String,
}

impl ContentData {
    /// Creates a new exchange record with the given role label.
    pub fn new(
        question: impl Into<String>,
        role: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            role: role.into(),
            answer: answer.into(),
        }
    }

    /// Creates a completed user exchange.
    pub fn user(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(question, Role::User.as_str(), answer)
    }

    /// Creates an exchange whose answer is a failure description.
    pub fn error(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(question, Role::Error.as_str(), answer)
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

    /// Returns true if the exchange has an answer.
    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Extracts the fenced code blocks from the answer text.
    pub fn code_blocks(&self) -> Vec<CodeBlock> {
        CodeBlock::extract(&self.answer)
    }

    /// Validates the record.
    ///
    /// The question and role label must be non-empty; the answer may be
    /// empty while the exchange is pending.
    pub fn validate(&self) -> Result<()> {
        if self.question.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Exchange must have a question".to_string(),
            ));
        }

        if self.role.is_empty() {
            return Err(TypeError::ValidationFailed(
                "Exchange must have a role label".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let record = ContentData::user("2+2?", "4");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "question": "2+2?",
                "role": "user",
                "answer": "4",
            })
        );

        let back: ContentData = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn role_constructors() {
        let user = ContentData::user("2+2?", "4");
        let error = ContentData::error("2+2?", "rate limited");

        assert_eq!(user.parsed_role(), Some(Role::User));
        assert_eq!(error.parsed_role(), Some(Role::Error));
    }

    #[test]
    fn pending_exchange_is_valid() {
        let pending = ContentData::new("2+2?", "user", "");

        assert!(!pending.is_answered());
        assert!(pending.validate().is_ok());
    }

    #[test]
    fn validation_rejects_missing_question() {
        assert!(ContentData::new("", "user", "4").validate().is_err());
        assert!(ContentData::new("2+2?", "", "4").validate().is_err());
    }

    #[test]
    fn code_blocks_from_answer() {
        let record = ContentData::user(
            "Print x in Python",
            "Use the print function:\n\n```python\nprint('x')\n```\n",
        );

        let blocks = record.code_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_str(), "print('x')");
    }
}
