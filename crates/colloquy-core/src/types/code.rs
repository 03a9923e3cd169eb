//! Code block payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_TYPES;

/// Matches one fenced code block: an opening triple-backtick fence with
/// optional info string, the body, and a closing fence or end of input.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```[^\n]*\n(.*?)(?:^```[ \t\r]*$|\z)").expect("fence pattern is valid")
});

/// A single code-text payload.
///
/// Carries the body of one fenced code block lifted out of answer text,
/// without the fences or the info string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CodeBlock {
    /// The code text.
    pub code_block: String,
}

impl CodeBlock {
    /// Creates a new code block from the given text.
    pub fn new(code_block: impl Into<String>) -> Self {
        Self {
            code_block: code_block.into(),
        }
    }

    /// Returns the code text.
    pub fn as_str(&self) -> &str {
        &self.code_block
    }

    /// Returns true if the block carries no text.
    pub fn is_empty(&self) -> bool {
        self.code_block.is_empty()
    }

    /// Returns the number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.code_block.lines().count()
    }

    /// Extracts all fenced code blocks from markdown-style text.
    ///
    /// The info string on the opening fence is dropped. An unterminated
    /// fence captures through the end of the input.
    pub fn extract(text: &str) -> Vec<Self> {
        let blocks: Vec<Self> = FENCED_BLOCK
            .captures_iter(text)
            .map(|caps| {
                let body = caps[1].strip_suffix('\n').unwrap_or(&caps[1]);
                let body = body.strip_suffix('\r').unwrap_or(body);
                Self::new(body)
            })
            .collect();

        tracing::trace!(
            target: TRACING_TARGET_TYPES,
            count = blocks.len(),
            "extracted fenced code blocks"
        );

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let block = CodeBlock::new("print('x')");
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json, serde_json::json!({ "codeBlock": "print('x')" }));

        let back: CodeBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn extract_single_block() {
        let text = "Use the print function:\n\n```python\nprint('x')\n```\n";
        let blocks = CodeBlock::extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_str(), "print('x')");
    }

    #[test]
    fn extract_multiple_blocks() {
        let text = "\
First:

```rust
let x = 1;
let y = 2;
```

Second:

```
echo hi
```
";
        let blocks = CodeBlock::extract(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_str(), "let x = 1;\nlet y = 2;");
        assert_eq!(blocks[0].line_count(), 2);
        assert_eq!(blocks[1].as_str(), "echo hi");
    }

    #[test]
    fn extract_unterminated_fence() {
        let text = "```\nlet x = 1;";
        let blocks = CodeBlock::extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_str(), "let x = 1;");
    }

    #[test]
    fn extract_without_fences() {
        assert!(CodeBlock::extract("no code here").is_empty());
        assert!(CodeBlock::extract("").is_empty());
    }

    #[test]
    fn empty_block() {
        let blocks = CodeBlock::extract("```\n```\n");

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
        assert_eq!(blocks[0].line_count(), 0);
    }
}
