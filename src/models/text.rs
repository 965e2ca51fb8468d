//! Text in two registers: standard wording and easy-read wording.

use serde::{Deserialize, Serialize};

/// Which wording the reader has asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRegister {
    /// Standard wording
    #[default]
    Standard,
    /// Simplified vocabulary
    EasyRead,
}

/// A piece of user-visible text with both registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Canonical wording (also used for search)
    pub standard: String,
    /// Easy-read alternative
    pub easy_read: String,
}

impl Text {
    /// Creates a text pair.
    pub fn new(standard: impl Into<String>, easy_read: impl Into<String>) -> Self {
        Self {
            standard: standard.into(),
            easy_read: easy_read.into(),
        }
    }

    /// Wording for `register`.
    #[must_use]
    pub fn get(&self, register: TextRegister) -> &str {
        match register {
            TextRegister::Standard => &self.standard,
            TextRegister::EasyRead => &self.easy_read,
        }
    }
}

/// Picks between a standard and an easy-read literal.
#[must_use]
pub const fn pick<'a>(register: TextRegister, standard: &'a str, easy_read: &'a str) -> &'a str {
    match register {
        TextRegister::Standard => standard,
        TextRegister::EasyRead => easy_read,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_get() {
        let text = Text::new("Services Directory", "Who Can Help");
        assert_eq!(text.get(TextRegister::Standard), "Services Directory");
        assert_eq!(text.get(TextRegister::EasyRead), "Who Can Help");
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick(TextRegister::EasyRead, "Clear All", "Delete All"), "Delete All");
        assert_eq!(pick(TextRegister::Standard, "Clear All", "Delete All"), "Clear All");
    }
}
