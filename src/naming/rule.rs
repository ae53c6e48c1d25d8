//! Naming rule value type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::naming::token::Token;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Za-z0-9_]+\}").expect("valid placeholder regex"));

/// A user-written naming rule such as `pixiv/{user}/{id}-{title}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule(String);

impl NamingRule {
    pub fn new(rule: impl Into<String>) -> Self {
        Self(rule.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Known tokens used by the rule, in order of first appearance.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for m in PLACEHOLDER.find_iter(&self.0) {
            if let Some(token) = Token::from_literal(m.as_str()) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }
        tokens
    }

    /// `{word}` placeholders that are not known tokens.
    pub fn unknown_tokens(&self) -> Vec<String> {
        PLACEHOLDER
            .find_iter(&self.0)
            .map(|m| m.as_str())
            .filter(|literal| Token::from_literal(literal).is_none())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let rule = NamingRule::new("{user}/{id}-{title}-{id}");
        assert_eq!(rule.tokens(), vec![Token::User, Token::Id, Token::Title]);
    }

    #[test]
    fn test_unknown_tokens() {
        let rule = NamingRule::new("{user}/{author}/{ID}-{id}");
        assert_eq!(rule.unknown_tokens(), vec!["{author}", "{ID}"]);
        assert!(NamingRule::new("{bmk_1000}{tags_transl_only}")
            .unknown_tokens()
            .is_empty());
    }
}
