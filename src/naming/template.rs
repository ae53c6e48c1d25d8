//! Replaces placeholder tokens in a naming rule.

use crate::naming::normalize::collapse_separators;
use crate::naming::token::{Token, TokenTable};

/// Characters that may not start a generated path.
const FORBIDDEN_START_CHARS: &[char] = &['/', ' '];

/// Substitute every token occurrence in `rule` with its binding.
///
/// The rule is scanned once from left to right, so text coming from a value
/// is never matched as a token. Unknown `{...}` sequences stay literal.
pub fn substitute(rule: &str, table: &TokenTable, add_prefix: bool) -> String {
    let mut result = String::with_capacity(rule.len());
    let mut rest = rule;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match Token::match_start(candidate) {
            Some(token) => {
                result.push_str(&table.get(token).replacement(add_prefix));
                rest = &candidate[token.literal().len()..];
            }
            None => {
                result.push('{');
                rest = &candidate[1..];
            }
        }
    }
    result.push_str(rest);

    tidy(&result)
}

/// Edge cleanup after substitution.
///
/// Strips forbidden leading characters until none is left, drops one
/// trailing `/` and collapses repeated separators.
fn tidy(name: &str) -> String {
    let name = name.trim_start_matches(FORBIDDEN_START_CHARS);
    let name = name.strip_suffix('/').unwrap_or(name);
    collapse_separators(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TokenTable {
        let mut table = TokenTable::new();
        table.set(Token::Id, Some("100_p0".to_string()));
        table.set(Token::User, Some("alice".to_string()));
        table.set(Token::UserId, Some("42".to_string()));
        table.set(Token::Title, Some("Sun/set".to_string()));
        table.set(Token::Tags, Some("a/b,c".to_string()));
        table
    }

    #[test]
    fn test_basic_substitution() {
        assert_eq!(
            substitute("pixiv/{user}-{user_id}/{id}", &table(), false),
            "pixiv/alice-42/100_p0"
        );
    }

    #[test]
    fn test_repeated_tokens_all_replaced() {
        assert_eq!(substitute("{id}-{id}-{id}", &table(), false), "100_p0-100_p0-100_p0");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(
            substitute("{user}_{user_id}_{id}", &table(), true),
            "user_alice_uid_42_100_p0"
        );
    }

    #[test]
    fn test_unsafe_values_cannot_add_folders() {
        assert_eq!(substitute("{tags}", &table(), false), "a／b,c");
        assert_eq!(substitute("{user}/{title}", &table(), false), "alice/Sun／set");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut table = table();
        table.set(Token::Title, Some("{id}".to_string()));
        assert_eq!(substitute("{title}-{id}", &table, false), "{id}-100_p0");
    }

    #[test]
    fn test_unknown_tokens_stay_literal() {
        assert_eq!(
            substitute("{nope}{id}{ID}{", &table(), false),
            "{nope}100_p0{ID}{"
        );
    }

    #[test]
    fn test_absent_value_is_empty() {
        assert_eq!(substitute("{rank}{id}", &table(), false), "100_p0");
    }

    #[test]
    fn test_leading_characters_stripped_repeatedly() {
        let mut table = table();
        table.set(Token::PageTag, Some(String::new()));
        assert_eq!(
            substitute(" / / {p_tag} / {id}", &table, false),
            "100_p0"
        );
    }

    #[test]
    fn test_trailing_and_repeated_separators() {
        let mut table = table();
        table.set(Token::Rank, Some(String::new()));
        assert_eq!(substitute("{user}/{rank}/{id}/", &table, false), "alice/100_p0");
    }
}
