//! Placeholder tokens and their per-invocation bindings.

use crate::fs::replace_unsafe_str;

/// Every placeholder a naming rule may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    PageTitle,
    PageTag,
    Id,
    IdNum,
    PageNum,
    Rank,
    Title,
    User,
    UserIdShort,
    UserId,
    Px,
    Tags,
    TagsTranslate,
    TagsTranslOnly,
    Bookmark,
    BookmarkTier,
    Like,
    View,
    Date,
    TaskDate,
    Type,
    SeriesTitle,
    SeriesOrder,
}

impl Token {
    pub const COUNT: usize = 23;

    pub const ALL: [Token; Token::COUNT] = [
        Token::PageTitle,
        Token::PageTag,
        Token::Id,
        Token::IdNum,
        Token::PageNum,
        Token::Rank,
        Token::Title,
        Token::User,
        Token::UserIdShort,
        Token::UserId,
        Token::Px,
        Token::Tags,
        Token::TagsTranslate,
        Token::TagsTranslOnly,
        Token::Bookmark,
        Token::BookmarkTier,
        Token::Like,
        Token::View,
        Token::Date,
        Token::TaskDate,
        Token::Type,
        Token::SeriesTitle,
        Token::SeriesOrder,
    ];

    /// Exact text of the placeholder, braces included.
    pub fn literal(self) -> &'static str {
        match self {
            Token::PageTitle => "{p_title}",
            Token::PageTag => "{p_tag}",
            Token::Id => "{id}",
            Token::IdNum => "{id_num}",
            Token::PageNum => "{p_num}",
            Token::Rank => "{rank}",
            Token::Title => "{title}",
            Token::User => "{user}",
            Token::UserIdShort => "{userid}",
            Token::UserId => "{user_id}",
            Token::Px => "{px}",
            Token::Tags => "{tags}",
            Token::TagsTranslate => "{tags_translate}",
            Token::TagsTranslOnly => "{tags_transl_only}",
            Token::Bookmark => "{bmk}",
            Token::BookmarkTier => "{bmk_1000}",
            Token::Like => "{like}",
            Token::View => "{view}",
            Token::Date => "{date}",
            Token::TaskDate => "{task_date}",
            Token::Type => "{type}",
            Token::SeriesTitle => "{series_title}",
            Token::SeriesOrder => "{series_order}",
        }
    }

    /// Label prepended to the value when token prefixes are enabled.
    pub fn prefix(self) -> &'static str {
        match self {
            Token::Title => "title_",
            Token::User => "user_",
            Token::UserIdShort | Token::UserId => "uid_",
            Token::Tags | Token::TagsTranslate | Token::TagsTranslOnly => "tags_",
            Token::Bookmark | Token::BookmarkTier => "bmk_",
            Token::Like => "like_",
            Token::View => "view_",
            _ => "",
        }
    }

    /// Whether values of this token never contain unsafe characters.
    pub fn is_safe(self) -> bool {
        !matches!(
            self,
            Token::PageTitle
                | Token::PageTag
                | Token::Title
                | Token::User
                | Token::Tags
                | Token::TagsTranslate
                | Token::TagsTranslOnly
                | Token::Date
                | Token::TaskDate
                | Token::SeriesTitle
        )
    }

    /// Look up a token by its exact literal.
    pub fn from_literal(literal: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.literal() == literal)
    }

    /// The token whose literal starts `text`, if any.
    ///
    /// Literals all end with `}`, so at most one can match.
    pub fn match_start(text: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|t| text.starts_with(t.literal()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which tokens a rule mentions, computed once per invocation.
#[derive(Debug, Clone, Copy)]
pub struct ReferencedTokens([bool; Token::COUNT]);

impl ReferencedTokens {
    pub fn scan(rule: &str) -> Self {
        Self(Token::ALL.map(|token| rule.contains(token.literal())))
    }

    pub fn contains(&self, token: Token) -> bool {
        self.0[token.index()]
    }
}

/// Resolved value of one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBinding {
    /// `None` when the value was not computed or does not exist.
    pub value: Option<String>,
    pub prefix: &'static str,
    /// Safe values skip the unsafe-character filter.
    pub safe: bool,
}

impl TokenBinding {
    fn absent(token: Token) -> Self {
        Self {
            value: None,
            prefix: token.prefix(),
            safe: token.is_safe(),
        }
    }

    /// Text substituted for the token.
    pub fn replacement(&self, add_prefix: bool) -> String {
        let value = self.value.as_deref().unwrap_or("");
        let value = if self.safe {
            value.to_string()
        } else {
            replace_unsafe_str(value)
        };

        if add_prefix {
            format!("{}{}", self.prefix, value)
        } else {
            value
        }
    }
}

/// Bindings for every token.
#[derive(Debug, Clone)]
pub struct TokenTable {
    bindings: [TokenBinding; Token::COUNT],
}

impl TokenTable {
    /// A table with every token absent.
    pub fn new() -> Self {
        Self {
            bindings: Token::ALL.map(TokenBinding::absent),
        }
    }

    pub fn set(&mut self, token: Token, value: Option<String>) {
        self.bindings[token.index()].value = value;
    }

    pub fn get(&self, token: Token) -> &TokenBinding {
        &self.bindings[token.index()]
    }

    /// Number of tokens holding a value.
    pub fn resolved_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.value.is_some()).count()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::new()
    }
}
