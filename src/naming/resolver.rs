//! Computes the value of every token for one work.

use crate::config::NamingSettings;
use crate::fs::format_date;
use crate::naming::token::{ReferencedTokens, Token, TokenTable};
use crate::work::{CrawlContext, Rank, WorkRecord};

/// Resolve all tokens for `work`.
///
/// Tokens that are costly to compute (tag lists, dates, dimensions, rank and
/// page number) are left absent unless `referenced` says the active rule uses
/// them.
pub fn resolve_tokens(
    work: &WorkRecord,
    context: &CrawlContext,
    settings: &NamingSettings,
    referenced: &ReferencedTokens,
) -> TokenTable {
    let mut table = TokenTable::new();

    table.set(Token::PageTitle, Some(context.page_title.clone()));
    table.set(Token::PageTag, Some(context.page_tag.clone()));
    table.set(Token::Id, Some(create_id(work, settings)));
    table.set(Token::IdNum, Some(work.numeric_id().to_string()));
    table.set(
        Token::PageNum,
        on_demand(referenced, Token::PageNum, || create_page_num(work, settings)),
    );
    table.set(
        Token::Rank,
        if referenced.contains(Token::Rank) {
            create_rank(work.rank.as_ref())
        } else {
            None
        },
    );
    table.set(Token::Title, Some(work.title.clone()));
    table.set(Token::User, Some(work.user.clone()));
    table.set(Token::UserIdShort, Some(work.user_id.clone()));
    table.set(Token::UserId, Some(work.user_id.clone()));
    table.set(
        Token::Px,
        on_demand(referenced, Token::Px, || {
            work.dimensions()
                .map(|(w, h)| format!("{}x{}", w, h))
                .unwrap_or_default()
        }),
    );
    table.set(Token::Tags, on_demand(referenced, Token::Tags, || work.tags.join(",")));
    table.set(
        Token::TagsTranslate,
        on_demand(referenced, Token::TagsTranslate, || work.tags_with_transl.join(",")),
    );
    table.set(
        Token::TagsTranslOnly,
        on_demand(referenced, Token::TagsTranslOnly, || work.tags_transl_only.join(",")),
    );
    table.set(Token::Bookmark, Some(work.bmk.to_string()));
    table.set(Token::BookmarkTier, Some(bookmark_tier(work.bmk)));
    table.set(Token::Like, Some(work.like_count.to_string()));
    table.set(Token::View, Some(work.view_count.to_string()));
    table.set(
        Token::Date,
        on_demand(referenced, Token::Date, || format_date(&work.date, &settings.date_format)),
    );
    table.set(
        Token::TaskDate,
        on_demand(referenced, Token::TaskDate, || {
            format_date(&context.crawl_complete_time, &settings.date_format)
        }),
    );
    table.set(Token::Type, Some(work.work_type.display_name().to_string()));
    table.set(
        Token::SeriesTitle,
        Some(work.series_title.clone().unwrap_or_default()),
    );
    table.set(
        Token::SeriesOrder,
        Some(
            work.series_order
                .map(|order| format!("#{}", order))
                .unwrap_or_default(),
        ),
    );

    table
}

fn on_demand(
    referenced: &ReferencedTokens,
    token: Token,
    compute: impl FnOnce() -> String,
) -> Option<String> {
    referenced.contains(token).then(compute)
}

/// `{rank}`: `#<n>`, or the stored text for pre-formatted ranks.
fn create_rank(rank: Option<&Rank>) -> Option<String> {
    match rank? {
        Rank::Position(n) => Some(format!("#{}", n)),
        Rank::Formatted(s) => Some(s.clone()),
    }
}

fn omits_serial_no(work: &WorkRecord, settings: &NamingSettings) -> bool {
    work.page_index() == 0 && settings.no_serial_no
}

fn pad_index(index: u32, settings: &NamingSettings) -> String {
    format!("{:0>width$}", index, width = settings.zero_padding_length)
}

/// `{p_num}`: the page index; empty for unpaginated types.
fn create_page_num(work: &WorkRecord, settings: &NamingSettings) -> String {
    if omits_serial_no(work, settings) || !work.work_type.is_paginated() {
        return String::new();
    }

    let index = work.page_index();
    if settings.zero_padding {
        pad_index(index, settings)
    } else {
        index.to_string()
    }
}

/// `{id}`: display id, bare numeric id, or `<id>_p<padded index>`.
fn create_id(work: &WorkRecord, settings: &NamingSettings) -> String {
    if omits_serial_no(work, settings) {
        return work.numeric_id().to_string();
    }

    if settings.zero_padding && work.work_type.is_paginated() {
        format!(
            "{}_p{}",
            work.numeric_id(),
            pad_index(work.page_index(), settings)
        )
    } else {
        work.id.clone()
    }
}

/// `{bmk_1000}`: drops the last three digits, `2345` becomes `2000+`.
pub fn bookmark_tier(bmk: u64) -> String {
    if bmk < 1000 {
        return "0+".to_string();
    }

    let digits = bmk.to_string();
    format!("{}000+", &digits[..digits.len() - 3])
}
