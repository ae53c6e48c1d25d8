//! Work record representation.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::work::parser::{index_from_display_id, leading_number};

/// Type of a crawled work.
///
/// Deserializes from the lowercase name or from the numeric code the crawl
/// cache stores (`0` illustration through `3` novel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Illustration,
    Manga,
    Ugoira,
    Novel,
}

impl WorkType {
    /// Every work type, in display order.
    pub const ALL: [WorkType; 4] = [
        WorkType::Illustration,
        WorkType::Manga,
        WorkType::Ugoira,
        WorkType::Novel,
    ];

    /// Display name used by `{type}` and the per-type folder.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkType::Illustration => "Illustration",
            WorkType::Manga => "Manga",
            WorkType::Ugoira => "Ugoira",
            WorkType::Novel => "Novel",
        }
    }

    /// Whether works of this type are split into numbered pages.
    pub fn is_paginated(&self) -> bool {
        matches!(self, WorkType::Illustration | WorkType::Manga)
    }

    fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(WorkType::Illustration),
            1 => Some(WorkType::Manga),
            2 => Some(WorkType::Ugoira),
            3 => Some(WorkType::Novel),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "illustration" => Some(WorkType::Illustration),
            "manga" => Some(WorkType::Manga),
            "ugoira" | "animation" => Some(WorkType::Ugoira),
            "novel" | "text" => Some(WorkType::Novel),
            _ => None,
        }
    }
}

struct WorkTypeVisitor;

impl<'de> Visitor<'de> for WorkTypeVisitor {
    type Value = WorkType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a work type name or a code from 0 to 3")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<WorkType, E> {
        WorkType::from_code(v).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<WorkType, E> {
        u64::try_from(v)
            .ok()
            .and_then(WorkType::from_code)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<WorkType, E> {
        WorkType::from_name(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for WorkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WorkTypeVisitor)
    }
}

/// Content restriction level.
///
/// Cached records store it as `0`, `1` or `2`; names are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Restriction {
    #[default]
    #[serde(rename = "none")]
    AllAges,
    #[serde(rename = "r18")]
    R18,
    #[serde(rename = "r18g")]
    R18G,
}

impl Restriction {
    pub fn is_restricted(&self) -> bool {
        !matches!(self, Restriction::AllAges)
    }

    fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Restriction::AllAges),
            1 => Some(Restriction::R18),
            2 => Some(Restriction::R18G),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Restriction::AllAges),
            "r18" => Some(Restriction::R18),
            "r18g" => Some(Restriction::R18G),
            _ => None,
        }
    }
}

struct RestrictionVisitor;

impl<'de> Visitor<'de> for RestrictionVisitor {
    type Value = Restriction;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`none`, `r18`, `r18g` or a code from 0 to 2")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Restriction, E> {
        Restriction::from_code(v).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Restriction, E> {
        u64::try_from(v)
            .ok()
            .and_then(Restriction::from_code)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Restriction, E> {
        Restriction::from_name(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Restriction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RestrictionVisitor)
    }
}

/// Ranking position of a work.
///
/// Older cached results stored the rank already formatted (`"#1"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rank {
    Position(u32),
    Formatted(String),
}

/// One crawled work (or one page of a multi-page work).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkRecord {
    /// Display id, e.g. `12345678_p0`.
    pub id: String,

    /// Numeric work id; 0 when unknown.
    pub id_num: u64,

    /// Zero-based page index within the work.
    pub index: Option<u32>,

    #[serde(rename = "type")]
    pub work_type: WorkType,

    pub title: String,

    /// Author name.
    pub user: String,

    /// Author numeric id.
    pub user_id: String,

    pub tags: Vec<String>,

    /// Tags together with their translations.
    pub tags_with_transl: Vec<String>,

    /// Translations only.
    pub tags_transl_only: Vec<String>,

    pub full_width: Option<u32>,
    pub full_height: Option<u32>,

    /// Bookmark count.
    pub bmk: u64,
    pub like_count: u64,
    pub view_count: u64,

    pub x_restrict: Restriction,

    /// Quality tier.
    pub sl: Option<u8>,

    pub series_title: Option<String>,
    pub series_order: Option<u32>,

    /// Creation date.
    pub date: DateTime<FixedOffset>,

    /// File extension (without dot).
    pub ext: String,

    /// Whether animation frame metadata was fetched.
    pub ugoira_info: bool,

    /// Number of files downloaded for the same work.
    pub dl_count: u32,

    pub rank: Option<Rank>,
}

impl WorkRecord {
    /// Page index, falling back to the `_p<N>` suffix of the display id.
    pub fn page_index(&self) -> u32 {
        self.index
            .unwrap_or_else(|| index_from_display_id(&self.id).unwrap_or(0))
    }

    /// Numeric id, falling back to the leading digits of the display id.
    pub fn numeric_id(&self) -> u64 {
        if self.id_num != 0 {
            self.id_num
        } else {
            leading_number(&self.id).unwrap_or(0)
        }
    }

    /// Width and height, when both are known and non-zero.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.full_width, self.full_height) {
            (Some(w), Some(h)) if w > 0 => Some((w, h)),
            _ => None,
        }
    }
}

/// Page-level state shared by every work of one crawl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrawlContext {
    /// Title of the page the crawl started from (`{p_title}`).
    pub page_title: String,

    /// Search tag of the crawl (`{p_tag}`).
    pub page_tag: String,

    /// When the crawl finished (`{task_date}`).
    pub crawl_complete_time: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_fallback() {
        let mut work = WorkRecord {
            id: "12345_p7".to_string(),
            ..Default::default()
        };
        assert_eq!(work.page_index(), 7);

        work.index = Some(2);
        assert_eq!(work.page_index(), 2);

        work.index = None;
        work.id = "12345".to_string();
        assert_eq!(work.page_index(), 0);
    }

    #[test]
    fn test_numeric_id_fallback() {
        let mut work = WorkRecord {
            id: "98765_p1".to_string(),
            ..Default::default()
        };
        assert_eq!(work.numeric_id(), 98765);

        work.id_num = 5;
        assert_eq!(work.numeric_id(), 5);
    }

    #[test]
    fn test_dimensions() {
        let mut work = WorkRecord::default();
        assert_eq!(work.dimensions(), None);

        work.full_width = Some(1920);
        work.full_height = Some(1080);
        assert_eq!(work.dimensions(), Some((1920, 1080)));
    }

    #[test]
    fn test_work_type_aliases() {
        let t: WorkType = serde_json::from_str("\"animation\"").unwrap();
        assert_eq!(t, WorkType::Ugoira);
        let t: WorkType = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(t, WorkType::Novel);
        assert!(WorkType::Manga.is_paginated());
        assert!(!WorkType::Novel.is_paginated());
    }

    #[test]
    fn test_work_type_numeric_codes() {
        let t: WorkType = serde_json::from_str("0").unwrap();
        assert_eq!(t, WorkType::Illustration);
        let t: WorkType = serde_json::from_str("1").unwrap();
        assert_eq!(t, WorkType::Manga);
        let t: WorkType = serde_json::from_str("3").unwrap();
        assert_eq!(t, WorkType::Novel);
        assert!(serde_json::from_str::<WorkType>("4").is_err());
        assert!(serde_json::from_str::<WorkType>("\"comic\"").is_err());
    }

    #[test]
    fn test_restriction_accepts_codes_and_names() {
        let r: Restriction = serde_json::from_str("2").unwrap();
        assert_eq!(r, Restriction::R18G);
        let r: Restriction = serde_json::from_str("0").unwrap();
        assert_eq!(r, Restriction::AllAges);
        let r: Restriction = serde_json::from_str("\"r18\"").unwrap();
        assert_eq!(r, Restriction::R18);
        assert!(serde_json::from_str::<Restriction>("3").is_err());
    }

    #[test]
    fn test_serialize_uses_names() {
        assert_eq!(serde_json::to_string(&WorkType::Ugoira).unwrap(), "\"ugoira\"");
        assert_eq!(serde_json::to_string(&Restriction::R18G).unwrap(), "\"r18g\"");
    }

    #[test]
    fn test_rank_accepts_both_shapes() {
        let r: Rank = serde_json::from_str("3").unwrap();
        assert_eq!(r, Rank::Position(3));
        let r: Rank = serde_json::from_str("\"#3\"").unwrap();
        assert_eq!(r, Rank::Formatted("#3".to_string()));
    }
}
