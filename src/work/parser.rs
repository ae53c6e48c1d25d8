//! Work record input parsing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::work::item::{CrawlContext, WorkRecord};

/// A crawl result: shared page context plus every collected work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkBatch {
    #[serde(default)]
    pub context: CrawlContext,

    #[serde(default)]
    pub works: Vec<WorkRecord>,
}

/// Parse a batch from JSON text.
///
/// Accepts either `{ "context": ..., "works": [...] }` or a bare array of works.
pub fn parse_batch(json: &str) -> Result<WorkBatch> {
    // The top-level shape decides the target type, so a bad record is
    // reported as such instead of being matched against the other shape.
    let batch = match serde_json::from_str::<Value>(json)? {
        Value::Array(works) => WorkBatch {
            works: works
                .into_iter()
                .enumerate()
                .map(|(position, work)| {
                    serde_json::from_value::<WorkRecord>(work).map_err(|e| {
                        Error::InvalidRecord(format!("work #{}: {}", position, e))
                    })
                })
                .collect::<Result<_>>()?,
            ..Default::default()
        },
        value @ Value::Object(_) => serde_json::from_value::<WorkBatch>(value)?,
        _ => {
            return Err(Error::InvalidRecord(
                "expected an array of works or an object with a `works` list".to_string(),
            ))
        }
    };

    for (position, work) in batch.works.iter().enumerate() {
        if work.id.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "work #{} has an empty id",
                position
            )));
        }
        if work.ext.trim_start_matches('.').is_empty() {
            return Err(Error::InvalidRecord(format!(
                "work {} has no file extension",
                work.id
            )));
        }
    }

    debug!(works = batch.works.len(), "parsed work batch");
    Ok(batch)
}

/// Load a batch from a JSON file.
pub fn load_batch(path: &Path) -> Result<WorkBatch> {
    let content = fs::read_to_string(path)?;
    parse_batch(&content)
}

/// Extract the page index from a display id such as `12345678_p3`.
pub fn index_from_display_id(id: &str) -> Option<u32> {
    let (_, suffix) = id.rsplit_once("_p")?;
    suffix.parse().ok()
}

/// Parse the leading run of ASCII digits of a string.
pub fn leading_number(s: &str) -> Option<u64> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
