//! History and saved-item records.
//!
//! Both lists share the [`SavedPromptItem`] shape. History is newest first
//! and capped at [`HISTORY_LIMIT`]; saved items only grow or shrink by
//! explicit user action.

use std::sync::LazyLock;

use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::{AlternativePrompts, HistoryId, PromptData, PromptKind};

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 10;

/// Fallback download name when a title slugs down to nothing.
pub const DEFAULT_DOWNLOAD_STEM: &str = "prompt";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));

/// A durable history or saved-items entry.
///
/// `data` is decoded as the shape named by `promptType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "StoredPromptItem")]
#[ts(export)]
pub struct SavedPromptItem {
    /// Millisecond timestamp of creation; unique within a list.
    #[ts(type = "number")]
    pub id: HistoryId,
    pub title: String,
    /// The improved (main) prompt.
    pub prompt: String,
    pub prompt_type: PromptKind,
    /// Human-readable creation time, es-ES style.
    pub timestamp: String,
    pub data: PromptData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<AlternativePrompts>,
}

/// On-disk form of [`SavedPromptItem`] before `data` is typed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPromptItem {
    id: HistoryId,
    title: String,
    prompt: String,
    prompt_type: PromptKind,
    timestamp: String,
    data: serde_json::Value,
    #[serde(default)]
    alternatives: Option<AlternativePrompts>,
}

impl TryFrom<StoredPromptItem> for SavedPromptItem {
    type Error = CoreError;

    fn try_from(stored: StoredPromptItem) -> Result<Self, Self::Error> {
        Ok(SavedPromptItem {
            data: PromptData::from_value(stored.prompt_type, stored.data)?,
            id: stored.id,
            title: stored.title,
            prompt: stored.prompt,
            prompt_type: stored.prompt_type,
            timestamp: stored.timestamp,
            alternatives: stored.alternatives,
        })
    }
}

/// An entry before it is stamped with an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromptItem {
    pub title: String,
    pub prompt: String,
    pub prompt_type: PromptKind,
    pub data: PromptData,
    pub alternatives: Option<AlternativePrompts>,
}

impl NewPromptItem {
    /// Stamp the entry. The id is the creation time in milliseconds, bumped
    /// past `newest_id` so ids stay strictly increasing.
    pub fn stamp<Tz: TimeZone>(self, now: DateTime<Tz>, newest_id: Option<HistoryId>) -> SavedPromptItem
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut id = now.timestamp_millis();
        if let Some(newest) = newest_id {
            id = id.max(newest + 1);
        }

        SavedPromptItem {
            id,
            title: self.title,
            prompt: self.prompt,
            prompt_type: self.prompt_type,
            timestamp: locale_timestamp(&now),
            data: self.data,
            alternatives: self.alternatives,
        }
    }

    /// Stamp with the local wall clock.
    pub fn stamp_now(self, newest_id: Option<HistoryId>) -> SavedPromptItem {
        self.stamp(Local::now(), newest_id)
    }
}

/// Format a timestamp the way es-ES `toLocaleString` does, e.g.
/// `5/1/2024, 9:05:03`.
pub fn locale_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

/// Largest id in a list, if any.
pub fn newest_id(items: &[SavedPromptItem]) -> Option<HistoryId> {
    items.iter().map(|item| item.id).max()
}

/// Insert at the front and evict the oldest entries beyond the limit.
pub fn push_history(items: &mut Vec<SavedPromptItem>, item: SavedPromptItem) {
    items.insert(0, item);
    items.truncate(HISTORY_LIMIT);
}

/// Remove the entry with `id`. Returns whether anything was removed.
pub fn remove_by_id(items: &mut Vec<SavedPromptItem>, id: HistoryId) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// A prompt ready to be written out as a plain-text download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptExport {
    pub file_name: String,
    pub contents: String,
}

impl PromptExport {
    pub fn new(title: &str, prompt: &str) -> Self {
        Self {
            file_name: download_file_name(title),
            contents: prompt.to_string(),
        }
    }

    /// Export of a stored entry, named after its title.
    pub fn from_item(item: &SavedPromptItem) -> Self {
        Self::new(&item.title, &item.prompt)
    }
}

/// File name offered when downloading a prompt: slugged title plus `.txt`.
pub fn download_file_name(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = WHITESPACE_RE.replace_all(&lowered, "-");
    let slug = NON_SLUG_RE.replace_all(&dashed, "");
    let stem = if slug.is_empty() {
        DEFAULT_DOWNLOAD_STEM
    } else {
        slug.as_ref()
    };
    format!("{stem}.txt")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
