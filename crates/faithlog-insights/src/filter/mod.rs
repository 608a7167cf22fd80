//! Multi-criteria entry filter.
//!
//! All criteria are ANDed. Unset criteria match everything, so
//! `EntryFilter::default()` returns the input unchanged.

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use std::str::FromStr;

use faithlog_storage::{Entry, EntryType, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring over person, title, details and tags
    pub search: String,
    pub entry_type: Option<EntryType>,
    /// A concrete status never matches testimonies or gratitudes
    pub status: Option<Status>,
    /// Inclusive
    pub start_date: Option<NaiveDate>,
    /// Inclusive
    pub end_date: Option<NaiveDate>,
    /// Entry must carry at least one of these
    pub tags: Vec<String>,
}

impl EntryFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_search(entry, &self.search.to_lowercase())
            && self.matches_fields(entry)
    }

    /// Entries matching every criterion, in input order
    #[must_use]
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        let needle = self.search.to_lowercase();
        entries
            .iter()
            .filter(|e| self.matches_search(e, &needle) && self.matches_fields(e))
            .cloned()
            .collect()
    }

    fn matches_search(&self, entry: &Entry, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(needle);

        hit(&entry.person_name)
            || entry.title.as_deref().is_some_and(hit)
            || hit(&entry.details)
            || entry.tags.iter().any(|tag| hit(tag))
    }

    fn matches_fields(&self, entry: &Entry) -> bool {
        if self.entry_type.is_some_and(|t| t != entry.entry_type()) {
            return false;
        }
        if let Some(status) = self.status {
            if entry.status() != Some(status) {
                return false;
            }
        }
        if self.start_date.is_some_and(|start| entry.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| entry.date > end) {
            return false;
        }
        self.tags.is_empty() || self.tags.iter().any(|t| entry.tags.contains(t))
    }
}

/// Parse a choice where `"all"` (or an empty string) means no constraint
///
/// # Errors
///
/// Returns the value's own parse error for anything else it rejects
pub fn parse_all_or<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
