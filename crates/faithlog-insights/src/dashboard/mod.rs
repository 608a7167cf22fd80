
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use faithlog_storage::{Entry, EntryType, Status};

use crate::date_range::DateRange;

/// Number of people and tags shown on the dashboard
pub const TOP_LIMIT: usize = 5;
/// Number of answered prayers shown on the dashboard
pub const RECENT_ANSWERED_LIMIT: usize = 3;

/// Entry counts by type and by prayer status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub testimonies: usize,
    pub gratitudes: usize,
    pub prayer_requests: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub answered: usize,
}

impl Summary {
    #[must_use]
    pub fn count_for_type(&self, entry_type: EntryType) -> usize {
        match entry_type {
            EntryType::Testimony => self.testimonies,
            EntryType::Gratitude => self.gratitudes,
            EntryType::PrayerRequest => self.prayer_requests,
        }
    }

    #[must_use]
    pub fn count_for_status(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Answered => self.answered,
        }
    }
}

/// Generate dashboard figures from a list of entries
pub struct InsightsGenerator;

impl InsightsGenerator {
    #[must_use]
    pub fn summary(entries: &[Entry]) -> Summary {
        let mut summary = Summary {
            total: entries.len(),
            ..Summary::default()
        };

        for entry in entries {
            match entry.entry_type() {
                EntryType::Testimony => summary.testimonies += 1,
                EntryType::Gratitude => summary.gratitudes += 1,
                EntryType::PrayerRequest => summary.prayer_requests += 1,
            }
            match entry.status() {
                Some(Status::Pending) => summary.pending += 1,
                Some(Status::InProgress) => summary.in_progress += 1,
                Some(Status::Answered) => summary.answered += 1,
                None => {}
            }
        }

        summary
    }

    /// Most frequent person names; ties keep first-seen order
    #[must_use]
    pub fn top_people(entries: &[Entry], limit: usize) -> Vec<(String, usize)> {
        rank_by_frequency(entries.iter().map(|e| e.person_name.as_str()), limit)
    }

    /// Most frequent tags across all entries; ties keep first-seen order
    #[must_use]
    pub fn trending_tags(entries: &[Entry], limit: usize) -> Vec<(String, usize)> {
        rank_by_frequency(
            entries.iter().flat_map(|e| e.tags.iter().map(String::as_str)),
            limit,
        )
    }

    /// Answered prayer requests, most recently updated first
    #[must_use]
    pub fn recently_answered(entries: &[Entry], limit: usize) -> Vec<Entry> {
        let mut answered: Vec<Entry> = entries
            .iter()
            .filter(|e| e.status() == Some(Status::Answered))
            .cloned()
            .collect();
        answered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        answered.truncate(limit);
        answered
    }

    /// Distinct tags in lexical order
    #[must_use]
    pub fn unique_tags(entries: &[Entry]) -> Vec<String> {
        let mut tags: Vec<String> = entries
            .iter()
            .flat_map(|e| e.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

fn rank_by_frequency<'a>(
    values: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match index.get(value).copied() {
            Some(i) => ranked[i].1 += 1,
            None => {
                index.insert(value, ranked.len());
                ranked.push((value.to_string(), 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Everything the dashboard shows for one date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub range: DateRange,
    pub summary: Summary,
    pub top_people: Vec<(String, usize)>,
    pub trending_tags: Vec<(String, usize)>,
    pub recently_answered: Vec<Entry>,
}

impl Dashboard {
    #[must_use]
    pub fn build(entries: &[Entry], range: DateRange, today: NaiveDate) -> Self {
        let in_range = range.apply(entries, today);
        Self {
            range,
            summary: InsightsGenerator::summary(&in_range),
            top_people: InsightsGenerator::top_people(&in_range, TOP_LIMIT),
            trending_tags: InsightsGenerator::trending_tags(&in_range, TOP_LIMIT),
            recently_answered: InsightsGenerator::recently_answered(
                &in_range,
                RECENT_ANSWERED_LIMIT,
            ),
        }
    }
}
