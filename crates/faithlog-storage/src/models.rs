use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseEnumError, ValidationError};

/// Store-assigned entry identity
pub type EntryId = i64;

/// Kind of journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Testimony,
    Gratitude,
    PrayerRequest,
}

impl EntryType {
    pub const ALL: [Self; 3] = [Self::Testimony, Self::Gratitude, Self::PrayerRequest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Testimony => "testimony",
            Self::Gratitude => "gratitude",
            Self::PrayerRequest => "prayer_request",
        }
    }

    /// Key of the localized display name
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Testimony => "testimony",
            Self::Gratitude => "gratitude",
            Self::PrayerRequest => "prayerRequest",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "testimony" => Ok(Self::Testimony),
            "gratitude" => Ok(Self::Gratitude),
            "prayer_request" | "prayer-request" | "prayer" => Ok(Self::PrayerRequest),
            _ => Err(ParseEnumError::new("entry type", s)),
        }
    }
}

/// Progress of a prayer request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Answered,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Answered];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Answered => "answered",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "inProgress",
            Self::Answered => "answered",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "answered" => Ok(Self::Answered),
            _ => Err(ParseEnumError::new("status", s)),
        }
    }
}

/// Entry variant; only prayer requests carry a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    Testimony,
    Gratitude,
    PrayerRequest { status: Status },
}

impl EntryKind {
    /// Build a kind from a type and an optional status.
    ///
    /// A prayer request without a status starts as pending; a status given
    /// for any other type is dropped.
    #[must_use]
    pub fn from_parts(entry_type: EntryType, status: Option<Status>) -> Self {
        match entry_type {
            EntryType::Testimony => Self::Testimony,
            EntryType::Gratitude => Self::Gratitude,
            EntryType::PrayerRequest => Self::PrayerRequest {
                status: status.unwrap_or_default(),
            },
        }
    }

    #[must_use]
    pub fn entry_type(self) -> EntryType {
        match self {
            Self::Testimony => EntryType::Testimony,
            Self::Gratitude => EntryType::Gratitude,
            Self::PrayerRequest { .. } => EntryType::PrayerRequest,
        }
    }

    #[must_use]
    pub fn status(self) -> Option<Status> {
        match self {
            Self::PrayerRequest { status } => Some(status),
            Self::Testimony | Self::Gratitude => None,
        }
    }
}

/// Tag labels with set semantics and first-seen display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    /// Trim labels, drop empty ones and collapse duplicates
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if !label.is_empty() && !tags.iter().any(|t| t == label) {
                tags.push(label.to_string());
            }
        }
        Self(tags)
    }

    /// Parse comma separated input such as `"faith, family"`
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(','))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|t| t == label)
    }

    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Vec<String>> for Tags {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Entry content as entered by the user, without identity or timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(flatten)]
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub person_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub details: String,
    #[serde(default)]
    pub tags: Tags,
}

impl EntryDraft {
    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the person name or details are blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.person_name.trim().is_empty() {
            return Err(ValidationError::MissingPersonName);
        }
        if self.details.trim().is_empty() {
            return Err(ValidationError::MissingDetails);
        }
        Ok(())
    }

    /// Collapse a blank title to `None` and drop sub-second precision
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.time = self.time.with_nanosecond(0).unwrap_or(self.time);
        self.title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

/// Stored journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub person_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub details: String,
    #[serde(default)]
    pub tags: Tags,
    /// Epoch milliseconds, set once on creation
    pub created_at: i64,
    /// Epoch milliseconds, refreshed on every write
    pub updated_at: i64,
}

impl Entry {
    #[must_use]
    pub fn from_draft(id: EntryId, draft: EntryDraft, created_at: i64, updated_at: i64) -> Self {
        Self {
            id,
            kind: draft.kind,
            date: draft.date,
            time: draft.time,
            person_name: draft.person_name,
            title: draft.title,
            details: draft.details,
            tags: draft.tags,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            kind: self.kind,
            date: self.date,
            time: self.time,
            person_name: self.person_name.clone(),
            title: self.title.clone(),
            details: self.details.clone(),
            tags: self.tags.clone(),
        }
    }

    #[must_use]
    pub fn entry_type(&self) -> EntryType {
        self.kind.entry_type()
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.kind.status()
    }

    /// Local date and time combined into one instant
    #[must_use]
    pub fn occurred_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Shape handed to the record store: no id means insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: Option<EntryId>,
    pub draft: EntryDraft,
    pub created_at: i64,
    pub updated_at: i64,
}

impl EntryRecord {
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry::from_draft(id, self.draft, self.created_at, self.updated_at)
    }
}
