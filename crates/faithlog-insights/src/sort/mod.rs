#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use faithlog_storage::{Entry, ParseEnumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Date,
    Type,
    PersonName,
    Title,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    pub const ALL: [Self; 7] = [
        Self::Date,
        Self::Type,
        Self::PersonName,
        Self::Title,
        Self::Status,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Type => "type",
            Self::PersonName => "personName",
            Self::Title => "title",
            Self::Status => "status",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    /// Ascending comparison of two entries on this key alone
    #[must_use]
    pub fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        match self {
            Self::Date => a.occurred_at().cmp(&b.occurred_at()),
            Self::Type => a.entry_type().as_str().cmp(b.entry_type().as_str()),
            Self::PersonName => a.person_name.cmp(&b.person_name),
            Self::Title => a.title.cmp(&b.title),
            Self::Status => a
                .status()
                .map(|s| s.as_str())
                .cmp(&b.status().map(|s| s.as_str())),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "date" => Ok(Self::Date),
            "type" => Ok(Self::Type),
            "person" | "personname" => Ok(Self::PersonName),
            "title" => Ok(Self::Title),
            "status" => Ok(Self::Status),
            "created" | "createdat" => Ok(Self::CreatedAt),
            "updated" | "updatedat" => Ok(Self::UpdatedAt),
            _ => Err(ParseEnumError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Date, SortDirection::Descending)
    }
}

impl SortConfig {
    #[must_use]
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips direction; any other key starts ascending
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    #[must_use]
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    /// Stable in-place sort; equal keys keep their relative order
    pub fn sort(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }

    #[must_use]
    pub fn sorted(&self, entries: &[Entry]) -> Vec<Entry> {
        let mut sorted = entries.to_vec();
        self.sort(&mut sorted);
        sorted
    }
}
