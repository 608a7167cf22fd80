use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use faithlog_storage::{Entry, ParseEnumError};

/// Dashboard period, relative to a caller-supplied local date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    pub const ALL: [Self; 4] = [Self::Today, Self::Week, Self::Month, Self::All];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "thisWeek",
            Self::Month => "thisMonth",
            Self::All => "allTime",
        }
    }

    /// First calendar day inside the range; `None` means unbounded.
    ///
    /// Weeks start on Sunday. There is no upper bound, so entries dated
    /// after `today` stay in every range.
    #[must_use]
    pub fn start_date(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(today),
            Self::Week => {
                let back = i64::from(today.weekday().num_days_from_sunday());
                Some(today - Duration::days(back))
            }
            Self::Month => today.with_day(1),
            Self::All => None,
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start_date(today).is_none_or(|start| date >= start)
    }

    /// Entries inside the range, in input order
    #[must_use]
    pub fn apply(self, entries: &[Entry], today: NaiveDate) -> Vec<Entry> {
        entries
            .iter()
            .filter(|e| self.contains(e.date, today))
            .cloned()
            .collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            _ => Err(ParseEnumError {
                kind: "date range",
                value: s.to_string(),
            }),
        }
    }
}
