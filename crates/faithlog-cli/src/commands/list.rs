/// List and tag command handlers
use anyhow::Result;
use clap::Args;
use tabled::{Table, Tabled};

use faithlog_core::TextLookup;
use faithlog_insights::{
    parse_all_or, EntryFilter, InsightsGenerator, SortConfig, SortDirection, SortKey,
};
use faithlog_storage::{Entry, EntryType, Status};

use super::helpers::{parse_date, truncate_str};
use crate::app::App;

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Search person, title, details and tags
    #[arg(short = 'q', long)]
    pub search: Option<String>,
    /// Entry type: testimony, gratitude, prayer-request, or all
    #[arg(short = 't', long = "type")]
    pub entry_type: Option<String>,
    /// Prayer status: pending, in-progress, answered, or all
    #[arg(short, long)]
    pub status: Option<String>,
    /// Earliest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Keep entries carrying any of these tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<EntryFilter> {
        Ok(EntryFilter {
            search: self.search.clone().unwrap_or_default(),
            entry_type: self
                .entry_type
                .as_deref()
                .map(parse_all_or::<EntryType>)
                .transpose()?
                .flatten(),
            status: self
                .status
                .as_deref()
                .map(parse_all_or::<Status>)
                .transpose()?
                .flatten(),
            start_date: self.from.as_deref().map(parse_date).transpose()?,
            end_date: self.to.as_deref().map(parse_date).transpose()?,
            tags: self.tags.clone(),
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct SortArgs {
    /// Sort key: date, type, person, title, status, created, or updated
    #[arg(long)]
    pub sort: Option<String>,
    /// Ascending order
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,
    /// Descending order
    #[arg(long)]
    pub desc: bool,
}

impl SortArgs {
    /// No key means newest first; a chosen key starts ascending
    pub fn to_config(&self) -> Result<SortConfig> {
        let mut config = match self.sort.as_deref() {
            Some(key) => SortConfig::new(key.parse::<SortKey>()?, SortDirection::Ascending),
            None => SortConfig::default(),
        };
        if self.asc {
            config.direction = SortDirection::Ascending;
        } else if self.desc {
            config.direction = SortDirection::Descending;
        }
        Ok(config)
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl EntryRow {
    fn new(entry: &Entry, t: &dyn TextLookup) -> Self {
        Self {
            id: entry.id,
            date: format!("{} {}", entry.date.format("%Y-%m-%d"), entry.time.format("%H:%M")),
            entry_type: t.entry_type(entry.entry_type()),
            status: entry.status().map(|s| t.status(s)).unwrap_or_default(),
            person: truncate_str(&entry.person_name, 20),
            title: entry
                .title
                .as_deref()
                .map(|title| truncate_str(title, 30))
                .unwrap_or_default(),
            tags: truncate_str(&entry.tags.join(", "), 30),
        }
    }
}

/// Filter then sort the loaded entries
pub fn select_entries(app: &App, filter: &FilterArgs, sort: &SortArgs) -> Result<Vec<Entry>> {
    let mut entries = filter.to_filter()?.apply(app.journal.entries());
    sort.to_config()?.sort(&mut entries);
    Ok(entries)
}

pub fn handle_list(app: &App, filter: &FilterArgs, sort: &SortArgs) -> Result<()> {
    let entries = select_entries(app, filter, sort)?;
    let t = app.translator()?;

    if entries.is_empty() {
        println!("{}", t.text("noEntriesFound"));
        return Ok(());
    }

    let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::new(e, &t)).collect();
    println!("{}", Table::new(rows));
    println!("{}: {}", t.text("entries"), entries.len());
    Ok(())
}

pub fn handle_tags(app: &App) -> Result<()> {
    let tags = InsightsGenerator::unique_tags(app.journal.entries());
    if tags.is_empty() {
        let t = app.translator()?;
        println!("{}", t.text("noEntriesFound"));
        return Ok(());
    }
    for tag in tags {
        println!("{tag}");
    }
    Ok(())
}
