/// Entry command handlers (add, edit, delete, show)
use anyhow::{bail, Result};
use chrono::Local;
use clap::Args;

use faithlog_core::TextLookup;
use faithlog_storage::{Entry, EntryDraft, EntryKind, EntryType, Status, Tags};

use super::helpers::{parse_date, parse_time};
use crate::app::App;

#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Entry type: testimony, gratitude, or prayer-request
    #[arg(short = 't', long = "type")]
    pub entry_type: String,
    /// Person the entry is about
    #[arg(short, long)]
    pub person: String,
    /// What happened, or what to pray for
    #[arg(short, long)]
    pub details: String,
    /// Optional headline
    #[arg(long)]
    pub title: Option<String>,
    /// Comma separated tags, e.g. "family, healing"
    #[arg(long)]
    pub tags: Option<String>,
    /// Prayer status: pending, in-progress, or answered
    #[arg(short, long)]
    pub status: Option<String>,
    /// Date (YYYY-MM-DD format, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Time (HH:MM format, defaults to now)
    #[arg(long)]
    pub time: Option<String>,
}

/// Same fields as `add`, all optional; unset fields keep their value
#[derive(Args, Debug)]
pub struct EntryUpdateArgs {
    #[arg(short = 't', long = "type")]
    pub entry_type: Option<String>,
    #[arg(short, long)]
    pub person: Option<String>,
    #[arg(short, long)]
    pub details: Option<String>,
    /// Pass an empty string to remove the title
    #[arg(long)]
    pub title: Option<String>,
    /// Replaces all tags; pass an empty string to remove them
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(short, long)]
    pub status: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
}

fn parse_status(value: Option<&str>) -> Result<Option<Status>> {
    Ok(value.map(str::parse::<Status>).transpose()?)
}

pub async fn handle_add(app: &mut App, args: EntryArgs) -> Result<()> {
    let entry_type = args.entry_type.parse::<EntryType>()?;
    let status = parse_status(args.status.as_deref())?;
    let now = Local::now().naive_local();

    let draft = EntryDraft {
        kind: EntryKind::from_parts(entry_type, status),
        date: args
            .date
            .as_deref()
            .map(parse_date)
            .transpose()?
            .unwrap_or(now.date()),
        time: args
            .time
            .as_deref()
            .map(parse_time)
            .transpose()?
            .unwrap_or(now.time()),
        person_name: args.person,
        title: args.title,
        details: args.details,
        tags: args.tags.as_deref().map(Tags::parse).unwrap_or_default(),
    };

    let entry = app.journal.add(draft).await?;
    let t = app.translator()?;
    println!("{} (ID {})", t.text("entrySaved"), entry.id);
    Ok(())
}

pub async fn handle_edit(app: &mut App, id: i64, args: EntryUpdateArgs) -> Result<()> {
    let Some(existing) = app.journal.find(id) else {
        bail!("Entry {id} not found");
    };
    let mut entry = existing.clone();

    let entry_type = match args.entry_type.as_deref() {
        Some(value) => value.parse::<EntryType>()?,
        None => entry.entry_type(),
    };
    let status = parse_status(args.status.as_deref())?.or(entry.status());
    entry.kind = EntryKind::from_parts(entry_type, status);

    if let Some(date) = args.date.as_deref() {
        entry.date = parse_date(date)?;
    }
    if let Some(time) = args.time.as_deref() {
        entry.time = parse_time(time)?;
    }
    if let Some(person) = args.person {
        entry.person_name = person;
    }
    if let Some(details) = args.details {
        entry.details = details;
    }
    if let Some(title) = args.title {
        entry.title = Some(title);
    }
    if let Some(tags) = args.tags.as_deref() {
        entry.tags = Tags::parse(tags);
    }

    let updated = app.journal.update(entry).await?;
    let t = app.translator()?;
    println!("{} (ID {})", t.text("entrySaved"), updated.id);
    Ok(())
}

pub async fn handle_delete(app: &mut App, id: i64) -> Result<()> {
    if app.journal.find(id).is_none() {
        bail!("Entry {id} not found");
    }
    app.journal.remove(id).await?;
    let t = app.translator()?;
    println!("{} (ID {id})", t.text("entryDeleted"));
    Ok(())
}

pub fn handle_show(app: &App, id: i64) -> Result<()> {
    let Some(entry) = app.journal.find(id) else {
        bail!("Entry {id} not found");
    };
    let t = app.translator()?;
    print!("{}", describe_entry(entry, &t));
    Ok(())
}

/// Multi-line, localized description of one entry
pub fn describe_entry(entry: &Entry, t: &dyn TextLookup) -> String {
    let mut lines = vec![format!("{}: {}", t.text("id"), entry.id)];
    if let Some(title) = &entry.title {
        lines.push(format!("{}: {title}", t.text("title")));
    }
    lines.push(format!("{}: {}", t.text("type"), t.entry_type(entry.entry_type())));
    if let Some(status) = entry.status() {
        lines.push(format!("{}: {}", t.text("status"), t.status(status)));
    }
    lines.push(format!(
        "{}: {} {} {}",
        t.text("date"),
        entry.date.format("%Y-%m-%d"),
        t.text("at"),
        entry.time.format("%H:%M")
    ));
    lines.push(format!("{}: {}", t.text("personName"), entry.person_name));
    if !entry.tags.is_empty() {
        lines.push(format!("{}: {}", t.text("tags"), entry.tags.join(", ")));
    }
    lines.push(format!("{}:", t.text("details")));
    lines.push(entry.details.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use faithlog_core::{Language, Translator};

    fn prayer() -> Entry {
        Entry {
            id: 7,
            kind: EntryKind::PrayerRequest {
                status: Status::InProgress,
            },
            date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            time: NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
            person_name: "Ana".to_string(),
            title: Some("Surgery".to_string()),
            details: "Pray for a quick recovery".to_string(),
            tags: Tags::parse("health, family"),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_describe_entry_english() {
        let text = describe_entry(&prayer(), &Translator::new(Language::En));
        assert_eq!(
            text,
            "ID: 7\nTitle: Surgery\nType: Prayer Request\nStatus: In Progress\n\
             Date: 2024-02-03 at 06:45\nPerson: Ana\nTags: health, family\n\
             Details:\nPray for a quick recovery\n"
        );
    }

    #[test]
    fn test_describe_entry_spanish_without_optional_fields() {
        let mut entry = prayer();
        entry.kind = EntryKind::Gratitude;
        entry.title = None;
        entry.tags = Tags::default();

        let text = describe_entry(&entry, &Translator::new(Language::Es));
        assert!(text.contains("Tipo: Gratitud\n"));
        assert!(!text.contains("Estado"));
        assert!(!text.contains("Etiquetas"));
    }
}
