/// Data export command handler
use anyhow::{bail, Result};
use std::fmt::Write;
use std::path::PathBuf;

use faithlog_storage::Entry;

use super::helpers::escape_csv;
use crate::app::App;

const CSV_HEADER: &str =
    "id,type,status,date,time,person_name,title,details,tags,created_at,updated_at\n";

pub fn handle_data_export(app: &App, format: &str, output: Option<PathBuf>) -> Result<()> {
    let entries = app.journal.entries();

    let content = match format {
        "json" => serde_json::to_string_pretty(entries)?,
        "csv" => entries_to_csv(entries),
        _ => bail!("Unknown format: {format}. Use 'json' or 'csv'"),
    };

    let output_path =
        output.unwrap_or_else(|| PathBuf::from(format!("faithlog_export.{format}")));
    std::fs::write(&output_path, content)?;
    println!(
        "Exported {} entries to {}",
        entries.len(),
        output_path.display()
    );
    Ok(())
}

fn entries_to_csv(entries: &[Entry]) -> String {
    let mut csv_content = String::from(CSV_HEADER);

    for entry in entries {
        let _ = writeln!(
            csv_content,
            "{},{},{},{},{},{},{},{},{},{},{}",
            entry.id,
            entry.entry_type(),
            entry.status().map(|s| s.to_string()).unwrap_or_default(),
            entry.date.format("%Y-%m-%d"),
            entry.time.format("%H:%M:%S"),
            escape_csv(&entry.person_name),
            escape_csv(entry.title.as_deref().unwrap_or_default()),
            escape_csv(&entry.details),
            escape_csv(&entry.tags.join(", ")),
            entry.created_at,
            entry.updated_at,
        );
    }

    csv_content
}
