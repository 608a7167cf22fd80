/// PDF export command handler
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use faithlog_core::TextLookup;

use super::list::{select_entries, FilterArgs, SortArgs};
use crate::app::App;

pub fn handle_export(app: &App, filter: &FilterArgs, output_dir: Option<PathBuf>) -> Result<()> {
    let entries = select_entries(app, filter, &SortArgs::default())?;
    let t = app.translator()?;

    if entries.is_empty() {
        println!("{}", t.text("noEntriesFound"));
        return Ok(());
    }

    let font = app
        .config
        .report_font
        .as_ref()
        .map(|path| {
            std::fs::read(path)
                .with_context(|| format!("Failed to read report font {}", path.display()))
        })
        .transpose()?;

    let dir = output_dir.unwrap_or_else(|| app.config.export_dir());
    let path = faithlog_report::export_report(
        &entries,
        &t,
        Local::now().naive_local(),
        font.as_deref(),
        &dir,
    )
    .context("Failed to export PDF report")?;

    println!("{} {}", t.text("reportSaved"), path.display());
    Ok(())
}
