//! PDF report of journal entries.
//!
//! Entries are laid out in the order given; callers filter and sort first.

pub mod error;
pub mod layout;
pub mod pdf;
pub mod wrap;

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

use faithlog_core::TextLookup;
use faithlog_storage::Entry;

pub use error::{ReportError, ReportResult};
pub use layout::{layout_report, Document, LayoutItem, Page};

/// File name of a report exported on `date`
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("faith_journal_report_{}.pdf", date.format("%Y-%m-%d"))
}

/// Lay out and render `entries` to PDF bytes
///
/// `font` optionally embeds a TrueType/OpenType font, see [`pdf::render`].
///
/// # Errors
///
/// Returns an error if PDF rendering fails
pub fn render_report(
    entries: &[Entry],
    text: &dyn TextLookup,
    generated_at: NaiveDateTime,
    font: Option<&[u8]>,
) -> ReportResult<Vec<u8>> {
    let document = layout_report(entries, text, generated_at);
    log::debug!(
        "Report laid out: {} entries on {} pages",
        entries.len(),
        document.pages.len()
    );
    pdf::render(&document, font)
}

/// Write the report into `dir` under [`export_filename`] and return its path
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written
pub fn export_report(
    entries: &[Entry],
    text: &dyn TextLookup,
    generated_at: NaiveDateTime,
    font: Option<&[u8]>,
    dir: &Path,
) -> ReportResult<PathBuf> {
    let bytes = render_report(entries, text, generated_at, font)?;
    let path = dir.join(export_filename(generated_at.date()));

    let io_error = |source| ReportError::Io {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(io_error)?;
    std::fs::write(&path, bytes).map_err(io_error)?;

    log::info!("Report written to {}", path.display());
    Ok(path)
}
