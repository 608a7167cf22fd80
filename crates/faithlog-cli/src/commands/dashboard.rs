/// Dashboard command handler
use anyhow::Result;
use chrono::Local;
use std::fmt::Write;
use tabled::{Table, Tabled};

use faithlog_core::TextLookup;
use faithlog_insights::{Dashboard, DateRange};
use faithlog_storage::{EntryType, Status};

use crate::app::App;

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Count")]
    count: usize,
}

fn count_table(items: impl IntoIterator<Item = (String, usize)>) -> Table {
    let rows: Vec<CountRow> = items
        .into_iter()
        .map(|(name, count)| CountRow { name, count })
        .collect();
    Table::new(rows)
}

pub fn handle_dashboard(app: &App, range: &str, json: bool) -> Result<()> {
    let range = range.parse::<DateRange>()?;
    let today = Local::now().date_naive();
    let dashboard = Dashboard::build(app.journal.entries(), range, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let t = app.translator()?;
    print!("{}", render_dashboard(&dashboard, &t));
    Ok(())
}

fn render_dashboard(dashboard: &Dashboard, t: &dyn TextLookup) -> String {
    let summary = &dashboard.summary;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\n{} ({})",
        t.text("dashboard"),
        t.text(dashboard.range.label_key())
    );
    let _ = writeln!(out, "{}", "\u{2550}".repeat(40));
    let _ = writeln!(out, "{}: {}", t.text("totalEntries"), summary.total);

    let by_type = EntryType::ALL
        .iter()
        .map(|&ty| (t.entry_type(ty), summary.count_for_type(ty)));
    let _ = writeln!(out, "\n{}\n{}", t.text("entriesByType"), count_table(by_type));

    let by_status = Status::ALL
        .iter()
        .map(|&s| (t.status(s), summary.count_for_status(s)));
    let _ = writeln!(
        out,
        "\n{}\n{}",
        t.text("prayerRequestsByStatus"),
        count_table(by_status)
    );

    if !dashboard.top_people.is_empty() {
        let table = count_table(dashboard.top_people.clone());
        let _ = writeln!(out, "\n{}\n{table}", t.text("topPeople"));
    }

    if !dashboard.trending_tags.is_empty() {
        let table = count_table(dashboard.trending_tags.clone());
        let _ = writeln!(out, "\n{}\n{table}", t.text("trendingTags"));
    }

    if !dashboard.recently_answered.is_empty() {
        let _ = writeln!(out, "\n{}", t.text("recentAnsweredPrayers"));
        for entry in &dashboard.recently_answered {
            let heading = entry
                .title
                .clone()
                .unwrap_or_else(|| t.entry_type(entry.entry_type()));
            let _ = writeln!(
                out,
                "  - {heading} ({}, {})",
                entry.person_name,
                entry.date.format("%Y-%m-%d")
            );
        }
    }

    out
}
