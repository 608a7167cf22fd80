//! Page layout for the journal report.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page.
//! Layout is separate from rendering so pagination can be checked without
//! producing a PDF.


use chrono::NaiveDateTime;

use faithlog_core::TextLookup;
use faithlog_storage::Entry;

use crate::wrap::{text_width_mm, wrap_text};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const LEFT_MARGIN: f32 = 14.0;
pub const BOTTOM_MARGIN: f32 = 15.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * LEFT_MARGIN;

pub const TITLE_Y: f32 = 22.0;
pub const GENERATED_ON_Y: f32 = 29.0;
pub const FIRST_ENTRY_Y: f32 = 45.0;
pub const PAGE_TOP_Y: f32 = 20.0;

/// Vertical advance per line of details
pub const LINE_HEIGHT: f32 = 5.0;
pub const DETAILS_FONT_SIZE: f32 = 10.0;
/// Gap between a separator and the entry header below it
pub const SEPARATOR_GAP: f32 = 6.0;

const TITLE_FONT_SIZE: f32 = 18.0;
const GENERATED_ON_FONT_SIZE: f32 = 11.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const SUBHEADER_FONT_SIZE: f32 = 9.0;
const TAGS_INDENT: f32 = 12.0;

const BLACK: u8 = 0;
const MUTED: u8 = 100;
const LABEL: u8 = 50;
const BODY: u8 = 80;
const SEPARATOR: u8 = 224;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One positioned drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    Text {
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        /// 0 is black, 255 is white
        gray: u8,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        gray: u8,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<LayoutItem>,
}

impl Page {
    /// Text of every text item, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Text { text, .. } => Some(text.as_str()),
            LayoutItem::Rule { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

/// Space reserved for an entry before it is placed
#[must_use]
pub fn estimated_height(detail_lines: usize, has_tags: bool) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let details = detail_lines as f32 * LINE_HEIGHT;
    30.0 + details + if has_tags { 8.0 } else { 0.0 }
}

/// Lay out `entries` in the given order
#[must_use]
pub fn layout_report(
    entries: &[Entry],
    text: &dyn TextLookup,
    generated_at: NaiveDateTime,
) -> Document {
    let title = text.text("pdfReportTitle");
    let mut cursor = PageCursor::new();

    cursor.text(LEFT_MARGIN, TITLE_FONT_SIZE, FontStyle::Regular, BLACK, title.clone());
    cursor.y = GENERATED_ON_Y;
    cursor.text(
        LEFT_MARGIN,
        GENERATED_ON_FONT_SIZE,
        FontStyle::Regular,
        MUTED,
        format!(
            "{}: {}",
            text.text("generatedOn"),
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
    );
    cursor.y = FIRST_ENTRY_Y;

    for (index, entry) in entries.iter().enumerate() {
        let details = wrap_text(&entry.details, CONTENT_WIDTH, DETAILS_FONT_SIZE);
        let has_tags = !entry.tags.is_empty();
        let mut needed = estimated_height(details.len(), has_tags);
        // A block taller than a whole page starts where it is and flows on
        if needed > PAGE_HEIGHT - BOTTOM_MARGIN - PAGE_TOP_Y {
            needed = estimated_height(1, has_tags);
        }
        let broke = cursor.reserve(needed);
        if index > 0 && !broke {
            cursor.rule(cursor.y - SEPARATOR_GAP);
        }
        place_entry(&mut cursor, entry, &details, text);
    }

    Document {
        title,
        pages: cursor.finish(),
    }
}

fn place_entry(cursor: &mut PageCursor, entry: &Entry, details: &[String], text: &dyn TextLookup) {
    let type_label = text.entry_type(entry.entry_type());

    let header = entry.title.clone().unwrap_or_else(|| type_label.clone());
    cursor.text(LEFT_MARGIN, HEADER_FONT_SIZE, FontStyle::Bold, BLACK, header);
    cursor.y += 6.0;

    let mut subheader = format!(
        "{} {} {} | {}: {} | {}: {}",
        entry.date.format("%Y-%m-%d"),
        text.text("at"),
        entry.time.format("%H:%M"),
        text.text("for"),
        entry.person_name,
        text.text("type"),
        type_label,
    );
    if let Some(status) = entry.status() {
        subheader.push_str(&format!(" | {}: {}", text.text("status"), text.status(status)));
    }
    cursor.text(LEFT_MARGIN, SUBHEADER_FONT_SIZE, FontStyle::Regular, MUTED, subheader);
    cursor.y += 8.0;

    if !entry.tags.is_empty() {
        let label = format!("{}:", text.text("tags"));
        // Keep longer translations of the label clear of the tag list
        let indent = TAGS_INDENT.max(text_width_mm(&label, SUBHEADER_FONT_SIZE) + 2.0);
        cursor.text(LEFT_MARGIN, SUBHEADER_FONT_SIZE, FontStyle::Bold, MUTED, label);
        cursor.text(
            LEFT_MARGIN + indent,
            SUBHEADER_FONT_SIZE,
            FontStyle::Regular,
            MUTED,
            entry.tags.join(", "),
        );
        cursor.y += 8.0;
    }

    cursor.text(
        LEFT_MARGIN,
        DETAILS_FONT_SIZE,
        FontStyle::Bold,
        LABEL,
        format!("{}:", text.text("details")),
    );
    cursor.y += 6.0;

    // Details longer than a page continue at the top of the next one
    for line in details {
        cursor.reserve(LINE_HEIGHT);
        cursor.text(LEFT_MARGIN, DETAILS_FONT_SIZE, FontStyle::Regular, BODY, line.clone());
        cursor.y += LINE_HEIGHT;
    }
    cursor.y += 8.0;
}

/// Current page plus the vertical position on it
struct PageCursor {
    done: Vec<Page>,
    page: Page,
    y: f32,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            page: Page::default(),
            y: TITLE_Y,
        }
    }

    /// Start a new page when `height` does not fit; returns whether it did
    fn reserve(&mut self, height: f32) -> bool {
        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.done.push(std::mem::take(&mut self.page));
            self.y = PAGE_TOP_Y;
            true
        } else {
            false
        }
    }

    fn text(&mut self, x: f32, size: f32, style: FontStyle, gray: u8, text: String) {
        self.page.items.push(LayoutItem::Text {
            x,
            y: self.y,
            size,
            style,
            gray,
            text,
        });
    }

    fn rule(&mut self, y: f32) {
        self.page.items.push(LayoutItem::Rule {
            x1: LEFT_MARGIN,
            x2: LEFT_MARGIN + CONTENT_WIDTH,
            y,
            gray: SEPARATOR,
        });
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.page);
        self.done
    }
}
