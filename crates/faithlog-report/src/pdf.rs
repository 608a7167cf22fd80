use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use std::borrow::Cow;

use crate::error::{ReportError, ReportResult};
use crate::layout::{Document, FontStyle, LayoutItem, Page, PAGE_HEIGHT, PAGE_WIDTH};

/// Line width of separators, in points
const RULE_THICKNESS: f32 = 0.57;

/// Characters of Windows-1252 outside Latin-1, which the built-in fonts also encode
const WIN_ANSI_EXTRAS: &str = "\u{20ac}\u{201a}\u{192}\u{201e}\u{2026}\u{2020}\u{2021}\u{2c6}\u{2030}\u{160}\u{2039}\u{152}\u{17d}\u{2018}\u{2019}\u{201c}\u{201d}\u{2022}\u{2013}\u{2014}\u{2dc}\u{2122}\u{161}\u{203a}\u{153}\u{17e}\u{178}";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Built-in fonts only cover WinAnsi; an embedded font takes text as is
    win_ansi_only: bool,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference, external: Option<&[u8]>) -> ReportResult<Self> {
        if let Some(bytes) = external {
            let font = doc.add_external_font(bytes).map_err(pdf_error)?;
            return Ok(Self {
                regular: font.clone(),
                bold: font,
                win_ansi_only: false,
            });
        }
        Ok(Self {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(pdf_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_error)?,
            win_ansi_only: true,
        })
    }
}

fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Replace every character the built-in fonts cannot encode with `?`
///
/// Returns the text to draw and the characters that were replaced.
#[must_use]
pub fn to_win_ansi(text: &str) -> (Cow<'_, str>, Vec<char>) {
    if text.chars().all(is_win_ansi) {
        return (Cow::Borrowed(text), Vec::new());
    }
    let mut replaced = Vec::new();
    let encoded = text
        .chars()
        .map(|c| {
            if is_win_ansi(c) {
                c
            } else {
                replaced.push(c);
                '?'
            }
        })
        .collect();
    (Cow::Owned(encoded), replaced)
}

fn pdf_error(e: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(e.to_string())
}

/// Render a laid-out document to PDF bytes
///
/// `font` is a TrueType/OpenType file embedded for all text. Without one the
/// built-in Helvetica fonts are used and characters outside WinAnsi are
/// drawn as `?`.
///
/// # Errors
///
/// Returns an error if fonts cannot be embedded or the PDF cannot be serialized
pub fn render(document: &Document, font: Option<&[u8]>) -> ReportResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let fonts = Fonts::load(&doc, font)?;
    let mut replaced = Vec::new();

    let mut pages = document.pages.iter();
    if let Some(first) = pages.next() {
        draw_page(&doc.get_page(page).get_layer(layer), first, &fonts, &mut replaced);
    }
    for (number, content) in pages.enumerate() {
        let (page, layer) = doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", number + 2),
        );
        draw_page(&doc.get_page(page).get_layer(layer), content, &fonts, &mut replaced);
    }

    if !replaced.is_empty() {
        replaced.sort_unstable();
        replaced.dedup();
        let chars: String = replaced.into_iter().collect();
        log::warn!(
            "Report font cannot draw {chars:?}; they were replaced with '?'. Set report_font in config.toml to a Unicode TTF"
        );
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts, replaced: &mut Vec<char>) {
    for item in &page.items {
        match item {
            LayoutItem::Text {
                x,
                y,
                size,
                style,
                gray,
                text,
            } => {
                let font = match style {
                    FontStyle::Regular => &fonts.regular,
                    FontStyle::Bold => &fonts.bold,
                };
                let text = if fonts.win_ansi_only {
                    let (encoded, missing) = to_win_ansi(text);
                    replaced.extend(missing);
                    encoded
                } else {
                    Cow::Borrowed(text.as_str())
                };
                layer.set_fill_color(gray_color(*gray));
                layer.use_text(text.as_ref(), *size, Mm(*x), Mm(PAGE_HEIGHT - y), font);
            }
            LayoutItem::Rule { x1, x2, y, gray } => {
                layer.set_outline_color(gray_color(*gray));
                layer.set_outline_thickness(RULE_THICKNESS);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(PAGE_HEIGHT - y)), false),
                        (Point::new(Mm(*x2), Mm(PAGE_HEIGHT - y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

fn gray_color(level: u8) -> Color {
    let v = f32::from(level) / 255.0;
    Color::Rgb(Rgb::new(v, v, v, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_ansi_text_is_unchanged() {
        let (text, replaced) = to_win_ansi("Jos\u{e9} \u{201c}gracias\u{201d} \u{2014} 5\u{20ac}");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert!(replaced.is_empty());
    }

    #[test]
    fn test_unencodable_characters_become_question_marks() {
        let (text, replaced) = to_win_ansi("\u{674e}\u{660e} Jos\u{e9} \u{1f64f}");
        assert_eq!(text, "?? Jos\u{e9} ?");
        assert_eq!(replaced, vec!['\u{674e}', '\u{660e}', '\u{1f64f}']);
    }

    #[test]
    fn test_invalid_external_font_is_an_error() {
        let document = Document {
            title: "Report".to_string(),
            pages: vec![Page::default()],
        };
        assert!(matches!(
            render(&document, Some(b"not a font".as_slice())),
            Err(ReportError::Pdf(_))
        ));
    }
}
