//! Greedy word wrap against Helvetica advance widths.

/// Advance widths of Helvetica for ASCII 32..=126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width used for anything outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

const MM_PER_POINT: f32 = 25.4 / 72.0;

fn char_units(c: char) -> u16 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in millimetres at `font_size` points
#[must_use]
pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_units(c))).sum();
    #[allow(clippy::cast_precision_loss)]
    let em = units as f32 / 1000.0;
    em * font_size * MM_PER_POINT
}

/// Break `text` into lines no wider than `max_width` mm.
///
/// Explicit newlines always start a new line and blank lines are kept.
/// A word wider than the whole line is split between characters.
#[must_use]
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        wrap_paragraph(paragraph, max_width, font_size, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: f32, font_size: f32, lines: &mut Vec<String>) {
    let fits = |s: &str| text_width_mm(s, font_size) <= max_width;
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            if fits(word) {
                current.push_str(word);
            } else {
                current = split_long_word(word, max_width, font_size, lines);
            }
            continue;
        }

        let candidate = format!("{current} {word}");
        if fits(&candidate) {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            if fits(word) {
                current.push_str(word);
            } else {
                current = split_long_word(word, max_width, font_size, lines);
            }
        }
    }

    lines.push(current);
}

/// Push full-width chunks of `word` and return the remainder
fn split_long_word(word: &str, max_width: f32, font_size: f32, lines: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if chunk.chars().count() > 1 && text_width_mm(&chunk, font_size) > max_width {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}
