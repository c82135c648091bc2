//! Text measurement: greedy word wrap and block height under one exact font.
//!
//! Measuring must use the same `Font` the caller later draws with. The session
//! guarantees that by measuring inside the `FontScope` it draws in.

use crate::layout::font_metrics::{get_metrics, Font, FontMetricTable};

/// Default line-height factor for body text and headings.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Tighter leading used by meta lines (periods, locations, contact line).
pub const TIGHT_LINE_HEIGHT_FACTOR: f32 = 1.1;

const WIDTH_EPSILON: f32 = 1e-4;

/// Result of measuring one block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    pub lines: Vec<String>,
    /// Height of a single line box in mm.
    pub line_height: f32,
    /// Total vertical extent of all lines in mm.
    pub height: f32,
}

impl Measured {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Wraps `text` to `max_width_mm` with the default leading.
pub fn measure(text: &str, max_width_mm: f32, font: &Font) -> Measured {
    measure_with_leading(text, max_width_mm, font, LINE_HEIGHT_FACTOR)
}

pub fn measure_with_leading(
    text: &str,
    max_width_mm: f32,
    font: &Font,
    line_height_factor: f32,
) -> Measured {
    let lines = wrap_lines(text, max_width_mm, font);
    let line_height = font.size_mm() * line_height_factor;
    let height = line_height * lines.len() as f32;
    Measured {
        lines,
        line_height,
        height,
    }
}

/// Rendered width of a single line in mm.
pub fn text_width_mm(text: &str, font: &Font) -> f32 {
    get_metrics(font).measure_str(text) * font.size_mm()
}

/// Splits `text` into lines no wider than `max_width_mm`.
///
/// Explicit newlines always break. Blank interior lines are kept; leading and
/// trailing blank lines are dropped. Words wider than a whole line are split
/// between characters.
pub fn wrap_lines(text: &str, max_width_mm: f32, font: &Font) -> Vec<String> {
    let metrics = get_metrics(font);
    let max_em = (max_width_mm / font.size_mm()).max(0.0);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
        } else {
            wrap_paragraph(paragraph, max_em, metrics, &mut lines);
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading_blank = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading_blank);
    lines
}

fn wrap_paragraph(paragraph: &str, max_em: f32, metrics: &FontMetricTable, out: &mut Vec<String>) {
    let space_w = metrics.space_width();
    let mut line = String::new();
    let mut line_w = 0.0_f32;

    for word in paragraph.split_whitespace() {
        let word_w = metrics.measure_str(word);

        if word_w > max_em + WIDTH_EPSILON {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let mut pieces = split_long_word(word, max_em, metrics);
            // The tail of a split word stays open so the next word can follow it.
            if let Some((tail, tail_w)) = pieces.pop() {
                out.extend(pieces.into_iter().map(|(piece, _)| piece));
                line = tail;
                line_w = tail_w;
            }
            continue;
        }

        if line.is_empty() {
            line.push_str(word);
            line_w = word_w;
        } else if line_w + space_w + word_w <= max_em + WIDTH_EPSILON {
            line.push(' ');
            line.push_str(word);
            line_w += space_w + word_w;
        } else {
            out.push(std::mem::replace(&mut line, word.to_string()));
            line_w = word_w;
        }
    }

    if !line.is_empty() {
        out.push(line);
    }
}

/// Breaks an over-long word into chunks that each fit; every chunk holds at least one char.
fn split_long_word(word: &str, max_em: f32, metrics: &FontMetricTable) -> Vec<(String, f32)> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0_f32;

    for c in word.chars() {
        let w = metrics.char_width(c);
        if !current.is_empty() && current_w + w > max_em + WIDTH_EPSILON {
            pieces.push((std::mem::take(&mut current), current_w));
            current_w = 0.0;
        }
        current.push(c);
        current_w += w;
    }
    if !current.is_empty() {
        pieces.push((current, current_w));
    }
    pieces
}
