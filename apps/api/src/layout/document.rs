//! The finished layout: pages of positioned text runs and rule lines.
//!
//! All coordinates are millimetres from the top-left corner of the page.
//! A `TextRun` is one wrapped line; `y` is the top of its line box.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::Font;

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
}

impl PageGeometry {
    /// A4 portrait, 15mm margins all round (180mm content width).
    pub fn a4() -> Self {
        PageGeometry {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_mm: 15.0,
            margin_bottom_mm: 15.0,
            margin_left_mm: 15.0,
            margin_right_mm: 15.0,
        }
    }

    /// US letter portrait with the same 15mm margins.
    pub fn letter() -> Self {
        PageGeometry {
            width_mm: 215.9,
            height_mm: 279.4,
            ..Self::a4()
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(Self::a4()),
            "letter" | "us-letter" => Some(Self::letter()),
            _ => None,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest y any block may reach.
    pub fn printable_bottom(&self) -> f32 {
        self.height_mm - self.margin_bottom_mm
    }

    pub fn printable_height(&self) -> f32 {
        self.printable_bottom() - self.margin_top_mm
    }
}

/// Which emitter produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    Heading { level: u8 },
    Paragraph,
    Bullet,
    BulletMarker,
    Label,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    /// Height of the line box (font size × line-height factor).
    pub line_height: f32,
    pub text: String,
    pub font: Font,
    /// Sequential id of the block this line belongs to.
    pub block: u32,
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLine {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageItem {
    Text(TextRun),
    Rule(RuleLine),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub items: Vec<PageItem>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Page {
            number,
            items: Vec::new(),
        }
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Text(run) => Some(run),
            PageItem::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleLine> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Rule(rule) => Some(rule),
            PageItem::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl Document {
    /// A document with its first (empty) page already open.
    pub fn new(geometry: PageGeometry) -> Self {
        Document {
            geometry,
            pages: vec![Page::new(1)],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn start_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number));
    }

    pub(crate) fn push(&mut self, item: PageItem) {
        if self.pages.is_empty() {
            self.start_page();
        }
        let last = self.pages.len() - 1;
        self.pages[last].items.push(item);
    }

    /// Every text run paired with its 1-based page number, in emission order.
    pub fn text_runs(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .flat_map(|page| page.text_runs().map(move |run| (page.number, run)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let geometry = PageGeometry::a4();
        assert!((geometry.content_width() - 180.0).abs() < 1e-4);
        assert!((geometry.printable_bottom() - 282.0).abs() < 1e-4);
        assert!((geometry.printable_height() - 267.0).abs() < 1e-4);
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(PageGeometry::parse("A4"), Some(PageGeometry::a4()));
        assert_eq!(PageGeometry::parse("letter"), Some(PageGeometry::letter()));
        assert_eq!(PageGeometry::parse("tabloid"), None);
    }

    #[test]
    fn test_new_document_has_one_empty_page() {
        let doc = Document::new(PageGeometry::a4());
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].number, 1);
        assert!(doc.pages[0].items.is_empty());
    }

    #[test]
    fn test_push_goes_to_last_page() {
        let mut doc = Document::new(PageGeometry::a4());
        doc.start_page();
        doc.push(PageItem::Rule(RuleLine {
            x1: 15.0,
            x2: 195.0,
            y: 30.0,
            thickness: 0.3,
        }));
        assert!(doc.pages[0].items.is_empty());
        assert_eq!(doc.pages[1].rules().count(), 1);
        assert_eq!(doc.pages[1].number, 2);
    }
}
