//! Block emitters on a single-export `LayoutSession`.
//!
//! Every emitter follows the same sequence: enter a font scope (if it styles
//! its text), measure under that exact font, fit-check the whole block, draw
//! each line at the cursor, advance. A block's lines always share one page.
//!
//! Headings are measured immediately but drawn only once the next block is
//! known, so a run of headings lands on the same page as the block it
//! introduces.

use tracing::{debug, warn};

use crate::layout::cursor::PageCursor;
use crate::layout::document::{BlockKind, Document, PageGeometry, PageItem, RuleLine, TextRun};
use crate::layout::font_metrics::Font;
use crate::layout::font_scope::{with_font, FontState};
use crate::layout::measure::{measure_with_leading, text_width_mm, LINE_HEIGHT_FACTOR};

pub const BULLET_GLYPH: &str = "\u{2022}";
/// Distance from the bullet glyph to its text.
pub const BULLET_HANG_MM: f32 = 3.0;
pub const BULLET_AFTER_SPACING: f32 = 1.0;
pub const LABEL_SIZE_PT: f32 = 10.0;

const RULE_OFFSET_MM: f32 = 0.8;
const RULE_THICKNESS_MM: f32 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Style types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Level 1: section title, underlined.
    Section,
    /// Level 2: entry title ("role | company").
    Entry,
    /// Level 3.
    Minor,
}

impl HeadingLevel {
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::Section => 1,
            HeadingLevel::Entry => 2,
            HeadingLevel::Minor => 3,
        }
    }

    pub fn size_pt(self) -> f32 {
        match self {
            HeadingLevel::Section => 14.0,
            HeadingLevel::Entry => 11.0,
            HeadingLevel::Minor => 10.0,
        }
    }

    pub fn space_before(self) -> f32 {
        match self {
            HeadingLevel::Section => 7.0,
            HeadingLevel::Entry | HeadingLevel::Minor => 3.0,
        }
    }

    pub fn space_after(self) -> f32 {
        match self {
            HeadingLevel::Section => 2.5,
            HeadingLevel::Entry => 1.5,
            HeadingLevel::Minor => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Styling for a single free-standing line block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub size_pt: Option<f32>,
    pub bold: bool,
    pub align: Align,
    pub indent_mm: f32,
    pub line_height_factor: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            size_pt: None,
            bold: false,
            align: Align::Left,
            indent_mm: 0.0,
            line_height_factor: LINE_HEIGHT_FACTOR,
        }
    }
}

impl LineStyle {
    pub fn sized(size_pt: f32) -> Self {
        LineStyle {
            size_pt: Some(size_pt),
            ..Self::default()
        }
    }

    pub fn bold(self) -> Self {
        LineStyle { bold: true, ..self }
    }

    pub fn centered(self) -> Self {
        LineStyle {
            align: Align::Center,
            ..self
        }
    }

    pub fn indented(self, indent_mm: f32) -> Self {
        LineStyle { indent_mm, ..self }
    }

    pub fn leading(self, line_height_factor: f32) -> Self {
        LineStyle {
            line_height_factor,
            ..self
        }
    }

    fn apply(&self, font: Font) -> Font {
        let font = if self.bold { font.bold() } else { font };
        match self.size_pt {
            Some(size) => font.sized(size),
            None => font,
        }
    }
}

/// Placement request for one atomic block drawn in the active font.
struct Placement<'t> {
    text: &'t str,
    x: f32,
    width: f32,
    align: Align,
    line_height_factor: f32,
    kind: BlockKind,
    /// Glyph drawn beside the first line, at this x.
    marker: Option<(&'static str, f32)>,
}

/// A measured heading waiting for the block it introduces.
struct PendingHeading {
    lines: Vec<String>,
    line_height: f32,
    height: f32,
    font: Font,
    level: HeadingLevel,
    /// Space owed below the heading: its post-gap plus any gaps requested
    /// before the next block.
    gap_after: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

/// All mutable state of one export: cursor, output pages, and active font.
///
/// A session is created per export call and consumed by `finish`, so nothing
/// is shared between exports.
pub struct LayoutSession {
    geometry: PageGeometry,
    cursor: PageCursor,
    document: Document,
    font: Font,
    next_block: u32,
    pending: Vec<PendingHeading>,
}

impl FontState for LayoutSession {
    fn font(&self) -> Font {
        self.font
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}

impl LayoutSession {
    pub fn new(geometry: PageGeometry, body_font: Font) -> Self {
        LayoutSession {
            geometry,
            cursor: PageCursor::new(geometry),
            document: Document::new(geometry),
            font: body_font,
            next_block: 0,
            pending: Vec::new(),
        }
    }

    /// Consumes the session and returns the finished document.
    ///
    /// Headings with no following block are placed on their own.
    pub fn finish(mut self) -> Document {
        self.place_pending(0.0);
        self.document
    }

    /// Vertical space between blocks.
    pub fn gap(&mut self, mm: f32) {
        match self.pending.last_mut() {
            Some(heading) => heading.gap_after += mm,
            None => self.cursor.advance(mm),
        }
    }

    /// Bold heading with level-dependent size and spacing.
    ///
    /// The heading is drawn together with the next block: the heading, its
    /// post-gap and that whole block must fit on one page, so a heading never
    /// ends a page on its own.
    pub fn heading(&mut self, text: &str, level: HeadingLevel) {
        if text.trim().is_empty() {
            return;
        }
        self.gap(level.space_before());

        let width = self.geometry.content_width();
        let (font, measured) = with_font(
            self,
            |f| f.bold().sized(level.size_pt()),
            |session| {
                let font = session.font;
                (font, measure_with_leading(text, width, &font, LINE_HEIGHT_FACTOR))
            },
        );
        if measured.is_empty() {
            return;
        }
        self.pending.push(PendingHeading {
            lines: measured.lines,
            line_height: measured.line_height,
            height: measured.height,
            font,
            level,
            gap_after: level.space_after(),
        });
    }

    /// Full-width paragraph in the active font.
    pub fn paragraph(&mut self, text: &str) {
        let x = self.geometry.margin_left_mm;
        let width = self.geometry.content_width();
        self.emit_block(Placement {
            text,
            x,
            width,
            align: Align::Left,
            line_height_factor: LINE_HEIGHT_FACTOR,
            kind: BlockKind::Paragraph,
            marker: None,
        });
    }

    /// One bullet block per item; blank items are skipped.
    pub fn bullets<I, T>(&mut self, items: I, indent_mm: f32)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let marker_x = self.geometry.margin_left_mm + indent_mm;
        let text_x = marker_x + BULLET_HANG_MM;
        let width = self.geometry.content_width() - indent_mm - BULLET_HANG_MM;

        for item in items {
            let text = item.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            let placed = self.emit_block(Placement {
                text,
                x: text_x,
                width,
                align: Align::Left,
                line_height_factor: LINE_HEIGHT_FACTOR,
                kind: BlockKind::Bullet,
                marker: Some((BULLET_GLYPH, marker_x)),
            });
            if placed {
                self.gap(BULLET_AFTER_SPACING);
            }
        }
    }

    /// Bold inline label such as "Key Achievements:".
    pub fn label(&mut self, text: &str) {
        with_font(
            self,
            |f| f.bold().sized(LABEL_SIZE_PT),
            |session| {
                let x = session.geometry.margin_left_mm;
                let width = session.geometry.content_width();
                session.emit_block(Placement {
                    text,
                    x,
                    width,
                    align: Align::Left,
                    line_height_factor: LINE_HEIGHT_FACTOR,
                    kind: BlockKind::Label,
                    marker: None,
                });
            },
        );
    }

    /// A styled standalone block (header lines, meta lines, indented notes).
    pub fn line(&mut self, text: &str, style: LineStyle) {
        with_font(
            self,
            |f| style.apply(f),
            |session| {
                let x = session.geometry.margin_left_mm + style.indent_mm;
                let width = session.geometry.content_width() - style.indent_mm;
                session.emit_block(Placement {
                    text,
                    x,
                    width,
                    align: style.align,
                    line_height_factor: style.line_height_factor,
                    kind: BlockKind::Line,
                    marker: None,
                });
            },
        );
    }

    /// Measures, fit-checks, draws and advances one block in the active font.
    ///
    /// Returns `false` when the text had nothing to draw.
    fn emit_block(&mut self, placement: Placement<'_>) -> bool {
        let font = self.font;
        let measured = measure_with_leading(placement.text, placement.width, &font, placement.line_height_factor);
        if measured.is_empty() {
            return false;
        }

        let line_height = measured.line_height;
        let oversize = measured.height > self.geometry.printable_height();
        self.place_pending(if oversize { line_height } else { measured.height });

        let block = self.next_block;
        self.next_block += 1;

        if oversize {
            // Cannot fit on any page: fall back to line-by-line placement.
            warn!(
                block,
                lines = measured.lines.len(),
                height_mm = measured.height,
                "Block taller than a page; placing it line by line"
            );
            for (i, line) in measured.lines.iter().enumerate() {
                self.cursor.ensure_fits(line_height, &mut self.document);
                if i == 0 {
                    self.push_marker(&placement, block, font, line_height);
                }
                let y = self.cursor.y();
                self.draw_line(&placement, line, block, font, line_height, y);
                self.cursor.advance(line_height);
            }
            return true;
        }

        self.cursor.ensure_fits(measured.height, &mut self.document);

        let top = self.cursor.y();
        for (i, line) in measured.lines.iter().enumerate() {
            if i == 0 {
                self.push_marker(&placement, block, font, line_height);
            }
            self.draw_line(&placement, line, block, font, line_height, top + i as f32 * line_height);
        }
        self.cursor.advance(measured.height);
        true
    }

    /// Draws every pending heading so that the headings, their gaps and the
    /// next `lead` mm share one page.
    ///
    /// `lead` is the following block's height, or its first line when the
    /// block is placed line by line.
    fn place_pending(&mut self, lead: f32) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        let chain: f32 = pending.iter().map(|h| h.height + h.gap_after).sum();
        let grouped = chain + lead <= self.geometry.printable_height();
        if grouped && self.cursor.ensure_fits(chain + lead, &mut self.document) {
            debug!(
                headings = pending.len(),
                page = self.cursor.page_index() + 1,
                "Moved headings to the page of their first block"
            );
        }

        for heading in pending {
            if !grouped {
                self.cursor.ensure_fits(heading.height, &mut self.document);
            }
            let block = self.next_block;
            self.next_block += 1;
            let x = self.geometry.margin_left_mm;
            let top = self.cursor.y();
            for (i, line) in heading.lines.iter().enumerate() {
                self.document.push(PageItem::Text(TextRun {
                    x,
                    y: top + i as f32 * heading.line_height,
                    line_height: heading.line_height,
                    text: line.clone(),
                    font: heading.font,
                    block,
                    kind: BlockKind::Heading {
                        level: heading.level.number(),
                    },
                }));
            }
            self.cursor.advance(heading.height);
            if heading.level == HeadingLevel::Section {
                let rule = RuleLine {
                    x1: x,
                    x2: x + self.geometry.content_width(),
                    y: self.cursor.y() + RULE_OFFSET_MM,
                    thickness: RULE_THICKNESS_MM,
                };
                self.document.push(PageItem::Rule(rule));
            }
            self.cursor.advance(heading.gap_after);
        }
    }

    fn push_marker(&mut self, placement: &Placement<'_>, block: u32, font: Font, line_height: f32) {
        if let Some((glyph, marker_x)) = placement.marker {
            self.document.push(PageItem::Text(TextRun {
                x: marker_x,
                y: self.cursor.y(),
                line_height,
                text: glyph.to_string(),
                font,
                block,
                kind: BlockKind::BulletMarker,
            }));
        }
    }

    fn draw_line(
        &mut self,
        placement: &Placement<'_>,
        line: &str,
        block: u32,
        font: Font,
        line_height: f32,
        y: f32,
    ) {
        let x = match placement.align {
            Align::Left => placement.x,
            Align::Center => placement.x + (placement.width - text_width_mm(line, &font)) / 2.0,
        };
        self.document.push(PageItem::Text(TextRun {
            x,
            y,
            line_height,
            text: line.to_string(),
            font,
            block,
            kind: placement.kind,
        }));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{FontFamily, FontWeight, PT_TO_MM};
    use std::collections::HashMap;

    fn body() -> Font {
        Font::new(FontFamily::Helvetica, 10.0)
    }

    fn session() -> LayoutSession {
        LayoutSession::new(PageGeometry::a4(), body())
    }

    fn runs_of(doc: &Document, kind: BlockKind) -> Vec<&TextRun> {
        doc.text_runs()
            .map(|(_, run)| run)
            .filter(|run| run.kind == kind)
            .collect()
    }

    fn block_pages(doc: &Document) -> HashMap<u32, Vec<usize>> {
        let mut pages: HashMap<u32, Vec<usize>> = HashMap::new();
        for (page, run) in doc.text_runs() {
            pages.entry(run.block).or_default().push(page);
        }
        pages
    }

    #[test]
    fn test_heading_does_not_leak_bold_or_size() {
        let mut s = session();
        s.heading("Experience", HeadingLevel::Section);
        assert_eq!(s.font(), body(), "heading must restore the body font");
        s.paragraph("Body text after heading");
        let doc = s.finish();

        let heading = runs_of(&doc, BlockKind::Heading { level: 1 });
        assert_eq!(heading.len(), 1);
        assert_eq!(heading[0].font.weight, FontWeight::Bold);
        assert_eq!(heading[0].font.size_pt, 14.0);

        let para = runs_of(&doc, BlockKind::Paragraph);
        assert_eq!(para[0].font.weight, FontWeight::Normal);
        assert_eq!(para[0].font.size_pt, 10.0);
    }

    #[test]
    fn test_label_inside_italic_context_restores_italic() {
        let mut s = session();
        with_font(&mut s, |f| f.italic(), |inner| {
            inner.label("Key Achievements:");
            assert!(inner.font().italic);
            assert_eq!(inner.font().weight, FontWeight::Normal);
            inner.paragraph("still italic");
        });
        assert_eq!(s.font(), body());
        let doc = s.finish();
        let label = runs_of(&doc, BlockKind::Label);
        assert_eq!(label[0].font.postscript_name(), "Helvetica-BoldOblique");
        let para = runs_of(&doc, BlockKind::Paragraph);
        assert_eq!(para[0].font.postscript_name(), "Helvetica-Oblique");
    }

    #[test]
    fn test_heading_levels_decrease_in_size() {
        assert!(HeadingLevel::Section.size_pt() > HeadingLevel::Entry.size_pt());
        assert!(HeadingLevel::Entry.size_pt() > HeadingLevel::Minor.size_pt());
    }

    #[test]
    fn test_section_heading_draws_underline_below_text() {
        let mut s = session();
        s.heading("Summary", HeadingLevel::Section);
        s.heading("Engineer | Acme", HeadingLevel::Entry);
        let doc = s.finish();
        let rules: Vec<_> = doc.pages[0].rules().collect();
        assert_eq!(rules.len(), 1, "only level-1 headings are underlined");
        let heading = &runs_of(&doc, BlockKind::Heading { level: 1 })[0];
        assert!(rules[0].y > heading.y + heading.line_height);
        assert!((rules[0].x2 - rules[0].x1 - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_bullets_hang_text_after_marker_and_skip_blanks() {
        let mut s = session();
        s.bullets(["Built X", "   ", "Shipped Y"], 5.0);
        let doc = s.finish();
        let markers = runs_of(&doc, BlockKind::BulletMarker);
        let bullets = runs_of(&doc, BlockKind::Bullet);
        assert_eq!(markers.len(), 2);
        assert_eq!(bullets.len(), 2);
        assert!((markers[0].x - 20.0).abs() < 1e-4);
        assert!((bullets[0].x - 23.0).abs() < 1e-4);
        assert_eq!(markers[0].block, bullets[0].block);
        assert_eq!(markers[0].y, bullets[0].y);
    }

    #[test]
    fn test_bullet_items_never_split_across_pages() {
        let mut s = session();
        let item = "Led comprehensive digital transformation across core business functions \
                    and integrated technology to optimize traditional business models."
            .repeat(2);
        let items: Vec<String> = (0..80).map(|_| item.clone()).collect();
        s.bullets(&items, 5.0);
        let doc = s.finish();
        assert!(doc.page_count() > 1, "80 long bullets should span pages");
        for (block, pages) in block_pages(&doc) {
            assert!(
                pages.windows(2).all(|w| w[0] == w[1]),
                "block {block} was split across pages {pages:?}"
            );
        }
    }

    #[test]
    fn test_nothing_crosses_printable_bottom() {
        let mut s = session();
        for i in 0..60 {
            s.heading(&format!("Entry {i}"), HeadingLevel::Entry);
            s.paragraph(&"Delivered measurable outcomes. ".repeat(8));
        }
        let doc = s.finish();
        let bottom = doc.geometry.printable_bottom();
        for (_, run) in doc.text_runs() {
            assert!(run.y + run.line_height <= bottom + 1e-3, "run '{}' crosses bottom", run.text);
        }
    }

    fn first_page(doc: &Document, kind: BlockKind) -> Option<usize> {
        doc.text_runs()
            .find(|(_, run)| run.kind == kind)
            .map(|(page, _)| page)
    }

    /// Moves the cursor so that `free` mm remain once `level`'s pre-gap is applied.
    fn leave_room(s: &mut LayoutSession, free: f32, level: HeadingLevel) {
        let used = s.geometry.printable_height() - free - level.space_before();
        s.gap(used);
    }

    fn heading_height(level: HeadingLevel) -> f32 {
        level.size_pt() * PT_TO_MM * LINE_HEIGHT_FACTOR
    }

    #[test]
    fn test_heading_is_kept_with_next_line() {
        let mut s = session();
        // Room for the heading itself but not for a following body line.
        leave_room(&mut s, heading_height(HeadingLevel::Entry) + 1.0, HeadingLevel::Entry);
        s.heading("Product Manager | Dan Holdings", HeadingLevel::Entry);
        s.paragraph("Owned the roadmap.");
        let doc = s.finish();
        assert_eq!(first_page(&doc, BlockKind::Heading { level: 2 }), Some(2), "heading should move to the next page");
        assert_eq!(first_page(&doc, BlockKind::Paragraph), Some(2));
        assert_eq!(runs_of(&doc, BlockKind::Heading { level: 2 })[0].y, 15.0);
    }

    #[test]
    fn test_section_heading_counts_its_post_gap() {
        let mut s = session();
        // Enough for heading, underline offset and one body line, but not the
        // 2.5 mm post-gap on top of them.
        let body_line = 10.0 * PT_TO_MM * LINE_HEIGHT_FACTOR;
        let free = heading_height(HeadingLevel::Section) + body_line + RULE_OFFSET_MM + 1.0;
        leave_room(&mut s, free, HeadingLevel::Section);
        s.heading("Summary", HeadingLevel::Section);
        s.paragraph("One line.");
        let doc = s.finish();

        let heading_page = first_page(&doc, BlockKind::Heading { level: 1 });
        assert_eq!(heading_page, first_page(&doc, BlockKind::Paragraph), "heading was stranded");
        assert_eq!(heading_page, Some(2));
        let rules: Vec<_> = doc.pages[1].rules().collect();
        assert_eq!(rules.len(), 1, "underline should follow its heading");
    }

    #[test]
    fn test_heading_moves_with_whole_multi_line_block() {
        let mut s = session();
        let body_line = 10.0 * PT_TO_MM * LINE_HEIGHT_FACTOR;
        let free = heading_height(HeadingLevel::Entry) + HeadingLevel::Entry.space_after() + 2.0 * body_line;
        leave_room(&mut s, free, HeadingLevel::Entry);
        s.heading("Engineer | Acme", HeadingLevel::Entry);
        s.paragraph(&"Delivered measurable outcomes across several teams. ".repeat(12));
        let doc = s.finish();

        assert!(runs_of(&doc, BlockKind::Paragraph).len() > 2, "paragraph should wrap past two lines");
        let heading_page = first_page(&doc, BlockKind::Heading { level: 2 });
        assert_eq!(heading_page, first_page(&doc, BlockKind::Paragraph), "heading was stranded");
        assert_eq!(heading_page, Some(2));
        assert!(doc.pages[0].text_runs().next().is_none(), "nothing should be left on page 1");
    }

    #[test]
    fn test_consecutive_headings_stay_with_first_block() {
        let mut s = session();
        let free = heading_height(HeadingLevel::Section) + heading_height(HeadingLevel::Entry) + 5.0;
        leave_room(&mut s, free, HeadingLevel::Section);
        s.heading("Experience", HeadingLevel::Section);
        s.heading("Engineer | Acme", HeadingLevel::Entry);
        s.line("2020 - 2022", LineStyle::sized(9.0));
        let doc = s.finish();

        assert_eq!(first_page(&doc, BlockKind::Heading { level: 1 }), Some(2));
        assert_eq!(first_page(&doc, BlockKind::Heading { level: 2 }), Some(2));
        assert_eq!(first_page(&doc, BlockKind::Line), Some(2));
        let section = &runs_of(&doc, BlockKind::Heading { level: 1 })[0];
        let entry = &runs_of(&doc, BlockKind::Heading { level: 2 })[0];
        let expected = section.y
            + section.line_height
            + HeadingLevel::Section.space_after()
            + HeadingLevel::Entry.space_before();
        assert!((entry.y - expected).abs() < 1e-3, "gaps between headings should be kept");
        assert!(section.block < entry.block, "block ids follow document order");
    }

    #[test]
    fn test_trailing_heading_is_placed_on_finish() {
        let mut s = session();
        s.heading("Certifications", HeadingLevel::Section);
        s.paragraph("   ");
        let doc = s.finish();
        let heading = runs_of(&doc, BlockKind::Heading { level: 1 });
        assert_eq!(heading.len(), 1);
        assert_eq!(heading[0].y, 15.0 + HeadingLevel::Section.space_before());
        assert_eq!(doc.pages[0].rules().count(), 1);
    }

    #[test]
    fn test_oversized_paragraph_is_placed_line_by_line_within_margins() {
        let mut s = session();
        s.paragraph(&"An extremely long narrative that keeps going. ".repeat(400));
        let doc = s.finish();
        assert!(doc.page_count() >= 2);
        let bottom = doc.geometry.printable_bottom();
        for (_, run) in doc.text_runs() {
            assert!(run.y + run.line_height <= bottom + 1e-3);
            assert!(run.y >= doc.geometry.margin_top_mm - 1e-3);
        }
    }

    #[test]
    fn test_centered_line_is_centered_on_content_area() {
        let mut s = session();
        s.line("Jane Doe", LineStyle::sized(18.0).bold().centered());
        let doc = s.finish();
        let run = &runs_of(&doc, BlockKind::Line)[0];
        let width = text_width_mm("Jane Doe", &run.font);
        let center = run.x + width / 2.0;
        assert!((center - 105.0).abs() < 1e-3, "center was {center}");
        assert!(run.font.is_bold());
    }

    #[test]
    fn test_empty_text_emits_nothing_and_does_not_advance() {
        let mut s = session();
        let before = s.cursor.y();
        s.paragraph("");
        s.line("   ", LineStyle::sized(9.0));
        assert_eq!(s.cursor.y(), before);
        assert_eq!(s.finish().text_runs().count(), 0);
    }

    #[test]
    fn test_offsets_are_monotonic_within_page() {
        let mut s = session();
        for _ in 0..40 {
            s.heading("Projects", HeadingLevel::Section);
            s.bullets(["one", "two", "three"], 0.0);
        }
        let doc = s.finish();
        for page in &doc.pages {
            let ys: Vec<f32> = page.text_runs().map(|r| r.y).collect();
            assert!(ys.windows(2).all(|w| w[0] <= w[1] + 1e-4), "page {} not monotonic", page.number);
            if page.number > 1 {
                assert_eq!(ys[0], 15.0, "page {} must start at the top margin", page.number);
            }
        }
    }
}
