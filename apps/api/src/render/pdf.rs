//! Serializes a laid-out `Document` into PDF bytes with `lopdf`.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left, so every y is flipped. Fonts are the
//! standard Type1 faces with WinAnsiEncoding, which need no embedding.

use std::collections::{BTreeMap, BTreeSet};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream, StringFormat};
use thiserror::Error;
use tracing::debug;

use crate::layout::document::{Document, PageItem, RuleLine, TextRun};
use crate::layout::font_metrics::PT_TO_MM;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document has no pages")]
    EmptyDocument,

    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl RenderOptions {
    pub fn for_resume(name: &str) -> Self {
        RenderOptions {
            title: Some(format!("{name} Resume")),
            author: Some(name.to_string()),
        }
    }
}

/// Renders the whole document to PDF bytes.
///
/// No timestamps or random ids are written, so identical documents produce
/// identical bytes.
pub fn render_pdf(document: &Document, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut pdf = build_pdf(document, options)?;
    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    debug!(
        pages = document.page_count(),
        bytes = bytes.len(),
        "Rendered PDF"
    );
    Ok(bytes)
}

fn build_pdf(document: &Document, options: &RenderOptions) -> Result<lopdf::Document, RenderError> {
    if document.pages.is_empty() {
        return Err(RenderError::EmptyDocument);
    }

    let mut pdf = lopdf::Document::with_version(PDF_VERSION);
    let pages_id = pdf.new_object_id();

    // One resource name per PostScript font actually used, in a stable order.
    let fonts: BTreeMap<&'static str, String> = document
        .text_runs()
        .map(|(_, run)| run.font.postscript_name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, format!("F{}", i + 1)))
        .collect();

    let mut font_dict = Dictionary::new();
    for (postscript_name, resource) in &fonts {
        font_dict.set(
            resource.as_bytes(),
            Object::Dictionary(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *postscript_name,
                "Encoding" => "WinAnsiEncoding",
            }),
        );
    }
    let resources_id = pdf.add_object(dictionary! { "Font" => font_dict });

    let width_pt = mm_to_pt(document.geometry.width_mm);
    let height_pt = mm_to_pt(document.geometry.height_mm);

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let mut operations = Vec::new();
        for item in &page.items {
            match item {
                PageItem::Text(run) => text_operations(run, &fonts, height_pt, &mut operations),
                PageItem::Rule(rule) => rule_operations(rule, height_pt, &mut operations),
            }
        }
        let content = Content { operations }.encode()?;
        let content_id = pdf.add_object(Stream::new(Dictionary::new(), content));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width_pt.into(), height_pt.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let info_id = info_dictionary(&mut pdf, options);
    pdf.trailer.set("Info", info_id);

    Ok(pdf)
}

fn info_dictionary(pdf: &mut lopdf::Document, options: &RenderOptions) -> ObjectId {
    let mut info = dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    };
    if let Some(title) = &options.title {
        info.set("Title", Object::String(encode_win_ansi(title), StringFormat::Literal));
    }
    if let Some(author) = &options.author {
        info.set("Author", Object::String(encode_win_ansi(author), StringFormat::Literal));
    }
    pdf.add_object(info)
}

fn text_operations(
    run: &TextRun,
    fonts: &BTreeMap<&'static str, String>,
    page_height_pt: f32,
    operations: &mut Vec<Operation>,
) {
    let Some(resource) = fonts.get(run.font.postscript_name()) else {
        return;
    };
    // Runs are positioned by the top of their line box.
    let baseline_mm = run.y + run.font.size_mm();
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![resource.as_str().into(), run.font.size_pt.into()],
    ));
    operations.push(Operation::new(
        "Td",
        vec![
            mm_to_pt(run.x).into(),
            (page_height_pt - mm_to_pt(baseline_mm)).into(),
        ],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn rule_operations(rule: &RuleLine, page_height_pt: f32, operations: &mut Vec<Operation>) {
    let y = page_height_pt - mm_to_pt(rule.y);
    operations.push(Operation::new("w", vec![mm_to_pt(rule.thickness).into()]));
    operations.push(Operation::new("m", vec![mm_to_pt(rule.x1).into(), y.into()]));
    operations.push(Operation::new("l", vec![mm_to_pt(rule.x2).into(), y.into()]));
    operations.push(Operation::new("S", vec![]));
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / PT_TO_MM
}

/// Maps text to WinAnsiEncoding bytes. Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85,
            '\u{20AC}' => 0x80,
            '\u{2122}' => 0x99,
            '\u{00A0}' => b' ',
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// `Jane Doe` → `Jane_Doe_Resume.pdf`.
pub fn resume_file_name(name: &str) -> String {
    let stem: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| !matches!(c, '"' | '/' | '\\') && !c.is_control())
        .collect();
    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{stem}_Resume.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::document::PageGeometry;
    use crate::layout::walker::layout_resume;
    use crate::profile::snapshot::ProfileSnapshot;

    fn sample_document() -> Document {
        layout_resume(&ProfileSnapshot::sample(), &PageGeometry::a4())
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = render_pdf(&sample_document(), &RenderOptions::for_resume("Alex Morgan")).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"), "missing PDF header");
        assert!(contains(&bytes, b"%%EOF"));
        assert!(contains(&bytes, b"Helvetica-Bold"));
        assert!(contains(&bytes, b"WinAnsiEncoding"));
    }

    #[test]
    fn test_page_tree_matches_layout() {
        let mut profile = ProfileSnapshot::sample();
        let entry = profile.experience[0].clone();
        profile.experience = (0..10).map(|_| entry.clone()).collect();
        let document = layout_resume(&profile, &PageGeometry::a4());
        assert!(document.page_count() > 1);

        let pdf = build_pdf(&document, &RenderOptions::default()).unwrap();
        assert_eq!(pdf.get_pages().len(), document.page_count());
    }

    #[test]
    fn test_first_page_content_has_name_and_underline() {
        let pdf = build_pdf(&sample_document(), &RenderOptions::default()).unwrap();
        let first = *pdf.get_pages().get(&1).unwrap();
        let content = pdf.get_page_content(first).unwrap();
        assert!(contains(&content, b"(Alex Morgan)"));
        assert!(contains(&content, b" Tj"));
        assert!(contains(&content, b" l"), "section underline should be stroked");
    }

    #[test]
    fn test_rendering_is_byte_deterministic() {
        let document = sample_document();
        let options = RenderOptions::for_resume("Alex Morgan");
        assert_eq!(
            render_pdf(&document, &options).unwrap(),
            render_pdf(&document, &options).unwrap()
        );
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let mut document = sample_document();
        document.pages.clear();
        assert!(matches!(
            render_pdf(&document, &RenderOptions::default()),
            Err(RenderError::EmptyDocument)
        ));
    }

    #[test]
    fn test_write_failure_is_a_render_error() {
        fn save(pdf: &mut lopdf::Document, out: &mut Vec<u8>) -> Result<(), RenderError> {
            pdf.save_to(out)?;
            Ok(())
        }
        let mut pdf = build_pdf(&sample_document(), &RenderOptions::default()).unwrap();
        let mut out = Vec::new();
        save(&mut pdf, &mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"), "save_to output should feed render_pdf");

        let err = RenderError::from(std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"));
        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(err.to_string(), "PDF write failed: disk full");
    }

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(encode_win_ansi("\u{2022} A\u{2013}B"), vec![0x95, b' ', b'A', 0x96, b'B']);
        assert_eq!(encode_win_ansi("caf\u{e9}"), b"caf\xe9".to_vec());
        assert_eq!(encode_win_ansi("\u{4e2d}"), b"?".to_vec());
    }

    #[test]
    fn test_resume_file_name() {
        assert_eq!(resume_file_name("Jane Doe"), "Jane_Doe_Resume.pdf");
        assert_eq!(resume_file_name("Mary  Ann\tLee"), "Mary_Ann_Lee_Resume.pdf");
        assert_eq!(resume_file_name("   "), "Resume.pdf");
        assert_eq!(resume_file_name("A \"B\""), "A_B_Resume.pdf");
    }
}
