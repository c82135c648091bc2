//! Section walker: turns a normalized profile into a paginated `Document`.
//!
//! Sections are visited in a fixed order. Each one asks `layout::sections`
//! whether it has renderable content before its heading is emitted, so an
//! empty list never leaves a stray heading behind.

use tracing::debug;

use crate::layout::document::{Document, PageGeometry};
use crate::layout::emitters::{HeadingLevel, LayoutSession, LineStyle};
use crate::layout::font_metrics::{Font, FontFamily};
use crate::layout::measure::TIGHT_LINE_HEIGHT_FACTOR;
use crate::layout::sections::{self, non_blank, SectionContent};
use crate::profile::snapshot::{
    ContactInfo, EducationEntry, ExperienceEntry, ProfileSnapshot, ProjectEntry,
};

pub const BODY_SIZE_PT: f32 = 10.0;
pub const NAME_SIZE_PT: f32 = 18.0;
pub const TITLE_SIZE_PT: f32 = 11.0;
pub const CONTACT_SIZE_PT: f32 = 9.0;
pub const META_SIZE_PT: f32 = 9.0;

/// Space between entries of a repeating section (not before the first).
pub const ENTRY_SPACING: f32 = 3.0;
/// Space between distinct blocks inside one entry.
pub const ITEM_BLOCK_SPACING: f32 = 1.5;
/// Space between skill sub-groups.
pub const SKILL_GROUP_SPACING: f32 = 1.5;

const RESPONSIBILITY_INDENT_MM: f32 = 5.0;
const ACHIEVEMENT_INDENT_MM: f32 = 7.0;
const FLAT_BULLET_INDENT_MM: f32 = 0.0;
const TECHNOLOGIES_INDENT_MM: f32 = 5.0;

pub const KEY_ACHIEVEMENTS_LABEL: &str = "Key Achievements:";

/// Lays out a resume in Helvetica.
pub fn layout_resume(profile: &ProfileSnapshot, geometry: &PageGeometry) -> Document {
    layout_resume_in(profile, geometry, FontFamily::Helvetica)
}

/// Lays out a resume with the given body font family.
///
/// Each call owns a fresh session; nothing carries over between exports.
pub fn layout_resume_in(
    profile: &ProfileSnapshot,
    geometry: &PageGeometry,
    family: FontFamily,
) -> Document {
    let mut session = LayoutSession::new(*geometry, Font::new(family, BODY_SIZE_PT));

    header(&mut session, profile);
    summary(&mut session, &profile.summary);
    experience(&mut session, &profile.experience);
    education(&mut session, &profile.education);
    skills(&mut session, profile);
    projects(&mut session, &profile.projects);

    if let SectionContent::NonEmpty(lines) = sections::achievements(&profile.achievements) {
        session.heading("Key Quantifiable Achievements", HeadingLevel::Section);
        session.bullets(&lines, FLAT_BULLET_INDENT_MM);
    }
    if let SectionContent::NonEmpty(text) = sections::certifications(&profile.certifications) {
        session.heading("Certifications", HeadingLevel::Section);
        session.paragraph(&text);
    }
    if let SectionContent::NonEmpty(text) = sections::community(&profile.community_involvement) {
        session.heading("Community Involvement & Awards", HeadingLevel::Section);
        session.paragraph(&text);
    }
    for section in &profile.custom_sections {
        if let SectionContent::NonEmpty(custom) = sections::custom_section(section) {
            session.heading(custom.title, HeadingLevel::Section);
            session.bullets(&custom.bullets, FLAT_BULLET_INDENT_MM);
        }
    }

    let document = session.finish();
    debug!(
        pages = document.page_count(),
        runs = document.text_runs().count(),
        "Resume layout complete"
    );
    document
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn header(session: &mut LayoutSession, profile: &ProfileSnapshot) {
    session.line(
        &profile.name,
        LineStyle::sized(NAME_SIZE_PT).bold().centered(),
    );
    session.gap(ITEM_BLOCK_SPACING);
    session.line(
        &profile.title,
        LineStyle::sized(TITLE_SIZE_PT)
            .centered()
            .leading(TIGHT_LINE_HEIGHT_FACTOR),
    );
    session.gap(ITEM_BLOCK_SPACING / 2.0);
    session.line(
        &contact_line(&profile.contact),
        LineStyle::sized(CONTACT_SIZE_PT)
            .centered()
            .leading(TIGHT_LINE_HEIGHT_FACTOR),
    );
}

fn summary(session: &mut LayoutSession, text: &str) {
    if let SectionContent::NonEmpty(text) = sections::from_text(text) {
        session.heading("Summary", HeadingLevel::Section);
        session.paragraph(text);
    }
}

fn experience(session: &mut LayoutSession, entries: &[ExperienceEntry]) {
    let SectionContent::NonEmpty(entries) = sections::from_slice(entries) else {
        return;
    };
    session.heading("Experience", HeadingLevel::Section);
    for (i, exp) in entries.iter().enumerate() {
        if i > 0 {
            session.gap(ENTRY_SPACING);
        }
        session.heading(
            &joined(&exp.role, &exp.company, " | "),
            HeadingLevel::Entry,
        );
        let meta = match non_blank(exp.location.as_deref()) {
            Some(location) => format!("{} | {location}", exp.period),
            None => exp.period.clone(),
        };
        session.line(&meta, meta_style());
        session.gap(ITEM_BLOCK_SPACING);

        session.bullets(&exp.responsibilities, RESPONSIBILITY_INDENT_MM);
        if exp.achievements.iter().any(|a| !a.trim().is_empty()) {
            session.gap(ITEM_BLOCK_SPACING);
            session.label(KEY_ACHIEVEMENTS_LABEL);
            session.gap(ITEM_BLOCK_SPACING / 2.0);
            session.bullets(&exp.achievements, ACHIEVEMENT_INDENT_MM);
        }
    }
}

fn education(session: &mut LayoutSession, entries: &[EducationEntry]) {
    let SectionContent::NonEmpty(entries) = sections::from_slice(entries) else {
        return;
    };
    session.heading("Education", HeadingLevel::Section);
    for (i, edu) in entries.iter().enumerate() {
        if i > 0 {
            session.gap(ENTRY_SPACING);
        }
        session.heading(&edu.degree, HeadingLevel::Entry);
        session.line(&edu.institution, LineStyle::sized(BODY_SIZE_PT));
        session.gap(ITEM_BLOCK_SPACING / 2.0);
        let meta = match non_blank(edu.grade.as_deref()) {
            Some(grade) => format!("{} | Grade: {grade}", edu.period),
            None => edu.period.clone(),
        };
        session.line(&meta, meta_style());
    }
}

fn skills(session: &mut LayoutSession, profile: &ProfileSnapshot) {
    let SectionContent::NonEmpty(skills) = sections::skills(&profile.skills) else {
        return;
    };
    session.heading("Skills", HeadingLevel::Section);
    for (i, group) in skills.groups.iter().enumerate() {
        if i > 0 {
            session.gap(SKILL_GROUP_SPACING);
        }
        session.heading(group.label, HeadingLevel::Minor);
        session.paragraph(&group.names.join(", "));
    }
}

fn projects(session: &mut LayoutSession, entries: &[ProjectEntry]) {
    let SectionContent::NonEmpty(entries) = sections::from_slice(entries) else {
        return;
    };
    session.heading("Projects", HeadingLevel::Section);
    for (i, project) in entries.iter().enumerate() {
        if i > 0 {
            session.gap(ENTRY_SPACING);
        }
        let title = match project.role.trim() {
            "" => project.name.clone(),
            role => format!("{} ({role})", project.name),
        };
        session.heading(&title, HeadingLevel::Entry);
        session.paragraph(&project.description);
        session.gap(ITEM_BLOCK_SPACING);
        session.bullets(&project.highlights, RESPONSIBILITY_INDENT_MM);

        let technologies: Vec<&str> = project
            .technologies
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if !technologies.is_empty() {
            session.gap(ITEM_BLOCK_SPACING);
            session.line(
                &format!("Technologies: {}", technologies.join(", ")),
                LineStyle::default().indented(TECHNOLOGIES_INDENT_MM),
            );
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn meta_style() -> LineStyle {
    LineStyle::sized(META_SIZE_PT).leading(TIGHT_LINE_HEIGHT_FACTOR)
}

fn joined(left: &str, right: &str, separator: &str) -> String {
    match (left.trim(), right.trim()) {
        (l, "") => l.to_string(),
        ("", r) => r.to_string(),
        (l, r) => format!("{l}{separator}{r}"),
    }
}

/// `email | phone | linkedin | github`, skipping empty parts.
pub fn contact_line(contact: &ContactInfo) -> String {
    let linkedin = strip_url_scheme(&contact.linkedin);
    let github = contact.github.as_deref().map(strip_url_scheme);
    [
        Some(contact.email.trim()),
        contact.phone.as_deref().map(str::trim),
        Some(linkedin),
        github,
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Drops a leading `http://` or `https://` and then a leading `www.`.
fn strip_url_scheme(url: &str) -> &str {
    let url = url.trim();
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.strip_prefix("www.").unwrap_or(url)
}
