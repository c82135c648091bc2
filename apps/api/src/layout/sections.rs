//! "Has renderable content" checks, evaluated once per section before its heading.

use crate::profile::snapshot::{
    AchievementEntry, CertificationEntry, CommunityEntry, CustomSection, Skill, Skills,
};

/// Label used for technical skills without a category.
pub const UNCATEGORIZED_SKILLS: &str = "Other Technical Skills";

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent<T> {
    Empty,
    NonEmpty(T),
}

pub fn from_slice<T>(items: &[T]) -> SectionContent<&[T]> {
    if items.is_empty() {
        SectionContent::Empty
    } else {
        SectionContent::NonEmpty(items)
    }
}

pub fn from_text(text: &str) -> SectionContent<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        SectionContent::Empty
    } else {
        SectionContent::NonEmpty(trimmed)
    }
}

fn from_vec<T>(items: Vec<T>) -> SectionContent<Vec<T>> {
    if items.is_empty() {
        SectionContent::Empty
    } else {
        SectionContent::NonEmpty(items)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub label: &'a str,
    pub names: Vec<&'a str>,
}

/// Sub-groups in print order: technical categories (first-seen order), then
/// tools, then soft skills. Empty groups are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroups<'a> {
    pub groups: Vec<SkillGroup<'a>>,
}

pub const TOOLS_LABEL: &str = "Tools & Technologies";
pub const SOFT_SKILLS_LABEL: &str = "Soft Skills";

pub fn skills(skills: &Skills) -> SectionContent<SkillGroups<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();

    for skill in named(&skills.technical) {
        let label = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED_SKILLS);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.names.push(skill.name.trim()),
            None => groups.push(SkillGroup {
                label,
                names: vec![skill.name.trim()],
            }),
        }
    }

    for (label, list) in [(TOOLS_LABEL, &skills.tools), (SOFT_SKILLS_LABEL, &skills.soft)] {
        let names: Vec<&str> = named(list).map(|s| s.name.trim()).collect();
        if !names.is_empty() {
            groups.push(SkillGroup { label, names });
        }
    }

    if groups.is_empty() {
        SectionContent::Empty
    } else {
        SectionContent::NonEmpty(SkillGroups { groups })
    }
}

fn named(list: &[Skill]) -> impl Iterator<Item = &Skill> {
    list.iter().filter(|s| !s.name.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Flat sections
// ────────────────────────────────────────────────────────────────────────────

/// "metric: description" per achievement.
pub fn achievements(entries: &[AchievementEntry]) -> SectionContent<Vec<String>> {
    from_vec(
        entries
            .iter()
            .filter_map(|a| {
                match (a.metric.trim(), a.description.trim()) {
                    ("", "") => None,
                    (metric, "") => Some(metric.to_string()),
                    ("", description) => Some(description.to_string()),
                    (metric, description) => Some(format!("{metric}: {description}")),
                }
            })
            .collect(),
    )
}

/// Semicolon-joined "name (issuer)".
pub fn certifications(entries: &[CertificationEntry]) -> SectionContent<String> {
    let parts: Vec<String> = entries
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .map(|c| match non_blank(c.issuer.as_deref()) {
            Some(issuer) => format!("{} ({issuer})", c.name.trim()),
            None => c.name.trim().to_string(),
        })
        .collect();
    match from_vec(parts) {
        SectionContent::NonEmpty(parts) => SectionContent::NonEmpty(parts.join("; ")),
        SectionContent::Empty => SectionContent::Empty,
    }
}

/// Semicolon-joined "name - role".
pub fn community(entries: &[CommunityEntry]) -> SectionContent<String> {
    let parts: Vec<String> = entries
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .map(|c| match non_blank(c.role.as_deref()) {
            Some(role) => format!("{} - {role}", c.name.trim()),
            None => c.name.trim().to_string(),
        })
        .collect();
    match from_vec(parts) {
        SectionContent::NonEmpty(parts) => SectionContent::NonEmpty(parts.join("; ")),
        SectionContent::Empty => SectionContent::Empty,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderableCustomSection<'a> {
    pub title: &'a str,
    pub bullets: Vec<String>,
}

/// A custom section needs a title and at least one field with both key and value.
pub fn custom_section(section: &CustomSection) -> SectionContent<RenderableCustomSection<'_>> {
    let title = section.title.trim();
    if title.is_empty() {
        return SectionContent::Empty;
    }
    let bullets: Vec<String> = section
        .items
        .iter()
        .filter_map(|field| {
            let (key, value) = (field.key.trim(), field.value.trim());
            (!key.is_empty() && !value.is_empty()).then(|| format!("{key}: {value}"))
        })
        .collect();
    match from_vec(bullets) {
        SectionContent::NonEmpty(bullets) => {
            SectionContent::NonEmpty(RenderableCustomSection { title, bullets })
        }
        SectionContent::Empty => SectionContent::Empty,
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
