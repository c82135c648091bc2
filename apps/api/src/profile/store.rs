//! Normalization applied once to every submitted profile before layout.
//!
//! After `normalize` succeeds the layout engine can rely on: a non-empty name,
//! trimmed strings, `None` instead of blank optional fields, no blank list
//! items, and a stable id on every record.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::profile::snapshot::{ProfileSnapshot, Skill};

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile name is required")]
    MissingName,

    #[error("skill '{skill}' has level {level}; levels run from 1 to 5")]
    SkillLevelOutOfRange { skill: String, level: u8 },
}

/// Cleans a submitted snapshot and rejects it if a required field is missing.
pub fn normalize(mut profile: ProfileSnapshot) -> Result<ProfileSnapshot, ProfileError> {
    tidy(&mut profile.name);
    if profile.name.is_empty() {
        return Err(ProfileError::MissingName);
    }
    tidy(&mut profile.title);
    tidy(&mut profile.tagline);
    tidy(&mut profile.summary);
    tidy(&mut profile.about_me);

    let contact = &mut profile.contact;
    tidy(&mut contact.email);
    tidy(&mut contact.linkedin);
    tidy(&mut contact.linktree);
    for field in [
        &mut contact.phone,
        &mut contact.github,
        &mut contact.x,
        &mut contact.farcaster,
        &mut contact.poap,
    ] {
        tidy_opt(field);
    }

    let mut assigned = 0usize;

    for exp in &mut profile.experience {
        assigned += ensure_id(&mut exp.id);
        tidy(&mut exp.role);
        tidy(&mut exp.company);
        tidy(&mut exp.period);
        tidy_opt(&mut exp.location);
        tidy_list(&mut exp.responsibilities);
        tidy_list(&mut exp.achievements);
    }

    for edu in &mut profile.education {
        assigned += ensure_id(&mut edu.id);
        tidy(&mut edu.degree);
        tidy(&mut edu.institution);
        tidy(&mut edu.period);
        tidy_opt(&mut edu.grade);
    }

    let skills = &mut profile.skills;
    for list in [&mut skills.technical, &mut skills.tools, &mut skills.soft] {
        assigned += tidy_skills(list)?;
    }

    for project in &mut profile.projects {
        assigned += ensure_id(&mut project.id);
        tidy(&mut project.name);
        tidy(&mut project.description);
        tidy(&mut project.role);
        tidy_list(&mut project.highlights);
        tidy_list(&mut project.technologies);
        tidy_opt(&mut project.project_url);
    }

    for achievement in &mut profile.achievements {
        assigned += ensure_id(&mut achievement.id);
        tidy(&mut achievement.metric);
        tidy(&mut achievement.description);
    }

    for cert in &mut profile.certifications {
        assigned += ensure_id(&mut cert.id);
        tidy(&mut cert.name);
        tidy_opt(&mut cert.issuer);
        tidy_opt(&mut cert.date);
    }
    profile.certifications.retain(|c| !c.name.is_empty());

    for entry in &mut profile.community_involvement {
        assigned += ensure_id(&mut entry.id);
        tidy(&mut entry.name);
        tidy_opt(&mut entry.role);
    }
    profile.community_involvement.retain(|c| !c.name.is_empty());

    for section in &mut profile.custom_sections {
        assigned += ensure_id(&mut section.id);
        tidy(&mut section.title);
        for field in &mut section.items {
            assigned += ensure_id(&mut field.id);
            tidy(&mut field.key);
            tidy(&mut field.value);
        }
    }

    if assigned > 0 {
        debug!(assigned, "Assigned ids to profile records without one");
    }
    Ok(profile)
}

fn tidy(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn tidy_opt(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        tidy(inner);
        if inner.is_empty() {
            *value = None;
        }
    }
}

fn tidy_list(items: &mut Vec<String>) {
    items.iter_mut().for_each(tidy);
    items.retain(|item| !item.is_empty());
}

fn tidy_skills(skills: &mut Vec<Skill>) -> Result<usize, ProfileError> {
    let mut assigned = 0;
    for skill in skills.iter_mut() {
        assigned += ensure_id(&mut skill.id);
        tidy(&mut skill.name);
        tidy_opt(&mut skill.category);
        if let Some(level) = skill.level {
            if !(1..=5).contains(&level) {
                return Err(ProfileError::SkillLevelOutOfRange {
                    skill: skill.name.clone(),
                    level,
                });
            }
        }
    }
    skills.retain(|s| !s.name.is_empty());
    Ok(assigned)
}

/// Gives a record a fresh id if it has none. Returns 1 when an id was assigned.
fn ensure_id(id: &mut String) -> usize {
    tidy(id);
    if id.is_empty() {
        *id = Uuid::new_v4().to_string();
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::snapshot::{CustomField, CustomSection, ExperienceEntry};

    fn named(name: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            name: name.to_string(),
            ..ProfileSnapshot::default()
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(normalize(named("   ")), Err(ProfileError::MissingName));
    }

    #[test]
    fn test_strings_are_trimmed_and_blank_options_dropped() {
        let mut profile = named("  Jane Doe ");
        profile.contact.phone = Some("   ".to_string());
        profile.contact.github = Some(" github.com/jane ".to_string());
        let profile = normalize(profile).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.contact.phone, None);
        assert_eq!(profile.contact.github.as_deref(), Some("github.com/jane"));
    }

    #[test]
    fn test_blank_list_items_removed() {
        let mut profile = named("Jane");
        profile.experience.push(ExperienceEntry {
            id: "e1".to_string(),
            role: "Engineer".to_string(),
            responsibilities: vec!["Built X".to_string(), "  ".to_string()],
            achievements: vec![String::new()],
            ..ExperienceEntry::default()
        });
        let profile = normalize(profile).unwrap();
        assert_eq!(profile.experience[0].responsibilities, vec!["Built X"]);
        assert!(profile.experience[0].achievements.is_empty());
    }

    #[test]
    fn test_missing_ids_are_assigned_and_existing_kept() {
        let mut profile = named("Jane");
        profile.experience.push(ExperienceEntry {
            id: "keep-me".to_string(),
            ..ExperienceEntry::default()
        });
        profile.experience.push(ExperienceEntry::default());
        let profile = normalize(profile).unwrap();
        assert_eq!(profile.experience[0].id, "keep-me");
        assert!(Uuid::parse_str(&profile.experience[1].id).is_ok());
    }

    #[test]
    fn test_custom_fields_kept_even_when_blank() {
        let mut profile = named("Jane");
        profile.custom_sections.push(CustomSection {
            id: String::new(),
            title: " Languages ".to_string(),
            items: vec![CustomField {
                id: String::new(),
                key: "Urdu".to_string(),
                value: " ".to_string(),
            }],
        });
        let profile = normalize(profile).unwrap();
        let section = &profile.custom_sections[0];
        assert_eq!(section.title, "Languages");
        assert_eq!(section.items.len(), 1, "blank fields are skipped at layout time, not here");
        assert_eq!(section.items[0].value, "");
    }

    #[test]
    fn test_skill_level_out_of_range_is_rejected() {
        let mut profile = named("Jane");
        profile.skills.tools.push(Skill {
            id: "t1".to_string(),
            name: "SQL".to_string(),
            category: None,
            level: Some(9),
        });
        assert_eq!(
            normalize(profile),
            Err(ProfileError::SkillLevelOutOfRange {
                skill: "SQL".to_string(),
                level: 9
            })
        );
    }

    #[test]
    fn test_sample_profile_normalizes_unchanged() {
        let sample = ProfileSnapshot::sample();
        assert_eq!(normalize(sample.clone()).unwrap(), sample);
    }
}
