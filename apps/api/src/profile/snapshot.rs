//! Profile data as edited in the portfolio admin and submitted for export.
//!
//! JSON field names are camelCase to match the browser's stored record.
//! Every list defaults to empty when absent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: String,
    pub github: Option<String>,
    pub linktree: String,
    pub x: Option<String>,
    pub farcaster: Option<String>,
    pub poap: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: Option<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Sub-group label; only meaningful for technical skills.
    pub category: Option<String>,
    /// Proficiency 1-5.
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<Skill>,
    pub tools: Vec<Skill>,
    pub soft: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub role: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementEntry {
    pub id: String,
    /// Headline figure, e.g. "40%" or "30.9M PKR".
    pub metric: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityEntry {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub id: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub items: Vec<CustomField>,
}

/// One immutable export input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub about_me: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub community_involvement: Vec<CommunityEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub education: Vec<EducationEntry>,
    pub custom_sections: Vec<CustomSection>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(id: &str, name: &str, category: Option<&str>) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
        level: None,
    }
}

impl ProfileSnapshot {
    /// A filled-in demo profile exercising every section.
    pub fn sample() -> Self {
        ProfileSnapshot {
            name: "Alex Morgan".to_string(),
            title: "Product Manager | Blockchain & Web3 | Digital Transformation".to_string(),
            tagline: "Shipping products people keep using.".to_string(),
            contact: ContactInfo {
                email: "alex.morgan@example.com".to_string(),
                phone: Some("+1 555 0100".to_string()),
                linkedin: "https://www.linkedin.com/in/alexmorgan".to_string(),
                github: Some("https://github.com/alexmorgan".to_string()),
                linktree: "https://linktr.ee/alexmorgan".to_string(),
                ..ContactInfo::default()
            },
            summary: "Product manager with eight years of experience in blockchain, Web3 and \
                      digital innovation, driving user engagement and revenue growth through \
                      strategic product development."
                .to_string(),
            about_me: String::new(),
            experience: vec![
                ExperienceEntry {
                    id: "exp1".to_string(),
                    role: "Digital Innovation Consultant".to_string(),
                    company: "Freelance".to_string(),
                    period: "MAR 2022 \u{2013} PRESENT".to_string(),
                    location: Some("Remote".to_string()),
                    responsibilities: strings(&[
                        "Implemented digital tooling for early-stage startups.",
                        "Developed and executed digital strategies for client retention.",
                    ]),
                    achievements: strings(&[
                        "Improved operational efficiency by 25%.",
                        "Raised client retention by 15%.",
                    ]),
                },
                ExperienceEntry {
                    id: "exp2".to_string(),
                    role: "Product Manager".to_string(),
                    company: "Northwind Holdings".to_string(),
                    period: "DEC 2020 \u{2013} JAN 2022".to_string(),
                    location: None,
                    responsibilities: strings(&[
                        "Managed the full product lifecycle for cryptocurrency offerings.",
                        "Ran user research and led agile sprints.",
                    ]),
                    achievements: Vec::new(),
                },
            ],
            skills: Skills {
                technical: vec![
                    skill("s1", "DeFi", Some("Blockchain & Web3")),
                    skill("s2", "Smart Contracts", Some("Blockchain & Web3")),
                    skill("s3", "Product Roadmap", Some("Product Management")),
                    skill("s4", "Solana", Some("Blockchain & Web3")),
                    skill("s5", "Spreadsheets", None),
                ],
                tools: vec![skill("t1", "JIRA", None), skill("t2", "SQL", None)],
                soft: vec![skill("so1", "Leadership", None), skill("so2", "Mentorship", None)],
            },
            projects: vec![ProjectEntry {
                id: "proj1".to_string(),
                name: "NFT Marketplace".to_string(),
                description: "Designed and launched a marketplace for digital collectibles."
                    .to_string(),
                role: "Product Lead".to_string(),
                highlights: strings(&["Implemented bidding and auction mechanisms."]),
                technologies: strings(&["Solana", "Next.js", "IPFS"]),
                project_url: Some("https://example.com/nft".to_string()),
            }],
            achievements: vec![
                AchievementEntry {
                    id: "ach1".to_string(),
                    metric: "40%".to_string(),
                    description: "Productivity Boost".to_string(),
                },
                AchievementEntry {
                    id: "ach2".to_string(),
                    metric: "30.9M PKR".to_string(),
                    description: "Profit Growth Enabled".to_string(),
                },
            ],
            community_involvement: vec![
                CommunityEntry {
                    id: "com1".to_string(),
                    name: "OdysseyDAO".to_string(),
                    role: Some("Contributor".to_string()),
                },
                CommunityEntry {
                    id: "com2".to_string(),
                    name: "Alchemy University".to_string(),
                    role: None,
                },
            ],
            certifications: vec![
                CertificationEntry {
                    id: "cert1".to_string(),
                    name: "Blockchain Fundamentals".to_string(),
                    issuer: Some("IBM".to_string()),
                    date: None,
                },
                CertificationEntry {
                    id: "cert2".to_string(),
                    name: "Certified QA Professional".to_string(),
                    issuer: None,
                    date: Some("2019".to_string()),
                },
            ],
            education: vec![EducationEntry {
                id: "edu1".to_string(),
                degree: "Bachelor of Software Engineering".to_string(),
                institution: "Bahria University, Islamabad".to_string(),
                period: "2011 \u{2013} 2015".to_string(),
                grade: Some("3.6 GPA".to_string()),
            }],
            custom_sections: vec![CustomSection {
                id: "cs1".to_string(),
                title: "Languages".to_string(),
                items: vec![
                    CustomField {
                        id: "f1".to_string(),
                        key: "English".to_string(),
                        value: "Fluent".to_string(),
                    },
                    CustomField {
                        id: "f2".to_string(),
                        key: "Urdu".to_string(),
                        value: String::new(),
                    },
                ],
            }],
        }
    }
}
