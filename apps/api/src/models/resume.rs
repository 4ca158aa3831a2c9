//! Résumé domain model.
#![allow(dead_code)]
//!
//! A [`ResumeRecord`] is a plain, serializable aggregate with no identity
//! beyond the generated entry ids. It is constructed from seed values when a
//! session is created and thereafter only ever replaced wholesale — edits
//! build a new record, the session holds the only long-lived reference.
//!
//! Skills carry an explicit [`SkillCategory`] tag. Category membership is
//! never encoded by array position; order is only meaningful *within* a
//! category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// The three skill bands the résumé layout displays, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
}

impl SkillCategory {
    /// All bands in display order.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
    ];

    /// The label printed in front of the band on the rendered résumé.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Databases => "Databases",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Skill {
            name: name.into(),
            category,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry types
// ────────────────────────────────────────────────────────────────────────────

/// Contact block rendered in the résumé header. All fields may be blank;
/// blank fields fall back to placeholders in the editor and are dropped from
/// the printed header line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// One position in the experience section.
///
/// Invariant: when `current` is true the displayed date range ends in
/// "Present" regardless of what `end_date` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    /// ISO year-month ("2022-06") or empty.
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// One bullet per element, each independently editable.
    pub achievements: Vec<String>,
}

impl ExperienceEntry {
    /// A blank entry ready for editing. Starts with one empty achievement
    /// line so the bullet list is immediately clickable.
    pub fn new() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            title: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            achievements: vec![String::new()],
        }
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    /// Free-text grade. A '%' anywhere in the text selects the
    /// "Percentage:" display label instead of "CGPA:".
    pub gpa: Option<String>,
}

impl EducationEntry {
    pub fn new() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// One project. Bullets are a first-class ordered list; the flat description
/// form only exists at the import/export boundary (see `resume::text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub title: String,
    pub bullets: Vec<String>,
    pub link: Option<String>,
    pub technologies: Vec<String>,
}

impl ProjectEntry {
    pub fn new() -> Self {
        ProjectEntry {
            id: Uuid::new_v4(),
            title: String::new(),
            bullets: vec![String::new()],
            link: None,
            technologies: Vec::new(),
        }
    }
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    /// Display-formatted date text ("Jun 2023"); not parsed.
    pub date: String,
    pub link: Option<String>,
}

impl CertificationEntry {
    pub fn new() -> Self {
        CertificationEntry {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            link: None,
        }
    }
}

impl Default for CertificationEntry {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeRecord {
    /// An entirely blank record.
    pub fn blank() -> Self {
        ResumeRecord {
            contact: ContactInfo::default(),
            summary: String::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
        }
    }

    /// The names in one skill band, in stored order.
    pub fn band(&self, category: SkillCategory) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Replaces exactly one band with `names`, leaving every other band's
    /// skills untouched and in their original relative order. The replaced
    /// band keeps its position in the overall list (first occurrence wins;
    /// a previously empty band is appended at the end).
    pub fn replace_band(&self, category: SkillCategory, names: &[String]) -> Vec<Skill> {
        let mut out: Vec<Skill> = Vec::with_capacity(self.skills.len());
        let mut inserted = false;
        for skill in &self.skills {
            if skill.category == category {
                if !inserted {
                    out.extend(names.iter().map(|n| Skill::new(n.clone(), category)));
                    inserted = true;
                }
                // remaining old members of the band are dropped
            } else {
                out.push(skill.clone());
            }
        }
        if !inserted {
            out.extend(names.iter().map(|n| Skill::new(n.clone(), category)));
        }
        out
    }

    /// Seed record for new sessions: a filled one-page résumé the user edits
    /// in place.
    pub fn sample() -> Self {
        ResumeRecord {
            contact: ContactInfo {
                full_name: "Alex Carter".to_string(),
                email: "alex.carter@example.com".to_string(),
                phone: "+1 (555) 014-2288".to_string(),
                linkedin: "linkedin.com/in/alexcarter".to_string(),
                github: "github.com/alexcarter".to_string(),
            },
            summary: "Software engineer with four years of experience building \
                      web platforms and data tooling."
                .to_string(),
            skills: vec![
                Skill::new("Python", SkillCategory::Languages),
                Skill::new("TypeScript", SkillCategory::Languages),
                Skill::new("JavaScript", SkillCategory::Languages),
                Skill::new("SQL", SkillCategory::Languages),
                Skill::new("Go", SkillCategory::Languages),
                Skill::new("C++", SkillCategory::Languages),
                Skill::new("React", SkillCategory::Frameworks),
                Skill::new("Node.js", SkillCategory::Frameworks),
                Skill::new("Flask", SkillCategory::Frameworks),
                Skill::new("Django", SkillCategory::Frameworks),
                Skill::new("PostgreSQL", SkillCategory::Databases),
                Skill::new("Redis", SkillCategory::Databases),
                Skill::new("MongoDB", SkillCategory::Databases),
            ],
            experience: vec![
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    title: "Software Development Engineer".to_string(),
                    company: "Northwind Systems".to_string(),
                    location: "Portland, OR".to_string(),
                    start_date: "2022-06".to_string(),
                    end_date: String::new(),
                    current: true,
                    achievements: vec![
                        "Built a validation pipeline that cut board bring-up time by 30% \
                         across three product lines"
                            .to_string(),
                        "Automated regression triage with a rules engine, reducing manual \
                         review load by half"
                            .to_string(),
                        "Led migration of internal dashboards from Flask to React with \
                         zero downtime"
                            .to_string(),
                    ],
                },
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    title: "Graduate Engineering Intern".to_string(),
                    company: "Northwind Systems".to_string(),
                    location: "Portland, OR".to_string(),
                    start_date: "2021-08".to_string(),
                    end_date: "2022-06".to_string(),
                    current: false,
                    achievements: vec![
                        "Prototyped telemetry collection for lab hosts, later adopted \
                         team-wide"
                            .to_string(),
                    ],
                },
            ],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                degree: "M.S. Computer Science".to_string(),
                institution: "Lakeview Institute of Technology".to_string(),
                start_date: "2016-07".to_string(),
                end_date: "2021-05".to_string(),
                gpa: Some("8.9".to_string()),
            }],
            projects: vec![ProjectEntry {
                id: Uuid::new_v4(),
                title: "Trailhead".to_string(),
                bullets: vec![
                    "Built a route-planning web app used by 2k monthly hikers.".to_string(),
                    "Implemented offline tile caching with a service worker.".to_string(),
                ],
                link: Some("github.com/alexcarter/trailhead".to_string()),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "PostgreSQL".to_string(),
                ],
            }],
            certifications: vec![CertificationEntry {
                id: Uuid::new_v4(),
                name: "AWS Certified Developer — Associate".to_string(),
                issuer: "Amazon Web Services".to_string(),
                date: "Mar 2023".to_string(),
                link: None,
            }],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── bands ───────────────────────────────────────────────────────────────

    #[test]
    fn test_band_filters_by_category() {
        let record = ResumeRecord::sample();
        let languages = record.band(SkillCategory::Languages);
        assert!(languages.contains(&"Python"));
        assert!(!languages.contains(&"React"), "React is a framework");
    }

    #[test]
    fn test_replace_band_preserves_other_categories() {
        let record = ResumeRecord::sample();
        let before_dbs: Vec<String> = record
            .band(SkillCategory::Databases)
            .iter()
            .map(|s| s.to_string())
            .collect();

        let new_langs = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let skills = record.replace_band(SkillCategory::Languages, &new_langs);

        let langs: Vec<&str> = skills
            .iter()
            .filter(|s| s.category == SkillCategory::Languages)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(langs, vec!["A", "B", "C"]);

        let dbs: Vec<String> = skills
            .iter()
            .filter(|s| s.category == SkillCategory::Databases)
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(dbs, before_dbs, "database band must be untouched");
    }

    #[test]
    fn test_replace_band_keeps_band_position() {
        let record = ResumeRecord::sample();
        let skills = record.replace_band(SkillCategory::Languages, &["Zig".to_string()]);
        // Languages come first in the sample record; the replacement must not
        // move the band to the end.
        assert_eq!(skills[0].name, "Zig");
        assert_eq!(skills[0].category, SkillCategory::Languages);
    }

    #[test]
    fn test_replace_empty_band_appends() {
        let mut record = ResumeRecord::blank();
        record.skills = vec![Skill::new("Rust", SkillCategory::Languages)];
        let skills = record.replace_band(SkillCategory::Databases, &["SQLite".to_string()]);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].name, "SQLite");
    }

    // ── entry constructors ──────────────────────────────────────────────────

    #[test]
    fn test_new_experience_has_one_blank_achievement() {
        let entry = ExperienceEntry::new();
        assert_eq!(entry.achievements, vec![String::new()]);
        assert!(!entry.current);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = ExperienceEntry::new();
        let b = ExperienceEntry::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sample_record_round_trips_through_json() {
        let record = ResumeRecord::sample();
        let json = serde_json::to_string(&record).expect("serialize");
        let back: ResumeRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }

    #[test]
    fn test_sample_record_fills_all_bands() {
        let record = ResumeRecord::sample();
        for category in SkillCategory::ALL {
            assert!(
                !record.band(category).is_empty(),
                "sample record should seed the {} band",
                category.label()
            );
        }
    }
}
