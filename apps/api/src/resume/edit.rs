//! Whole-record résumé editing.
//!
//! Every mutation goes through [`apply_edit`], which never touches the input
//! record: it builds a structurally new [`ResumeRecord`], copying only the
//! list that actually changed. The session holds the single long-lived
//! reference, so replacement-by-value is the whole concurrency story.
//!
//! [`FieldPath`] names each editable location on the rendered page and maps
//! committed text back into the record — the same field-to-record wiring the
//! inline editor drives.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord, Skill,
    SkillCategory,
};
use crate::resume::field::FieldMode;
use crate::resume::format::{grade_line, strip_grade_label};
use crate::resume::text::{split_csv, split_sentences};

// ────────────────────────────────────────────────────────────────────────────
// Field addressing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    StartDate,
    EndDate,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    Link,
    Technologies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationField {
    Name,
    Issuer,
    Date,
    Link,
}

/// One editable location on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum FieldPath {
    Contact { field: ContactField },
    Summary,
    /// The comma-joined text of one skill band.
    SkillBand { category: SkillCategory },
    Experience { id: Uuid, field: ExperienceField },
    Achievement { id: Uuid, index: usize },
    Education { id: Uuid, field: EducationField },
    Project { id: Uuid, field: ProjectField },
    ProjectBullet { id: Uuid, index: usize },
    Certification { id: Uuid, field: CertificationField },
}

impl FieldPath {
    /// Editor mode for this field. Achievement bullets and the summary are
    /// the only multi-line surfaces; everything else is a single line.
    pub fn mode(&self) -> FieldMode {
        match self {
            FieldPath::Summary | FieldPath::Achievement { .. } => FieldMode::MultiLine,
            _ => FieldMode::SingleLine,
        }
    }

    /// Current display text for this field — what an editor draft starts
    /// from.
    pub fn read(&self, record: &ResumeRecord) -> Result<String, EditError> {
        match self {
            FieldPath::Contact { field } => Ok(match field {
                ContactField::FullName => record.contact.full_name.clone(),
                ContactField::Email => record.contact.email.clone(),
                ContactField::Phone => record.contact.phone.clone(),
                ContactField::Linkedin => record.contact.linkedin.clone(),
                ContactField::Github => record.contact.github.clone(),
            }),
            FieldPath::Summary => Ok(record.summary.clone()),
            FieldPath::SkillBand { category } => Ok(record.band(*category).join(", ")),
            FieldPath::Experience { id, field } => {
                let entry = find_experience(record, *id)?;
                Ok(match field {
                    ExperienceField::Title => entry.title.clone(),
                    ExperienceField::Company => entry.company.clone(),
                    ExperienceField::Location => entry.location.clone(),
                    ExperienceField::StartDate => entry.start_date.clone(),
                    ExperienceField::EndDate => entry.end_date.clone(),
                })
            }
            FieldPath::Achievement { id, index } => {
                let entry = find_experience(record, *id)?;
                entry
                    .achievements
                    .get(*index)
                    .cloned()
                    .ok_or(EditError::IndexOutOfRange { index: *index })
            }
            FieldPath::Education { id, field } => {
                let entry = find_education(record, *id)?;
                Ok(match field {
                    EducationField::Degree => entry.degree.clone(),
                    EducationField::Institution => entry.institution.clone(),
                    EducationField::StartDate => entry.start_date.clone(),
                    EducationField::EndDate => entry.end_date.clone(),
                    EducationField::Gpa => {
                        entry.gpa.as_deref().map(grade_line).unwrap_or_default()
                    }
                })
            }
            FieldPath::Project { id, field } => {
                let entry = find_project(record, *id)?;
                Ok(match field {
                    ProjectField::Title => entry.title.clone(),
                    ProjectField::Link => entry.link.clone().unwrap_or_default(),
                    ProjectField::Technologies => entry.technologies.join(", "),
                })
            }
            FieldPath::ProjectBullet { id, index } => {
                let entry = find_project(record, *id)?;
                entry
                    .bullets
                    .get(*index)
                    .cloned()
                    .ok_or(EditError::IndexOutOfRange { index: *index })
            }
            FieldPath::Certification { id, field } => {
                let entry = find_certification(record, *id)?;
                Ok(match field {
                    CertificationField::Name => entry.name.clone(),
                    CertificationField::Issuer => entry.issuer.clone(),
                    CertificationField::Date => entry.date.clone(),
                    CertificationField::Link => entry.link.clone().unwrap_or_default(),
                })
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Edit operations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySection {
    Experience,
    Education,
    Project,
    Certification,
}

/// A single edit against the record. `SetField` is the inline-editor commit
/// path; the rest are the form-style list operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetField { path: FieldPath, value: String },
    SetCurrent { id: Uuid, current: bool },
    AddSkill { name: String, category: SkillCategory },
    RemoveSkill { category: SkillCategory, index: usize },
    AddEntry { section: EntrySection },
    RemoveEntry { id: Uuid },
    AddAchievement { id: Uuid },
    RemoveAchievement { id: Uuid, index: usize },
    AddBullet { id: Uuid },
    RemoveBullet { id: Uuid, index: usize },
    /// Replaces a project's bullet list by sentence-splitting a flat
    /// description (the import boundary for pasted text).
    ImportDescription { id: Uuid, description: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("no entry with id {0}")]
    UnknownEntry(Uuid),
    #[error("index {index} is out of range")]
    IndexOutOfRange { index: usize },
}

/// Applies one edit, returning a structurally new record. The input is never
/// mutated; untouched sections are cloned as-is.
pub fn apply_edit(record: &ResumeRecord, edit: &ResumeEdit) -> Result<ResumeRecord, EditError> {
    match edit {
        ResumeEdit::SetField { path, value } => set_field(record, path, value),
        ResumeEdit::SetCurrent { id, current } => {
            with_experience(record, *id, |entry| {
                entry.current = *current;
                Ok(())
            })
        }
        ResumeEdit::AddSkill { name, category } => {
            let mut next = record.clone();
            next.skills.push(Skill::new(name.clone(), *category));
            Ok(next)
        }
        ResumeEdit::RemoveSkill { category, index } => {
            let mut next = record.clone();
            let position = next
                .skills
                .iter()
                .enumerate()
                .filter(|(_, s)| s.category == *category)
                .map(|(i, _)| i)
                .nth(*index)
                .ok_or(EditError::IndexOutOfRange { index: *index })?;
            next.skills.remove(position);
            Ok(next)
        }
        ResumeEdit::AddEntry { section } => {
            let mut next = record.clone();
            match section {
                EntrySection::Experience => next.experience.push(ExperienceEntry::new()),
                EntrySection::Education => next.education.push(EducationEntry::new()),
                EntrySection::Project => next.projects.push(ProjectEntry::new()),
                EntrySection::Certification => {
                    next.certifications.push(CertificationEntry::new())
                }
            }
            Ok(next)
        }
        ResumeEdit::RemoveEntry { id } => remove_entry(record, *id),
        ResumeEdit::AddAchievement { id } => with_experience(record, *id, |entry| {
            entry.achievements.push(String::new());
            Ok(())
        }),
        ResumeEdit::RemoveAchievement { id, index } => with_experience(record, *id, |entry| {
            if *index >= entry.achievements.len() {
                return Err(EditError::IndexOutOfRange { index: *index });
            }
            entry.achievements.remove(*index);
            Ok(())
        }),
        ResumeEdit::AddBullet { id } => with_project(record, *id, |entry| {
            entry.bullets.push(String::new());
            Ok(())
        }),
        ResumeEdit::RemoveBullet { id, index } => with_project(record, *id, |entry| {
            if *index >= entry.bullets.len() {
                return Err(EditError::IndexOutOfRange { index: *index });
            }
            entry.bullets.remove(*index);
            Ok(())
        }),
        ResumeEdit::ImportDescription { id, description } => {
            with_project(record, *id, |entry| {
                entry.bullets = split_sentences(description);
                Ok(())
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SetField
// ────────────────────────────────────────────────────────────────────────────

fn set_field(
    record: &ResumeRecord,
    path: &FieldPath,
    value: &str,
) -> Result<ResumeRecord, EditError> {
    match path {
        FieldPath::Contact { field } => {
            let mut next = record.clone();
            let slot = match field {
                ContactField::FullName => &mut next.contact.full_name,
                ContactField::Email => &mut next.contact.email,
                ContactField::Phone => &mut next.contact.phone,
                ContactField::Linkedin => &mut next.contact.linkedin,
                ContactField::Github => &mut next.contact.github,
            };
            *slot = value.to_string();
            Ok(next)
        }
        FieldPath::Summary => {
            let mut next = record.clone();
            next.summary = value.to_string();
            Ok(next)
        }
        FieldPath::SkillBand { category } => {
            let mut next = record.clone();
            next.skills = record.replace_band(*category, &split_csv(value));
            Ok(next)
        }
        FieldPath::Experience { id, field } => with_experience(record, *id, |entry| {
            let slot = match field {
                ExperienceField::Title => &mut entry.title,
                ExperienceField::Company => &mut entry.company,
                ExperienceField::Location => &mut entry.location,
                ExperienceField::StartDate => &mut entry.start_date,
                ExperienceField::EndDate => &mut entry.end_date,
            };
            *slot = value.to_string();
            Ok(())
        }),
        FieldPath::Achievement { id, index } => with_experience(record, *id, |entry| {
            let slot = entry
                .achievements
                .get_mut(*index)
                .ok_or(EditError::IndexOutOfRange { index: *index })?;
            *slot = value.to_string();
            Ok(())
        }),
        FieldPath::Education { id, field } => with_education(record, *id, |entry| {
            match field {
                EducationField::Degree => entry.degree = value.to_string(),
                EducationField::Institution => entry.institution = value.to_string(),
                EducationField::StartDate => entry.start_date = value.to_string(),
                EducationField::EndDate => entry.end_date = value.to_string(),
                EducationField::Gpa => {
                    // The display carries a "CGPA:"/"Percentage:" label; only
                    // the grade text is stored.
                    let stripped = strip_grade_label(value);
                    entry.gpa = if stripped.trim().is_empty() {
                        None
                    } else {
                        Some(stripped)
                    };
                }
            }
            Ok(())
        }),
        FieldPath::Project { id, field } => with_project(record, *id, |entry| {
            match field {
                ProjectField::Title => entry.title = value.to_string(),
                ProjectField::Link => {
                    entry.link = if value.trim().is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
                ProjectField::Technologies => entry.technologies = split_csv(value),
            }
            Ok(())
        }),
        FieldPath::ProjectBullet { id, index } => with_project(record, *id, |entry| {
            let slot = entry
                .bullets
                .get_mut(*index)
                .ok_or(EditError::IndexOutOfRange { index: *index })?;
            *slot = normalize_bullet(value);
            Ok(())
        }),
        FieldPath::Certification { id, field } => with_certification(record, *id, |entry| {
            match field {
                CertificationField::Name => entry.name = value.to_string(),
                CertificationField::Issuer => entry.issuer = value.to_string(),
                CertificationField::Date => entry.date = value.to_string(),
                CertificationField::Link => {
                    entry.link = if value.trim().is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
            }
            Ok(())
        }),
    }
}

/// A committed project bullet always ends in exactly one period; empty stays
/// empty.
fn normalize_bullet(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}.")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry lookup helpers
// ────────────────────────────────────────────────────────────────────────────

fn find_experience(record: &ResumeRecord, id: Uuid) -> Result<&ExperienceEntry, EditError> {
    record
        .experience
        .iter()
        .find(|e| e.id == id)
        .ok_or(EditError::UnknownEntry(id))
}

fn find_education(record: &ResumeRecord, id: Uuid) -> Result<&EducationEntry, EditError> {
    record
        .education
        .iter()
        .find(|e| e.id == id)
        .ok_or(EditError::UnknownEntry(id))
}

fn find_project(record: &ResumeRecord, id: Uuid) -> Result<&ProjectEntry, EditError> {
    record
        .projects
        .iter()
        .find(|p| p.id == id)
        .ok_or(EditError::UnknownEntry(id))
}

fn find_certification(
    record: &ResumeRecord,
    id: Uuid,
) -> Result<&CertificationEntry, EditError> {
    record
        .certifications
        .iter()
        .find(|c| c.id == id)
        .ok_or(EditError::UnknownEntry(id))
}

fn with_experience(
    record: &ResumeRecord,
    id: Uuid,
    mutate: impl FnOnce(&mut ExperienceEntry) -> Result<(), EditError>,
) -> Result<ResumeRecord, EditError> {
    let mut next = record.clone();
    let entry = next
        .experience
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(EditError::UnknownEntry(id))?;
    mutate(entry)?;
    Ok(next)
}

fn with_education(
    record: &ResumeRecord,
    id: Uuid,
    mutate: impl FnOnce(&mut EducationEntry) -> Result<(), EditError>,
) -> Result<ResumeRecord, EditError> {
    let mut next = record.clone();
    let entry = next
        .education
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(EditError::UnknownEntry(id))?;
    mutate(entry)?;
    Ok(next)
}

fn with_project(
    record: &ResumeRecord,
    id: Uuid,
    mutate: impl FnOnce(&mut ProjectEntry) -> Result<(), EditError>,
) -> Result<ResumeRecord, EditError> {
    let mut next = record.clone();
    let entry = next
        .projects
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(EditError::UnknownEntry(id))?;
    mutate(entry)?;
    Ok(next)
}

fn with_certification(
    record: &ResumeRecord,
    id: Uuid,
    mutate: impl FnOnce(&mut CertificationEntry) -> Result<(), EditError>,
) -> Result<ResumeRecord, EditError> {
    let mut next = record.clone();
    let entry = next
        .certifications
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(EditError::UnknownEntry(id))?;
    mutate(entry)?;
    Ok(next)
}

fn remove_entry(record: &ResumeRecord, id: Uuid) -> Result<ResumeRecord, EditError> {
    let mut next = record.clone();
    let before = next.experience.len()
        + next.education.len()
        + next.projects.len()
        + next.certifications.len();
    next.experience.retain(|e| e.id != id);
    next.education.retain(|e| e.id != id);
    next.projects.retain(|p| p.id != id);
    next.certifications.retain(|c| c.id != id);
    let after = next.experience.len()
        + next.education.len()
        + next.projects.len()
        + next.certifications.len();
    if after == before {
        return Err(EditError::UnknownEntry(id));
    }
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillCategory;

    fn sample() -> ResumeRecord {
        ResumeRecord::sample()
    }

    // ── sibling preservation ────────────────────────────────────────────────

    #[test]
    fn test_edit_touches_only_the_named_field() {
        let record = sample();
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Contact {
                    field: ContactField::Email,
                },
                value: "new@example.com".to_string(),
            },
        )
        .expect("edit");

        assert_eq!(edited.contact.email, "new@example.com");
        // Everything else is byte-for-byte identical.
        assert_eq!(edited.contact.full_name, record.contact.full_name);
        assert_eq!(edited.summary, record.summary);
        assert_eq!(edited.skills, record.skills);
        assert_eq!(edited.experience, record.experience);
        assert_eq!(edited.education, record.education);
        assert_eq!(edited.projects, record.projects);
        assert_eq!(edited.certifications, record.certifications);
    }

    #[test]
    fn test_edit_does_not_mutate_the_input() {
        let record = sample();
        let snapshot = record.clone();
        let _ = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Summary,
                value: "rewritten".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(record, snapshot, "apply_edit must never mutate in place");
    }

    // ── skill bands ─────────────────────────────────────────────────────────

    #[test]
    fn test_skill_band_round_trip() {
        let record = sample();
        let before_frameworks: Vec<String> = record
            .band(SkillCategory::Frameworks)
            .iter()
            .map(|s| s.to_string())
            .collect();

        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::SkillBand {
                    category: SkillCategory::Languages,
                },
                value: "A, B, C".to_string(),
            },
        )
        .expect("edit");

        assert_eq!(edited.band(SkillCategory::Languages), vec!["A", "B", "C"]);
        let after_frameworks: Vec<String> = edited
            .band(SkillCategory::Frameworks)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(after_frameworks, before_frameworks);

        // Re-reading the band immediately reproduces the committed text.
        let band_text = FieldPath::SkillBand {
            category: SkillCategory::Languages,
        }
        .read(&edited)
        .expect("read");
        assert_eq!(band_text, "A, B, C");
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_set_achievement_by_index() {
        let record = sample();
        let id = record.experience[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Achievement { id, index: 1 },
                value: "Rewrote the triage bot".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(edited.experience[0].achievements[1], "Rewrote the triage bot");
        assert_eq!(
            edited.experience[0].achievements[0],
            record.experience[0].achievements[0]
        );
    }

    #[test]
    fn test_achievement_index_out_of_range() {
        let record = sample();
        let id = record.experience[0].id;
        let err = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Achievement { id, index: 99 },
                value: "nope".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, EditError::IndexOutOfRange { index: 99 });
    }

    #[test]
    fn test_unknown_entry_id() {
        let record = sample();
        let err = apply_edit(
            &record,
            &ResumeEdit::SetCurrent {
                id: Uuid::new_v4(),
                current: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::UnknownEntry(_)));
    }

    #[test]
    fn test_set_current_flag() {
        let record = sample();
        let id = record.experience[1].id;
        let edited = apply_edit(&record, &ResumeEdit::SetCurrent { id, current: true })
            .expect("edit");
        assert!(edited.experience[1].current);
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_gpa_commit_strips_display_label() {
        let record = sample();
        let id = record.education[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Education {
                    id,
                    field: EducationField::Gpa,
                },
                value: "Percentage: 92%".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(edited.education[0].gpa.as_deref(), Some("92%"));
    }

    #[test]
    fn test_blank_gpa_commit_clears_grade() {
        let record = sample();
        let id = record.education[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Education {
                    id,
                    field: EducationField::Gpa,
                },
                value: "CGPA: ".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(edited.education[0].gpa, None);
    }

    // ── projects ────────────────────────────────────────────────────────────

    #[test]
    fn test_project_bullet_commit_normalizes_period() {
        let record = sample();
        let id = record.projects[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::ProjectBullet { id, index: 1 },
                value: "Added vector tiles".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(edited.projects[0].bullets[1], "Added vector tiles.");
        assert_eq!(edited.projects[0].bullets[0], record.projects[0].bullets[0]);
    }

    #[test]
    fn test_import_description_splits_into_bullets() {
        let record = sample();
        let id = record.projects[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::ImportDescription {
                id,
                description: "Did X. Did Y. Did Z.".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(
            edited.projects[0].bullets,
            vec!["Did X.", "Did Y.", "Did Z."]
        );
    }

    #[test]
    fn test_technologies_commit_resplits_csv() {
        let record = sample();
        let id = record.projects[0].id;
        let edited = apply_edit(
            &record,
            &ResumeEdit::SetField {
                path: FieldPath::Project {
                    id,
                    field: ProjectField::Technologies,
                },
                value: "Rust, axum".to_string(),
            },
        )
        .expect("edit");
        assert_eq!(edited.projects[0].technologies, vec!["Rust", "axum"]);
    }

    // ── list operations ─────────────────────────────────────────────────────

    #[test]
    fn test_add_entry_appends_blank_experience() {
        let record = sample();
        let edited = apply_edit(
            &record,
            &ResumeEdit::AddEntry {
                section: EntrySection::Experience,
            },
        )
        .expect("edit");
        assert_eq!(edited.experience.len(), record.experience.len() + 1);
        let added = edited.experience.last().expect("appended entry");
        assert_eq!(added.achievements, vec![String::new()]);
    }

    #[test]
    fn test_remove_entry_by_id() {
        let record = sample();
        let id = record.projects[0].id;
        let edited = apply_edit(&record, &ResumeEdit::RemoveEntry { id }).expect("edit");
        assert!(edited.projects.is_empty());
        assert_eq!(edited.experience.len(), record.experience.len());
    }

    #[test]
    fn test_remove_unknown_entry_errors() {
        let record = sample();
        let err = apply_edit(
            &record,
            &ResumeEdit::RemoveEntry { id: Uuid::new_v4() },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::UnknownEntry(_)));
    }

    #[test]
    fn test_remove_skill_by_band_index() {
        let record = sample();
        let langs_before = record.band(SkillCategory::Languages).len();
        let edited = apply_edit(
            &record,
            &ResumeEdit::RemoveSkill {
                category: SkillCategory::Languages,
                index: 0,
            },
        )
        .expect("edit");
        assert_eq!(edited.band(SkillCategory::Languages).len(), langs_before - 1);
        assert_eq!(edited.band(SkillCategory::Databases), record.band(SkillCategory::Databases));
    }

    // ── read ────────────────────────────────────────────────────────────────

    #[test]
    fn test_read_gpa_includes_display_label() {
        let record = sample();
        let id = record.education[0].id;
        let text = FieldPath::Education {
            id,
            field: EducationField::Gpa,
        }
        .read(&record)
        .expect("read");
        assert_eq!(text, "CGPA: 8.9");
    }

    #[test]
    fn test_field_modes() {
        assert_eq!(FieldPath::Summary.mode(), FieldMode::MultiLine);
        assert_eq!(
            FieldPath::Contact {
                field: ContactField::Email
            }
            .mode(),
            FieldMode::SingleLine
        );
    }
}
