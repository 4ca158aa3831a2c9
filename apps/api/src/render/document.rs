//! The résumé view: maps a [`ResumeRecord`] to the block list the layout
//! engine consumes.
//!
//! This module owns the presentation rules of the printed page — uppercased
//! centered name, `" | "`-joined contact line, underlined uppercase section
//! headings, the grade label switch, right-aligned date ranges with the
//! "Present" override, and the bullet lists. Section order comes from the
//! [`LayoutSheet`], never from this function.

use crate::layout::engine::{Align, Block, Run, TextStyle};
use crate::layout::sheet::{LayoutSheet, SectionKind};
use crate::models::resume::ResumeRecord;
use crate::resume::format::{
    contact_line, display_name, format_range, grade_line, technologies_line,
};

/// Gap between entries inside a section.
const ENTRY_GAP_PT: f32 = 3.0;

/// Builds the full block list for one record, following the sheet's section
/// order. Empty sections are skipped entirely (no orphan headings).
pub fn resume_to_blocks(record: &ResumeRecord, sheet: &LayoutSheet) -> Vec<Block> {
    let mut blocks = Vec::new();
    for section in &sheet.section_order {
        match section {
            SectionKind::Header => header_blocks(record, sheet, &mut blocks),
            SectionKind::Summary => summary_blocks(record, sheet, &mut blocks),
            SectionKind::Education => education_blocks(record, sheet, &mut blocks),
            SectionKind::Skills => skills_blocks(record, sheet, &mut blocks),
            SectionKind::Experience => experience_blocks(record, sheet, &mut blocks),
            SectionKind::Projects => projects_blocks(record, sheet, &mut blocks),
            SectionKind::Certifications => certifications_blocks(record, sheet, &mut blocks),
        }
    }
    blocks
}

fn section_heading(title: &str, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    blocks.push(Block::Text {
        text: title.to_uppercase(),
        style: TextStyle::bold(sheet.heading_size_pt),
        align: Align::Left,
        indent_pt: 0.0,
    });
    blocks.push(Block::Rule);
    blocks.push(Block::Gap {
        height_pt: sheet.heading_gap_pt,
    });
}

fn header_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    blocks.push(Block::Text {
        text: display_name(&record.contact),
        style: TextStyle::bold(sheet.name_size_pt),
        align: Align::Center,
        indent_pt: 0.0,
    });
    let contacts = contact_line(&record.contact);
    if !contacts.is_empty() {
        blocks.push(Block::Text {
            text: contacts,
            style: TextStyle::plain(sheet.body_size_pt),
            align: Align::Center,
            indent_pt: 0.0,
        });
    }
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn summary_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.summary.trim().is_empty() {
        return;
    }
    section_heading("Summary", sheet, blocks);
    blocks.push(Block::Text {
        text: record.summary.clone(),
        style: TextStyle::plain(sheet.body_size_pt),
        align: Align::Left,
        indent_pt: 0.0,
    });
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn education_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.education.is_empty() {
        return;
    }
    section_heading("Education", sheet, blocks);
    for (i, entry) in record.education.iter().enumerate() {
        blocks.push(Block::Split {
            left: entry.institution.clone(),
            left_style: TextStyle::bold(sheet.heading_size_pt),
            right: entry.gpa.as_deref().map(grade_line).unwrap_or_default(),
            right_style: TextStyle::plain(sheet.heading_size_pt),
        });
        blocks.push(Block::Split {
            left: entry.degree.clone(),
            left_style: TextStyle::italic(sheet.body_size_pt),
            right: format_range(&entry.start_date, &entry.end_date, false),
            right_style: TextStyle::italic(sheet.body_size_pt),
        });
        if i + 1 < record.education.len() {
            blocks.push(Block::Gap {
                height_pt: ENTRY_GAP_PT,
            });
        }
    }
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn skills_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.skills.is_empty() {
        return;
    }
    section_heading("Technical Skills", sheet, blocks);
    for category in crate::models::resume::SkillCategory::ALL {
        let names = record.band(category);
        if names.is_empty() {
            continue;
        }
        blocks.push(Block::Row {
            runs: vec![
                Run::new(
                    format!("{}: ", category.label()),
                    TextStyle::bold(sheet.body_size_pt),
                ),
                Run::new(names.join(", "), TextStyle::plain(sheet.body_size_pt)),
            ],
            indent_pt: sheet.bullet_indent_pt,
        });
    }
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn experience_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.experience.is_empty() {
        return;
    }
    section_heading("Experience", sheet, blocks);
    for (i, entry) in record.experience.iter().enumerate() {
        blocks.push(Block::Split {
            left: entry.title.clone(),
            left_style: TextStyle::bold(sheet.heading_size_pt),
            right: format_range(&entry.start_date, &entry.end_date, entry.current),
            right_style: TextStyle::plain(sheet.heading_size_pt),
        });
        blocks.push(Block::Row {
            runs: vec![
                Run::new(entry.company.clone(), TextStyle::bold(sheet.heading_size_pt)),
                Run::new("   ", TextStyle::plain(sheet.heading_size_pt)),
                Run::new(entry.location.clone(), TextStyle::italic(sheet.heading_size_pt)),
            ],
            indent_pt: 0.0,
        });
        for achievement in &entry.achievements {
            if achievement.trim().is_empty() {
                continue;
            }
            blocks.push(Block::Bullet {
                text: achievement.clone(),
                style: TextStyle::plain(sheet.body_size_pt),
                indent_pt: sheet.bullet_indent_pt,
            });
        }
        if i + 1 < record.experience.len() {
            blocks.push(Block::Gap {
                height_pt: ENTRY_GAP_PT,
            });
        }
    }
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn projects_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.projects.is_empty() {
        return;
    }
    section_heading("Projects", sheet, blocks);
    for (i, entry) in record.projects.iter().enumerate() {
        let mut runs = vec![Run::new(
            entry.title.clone(),
            TextStyle::bold(sheet.heading_size_pt),
        )];
        if !entry.technologies.is_empty() {
            runs.push(Run::new(" | ", TextStyle::plain(sheet.heading_size_pt)));
            runs.push(Run::new(
                technologies_line(&entry.technologies),
                TextStyle::italic(sheet.heading_size_pt),
            ));
        }
        blocks.push(Block::Row {
            runs,
            indent_pt: 0.0,
        });
        for bullet in &entry.bullets {
            if bullet.trim().is_empty() {
                continue;
            }
            blocks.push(Block::Bullet {
                text: bullet.clone(),
                style: TextStyle::plain(sheet.body_size_pt),
                indent_pt: sheet.bullet_indent_pt,
            });
        }
        if i + 1 < record.projects.len() {
            blocks.push(Block::Gap {
                height_pt: ENTRY_GAP_PT,
            });
        }
    }
    blocks.push(Block::Gap {
        height_pt: sheet.section_gap_pt,
    });
}

fn certifications_blocks(record: &ResumeRecord, sheet: &LayoutSheet, blocks: &mut Vec<Block>) {
    if record.certifications.is_empty() {
        return;
    }
    section_heading("Certifications", sheet, blocks);
    for (i, entry) in record.certifications.iter().enumerate() {
        blocks.push(Block::Split {
            left: entry.name.clone(),
            left_style: TextStyle::bold(sheet.heading_size_pt),
            right: entry.date.clone(),
            right_style: TextStyle::plain(sheet.body_size_pt),
        });
        if !entry.issuer.trim().is_empty() {
            blocks.push(Block::Text {
                text: entry.issuer.clone(),
                style: TextStyle::italic(sheet.body_size_pt),
                align: Align::Left,
                indent_pt: 0.0,
            });
        }
        if i + 1 < record.certifications.len() {
            blocks.push(Block::Gap {
                height_pt: ENTRY_GAP_PT,
            });
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
