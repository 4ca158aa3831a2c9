//! Display formatting for résumé fields.
#![allow(dead_code)]
//!
//! These are the exact presentation rules of the printed page: month
//! formatting, date ranges with the "Present" override, the grade label
//! switch, and the `" | "`-joined contact header line.

use chrono::NaiveDate;

use crate::models::resume::ContactInfo;

/// Separator between contact parts in the header line.
pub const CONTACT_SEPARATOR: &str = " | ";

/// Formats a stored "YYYY-MM" month as "Jun. 2022".
///
/// An empty string formats as empty. Anything unparseable is returned
/// verbatim — bad input degrades, it never errors.
pub fn format_month(stored: &str) -> String {
    if stored.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{stored}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b. %Y").to_string(),
        Err(_) => stored.to_string(),
    }
}

/// Formats a date range as "{start} -- {end}".
///
/// `current` forces the end to render as "Present" regardless of the stored
/// end date.
pub fn format_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month(end)
    };
    format!("{start} -- {end}")
}

/// The label shown in front of a grade: "Percentage:" when the stored text
/// contains a '%', otherwise "CGPA:".
pub fn grade_label(gpa: &str) -> &'static str {
    if gpa.contains('%') {
        "Percentage:"
    } else {
        "CGPA:"
    }
}

/// Full grade display, e.g. "CGPA: 8.9" or "Percentage: 92%".
pub fn grade_line(gpa: &str) -> String {
    format!("{} {}", grade_label(gpa), gpa)
}

/// Strips a leading grade label off committed text, so editing the displayed
/// "CGPA: 8.9" stores just "8.9".
pub fn strip_grade_label(text: &str) -> String {
    text.trim_start()
        .strip_prefix("Percentage:")
        .or_else(|| text.trim_start().strip_prefix("CGPA:"))
        .map(|rest| rest.trim_start().to_string())
        .unwrap_or_else(|| text.to_string())
}

/// The header name line, uppercased.
pub fn display_name(contact: &ContactInfo) -> String {
    contact.full_name.to_uppercase()
}

/// The header contact line: non-blank parts of phone, email, LinkedIn and
/// GitHub joined with `" | "`, in that order.
pub fn contact_line(contact: &ContactInfo) -> String {
    [
        contact.phone.as_str(),
        contact.email.as_str(),
        contact.linkedin.as_str(),
        contact.github.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(CONTACT_SEPARATOR)
}

/// Technologies list as rendered next to a project title.
pub fn technologies_line(technologies: &[String]) -> String {
    technologies.join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_month ────────────────────────────────────────────────────────

    #[test]
    fn test_format_month_iso_year_month() {
        assert_eq!(format_month("2022-06"), "Jun. 2022");
        assert_eq!(format_month("2019-12"), "Dec. 2019");
        assert_eq!(format_month("2021-01"), "Jan. 2021");
    }

    #[test]
    fn test_format_month_empty_is_empty() {
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn test_format_month_garbage_passes_through() {
        assert_eq!(format_month("sometime"), "sometime");
        assert_eq!(format_month("2022-13"), "2022-13", "month 13 is unparseable");
    }

    // ── format_range ────────────────────────────────────────────────────────

    #[test]
    fn test_format_range_plain() {
        assert_eq!(
            format_range("2021-08", "2022-06", false),
            "Aug. 2021 -- Jun. 2022"
        );
    }

    #[test]
    fn test_format_range_current_overrides_end_date() {
        // A stored end date must be ignored when current is set.
        assert_eq!(
            format_range("2022-06", "2023-01", true),
            "Jun. 2022 -- Present"
        );
    }

    #[test]
    fn test_format_range_current_with_empty_end() {
        assert_eq!(format_range("2022-06", "", true), "Jun. 2022 -- Present");
    }

    // ── grade label ─────────────────────────────────────────────────────────

    #[test]
    fn test_grade_label_percent_selects_percentage() {
        assert_eq!(grade_label("92%"), "Percentage:");
        assert_eq!(grade_label("8.9"), "CGPA:");
    }

    #[test]
    fn test_grade_line() {
        assert_eq!(grade_line("8.9"), "CGPA: 8.9");
        assert_eq!(grade_line("92%"), "Percentage: 92%");
    }

    #[test]
    fn test_strip_grade_label_round_trip() {
        assert_eq!(strip_grade_label("CGPA: 8.9"), "8.9");
        assert_eq!(strip_grade_label("Percentage: 92%"), "92%");
        assert_eq!(strip_grade_label("8.9"), "8.9", "unlabelled text unchanged");
    }

    // ── header lines ────────────────────────────────────────────────────────

    #[test]
    fn test_contact_line_joins_with_separator() {
        let contact = ContactInfo {
            full_name: "Alex Carter".to_string(),
            email: "a@example.com".to_string(),
            phone: "555".to_string(),
            linkedin: "linkedin.com/in/a".to_string(),
            github: "github.com/a".to_string(),
        };
        assert_eq!(
            contact_line(&contact),
            "555 | a@example.com | linkedin.com/in/a | github.com/a"
        );
    }

    #[test]
    fn test_contact_line_drops_blank_parts() {
        let contact = ContactInfo {
            phone: "555".to_string(),
            github: "github.com/a".to_string(),
            ..ContactInfo::default()
        };
        assert_eq!(contact_line(&contact), "555 | github.com/a");
    }

    #[test]
    fn test_display_name_uppercases() {
        let contact = ContactInfo {
            full_name: "Alex Carter".to_string(),
            ..ContactInfo::default()
        };
        assert_eq!(display_name(&contact), "ALEX CARTER");
    }
}
