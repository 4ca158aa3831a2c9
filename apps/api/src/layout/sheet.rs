//! Declarative page description.
#![allow(dead_code)]
//!
//! One [`LayoutSheet`] carries every dimension the engine needs — page size,
//! margins, type sizes, leading, section order, and the overflow rule. No
//! other module holds layout constants; changing the sheet changes the page.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

pub const POINTS_PER_INCH: f32 = 72.0;

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// US letter, 8.5in × 11in.
pub const US_LETTER: PageSize = PageSize {
    width_pt: 8.5 * POINTS_PER_INCH,
    height_pt: 11.0 * POINTS_PER_INCH,
};

/// The printable sections of the résumé, in the order the sheet lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
}

/// What happens when content runs past the bottom margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Continue on a fresh page (the export is a multi-page document).
    Flow,
    /// Stop laying out at the bottom margin.
    Truncate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSheet {
    pub font: FontFamily,
    pub page: PageSize,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    /// Header name line.
    pub name_size_pt: f32,
    /// Section headings and entry title lines.
    pub heading_size_pt: f32,
    /// Body text and bullets.
    pub body_size_pt: f32,
    /// Line-height multiplier applied to the font size.
    pub leading: f32,
    /// Vertical gap between sections.
    pub section_gap_pt: f32,
    /// Gap between a section heading (and its rule) and the section body.
    pub heading_gap_pt: f32,
    /// Left indent for bullet lists.
    pub bullet_indent_pt: f32,
    pub section_order: Vec<SectionKind>,
    pub overflow: Overflow,
}

impl LayoutSheet {
    /// The default one-page résumé sheet: US letter, 0.5in top/bottom and
    /// 0.6in side margins, 10pt body under an 18pt name, sections in the
    /// order the page shows them.
    pub fn letter(font: FontFamily) -> Self {
        LayoutSheet {
            font,
            page: US_LETTER,
            margin_top_pt: 0.5 * POINTS_PER_INCH,
            margin_bottom_pt: 0.5 * POINTS_PER_INCH,
            margin_left_pt: 0.6 * POINTS_PER_INCH,
            margin_right_pt: 0.6 * POINTS_PER_INCH,
            name_size_pt: 18.0,
            heading_size_pt: 11.0,
            body_size_pt: 10.0,
            leading: 1.15,
            section_gap_pt: 0.1 * POINTS_PER_INCH,
            heading_gap_pt: 3.0,
            bullet_indent_pt: 0.15 * POINTS_PER_INCH,
            section_order: vec![
                SectionKind::Header,
                SectionKind::Summary,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Certifications,
            ],
            overflow: Overflow::Flow,
        }
    }

    /// Usable text width in points.
    pub fn text_width_pt(&self) -> f32 {
        self.page.width_pt - self.margin_left_pt - self.margin_right_pt
    }

    /// Usable text width in em units at a given font size.
    pub fn text_width_em(&self, size_pt: f32) -> f32 {
        self.text_width_pt() / size_pt
    }

    /// Usable text height in points.
    pub fn usable_height_pt(&self) -> f32 {
        self.page.height_pt - self.margin_top_pt - self.margin_bottom_pt
    }

    /// Baseline-to-baseline distance for a given font size.
    pub fn line_height_pt(&self, size_pt: f32) -> f32 {
        size_pt * self.leading
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_letter_dimensions() {
        assert!((US_LETTER.width_pt - 612.0).abs() < 1e-3);
        assert!((US_LETTER.height_pt - 792.0).abs() < 1e-3);
    }

    #[test]
    fn test_letter_sheet_text_width() {
        let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
        // 8.5in - 2 × 0.6in = 7.3in = 525.6pt
        assert!((sheet.text_width_pt() - 525.6).abs() < 1e-2);
    }

    #[test]
    fn test_text_width_em_scales_inversely_with_size() {
        let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
        assert!(sheet.text_width_em(10.0) > sheet.text_width_em(18.0));
    }

    #[test]
    fn test_default_section_order_starts_with_header() {
        let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
        assert_eq!(sheet.section_order.first(), Some(&SectionKind::Header));
        assert_eq!(sheet.overflow, Overflow::Flow);
    }

    #[test]
    fn test_line_height_uses_leading() {
        let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
        assert!((sheet.line_height_pt(10.0) - 11.5).abs() < 1e-3);
    }
}
