//! One-page fit analysis.
//!
//! After the engine lays a document out, this module reports whether it
//! still fits the single printed page the résumé targets. The editor surfaces
//! the verdict so the user knows an edit pushed content onto a second page
//! (or left the page looking empty) before exporting.
//!
//! # Fit rules
//! - more than one page        → Overflows (with the spilled line count)
//! - whitespace > 8% of height → TooMuchWhitespace
//! - otherwise                 → Fits

use serde::{Deserialize, Serialize};

use crate::layout::engine::LaidOutDocument;
use crate::layout::sheet::LayoutSheet;

/// Fraction of the usable page height allowed to stay empty before the page
/// counts as under-filled.
const WHITESPACE_LIMIT: f32 = 0.08;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitVerdict {
    /// Content fills the page within tolerance.
    Fits,
    /// More than 8% of the usable height is empty.
    TooMuchWhitespace,
    /// Content spilled past the first page.
    Overflows { extra_lines: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFitReport {
    pub page_count: usize,
    pub first_page_lines: usize,
    /// Fraction of the first page's usable height that carries content.
    pub used_height_fraction: f32,
    pub whitespace_fraction: f32,
    pub verdict: FitVerdict,
}

/// Analyzes a laid-out document against its sheet.
pub fn analyze_fit(doc: &LaidOutDocument, sheet: &LayoutSheet) -> PageFitReport {
    let first_page_lines = doc.pages.first().map(|p| p.texts.len()).unwrap_or(0);
    let used_height = doc
        .last_baseline_on(0)
        .map(|baseline| baseline - sheet.margin_top_pt)
        .unwrap_or(0.0);
    let used_height_fraction = (used_height / sheet.usable_height_pt()).clamp(0.0, 1.0);
    let whitespace_fraction = 1.0 - used_height_fraction;

    let verdict = if doc.page_count() > 1 {
        FitVerdict::Overflows {
            extra_lines: doc.line_count() - first_page_lines,
        }
    } else if whitespace_fraction > WHITESPACE_LIMIT {
        FitVerdict::TooMuchWhitespace
    } else {
        FitVerdict::Fits
    };

    PageFitReport {
        page_count: doc.page_count(),
        first_page_lines,
        used_height_fraction,
        whitespace_fraction,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
