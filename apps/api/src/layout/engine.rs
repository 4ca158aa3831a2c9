//! The layout engine.
//!
//! Consumes the block list a view produces, word-wraps each block at the
//! sheet's text width using the static font metrics, and assigns absolute
//! positions in points (origin top-left, y = baseline). A block that would
//! cross the bottom margin starts a new page under `Overflow::Flow`, or is
//! dropped under `Overflow::Truncate`.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::get_metrics;
use crate::layout::sheet::{LayoutSheet, Overflow};

// ────────────────────────────────────────────────────────────────────────────
// Block model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub fn plain(size_pt: f32) -> Self {
        TextStyle {
            size_pt,
            bold: false,
            italic: false,
        }
    }

    pub fn bold(size_pt: f32) -> Self {
        TextStyle {
            size_pt,
            bold: true,
            italic: false,
        }
    }

    pub fn italic(size_pt: f32) -> Self {
        TextStyle {
            size_pt,
            bold: false,
            italic: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Run {
            text: text.into(),
            style,
        }
    }
}

/// One flow element handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A wrapped run of text.
    Text {
        text: String,
        style: TextStyle,
        align: Align,
        indent_pt: f32,
    },
    /// A bullet item: marker plus hanging-indented wrapped text.
    Bullet {
        text: String,
        style: TextStyle,
        indent_pt: f32,
    },
    /// Differently-styled runs placed left-to-right on one line
    /// (bold company name followed by an italic location). Rows do not wrap.
    Row { runs: Vec<Run>, indent_pt: f32 },
    /// Left and right text on the same line (entry title vs. date range).
    Split {
        left: String,
        left_style: TextStyle,
        right: String,
        right_style: TextStyle,
    },
    /// A horizontal rule across the full text width (section underline).
    Rule,
    /// Vertical whitespace.
    Gap { height_pt: f32 },
}

// ────────────────────────────────────────────────────────────────────────────
// Output model
// ────────────────────────────────────────────────────────────────────────────

/// A positioned piece of text. `baseline_pt` is measured from the top edge
/// of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedText {
    pub text: String,
    pub x_pt: f32,
    pub baseline_pt: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRule {
    pub y_pt: f32,
    pub x_start_pt: f32,
    pub x_end_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaidOutPage {
    pub texts: Vec<PlacedText>,
    pub rules: Vec<PlacedRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutDocument {
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total positioned text lines across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.texts.len()).sum()
    }

    /// The lowest baseline on a page, if it has any text.
    pub fn last_baseline_on(&self, page: usize) -> Option<f32> {
        self.pages.get(page)?.texts.iter().map(|t| t.baseline_pt).fold(
            None,
            |acc, y| match acc {
                Some(max) if max >= y => Some(max),
                _ => Some(y),
            },
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

const BULLET_MARKER: &str = "\u{2022} ";

struct Cursor<'a> {
    sheet: &'a LayoutSheet,
    pages: Vec<LaidOutPage>,
    /// Bottom of the last placed line, measured from the top of the page.
    y_pt: f32,
    truncated: bool,
}

impl<'a> Cursor<'a> {
    fn new(sheet: &'a LayoutSheet) -> Self {
        Cursor {
            sheet,
            pages: vec![LaidOutPage::default()],
            y_pt: sheet.margin_top_pt,
            truncated: false,
        }
    }

    fn bottom_limit(&self) -> f32 {
        self.sheet.page.height_pt - self.sheet.margin_bottom_pt
    }

    /// Makes room for one line of the given height. Returns false when the
    /// line cannot be placed (truncating overflow).
    fn ensure_line(&mut self, height_pt: f32) -> bool {
        if self.truncated {
            return false;
        }
        if self.y_pt + height_pt > self.bottom_limit() {
            match self.sheet.overflow {
                Overflow::Flow => {
                    self.pages.push(LaidOutPage::default());
                    self.y_pt = self.sheet.margin_top_pt;
                }
                Overflow::Truncate => {
                    self.truncated = true;
                    return false;
                }
            }
        }
        true
    }

    fn place_line(&mut self, text: String, x_pt: f32, style: TextStyle) {
        let height = self.sheet.line_height_pt(style.size_pt);
        if !self.ensure_line(height) {
            return;
        }
        self.y_pt += height;
        let page = self.pages.last_mut().expect("at least one page");
        page.texts.push(PlacedText {
            text,
            x_pt,
            baseline_pt: self.y_pt,
            style,
        });
    }

    fn advance(&mut self, height_pt: f32) {
        self.y_pt = (self.y_pt + height_pt).min(self.bottom_limit());
    }
}

/// Lays out a block list into positioned pages.
pub fn paginate(blocks: &[Block], sheet: &LayoutSheet) -> LaidOutDocument {
    let metrics = get_metrics(&sheet.font);
    let mut cursor = Cursor::new(sheet);

    for block in blocks {
        match block {
            Block::Text {
                text,
                style,
                align,
                indent_pt,
            } => {
                let left = sheet.margin_left_pt + indent_pt;
                let width_em = (sheet.text_width_pt() - indent_pt) / style.size_pt;
                for line in metrics.wrap(text, width_em) {
                    let x = match align {
                        Align::Left => left,
                        Align::Center => {
                            let line_w = metrics.measure_pt(&line, style.size_pt);
                            left + ((sheet.text_width_pt() - indent_pt - line_w) / 2.0).max(0.0)
                        }
                    };
                    cursor.place_line(line, x, *style);
                }
            }
            Block::Bullet {
                text,
                style,
                indent_pt,
            } => {
                let marker_w = metrics.measure_pt(BULLET_MARKER, style.size_pt);
                let left = sheet.margin_left_pt + indent_pt;
                let width_em = (sheet.text_width_pt() - indent_pt - marker_w) / style.size_pt;
                for (i, line) in metrics.wrap(text, width_em).into_iter().enumerate() {
                    if i == 0 {
                        cursor.place_line(format!("{BULLET_MARKER}{line}"), left, *style);
                    } else {
                        // hanging indent under the marker
                        cursor.place_line(line, left + marker_w, *style);
                    }
                }
            }
            Block::Row { runs, indent_pt } => {
                let runs: Vec<&Run> = runs.iter().filter(|r| !r.text.is_empty()).collect();
                if runs.is_empty() {
                    continue;
                }
                let max_size = runs
                    .iter()
                    .map(|r| r.style.size_pt)
                    .fold(0.0_f32, f32::max);
                let height = sheet.line_height_pt(max_size);
                if !cursor.ensure_line(height) {
                    continue;
                }
                cursor.y_pt += height;
                let baseline = cursor.y_pt;
                let mut x = sheet.margin_left_pt + indent_pt;
                let page = cursor.pages.last_mut().expect("at least one page");
                for run in runs {
                    page.texts.push(PlacedText {
                        text: run.text.clone(),
                        x_pt: x,
                        baseline_pt: baseline,
                        style: run.style,
                    });
                    x += metrics.measure_pt(&run.text, run.style.size_pt);
                }
            }
            Block::Split {
                left,
                left_style,
                right,
                right_style,
            } => {
                let height = sheet
                    .line_height_pt(left_style.size_pt.max(right_style.size_pt));
                if !cursor.ensure_line(height) {
                    continue;
                }
                cursor.y_pt += height;
                let baseline = cursor.y_pt;
                let right_w = metrics.measure_pt(right, right_style.size_pt);
                let page = cursor.pages.last_mut().expect("at least one page");
                if !left.is_empty() {
                    page.texts.push(PlacedText {
                        text: left.clone(),
                        x_pt: sheet.margin_left_pt,
                        baseline_pt: baseline,
                        style: *left_style,
                    });
                }
                if !right.is_empty() {
                    page.texts.push(PlacedText {
                        text: right.clone(),
                        x_pt: sheet.page.width_pt - sheet.margin_right_pt - right_w,
                        baseline_pt: baseline,
                        style: *right_style,
                    });
                }
            }
            Block::Rule => {
                if cursor.truncated {
                    continue;
                }
                cursor.advance(2.0);
                let y = cursor.y_pt;
                let page = cursor.pages.last_mut().expect("at least one page");
                page.rules.push(PlacedRule {
                    y_pt: y,
                    x_start_pt: sheet.margin_left_pt,
                    x_end_pt: sheet.page.width_pt - sheet.margin_right_pt,
                });
            }
            Block::Gap { height_pt } => cursor.advance(*height_pt),
        }
    }

    LaidOutDocument {
        pages: cursor.pages,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
