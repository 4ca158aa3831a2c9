//! PDF export.
//!
//! The conversion itself is delegated to the `printpdf` crate; this module
//! only walks the laid-out pages and places each positioned line. The
//! renderer sits behind an object-safe trait so the handler layer holds an
//! `Arc<dyn PdfRenderer>` and tests can substitute a failing one.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, Point};

use crate::layout::engine::{LaidOutDocument, TextStyle};
use crate::layout::font_metrics::FontFamily;
use crate::layout::sheet::LayoutSheet;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Renders a laid-out document to PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, doc: LaidOutDocument, sheet: LayoutSheet) -> Result<Bytes>;
}

/// Production renderer over printpdf's built-in core fonts. Rendering is
/// CPU-bound, so it runs inside `spawn_blocking`.
pub struct PrintPdfRenderer;

#[async_trait]
impl PdfRenderer for PrintPdfRenderer {
    async fn render(&self, doc: LaidOutDocument, sheet: LayoutSheet) -> Result<Bytes> {
        tokio::task::spawn_blocking(move || render_blocking(&doc, &sheet))
            .await
            .map_err(|e| anyhow!("render task panicked: {e}"))?
    }
}

/// The download filename: the contact's full name, falling back to "resume"
/// when blank. Quotes, slashes and control characters are stripped so the
/// name is safe inside a Content-Disposition header.
pub fn export_filename(full_name: &str) -> String {
    let cleaned: String = full_name
        .trim()
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '/' | '\\'))
        .collect();
    let stem = cleaned.trim();
    if stem.is_empty() {
        "resume.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// printpdf plumbing
// ────────────────────────────────────────────────────────────────────────────

struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    bold_italic: IndirectFontRef,
}

impl FontSet {
    fn for_style(&self, style: &TextStyle) -> &IndirectFontRef {
        match (style.bold, style.italic) {
            (false, false) => &self.regular,
            (true, false) => &self.bold,
            (false, true) => &self.italic,
            (true, true) => &self.bold_italic,
        }
    }
}

fn builtin(family: FontFamily, bold: bool, italic: bool) -> BuiltinFont {
    match (family, bold, italic) {
        (FontFamily::TimesRoman, false, false) => BuiltinFont::TimesRoman,
        (FontFamily::TimesRoman, true, false) => BuiltinFont::TimesBold,
        (FontFamily::TimesRoman, false, true) => BuiltinFont::TimesItalic,
        (FontFamily::TimesRoman, true, true) => BuiltinFont::TimesBoldItalic,
        (FontFamily::Helvetica, false, false) => BuiltinFont::Helvetica,
        (FontFamily::Helvetica, true, false) => BuiltinFont::HelveticaBold,
        (FontFamily::Helvetica, false, true) => BuiltinFont::HelveticaOblique,
        (FontFamily::Helvetica, true, true) => BuiltinFont::HelveticaBoldOblique,
        (FontFamily::Courier, false, false) => BuiltinFont::Courier,
        (FontFamily::Courier, true, false) => BuiltinFont::CourierBold,
        (FontFamily::Courier, false, true) => BuiltinFont::CourierOblique,
        (FontFamily::Courier, true, true) => BuiltinFont::CourierBoldOblique,
    }
}

fn render_blocking(doc: &LaidOutDocument, sheet: &LayoutSheet) -> Result<Bytes> {
    let page_w = Mm(sheet.page.width_pt * MM_PER_PT);
    let page_h = Mm(sheet.page.height_pt * MM_PER_PT);

    let (pdf, first_page, first_layer) = PdfDocument::new("Resume", page_w, page_h, "Layer 1");

    let fonts = FontSet {
        regular: pdf
            .add_builtin_font(builtin(sheet.font, false, false))
            .map_err(|e| anyhow!("font load failed: {e}"))?,
        bold: pdf
            .add_builtin_font(builtin(sheet.font, true, false))
            .map_err(|e| anyhow!("font load failed: {e}"))?,
        italic: pdf
            .add_builtin_font(builtin(sheet.font, false, true))
            .map_err(|e| anyhow!("font load failed: {e}"))?,
        bold_italic: pdf
            .add_builtin_font(builtin(sheet.font, true, true))
            .map_err(|e| anyhow!("font load failed: {e}"))?,
    };

    for (i, page) in doc.pages.iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = pdf.add_page(page_w, page_h, "Layer 1");
            pdf.get_page(page_idx).get_layer(layer_idx)
        };

        for text in &page.texts {
            // Engine y grows downward from the top edge; PDF y grows upward
            // from the bottom edge.
            let x = Mm(text.x_pt * MM_PER_PT);
            let y = Mm((sheet.page.height_pt - text.baseline_pt) * MM_PER_PT);
            layer.use_text(
                text.text.clone(),
                text.style.size_pt,
                x,
                y,
                fonts.for_style(&text.style),
            );
        }

        layer.set_outline_thickness(0.75);
        for rule in &page.rules {
            let y = Mm((sheet.page.height_pt - rule.y_pt) * MM_PER_PT);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(rule.x_start_pt * MM_PER_PT), y), false),
                    (Point::new(Mm(rule.x_end_pt * MM_PER_PT), y), false),
                ],
                is_closed: false,
            });
        }
    }

    let bytes = pdf
        .save_to_bytes()
        .map_err(|e| anyhow!("pdf serialization failed: {e}"))?;
    Ok(Bytes::from(bytes))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate;
    use crate::models::resume::ResumeRecord;
    use crate::render::document::resume_to_blocks;

    // ── export_filename ─────────────────────────────────────────────────────

    #[test]
    fn test_filename_from_full_name() {
        assert_eq!(export_filename("Alex Carter"), "Alex Carter.pdf");
    }

    #[test]
    fn test_filename_falls_back_when_blank() {
        assert_eq!(export_filename(""), "resume.pdf");
        assert_eq!(export_filename("   "), "resume.pdf");
    }

    #[test]
    fn test_filename_strips_header_unsafe_characters() {
        assert_eq!(export_filename("a\"b/c\\d"), "abcd.pdf");
        assert_eq!(export_filename("\"//\\"), "resume.pdf");
    }

    // ── rendering ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_render_produces_pdf_magic_bytes() {
        let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
        let doc = paginate(&resume_to_blocks(&ResumeRecord::sample(), &sheet), &sheet);
        let bytes = PrintPdfRenderer
            .render(doc, sheet)
            .await
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
        assert!(bytes.len() > 500, "a rendered page is never this small");
    }

    #[tokio::test]
    async fn test_render_empty_document_still_valid() {
        let sheet = LayoutSheet::letter(FontFamily::Helvetica);
        let doc = paginate(&[], &sheet);
        let bytes = PrintPdfRenderer
            .render(doc, sheet)
            .await
            .expect("empty document renders");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
