//! Static font-metric tables for the three core export font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard AFM metrics of the PDF base-14 fonts the renderer embeds. Static
//! tables are an intentional approximation — they catch the violations that
//! matter (a bullet wrapping to an extra line, a page overflowing) while
//! tolerating sub-percent ambiguity. Bold and italic faces are measured with
//! the regular table; the engine's wrap slack absorbs the difference.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// The three font families the PDF export supports, all PDF base-14 core
/// fonts so no font files ship with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Default résumé face.
    TimesRoman,
    Helvetica,
    /// Monospaced fallback.
    Courier,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~). Non-ASCII characters fall back to
/// `average_char_width`.
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in points at the given font size.
    pub fn measure_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }

    /// Greedy word-wrap: breaks `text` into lines no wider than
    /// `max_width_em`. A single word wider than the line gets a line of its
    /// own rather than being split mid-word. Empty input yields no lines.
    pub fn wrap(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_width = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + self.space_width + word_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_width;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each, AFM /1000)
// ────────────────────────────────────────────────────────────────────────────

/// Times-Roman — the face the résumé page is typeset in.
static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.50,
    space_width: 0.250,
};

/// Helvetica — sans-serif alternative.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.53,
    space_width: 0.278,
};

/// Courier — fixed pitch, every glyph 0.6 em.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Courier,
    widths: [0.600; 95],
    average_char_width: 0.600,
    space_width: 0.600,
};

/// Returns the static metric table for a font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::TimesRoman => &TIMES_ROMAN_TABLE,
        FontFamily::Helvetica => &HELVETICA_TABLE,
        FontFamily::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_space_width() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let width = metrics.measure_str(" ");
        assert!(
            (width - 0.250).abs() < 1e-4,
            "Times space should be 0.25 em, got {width}"
        );
    }

    #[test]
    fn test_measure_str_known_word() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        // "Jun" = J(0.389) + u(0.500) + n(0.500) = 1.389
        let width = metrics.measure_str("Jun");
        assert!(
            (width - 1.389).abs() < 1e-3,
            "Jun should be ~1.389 em, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_measure_pt_scales_by_size() {
        let metrics = get_metrics(&FontFamily::Courier);
        // Courier: every char is 0.6 em, so "ab" at 10pt = 12pt.
        let width = metrics.measure_pt("ab", 10.0);
        assert!((width - 12.0).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_courier_is_fixed_pitch() {
        let metrics = get_metrics(&FontFamily::Courier);
        assert_eq!(metrics.measure_str("iii"), metrics.measure_str("WWW"));
    }

    #[test]
    fn test_helvetica_wider_than_times_on_lowercase() {
        let text = "performance engineering";
        let times = get_metrics(&FontFamily::TimesRoman).measure_str(text);
        let helvetica = get_metrics(&FontFamily::Helvetica).measure_str(text);
        assert!(helvetica > times, "helvetica={helvetica} times={times}");
    }

    // ── wrap ────────────────────────────────────────────────────────────────

    #[test]
    fn test_wrap_empty_is_no_lines() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        assert!(metrics.wrap("", 40.0).is_empty());
        assert!(metrics.wrap("   ", 40.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let lines = metrics.wrap("one short line", 40.0);
        assert_eq!(lines, vec!["one short line"]);
    }

    #[test]
    fn test_wrap_long_text_breaks_on_word_boundaries() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let text = "word ".repeat(30);
        let lines = metrics.wrap(&text, 10.0);
        assert!(lines.len() > 1, "30 words cannot fit 10 em");
        for line in &lines {
            assert!(
                metrics.measure_str(line) <= 10.0 + 1e-3,
                "line '{line}' exceeds the wrap width"
            );
        }
    }

    #[test]
    fn test_wrap_rejoins_to_original_words() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = metrics.wrap(text, 8.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let metrics = get_metrics(&FontFamily::TimesRoman);
        let lines = metrics.wrap("a supercalifragilisticexpialidocious b", 3.0);
        assert!(lines.iter().any(|l| l == "supercalifragilisticexpialidocious"));
    }
}
