//! Mechanical text transforms used at the editing boundary.
#![allow(dead_code)]
//!
//! Sentence splitting is a naive period-delimiter split, not a parser:
//! abbreviations and decimal numbers containing periods degrade (they split
//! into extra fragments). That limitation is accepted; bullets are stored as
//! a first-class list precisely so these transforms only run at the flat-
//! description import/export boundary.

/// Splits a flat description into display bullets: period-delimited, blank
/// fragments dropped, one trailing period re-appended to each fragment.
pub fn split_sentences(description: &str) -> Vec<String> {
    description
        .split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{fragment}."))
        .collect()
}

/// Rejoins bullets into a flat description: `". "`-separated with exactly one
/// trailing period. The inverse of [`split_sentences`] for period-free
/// bullet bodies.
pub fn join_sentences(bullets: &[String]) -> String {
    let fragments: Vec<&str> = bullets
        .iter()
        .map(|b| b.trim().trim_end_matches('.'))
        .filter(|b| !b.is_empty())
        .collect();
    if fragments.is_empty() {
        return String::new();
    }
    format!("{}.", fragments.join(". "))
}

/// Replaces the `index`-th period-delimited sentence of `description` and
/// rejoins. Order-preserving and lossy in the documented way: interior
/// periods in the replacement merge into the sentence structure on the next
/// split. Out-of-range indices leave the description unchanged.
pub fn replace_sentence(description: &str, index: usize, new_text: &str) -> String {
    let mut sentences = split_sentences(description);
    if index >= sentences.len() {
        return description.to_string();
    }
    sentences[index] = new_text.trim().to_string();
    join_sentences(&sentences)
}

/// Comma-separated list edit: split on commas, trim whitespace, drop empty
/// fragments. Used for skill bands and project technologies.
pub fn split_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank-line paragraph split used by the storybook reader. Windows line
/// endings are tolerated.
pub fn split_paragraphs(body: &str) -> Vec<String> {
    body.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── split / join ────────────────────────────────────────────────────────

    #[test]
    fn test_split_sentences_three_bullets() {
        let bullets = split_sentences("Did X. Did Y. Did Z.");
        assert_eq!(bullets, vec!["Did X.", "Did Y.", "Did Z."]);
    }

    #[test]
    fn test_split_sentences_drops_blank_fragments() {
        let bullets = split_sentences("Did X..  . Did Y.");
        assert_eq!(bullets, vec!["Did X.", "Did Y."]);
    }

    #[test]
    fn test_split_sentences_empty_description() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_join_sentences_single_trailing_period() {
        let joined = join_sentences(&[
            "Did X.".to_string(),
            "Did Y.".to_string(),
            "Did Z.".to_string(),
        ]);
        assert_eq!(joined, "Did X. Did Y. Did Z.");
        assert!(!joined.ends_with(".."), "never a double trailing period");
    }

    #[test]
    fn test_join_sentences_empty() {
        assert_eq!(join_sentences(&[]), "");
        assert_eq!(join_sentences(&[String::new()]), "");
    }

    #[test]
    fn test_split_join_round_trip() {
        let description = "Built a parser. Shipped it. Wrote docs.";
        assert_eq!(join_sentences(&split_sentences(description)), description);
    }

    // ── replace_sentence ────────────────────────────────────────────────────

    #[test]
    fn test_replace_middle_sentence() {
        let out = replace_sentence("Did X. Did Y. Did Z.", 1, "Did Y and more");
        assert_eq!(out, "Did X. Did Y and more. Did Z.");
        assert!(out.ends_with('.'));
    }

    #[test]
    fn test_replace_sentence_keeps_neighbors() {
        let out = replace_sentence("Did X. Did Y. Did Z.", 1, "changed");
        let bullets = split_sentences(&out);
        assert_eq!(bullets[0], "Did X.");
        assert_eq!(bullets[2], "Did Z.");
    }

    #[test]
    fn test_replace_sentence_out_of_range_is_noop() {
        let description = "Did X. Did Y.";
        assert_eq!(replace_sentence(description, 5, "nope"), description);
    }

    #[test]
    fn test_replace_with_trailing_period_does_not_double() {
        let out = replace_sentence("Did X. Did Y.", 1, "Did W.");
        assert_eq!(out, "Did X. Did W.");
    }

    #[test]
    fn test_abbreviation_degrades_not_errors() {
        // "e.g." splits into extra fragments — documented limitation.
        let bullets = split_sentences("Used e.g. caching. Done.");
        assert!(bullets.len() > 2);
    }

    // ── split_csv ───────────────────────────────────────────────────────────

    #[test]
    fn test_split_csv_trims_whitespace() {
        assert_eq!(split_csv("A, B ,C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_split_csv_drops_empty_fragments() {
        assert_eq!(split_csv("A,,B,"), vec!["A", "B"]);
        assert!(split_csv("").is_empty());
    }

    // ── split_paragraphs ────────────────────────────────────────────────────

    #[test]
    fn test_split_paragraphs_on_blank_lines() {
        let body = "First paragraph\nstill first.\n\nSecond paragraph.";
        assert_eq!(
            split_paragraphs(body),
            vec!["First paragraph\nstill first.", "Second paragraph."]
        );
    }

    #[test]
    fn test_split_paragraphs_windows_newlines() {
        let body = "One.\r\n\r\nTwo.";
        assert_eq!(split_paragraphs(body), vec!["One.", "Two."]);
    }
}
