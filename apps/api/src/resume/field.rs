//! Click-to-edit field state machine.
#![allow(dead_code)]
//!
//! Two states, Display and Editing. Keystrokes only ever touch a local
//! draft; the owning record sees nothing until a commit. Commit happens on
//! blur in either mode and on Enter in single-line mode; Escape reverts the
//! draft and exits without committing. In multi-line mode Enter inserts a
//! newline instead of committing.
//!
//! The field performs no validation — empty commits are legal and the
//! display side falls back to the placeholder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    SingleLine,
    MultiLine,
}

/// An editing gesture, as reported by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FieldEvent {
    Click,
    Input(String),
    Enter,
    Escape,
    Blur,
}

/// What a [`FieldEditor::handle`] call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Event had no effect in the current state.
    Ignored,
    /// Still editing (entered edit mode, or the draft changed).
    Editing,
    /// Edit finished; the caller must persist the final value.
    Committed(String),
    /// Edit abandoned; draft reverted to the pre-edit value.
    Reverted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEditor {
    value: String,
    draft: String,
    mode: FieldMode,
    editing: bool,
}

impl FieldEditor {
    pub fn new(value: impl Into<String>, mode: FieldMode) -> Self {
        let value = value.into();
        FieldEditor {
            draft: value.clone(),
            value,
            mode,
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// The committed value (what Display state shows).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The in-flight draft. Equals `value()` outside of edit mode.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Advances the state machine by one event.
    pub fn handle(&mut self, event: FieldEvent) -> FieldOutcome {
        if !self.editing {
            return match event {
                FieldEvent::Click => {
                    self.draft = self.value.clone();
                    self.editing = true;
                    FieldOutcome::Editing
                }
                _ => FieldOutcome::Ignored,
            };
        }

        match event {
            FieldEvent::Click => FieldOutcome::Ignored,
            FieldEvent::Input(text) => {
                self.draft = text;
                FieldOutcome::Editing
            }
            FieldEvent::Enter => match self.mode {
                FieldMode::SingleLine => self.commit(),
                FieldMode::MultiLine => {
                    self.draft.push('\n');
                    FieldOutcome::Editing
                }
            },
            FieldEvent::Escape => {
                self.draft = self.value.clone();
                self.editing = false;
                FieldOutcome::Reverted
            }
            FieldEvent::Blur => self.commit(),
        }
    }

    /// Commits the draft regardless of pending events. Used when a new edit
    /// begins elsewhere — focusing another field blurs this one.
    pub fn force_blur(&mut self) -> FieldOutcome {
        if self.editing {
            self.commit()
        } else {
            FieldOutcome::Ignored
        }
    }

    fn commit(&mut self) -> FieldOutcome {
        self.value = self.draft.clone();
        self.editing = false;
        FieldOutcome::Committed(self.value.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_field(mode: FieldMode) -> FieldEditor {
        let mut field = FieldEditor::new("original", mode);
        assert_eq!(field.handle(FieldEvent::Click), FieldOutcome::Editing);
        field
    }

    // ── entering edit mode ──────────────────────────────────────────────────

    #[test]
    fn test_click_enters_edit_mode_with_current_value() {
        let field = editing_field(FieldMode::SingleLine);
        assert!(field.is_editing());
        assert_eq!(field.draft(), "original");
    }

    #[test]
    fn test_events_ignored_in_display_state() {
        let mut field = FieldEditor::new("original", FieldMode::SingleLine);
        assert_eq!(
            field.handle(FieldEvent::Input("x".into())),
            FieldOutcome::Ignored
        );
        assert_eq!(field.handle(FieldEvent::Enter), FieldOutcome::Ignored);
        assert_eq!(field.value(), "original");
    }

    // ── commit paths ────────────────────────────────────────────────────────

    #[test]
    fn test_enter_commits_in_single_line_mode() {
        let mut field = editing_field(FieldMode::SingleLine);
        field.handle(FieldEvent::Input("updated".into()));
        assert_eq!(
            field.handle(FieldEvent::Enter),
            FieldOutcome::Committed("updated".into())
        );
        assert!(!field.is_editing());
        assert_eq!(field.value(), "updated");
    }

    #[test]
    fn test_enter_inserts_newline_in_multi_line_mode() {
        let mut field = editing_field(FieldMode::MultiLine);
        field.handle(FieldEvent::Input("line one".into()));
        assert_eq!(field.handle(FieldEvent::Enter), FieldOutcome::Editing);
        assert!(field.is_editing(), "multi-line Enter must not commit");
        assert_eq!(field.draft(), "line one\n");
    }

    #[test]
    fn test_blur_commits_in_both_modes() {
        for mode in [FieldMode::SingleLine, FieldMode::MultiLine] {
            let mut field = editing_field(mode);
            field.handle(FieldEvent::Input("via blur".into()));
            assert_eq!(
                field.handle(FieldEvent::Blur),
                FieldOutcome::Committed("via blur".into()),
                "blur must commit in {mode:?}"
            );
        }
    }

    #[test]
    fn test_empty_commit_is_legal() {
        let mut field = editing_field(FieldMode::SingleLine);
        field.handle(FieldEvent::Input(String::new()));
        assert_eq!(
            field.handle(FieldEvent::Blur),
            FieldOutcome::Committed(String::new())
        );
    }

    // ── escape ──────────────────────────────────────────────────────────────

    #[test]
    fn test_escape_restores_pre_edit_value() {
        let mut field = editing_field(FieldMode::SingleLine);
        field.handle(FieldEvent::Input("scratch that".into()));
        assert_eq!(field.handle(FieldEvent::Escape), FieldOutcome::Reverted);
        assert!(!field.is_editing());
        assert_eq!(field.value(), "original");
        assert_eq!(field.draft(), "original");
    }

    // ── force_blur ──────────────────────────────────────────────────────────

    #[test]
    fn test_force_blur_commits_active_edit() {
        let mut field = editing_field(FieldMode::SingleLine);
        field.handle(FieldEvent::Input("carried over".into()));
        assert_eq!(
            field.force_blur(),
            FieldOutcome::Committed("carried over".into())
        );
    }

    #[test]
    fn test_force_blur_noop_when_not_editing() {
        let mut field = FieldEditor::new("original", FieldMode::SingleLine);
        assert_eq!(field.force_blur(), FieldOutcome::Ignored);
    }
}
