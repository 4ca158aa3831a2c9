//! Navigation shell view-model: scroll-spy, bar visibility, scroll targets.
#![allow(dead_code)]
//!
//! All pure logic over client-reported geometry. The active section is the
//! one whose vertical extent contains the scroll reference point (offset
//! plus a fixed lead-in); when extents overlap, the last section in DOM
//! order wins. Bar visibility is a direction comparison between consecutive
//! scroll offsets, not a velocity heuristic.

use serde::{Deserialize, Serialize};

/// Distance below the top of the viewport used as the scroll-spy reference
/// point.
pub const SCROLL_LEAD_IN_PX: f32 = 100.0;

/// Height of the fixed header, subtracted from scroll targets so section
/// tops are not hidden behind the bar.
pub const HEADER_OFFSET_PX: f32 = 80.0;

/// Offsets at or above this count as "near the top": the bar is always shown
/// and the page styling switches off its scrolled state.
pub const NEAR_TOP_PX: f32 = 50.0;

/// One registered section's vertical extent, in DOM order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionExtent {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    fn contains(&self, point: f32) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

/// The section the reference point `scroll_y + SCROLL_LEAD_IN_PX` falls in.
/// Later sections take precedence when extents overlap.
pub fn active_section(sections: &[SectionExtent], scroll_y: f32) -> Option<&str> {
    let point = scroll_y + SCROLL_LEAD_IN_PX;
    let mut active = None;
    for section in sections {
        if section.contains(point) {
            active = Some(section.id.as_str());
        }
    }
    active
}

/// Where to scroll to land a section below the fixed header.
pub fn scroll_target(section_top: f32) -> f32 {
    (section_top - HEADER_OFFSET_PX).max(0.0)
}

/// Whether the page styling should be in its scrolled state.
pub fn is_scrolled(offset: f32) -> bool {
    offset > NEAR_TOP_PX
}

/// Show/hide state of the navigation bar, driven by scroll direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavVisibility {
    last_offset: f32,
    hidden: bool,
}

impl NavVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one scroll offset and returns whether the bar is visible.
    /// Scrolling down hides it, scrolling up shows it, and it is always
    /// shown within the near-top threshold.
    pub fn observe(&mut self, offset: f32) -> bool {
        if offset <= NEAR_TOP_PX {
            self.hidden = false;
        } else if offset > self.last_offset {
            self.hidden = true;
        } else if offset < self.last_offset {
            self.hidden = false;
        }
        self.last_offset = offset;
        !self.hidden
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
