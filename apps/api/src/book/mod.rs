//! Storybook reader.
#![allow(dead_code)]
//!
//! A [`Book`] is an ordered list of content pages behind a synthesized cover
//! (the cover is always page 0 and is built from the book's own metadata,
//! never stored). A [`BookReader`] is the per-session view state: one
//! clamped page index plus the open flag. Closing never resets the index —
//! reopening resumes at the last-viewed page, which is intended behavior.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::resume::text::split_paragraphs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePosition {
    Top,
    Bottom,
    Left,
    Right,
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPage {
    pub title: Option<String>,
    pub body: String,
    pub image: Option<String>,
    pub image_position: Option<ImagePosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub pages: Vec<BookPage>,
}

impl Book {
    /// Total page count including the synthesized cover.
    pub fn page_count(&self) -> usize {
        1 + self.pages.len()
    }

    /// Renders the page at `index`: the cover at 0, content pages after.
    /// Body text splits into paragraphs on blank lines (the first paragraph
    /// gets the drop-cap treatment client-side — a cosmetic contract only).
    pub fn page_view(&self, index: usize) -> Option<PageView> {
        if index == 0 {
            return Some(PageView::Cover {
                title: self.title.clone(),
                author: self.author.clone(),
                cover_image: self.cover_image.clone(),
            });
        }
        let page = self.pages.get(index - 1)?;
        Some(PageView::Content {
            number: index,
            title: page.title.clone(),
            paragraphs: split_paragraphs(&page.body),
            image: page.image.clone(),
            image_position: page.image_position,
        })
    }
}

/// What one reader page looks like on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Cover {
        title: String,
        author: String,
        cover_image: String,
    },
    Content {
        number: usize,
        title: Option<String>,
        paragraphs: Vec<String>,
        image: Option<String>,
        image_position: Option<ImagePosition>,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Reader state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookReader {
    index: usize,
    open: bool,
}

impl BookReader {
    pub fn new() -> Self {
        BookReader {
            index: 0,
            open: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens (or reopens) the reader. The index is left where it was.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the reader without touching the index.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advances one page; no-op on the last page.
    pub fn next(&mut self, page_count: usize) {
        if self.index + 1 < page_count {
            self.index += 1;
        }
    }

    /// Goes back one page; no-op on the cover.
    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
