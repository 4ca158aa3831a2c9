//! In-memory sessions.
#![allow(dead_code)]
//!
//! A session owns everything the builder page would otherwise keep in
//! component state: the résumé record with its append-only version history,
//! the single active inline edit, and the per-book reader states. Nothing is
//! persisted — an idle session is swept after the configured TTL and its
//! edits are gone, which is exactly the "navigating away discards edits"
//! lifecycle.
//!
//! Replacement-by-value is the concurrency story: each session has one
//! writer at a time (the map entry lock) and every commit appends a whole
//! new record. Nothing is ever updated in place.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::book::BookReader;
use crate::models::resume::ResumeRecord;
use crate::resume::edit::FieldPath;
use crate::resume::field::FieldEditor;

/// The one in-flight inline edit of a session.
#[derive(Debug, Clone)]
pub struct ActiveEdit {
    pub path: FieldPath,
    pub editor: FieldEditor,
}

#[derive(Debug)]
pub struct Session {
    /// Append-only: `history[0]` is the seed record, the last element is
    /// live. Version numbers are 1-based indices into this list.
    history: Vec<ResumeRecord>,
    pub active_edit: Option<ActiveEdit>,
    readers: HashMap<String, BookReader>,
    last_seen: Instant,
}

/// One row of the version history listing.
#[derive(Debug, Clone, Serialize)]
pub struct VersionSummary {
    pub version: usize,
    pub experience_entries: usize,
    pub project_entries: usize,
    pub skill_count: usize,
}

impl Session {
    fn new() -> Self {
        Session {
            history: vec![ResumeRecord::sample()],
            active_edit: None,
            readers: HashMap::new(),
            last_seen: Instant::now(),
        }
    }

    /// The live record.
    pub fn record(&self) -> &ResumeRecord {
        self.history.last().expect("history is never empty")
    }

    /// Current version number (1 = the seed).
    pub fn version(&self) -> usize {
        self.history.len()
    }

    /// Appends a new record as the next version.
    pub fn commit(&mut self, record: ResumeRecord) {
        self.history.push(record);
    }

    /// The record as of a 1-based version number.
    pub fn at_version(&self, version: usize) -> Option<&ResumeRecord> {
        if version == 0 {
            return None;
        }
        self.history.get(version - 1)
    }

    pub fn version_history(&self) -> Vec<VersionSummary> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, record)| VersionSummary {
                version: i + 1,
                experience_entries: record.experience.len(),
                project_entries: record.projects.len(),
                skill_count: record.skills.len(),
            })
            .collect()
    }

    /// Reader state for a book, created closed at the cover on first use.
    pub fn reader_mut(&mut self, slug: &str) -> &mut BookReader {
        self.readers.entry(slug.to_string()).or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Creates a session seeded with the sample résumé.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Session::new());
        id
    }

    /// Runs `f` against a session under its entry lock, refreshing the idle
    /// clock. Returns None for unknown (or already swept) sessions.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut entry = self.sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(f(&mut entry))
    }

    /// Drops sessions idle longer than the TTL. Returns how many went.
    pub fn remove_expired(&self) -> usize {
        let before = self.sessions.len();
        let ttl = self.ttl;
        self.sessions.retain(|_, s| s.last_seen.elapsed() < ttl);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Background sweeper: evicts idle sessions on a fixed interval.
pub fn spawn_sweeper(
    store: std::sync::Arc<SessionStore>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let evicted = store.remove_expired();
            if evicted > 0 {
                info!("evicted {evicted} idle sessions");
            }
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
