use std::sync::Arc;

use crate::config::Config;
use crate::content::SiteContent;
use crate::layout::LayoutSheet;
use crate::render::PdfRenderer;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub site: Arc<SiteContent>,
    /// Pluggable export renderer. Production uses PrintPdfRenderer; tests
    /// substitute a failing one to exercise the error path.
    pub renderer: Arc<dyn PdfRenderer>,
    /// Layout sheet for the export/preview engine — page dimensions, type
    /// sizes and section order in one place.
    pub sheet: LayoutSheet,
    pub config: Config,
}
