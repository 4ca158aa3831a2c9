mod book;
mod config;
mod content;
mod errors;
mod layout;
mod models;
mod nav;
mod render;
mod resume;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::SiteContent;
use crate::layout::{FontFamily, LayoutSheet};
use crate::render::{PdfRenderer, PrintPdfRenderer};
use crate::routes::build_router;
use crate::session::{spawn_sweeper, SessionStore};
use crate::state::AppState;

/// How often idle sessions are swept.
const SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (all variables have defaults)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the in-memory session store and its eviction sweeper
    let sessions = Arc::new(SessionStore::new(config.session_ttl));
    let _sweeper = spawn_sweeper(sessions.clone(), SWEEP_PERIOD);
    info!(
        "Session store initialized (ttl: {})",
        humantime::format_duration(config.session_ttl)
    );

    // Seed the static site content
    let site = Arc::new(SiteContent::seed());
    info!(
        "Site content seeded ({} sections, {} blogs)",
        site.nav_items.len(),
        site.blogs.len()
    );

    // Initialize the export renderer and the layout sheet
    let renderer: Arc<dyn PdfRenderer> = Arc::new(PrintPdfRenderer);
    let sheet = LayoutSheet::letter(FontFamily::TimesRoman);
    info!("Layout sheet: {:?} on US letter", sheet.font);

    if config.access_code.is_some() {
        info!("Builder sessions are gated behind an access code");
    }

    // Build app state
    let state = AppState {
        sessions,
        site,
        renderer,
        sheet,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the site and API share an origin in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
