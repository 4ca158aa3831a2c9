// Declarative layout: one sheet describes the page, one engine interprets it.
// Pagination is pure CPU work over static font metrics.

pub mod engine;
pub mod fit;
pub mod font_metrics;
pub mod sheet;

// Re-export the public API consumed by other modules (render, handlers).
pub use engine::{paginate, LaidOutDocument};
pub use fit::{analyze_fit, PageFitReport};
pub use font_metrics::FontFamily;
pub use sheet::{LayoutSheet, SectionKind};
