pub mod document;
pub mod pdf;

pub use document::resume_to_blocks;
pub use pdf::{export_filename, PdfRenderer, PrintPdfRenderer};
