// Resume layout engine.
// Turns a normalized ProfileSnapshot into pages of positioned text runs and rules.
// Pure and CPU-bound: handlers must call it inside tokio::task::spawn_blocking.

pub mod cursor;
pub mod document;
pub mod emitters;
pub mod font_metrics;
pub mod font_scope;
pub mod measure;
pub mod sections;
pub mod walker;

// Re-export the public API consumed by the renderer and handlers.
pub use document::{Document, PageGeometry};
pub use font_metrics::FontFamily;
pub use walker::layout_resume_in;
