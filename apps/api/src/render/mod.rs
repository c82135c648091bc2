// PDF output for laid-out documents.

pub mod pdf;

pub use pdf::{render_pdf, resume_file_name, RenderError, RenderOptions};
