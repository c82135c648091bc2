use crate::config::Config;
use crate::layout::{FontFamily, PageGeometry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState { config }
    }

    pub fn page_geometry(&self) -> PageGeometry {
        self.config.page_geometry
    }

    pub fn font_family(&self) -> FontFamily {
        self.config.font_family
    }
}
