//! Page cursor: vertical offset on the page being filled.
//!
//! Fit-checking and advancing are separate steps. Callers measure a block,
//! call `ensure_fits` with its full height, draw it at `y()`, then `advance`.

use tracing::debug;

use crate::layout::document::{Document, PageGeometry};

const FIT_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone)]
pub struct PageCursor {
    geometry: PageGeometry,
    y: f32,
    page_index: usize,
}

impl PageCursor {
    pub fn new(geometry: PageGeometry) -> Self {
        PageCursor {
            y: geometry.margin_top_mm,
            geometry,
            page_index: 0,
        }
    }

    /// Current page-relative vertical offset in mm.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// 0-based index of the page being filled.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Space left above the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.geometry.printable_bottom() - self.y
    }

    /// True when nothing has been reserved on the current page yet.
    pub fn at_page_top(&self) -> bool {
        self.y <= self.geometry.margin_top_mm + FIT_EPSILON
    }

    /// Starts a new page when a block of `height` would cross the bottom margin.
    ///
    /// Returns `true` if a page break happened. A cursor that is already at the
    /// top of a fresh page never breaks again; the caller is responsible for
    /// blocks taller than a whole page.
    pub fn ensure_fits(&mut self, height: f32, document: &mut Document) -> bool {
        if height <= self.remaining() + FIT_EPSILON {
            return false;
        }
        if self.at_page_top() {
            return false;
        }
        self.break_page(document);
        true
    }

    /// Finalizes the current page and moves to the top of a new one.
    pub fn break_page(&mut self, document: &mut Document) {
        document.start_page();
        self.page_index += 1;
        self.y = self.geometry.margin_top_mm;
        debug!(page = self.page_index + 1, "Started new page");
    }

    /// Moves down by `height` without checking fit.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }
}
