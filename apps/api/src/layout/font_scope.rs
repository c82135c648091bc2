//! Scoped font changes.
//!
//! `FontScope` captures the active font, applies a derived one, and puts the
//! captured font back when dropped. Restoration happens on every exit path
//! (normal return, `?`, panic unwinding) and is independent of page breaks,
//! since font state lives in the session rather than on a page.
//!
//! Scopes nest: entering a scope through another scope's `DerefMut` captures
//! the outer scope's font, so each level restores exactly what it found.

use std::ops::{Deref, DerefMut};

use crate::layout::font_metrics::Font;

/// Anything that owns an active font.
pub trait FontState {
    fn font(&self) -> Font;
    fn set_font(&mut self, font: Font);
}

pub struct FontScope<'a, S: FontState> {
    target: &'a mut S,
    saved: Font,
}

impl<'a, S: FontState> FontScope<'a, S> {
    pub fn enter(target: &'a mut S, derive: impl FnOnce(Font) -> Font) -> Self {
        let saved = target.font();
        target.set_font(derive(saved));
        FontScope { target, saved }
    }
}

impl<S: FontState> Deref for FontScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.target
    }
}

impl<S: FontState> DerefMut for FontScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.target
    }
}

impl<S: FontState> Drop for FontScope<'_, S> {
    fn drop(&mut self) {
        self.target.set_font(self.saved);
    }
}

/// Runs `body` with a derived font active, then restores the previous font.
pub fn with_font<S: FontState, R>(
    target: &mut S,
    derive: impl FnOnce(Font) -> Font,
    body: impl FnOnce(&mut S) -> R,
) -> R {
    let mut scope = FontScope::enter(target, derive);
    body(&mut *scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{FontFamily, FontWeight};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    struct Pen {
        font: Font,
    }

    impl FontState for Pen {
        fn font(&self) -> Font {
            self.font
        }
        fn set_font(&mut self, font: Font) {
            self.font = font;
        }
    }

    fn pen() -> Pen {
        Pen {
            font: Font::new(FontFamily::Helvetica, 10.0),
        }
    }

    #[test]
    fn test_scope_applies_then_restores() {
        let mut pen = pen();
        let original = pen.font();
        {
            let scope = FontScope::enter(&mut pen, |f| f.bold().sized(14.0));
            assert_eq!(scope.font().weight, FontWeight::Bold);
            assert_eq!(scope.font().size_pt, 14.0);
            assert_eq!(scope.saved, original, "scope should remember the outer font");
        }
        assert_eq!(pen.font(), original);
    }

    #[test]
    fn test_nested_scopes_restore_each_level() {
        let mut pen = pen();
        let original = pen.font();
        with_font(&mut pen, |f| f.italic(), |outer| {
            let italic = outer.font();
            with_font(outer, |f| f.bold().sized(11.0), |inner| {
                assert_eq!(inner.font().postscript_name(), "Helvetica-BoldOblique");
            });
            assert_eq!(outer.font(), italic, "inner scope must restore italic, not a hardcoded normal");
        });
        assert_eq!(pen.font(), original);
    }

    #[test]
    fn test_restores_on_early_return() {
        fn styled(pen: &mut Pen, fail: bool) -> Result<f32, String> {
            let scope = FontScope::enter(pen, |f| f.bold());
            if fail {
                return Err("bail".to_string());
            }
            Ok(scope.font().size_pt)
        }
        let mut pen = pen();
        let original = pen.font();
        assert!(styled(&mut pen, true).is_err());
        assert_eq!(pen.font(), original);
        assert_eq!(styled(&mut pen, false), Ok(10.0));
        assert_eq!(pen.font(), original);
    }

    #[test]
    fn test_restores_on_panic() {
        let mut pen = pen();
        let original = pen.font();
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_font::<_, ()>(&mut pen, |f| f.bold().sized(18.0), |_| panic!("layout failure"));
        }));
        assert!(result.is_err());
        assert_eq!(pen.font(), original);
    }

    #[test]
    fn test_with_font_returns_body_value() {
        let mut pen = pen();
        let size = with_font(&mut pen, |f| f.sized(9.0), |p| p.font().size_pt);
        assert_eq!(size, 9.0);
        assert_eq!(pen.font().size_pt, 10.0);
    }
}
