//! Display preferences shared by the engine and the renderer.

use crate::GlyphStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    #[must_use]
    pub const fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub theme: Theme,
    /// Use ASCII-only glyphs for operators and the delete key.
    pub ascii_only: bool,
}

impl UiOptions {
    #[must_use]
    pub const fn glyph_style(self) -> GlyphStyle {
        if self.ascii_only {
            GlyphStyle::Ascii
        } else {
            GlyphStyle::Unicode
        }
    }
}
