//! Color themes and glyphs for the Reckon TUI.
//!
//! Dark mode uses the Kanagawa Wave palette, light mode Kanagawa Lotus.

use ratatui::style::{Color, Modifier, Style};

use reckon_engine::{Theme, UiOptions};

/// Kanagawa Wave color palette constants.
mod wave {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_KEY: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_KEY_PRESSED: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Kanagawa Lotus color palette constants.
mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite4
    pub const BG_KEY: Color = Color::Rgb(228, 215, 148); // lotusWhite5
    pub const BG_KEY_PRESSED: Color = Color::Rgb(183, 208, 174); // lotusGreen3
    pub const BORDER: Color = Color::Rgb(138, 137, 128); // lotusGray3

    pub const TEXT_PRIMARY: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_MUTED: Color = Color::Rgb(113, 110, 97); // lotusGray2

    pub const PRIMARY: Color = Color::Rgb(98, 76, 131); // lotusViolet4
    pub const ACCENT: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const SUCCESS: Color = Color::Rgb(111, 137, 78); // lotusGreen
    pub const ERROR: Color = Color::Rgb(200, 64, 83); // lotusRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_key: Color,
    pub bg_key_pressed: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG,
            bg_panel: wave::BG_PANEL,
            bg_key: wave::BG_KEY,
            bg_key_pressed: wave::BG_KEY_PRESSED,
            border: wave::BORDER,
            text_primary: wave::TEXT_PRIMARY,
            text_muted: wave::TEXT_MUTED,
            primary: wave::PRIMARY,
            accent: wave::ACCENT,
            success: wave::SUCCESS,
            error: wave::ERROR,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            bg_key: lotus::BG_KEY,
            bg_key_pressed: lotus::BG_KEY_PRESSED,
            border: lotus::BORDER,
            text_primary: lotus::TEXT_PRIMARY,
            text_muted: lotus::TEXT_MUTED,
            primary: lotus::PRIMARY,
            accent: lotus::ACCENT,
            success: lotus::SUCCESS,
            error: lotus::ERROR,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    match options.theme {
        Theme::Dark => Palette::dark(),
        Theme::Light => Palette::light(),
    }
}

/// Glyph set for chrome around the calculator.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dark: &'static str,
    pub light: &'static str,
    pub ellipsis: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dark: "*",
            light: "o",
            ellipsis: "~",
            separator: "|",
        }
    } else {
        Glyphs {
            dark: "☾",
            light: "☀",
            ellipsis: "…",
            separator: "·",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn primary_readout(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn secondary_readout(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }
}
