//! TUI rendering and input handling for Reckon.
//!
//! The screen is a fixed-size calculator centered in the terminal: a title
//! bar, the two-line display, the keypad and a status line.

mod input;
mod keypad;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use reckon_engine::{Action, App, NotificationLevel};

pub use input::{apply_event, handle_events, key_to_command};
pub use keypad::{KEYPAD_COLUMNS, KEYPAD_ROWS, KeyCell, key_at, keypad_cells};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

const CALC_WIDTH: u16 = 36;
const TITLE_HEIGHT: u16 = 1;
const DISPLAY_HEIGHT: u16 = 4; // borders + secondary + primary
const KEYPAD_HEIGHT: u16 = 3 * KEYPAD_ROWS as u16;
const STATUS_HEIGHT: u16 = 1;
const CALC_HEIGHT: u16 = TITLE_HEIGHT + DISPLAY_HEIGHT + KEYPAD_HEIGHT + STATUS_HEIGHT;

/// Where each part of the calculator sits on screen.
///
/// Both the renderer and mouse hit testing derive positions from this, so
/// they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(screen: Rect) -> Self {
        let width = screen.width.min(CALC_WIDTH);
        let height = screen.height.min(CALC_HEIGHT);
        let calc = Rect {
            x: screen.x + (screen.width.saturating_sub(width) / 2),
            y: screen.y + (screen.height.saturating_sub(height) / 2),
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(KEYPAD_ROWS as u16),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(calc);

        Self {
            title: chunks[0],
            display: chunks[1],
            keypad: chunks[2],
            status: chunks[3],
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let layout = ScreenLayout::new(frame.area());
    draw_title(frame, app, layout.title, &palette, &glyphs);
    draw_display(frame, app, layout.display, &palette, &glyphs);
    draw_keypad(frame, app, layout.keypad, &palette);
    draw_status(frame, app, layout.status, &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = Paragraph::new(Line::from(Span::styled(" Reckon", styles::title(palette))));
    frame.render_widget(title, area);

    let theme = app.theme();
    let icon = if theme.is_dark() {
        glyphs.dark
    } else {
        glyphs.light
    };
    let indicator = Paragraph::new(Line::from(Span::styled(
        format!("{icon} {} ", theme.name()),
        styles::key_hint(palette),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(indicator, area);
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width.saturating_sub(1));
    let readout = app.readout();
    let lines = vec![
        Line::from(Span::styled(
            format!("{} ", fit_to_width(&readout.secondary, width, glyphs.ellipsis)),
            styles::secondary_readout(palette),
        )),
        Line::from(Span::styled(
            format!("{} ", fit_to_width(&readout.primary, width, glyphs.ellipsis)),
            styles::primary_readout(palette),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Right), inner);
}

fn draw_keypad(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let style = app.ui_options().glyph_style();
    let pressed = app.pressed_key();

    for cell in keypad_cells(area) {
        let is_pressed = pressed == Some(cell.action);
        let bg = if is_pressed {
            palette.bg_key_pressed
        } else {
            palette.bg_key
        };
        let mut label_style = key_style(cell.action, palette).bg(bg);
        if is_pressed {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }

        let inner = if cell.area.height >= 3 && cell.area.width >= 3 {
            let border = if is_pressed {
                palette.accent
            } else {
                palette.border
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg));
            let inner = block.inner(cell.area);
            frame.render_widget(block, cell.area);
            inner
        } else {
            cell.area
        };

        let label_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        let label = Paragraph::new(cell.action.label(style))
            .alignment(Alignment::Center)
            .style(label_style);
        frame.render_widget(label, label_area);
    }
}

fn key_style(action: Action, palette: &Palette) -> Style {
    match action {
        Action::Digit(_) => Style::default().fg(palette.text_primary),
        Action::Operator(_) => styles::key_highlight(palette),
        Action::Equals => Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
        Action::Clear => styles::error(palette),
        Action::Delete | Action::Percent => Style::default().fg(palette.text_muted),
    }
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(notification) = app.notification() {
        let style = match notification.level() {
            NotificationLevel::Error => styles::error(palette),
            NotificationLevel::Info => Style::default().fg(palette.success),
        };
        Line::from(Span::styled(notification.message().to_string(), style))
    } else {
        let sep = format!(" {} ", glyphs.separator);
        Line::from(vec![
            Span::styled("t", styles::key_highlight(palette)),
            Span::styled(" theme", styles::key_hint(palette)),
            Span::styled(sep.clone(), styles::key_hint(palette)),
            Span::styled("esc", styles::key_highlight(palette)),
            Span::styled(" clear", styles::key_hint(palette)),
            Span::styled(sep, styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ])
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Keep the rightmost part of `text` that fits in `width` columns.
///
/// Numbers are read from the right, so overflow is cut from the left and
/// marked with `ellipsis`.
fn fit_to_width(text: &str, width: usize, ellipsis: &str) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(ellipsis.width());
    let mut used = 0;
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(ch);
    }

    let mut out = String::from(ellipsis);
    out.extend(kept.iter().rev());
    out
}
