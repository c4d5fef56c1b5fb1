//! Core engine for Reckon - calculator ownership and command dispatch.
//!
//! This crate contains the `App` controller without TUI dependencies. The
//! renderer reads state through [`App::readout`] and friends; input adapters
//! translate raw events into [`Command`]s and hand them to [`App::dispatch`].

mod preferences;

use std::time::Duration;

pub use preferences::{ConfigPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use reckon_config::{ConfigError, ReckonConfig};
pub use reckon_types::ui::{Notification, NotificationLevel, PressFeedback, Theme, UiOptions};
pub use reckon_types::{Action, CalcError, Calculator, Digit, GlyphStyle, Operator, Readout};

/// Everything the user can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Calc(Action),
    ToggleTheme,
    Quit,
}

pub struct App {
    calculator: Calculator,
    ui_options: UiOptions,
    notification: Option<Notification>,
    pressed: Option<PressFeedback>,
    store: Box<dyn PreferenceStore>,
    should_quit: bool,
}

impl App {
    pub fn new(ui_options: UiOptions, store: impl PreferenceStore + 'static) -> Self {
        Self {
            calculator: Calculator::new(),
            ui_options,
            notification: None,
            pressed: None,
            store: Box::new(store),
            should_quit: false,
        }
    }

    /// Apply one command to completion.
    ///
    /// Any command dismisses the current notification; a failing command may
    /// replace it with a new one.
    pub fn dispatch(&mut self, command: Command) {
        self.notification = None;
        match command {
            Command::Calc(action) => self.run_action(action),
            Command::ToggleTheme => self.toggle_theme(),
            Command::Quit => self.request_quit(),
        }
    }

    fn run_action(&mut self, action: Action) {
        self.pressed = Some(PressFeedback::new(action));

        let before = self.calculator.clone();
        match self.calculator.apply(action) {
            Ok(()) if self.calculator == before => {
                tracing::trace!(?action, "Action ignored");
            }
            Ok(()) => {
                tracing::debug!(
                    ?action,
                    current = self.calculator.current(),
                    previous = self.calculator.previous(),
                    operation = self.calculator.operation().map(Operator::name),
                    "Action applied"
                );
            }
            Err(err) => {
                tracing::warn!(?action, "Arithmetic error: {err}");
                self.notification = Some(Notification::error(err.to_string()));
            }
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.ui_options.theme.toggle();
        self.ui_options.theme = theme;
        tracing::debug!(theme = theme.name(), "Theme toggled");

        match self.store.save_theme(theme) {
            Ok(()) => {
                self.notification = Some(Notification::info(format!(
                    "Switched to {} theme",
                    theme.name()
                )));
            }
            Err(err) => {
                tracing::warn!("Failed to save theme preference: {err}");
                self.notification = Some(Notification::error(format!(
                    "Failed to save theme preference: {err}"
                )));
            }
        }
    }

    /// A keypad key went down (mouse press). Highlights it and runs it.
    pub fn press_key(&mut self, key: Action) {
        self.dispatch(Command::Calc(key));
    }

    /// The pointer was released; stop highlighting the pressed key.
    pub fn release_key(&mut self) {
        self.pressed = None;
    }

    /// Advance feedback timers by the time since the last frame.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(pressed) = self.pressed.as_mut() {
            pressed.advance(delta);
            if pressed.is_finished() {
                self.pressed = None;
            }
        }
        if let Some(notification) = self.notification.as_mut() {
            notification.advance(delta);
            if notification.is_expired() {
                self.notification = None;
            }
        }
    }

    #[must_use]
    pub fn readout(&self) -> Readout {
        self.calculator.readout(self.ui_options.glyph_style())
    }

    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.ui_options.theme
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The keypad key currently highlighted, if any.
    #[must_use]
    pub fn pressed_key(&self) -> Option<Action> {
        self.pressed.as_ref().map(PressFeedback::key)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
