//! Persistence seam for the theme preference.

use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use reckon_config::ReckonConfig;
use reckon_types::ui::Theme;

/// Where the theme preference is saved when the user toggles it.
pub trait PreferenceStore {
    fn save_theme(&mut self, theme: Theme) -> io::Result<()>;
}

/// Saves into the TOML config file.
#[derive(Debug, Clone)]
pub struct ConfigPreferenceStore {
    path: Option<PathBuf>,
}

impl ConfigPreferenceStore {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new(ReckonConfig::path())
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn save_theme(&mut self, theme: Theme) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        ReckonConfig::persist_dark_mode(path, theme.is_dark())
    }
}

/// Keeps the preference in memory only. Clones share the saved value, so a
/// caller can hand one clone to the `App` and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    saved: Rc<Cell<Option<Theme>>>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn saved_theme(&self) -> Option<Theme> {
        self.saved.get()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn save_theme(&mut self, theme: Theme) -> io::Result<()> {
        self.saved.set(Some(theme));
        Ok(())
    }
}
