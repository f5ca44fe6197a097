//! Single source of truth for the display mode.
//!
//! Resolution order at startup: stored preference, then the host's
//! "prefers dark" signal, then light. A stored value other than `"dark"`
//! means light; only an empty one defers to the signal. Toggling re-persists immediately.
//! Storage failures never break a toggle; the preference is then simply not
//! remembered across restarts.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::app::domain::theme::{ThemeMode, ThemePalette};
use crate::app::infrastructure::platform::ColorSchemeSignal;
use crate::app::infrastructure::storage::PreferenceStorage;

/// Durable storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

type ModeListener = Box<dyn FnMut(ThemeMode)>;

pub struct ThemePreferenceStore {
    storage: Box<dyn PreferenceStorage>,
    signal: Box<dyn ColorSchemeSignal>,
    mode: ThemeMode,
    listeners: Vec<ModeListener>,
}

impl ThemePreferenceStore {
    /// Build the store and resolve the initial mode.
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        signal: impl ColorSchemeSignal + 'static,
    ) -> Self {
        let mut store = Self {
            storage: Box::new(storage),
            signal: Box::new(signal),
            mode: ThemeMode::Light,
            listeners: Vec::new(),
        };
        store.mode = store.resolve_initial();
        log::info!("Initial theme: {}", store.mode.as_str());
        store
    }

    /// Resolve the mode from storage, falling back to the ambient signal.
    ///
    /// Has no side effects and returns the same value until the next write,
    /// so calling it again after `toggle` simulates a restart.
    pub fn resolve_initial(&self) -> ThemeMode {
        let stored = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Theme preference unreadable, ignoring it: {}", e);
                None
            }
        };

        // Any non-empty value counts as a choice; only "dark" selects dark
        if let Some(raw) = stored.filter(|v| !v.is_empty()) {
            return ThemeMode::from_stored(&raw).unwrap_or_else(|| {
                log::warn!("Unknown stored theme '{}', using light", raw);
                ThemeMode::Light
            });
        }

        ThemeMode::from_dark(self.signal.prefers_dark())
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn palette(&self) -> ThemePalette {
        self.mode.palette()
    }

    /// Flip the current mode. See [`Self::toggle_from`].
    pub fn toggle(&mut self) -> ThemeMode {
        self.toggle_from(self.mode)
    }

    /// Set the mode to the opposite of `current`, persist it and notify
    /// listeners. A failed write is logged and otherwise ignored.
    pub fn toggle_from(&mut self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.mode = next;

        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("Theme preference not saved ({}); it will reset on restart", e);
        }

        log::debug!("Theme toggled to {}", next.as_str());
        for listener in &mut self.listeners {
            listener(next);
        }
        next
    }

    /// Register a "mode changed" observer. Listeners run synchronously
    /// inside `toggle` and must not borrow the store again.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn into_shared(self) -> SharedThemeStore {
        Rc::new(RefCell::new(self))
    }
}

pub type SharedThemeStore = Rc<RefCell<ThemePreferenceStore>>;

/// Read handle given to renderers. It does not keep the store alive.
#[derive(Clone)]
pub struct ThemeContext {
    store: Weak<RefCell<ThemePreferenceStore>>,
}

impl ThemeContext {
    pub fn new(store: &SharedThemeStore) -> Self {
        Self {
            store: Rc::downgrade(store),
        }
    }

    /// Current mode.
    ///
    /// # Panics
    ///
    /// Panics if the owning `ThemePreferenceStore` has been dropped. That is a
    /// wiring bug, not a runtime condition.
    pub fn mode(&self) -> ThemeMode {
        match self.store.upgrade() {
            Some(store) => store.borrow().mode(),
            None => panic!("ThemeContext used outside the lifetime of its ThemePreferenceStore"),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn palette(&self) -> ThemePalette {
        self.mode().palette()
    }
}
