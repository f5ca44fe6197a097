//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Portfolio, sections, theme, settings, messages)
//! - `render/` - Section renderers producing presentation blocks
//! - `controllers/` - Orchestration (smooth scroll animation)
//! - `services/` - Business operations (theme store, scroll tracker, content loading, export)
//! - `infrastructure/` - External integrations (preference storage, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod render;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Message, Portfolio, SectionDescriptor, SectionKind, ThemeMode, ThemePalette};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::{ColorSchemeSignal, HostColorScheme, StaticColorScheme, detect_system_dark_mode};
pub use infrastructure::storage::{JsonFileStorage, MemoryStorage, PreferenceStorage};
pub use services::scroll_tracker::{ScrollSectionTracker, Viewport};
pub use services::theme_store::{THEME_STORAGE_KEY, ThemeContext, ThemePreferenceStore};
