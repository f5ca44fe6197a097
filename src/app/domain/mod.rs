//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Portfolio content tree and section descriptors
//! - Theme mode and palette
//! - Application settings
//! - Message types for the event system

pub mod content;
pub mod messages;
pub mod sections;
pub mod settings;
pub mod theme;

pub use content::Portfolio;
pub use messages::Message;
pub use sections::{SectionDescriptor, SectionKind};
pub use settings::AppSettings;
pub use theme::{Rgb, ThemeMode, ThemePalette};
