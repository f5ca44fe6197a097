//! Services layer - business operations.
//!
//! This module contains the behaviour that does not touch widgets:
//! - Theme preference resolution and persistence
//! - Active-section tracking and section navigation
//! - Content loading and validation
//! - HTML export

pub mod content_loader;
pub mod html_export;
pub mod scroll_tracker;
pub mod theme_store;
