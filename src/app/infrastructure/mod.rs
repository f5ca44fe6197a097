//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Preference storage on disk
//! - Platform-specific color scheme detection
//! - Error types

pub mod error;
pub mod platform;
pub mod storage;
