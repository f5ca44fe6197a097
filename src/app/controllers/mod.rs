//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that sit between the services and the
//! FLTK widgets:
//! - Smooth scroll animation

pub mod scroll_animation;
