//! Appearance state: visual mode, system-preference following, and the
//! active color scheme.
//!
//! This module provides:
//!
//! - [`ColorMode`]: light or dark visual mode
//! - [`AppearanceState`]: the persisted-and-derived state triple
//! - [`AppearanceController`]: the single writer of appearance state
//! - [`AppearanceError`]: rejection of unknown schemes and invalid modes
//!
//! The controller is constructed explicitly by the application root and
//! handed its collaborators; nothing in here is reachable through a global.

mod controller;
mod error;
mod mode;
mod state;

pub use controller::AppearanceController;
pub use error::AppearanceError;
pub use mode::{detect_system_mode, ColorMode};
pub use state::AppearanceState;
