//! Color schemes: named light/dark palette pairs selectable independently
//! of the visual mode.
//!
//! This module provides:
//!
//! - [`Palette`]: an ordered token-to-color mapping
//! - [`ColorScheme`]: a named light/dark palette pair
//! - [`find`]/[`ids`]: lookup into the built-in catalog
//! - [`ALLOWED_TOKENS`]: the only tokens a scheme may push into the UI
//!   framework's theme registry

mod catalog;
mod palette;
#[allow(clippy::module_inception)]
mod scheme;

pub use catalog::{find, ids, DEFAULT_SCHEME};
pub use palette::{Palette, ALLOWED_TOKENS};
pub use scheme::ColorScheme;
