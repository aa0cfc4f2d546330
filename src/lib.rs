//! Client-shell state for the esigned document-signing application.
//!
//! This crate owns the state that sits between the UI toolkit and the rest of
//! the client: which visual mode is active, which color scheme is selected,
//! who is signed in, and which routes they may visit. It never talks to a
//! mounted UI framework directly; every platform touchpoint is an injected
//! seam:
//!
//! - [`AppearanceController`]: single authority for mode, system-preference
//!   following, and color-scheme selection
//! - [`ThemeRegistry`]: the UI framework's live theme registry, as a trait
//! - [`MarkerTarget`]: the root element's `dark-theme`/`light-theme` markers
//! - [`SettingsStore`]: durable string-keyed settings (`theme`,
//!   `followSystemTheme`, `colorScheme`, `token`)
//! - [`Session`] and [`routing`]: authentication state and the route-guard
//!   table the navigation layer consults
//! - [`http::ApiClient`]: bearer-authenticated HTTP with 401 handling
//!
//! State changes propagate outward through [`AppearanceEvent`]
//! notifications, so observers never need a reference to the controller.

pub mod appearance;
pub mod css;
pub mod events;
pub mod http;
pub mod markers;
pub mod persist;
pub mod registry;
pub mod routing;
pub mod scheme;
pub mod session;

pub use appearance::{AppearanceController, AppearanceError, AppearanceState, ColorMode};
pub use events::{AppearanceEvent, EventBus};
pub use http::{ApiClient, ApiError};
pub use markers::{ClassSet, MarkerTarget, DARK_THEME, LIGHT_THEME};
pub use persist::{keys, FileStore, MemoryStore, SettingsStore, StoreError};
pub use registry::{InMemoryRegistry, ThemeRegistry};
pub use routing::{AuthState, GuardDecision, Route, RouteMeta};
pub use scheme::{ColorScheme, Palette, ALLOWED_TOKENS, DEFAULT_SCHEME};
pub use session::{Role, Session, User};
