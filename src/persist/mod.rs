//! Durable string-keyed settings.
//!
//! The shell persists a handful of flat key/value entries: the appearance
//! keys and the session's bearer token. [`SettingsStore`] is the seam the
//! controller and session write through; [`MemoryStore`] backs tests and
//! embedded use, [`FileStore`] backs real installs with a JSON file under
//! the user's config directory.
//!
//! Writes are fire-and-forget from the caller's point of view: a failing
//! store surfaces a [`StoreError`] that callers log and move past, keeping
//! in-memory state authoritative for the session.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// The persisted keys, shared by the appearance controller and the session.
pub mod keys {
    /// Explicit visual mode, `"light"` or `"dark"`.
    pub const THEME: &str = "theme";
    /// Follow-OS flag, `"true"` or `"false"`.
    pub const FOLLOW_SYSTEM: &str = "followSystemTheme";
    /// Active color scheme id.
    pub const COLOR_SCHEME: &str = "colorScheme";
    /// Bearer credential for the API.
    pub const TOKEN: &str = "token";
}

/// Durable string-keyed, string-valued storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
