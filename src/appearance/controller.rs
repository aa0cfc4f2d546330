//! The appearance controller.

use log::{debug, warn};

use crate::events::{AppearanceEvent, EventBus};
use crate::markers::{self, MarkerTarget};
use crate::persist::{keys, SettingsStore};
use crate::registry::ThemeRegistry;
use crate::scheme::{self, ColorScheme, ALLOWED_TOKENS};

use super::mode::{detect_system_mode, ColorMode};
use super::state::AppearanceState;
use super::AppearanceError;

type Detector = Box<dyn Fn() -> ColorMode + Send>;

/// Single authority for appearance state.
///
/// The controller is the only writer of the persisted appearance keys and
/// the only caller into the theme registry. It is constructed by the
/// application root and handed its collaborators; UI elements that need to
/// read or trigger theme changes get a reference to it, never a global.
///
/// # Example
///
/// ```rust
/// use esigned_shell::{
///     AppearanceController, ClassSet, ColorMode, InMemoryRegistry, MemoryStore,
/// };
///
/// let mut controller = AppearanceController::new(
///     MemoryStore::new(),
///     InMemoryRegistry::with_defaults(),
///     ClassSet::new(),
/// )
/// .with_detector(|| ColorMode::Light);
///
/// controller.initialize();
/// controller.toggle_mode();
/// assert_eq!(controller.effective_mode(), ColorMode::Dark);
/// ```
pub struct AppearanceController<S, R, M> {
    state: AppearanceState,
    store: S,
    registry: R,
    markers: M,
    bus: EventBus,
    detector: Detector,
    initialized: bool,
}

impl<S, R, M> AppearanceController<S, R, M>
where
    S: SettingsStore,
    R: ThemeRegistry,
    M: MarkerTarget,
{
    /// Creates a controller with default state. Nothing is applied until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(store: S, registry: R, markers: M) -> Self {
        Self {
            state: AppearanceState::default(),
            store,
            registry,
            markers,
            bus: EventBus::new(),
            detector: Box::new(detect_system_mode),
            initialized: false,
        }
    }

    /// Replaces the OS preference detector, for tests or embeddings that
    /// source the signal themselves.
    pub fn with_detector<F>(mut self, detector: F) -> Self
    where
        F: Fn() -> ColorMode + Send + 'static,
    {
        self.detector = Box::new(detector);
        self
    }

    /// Subscribes to appearance notifications.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&AppearanceEvent) + Send + 'static,
    {
        self.bus.subscribe(f);
    }

    pub fn state(&self) -> &AppearanceState {
        &self.state
    }

    pub fn effective_mode(&self) -> ColorMode {
        self.state.effective_mode()
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hydrates state from the settings store and applies it.
    ///
    /// Absent or invalid persisted values fall back to defaults with a
    /// logged warning. Hydration and detector seeding happen once; calling
    /// this again only re-applies the current state, so repeat
    /// initialization cannot double-up on anything.
    pub fn initialize(&mut self) {
        if !self.initialized {
            self.hydrate();
            self.state.system_prefers_dark = (self.detector)().is_dark();
            self.initialized = true;
        }

        self.apply_mode();
        // The persisted scheme must be live in the registry even though no
        // scheme-change notification fires during startup.
        if let Some(selected) = scheme::find(&self.state.scheme_id) {
            self.push_palettes(selected);
        }
    }

    /// Flips the explicit mode. A manual toggle always overrides
    /// system-following.
    pub fn toggle_mode(&mut self) {
        let next = self.state.mode.opposite();
        self.set_mode(next);
    }

    /// Sets the explicit mode and turns system-following off.
    pub fn set_mode(&mut self, mode: ColorMode) {
        debug!("setting mode to {mode}");
        self.state.mode = mode;
        self.state.follow_system = false;
        self.persist(keys::THEME, mode.as_str());
        self.persist(keys::FOLLOW_SYSTEM, "false");
        self.apply_mode();
    }

    /// Turns system-following on or off. The explicit mode is preserved for
    /// when following is disabled again.
    pub fn set_follow_system(&mut self, follow: bool) {
        debug!("follow system preference: {follow}");
        self.state.follow_system = follow;
        self.persist(keys::FOLLOW_SYSTEM, if follow { "true" } else { "false" });
        self.apply_mode();
    }

    /// Selects a color scheme by catalog id.
    ///
    /// On success the choice is persisted, both of the scheme's palettes are
    /// pushed into the registry (allowed tokens only), and a
    /// [`AppearanceEvent::ColorSchemeChanged`] is published. An unknown id
    /// fails with [`AppearanceError::UnknownScheme`] and changes nothing.
    pub fn set_color_scheme(&mut self, id: &str) -> Result<(), AppearanceError> {
        let selected = scheme::find(id).ok_or_else(|| AppearanceError::UnknownScheme {
            id: id.to_string(),
        })?;

        debug!("setting color scheme to '{id}'");
        self.state.scheme_id = id.to_string();
        self.persist(keys::COLOR_SCHEME, id);
        self.push_palettes(selected);
        self.bus.emit(&AppearanceEvent::ColorSchemeChanged {
            id: id.to_string(),
            scheme: selected.clone(),
        });
        Ok(())
    }

    /// Handles an OS color-scheme preference change notification.
    ///
    /// The signal is always recorded; it only becomes visible when
    /// system-following is on.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) {
        self.state.system_prefers_dark = prefers_dark;
        if self.state.follow_system {
            self.apply_mode();
        }
    }

    /// Applies the effective mode: root markers, registry active theme, and
    /// a [`AppearanceEvent::ThemeChanged`] notification.
    ///
    /// Idempotent: re-applying unchanged state produces the same marker
    /// configuration and a notification with an identical payload.
    pub fn apply_mode(&mut self) {
        let effective = self.state.effective_mode();
        debug!("applying effective mode {effective}");

        self.markers
            .set_marker(markers::DARK_THEME, effective.is_dark());
        self.markers
            .set_marker(markers::LIGHT_THEME, !effective.is_dark());
        self.registry.set_active(effective);
        self.bus
            .emit(&AppearanceEvent::ThemeChanged { mode: effective });
    }

    fn hydrate(&mut self) {
        if let Some(raw) = self.store.get(keys::THEME) {
            match raw.parse::<ColorMode>() {
                Ok(mode) => self.state.mode = mode,
                Err(err) => warn!("ignoring persisted theme: {err}"),
            }
        }
        if let Some(raw) = self.store.get(keys::FOLLOW_SYSTEM) {
            self.state.follow_system = raw == "true";
        }
        if let Some(raw) = self.store.get(keys::COLOR_SCHEME) {
            if scheme::find(&raw).is_some() {
                self.state.scheme_id = raw;
            } else {
                warn!("ignoring persisted color scheme '{raw}': not in catalog");
            }
        }
    }

    /// Builds fresh palettes with the scheme's allowed tokens layered over
    /// what the registry already holds, and replaces both registry palettes
    /// wholesale.
    fn push_palettes(&mut self, selected: &ColorScheme) {
        for (mode, overrides) in [
            (ColorMode::Light, &selected.light),
            (ColorMode::Dark, &selected.dark),
        ] {
            let mut palette = self.registry.palette(mode).clone();
            for token in ALLOWED_TOKENS {
                if let Some(value) = overrides.get(token) {
                    palette.insert(*token, value);
                }
            }
            self.registry.set_palette(mode, palette);
        }
    }

    /// Durable-storage writes are non-fatal: in-memory state stays
    /// authoritative for the session when the store misbehaves.
    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("failed to persist {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::ClassSet;
    use crate::persist::{MemoryStore, StoreError};
    use crate::registry::InMemoryRegistry;

    fn controller(
        store: MemoryStore,
    ) -> AppearanceController<MemoryStore, InMemoryRegistry, ClassSet> {
        AppearanceController::new(store, InMemoryRegistry::with_defaults(), ClassSet::new())
            .with_detector(|| ColorMode::Light)
    }

    #[test]
    fn test_toggle_forces_explicit_choice() {
        let mut ctl = controller(MemoryStore::new());
        ctl.initialize();
        ctl.set_follow_system(true);

        ctl.toggle_mode();

        assert!(!ctl.state().follow_system);
        assert_eq!(ctl.state().mode, ColorMode::Dark);
        assert_eq!(ctl.store().get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(
            ctl.store().get(keys::FOLLOW_SYSTEM).as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_set_follow_system_preserves_mode() {
        let mut ctl = controller(MemoryStore::new());
        ctl.initialize();
        ctl.set_mode(ColorMode::Dark);

        ctl.set_follow_system(true);
        assert_eq!(ctl.state().mode, ColorMode::Dark);
        // Detector said light, so following the system renders light.
        assert_eq!(ctl.effective_mode(), ColorMode::Light);

        ctl.set_follow_system(false);
        assert_eq!(ctl.effective_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_system_signal_inert_unless_following() {
        let mut ctl = controller(MemoryStore::new());
        ctl.initialize();

        ctl.system_scheme_changed(true);
        assert!(ctl.state().system_prefers_dark);
        assert_eq!(ctl.effective_mode(), ColorMode::Light);
        assert!(ctl.markers().contains(markers::LIGHT_THEME));

        ctl.set_follow_system(true);
        assert_eq!(ctl.effective_mode(), ColorMode::Dark);
        assert!(ctl.markers().contains(markers::DARK_THEME));
        assert!(!ctl.markers().contains(markers::LIGHT_THEME));
    }

    #[test]
    fn test_unknown_scheme_is_rejected_without_side_effects() {
        let mut ctl = controller(MemoryStore::new());
        ctl.initialize();
        let revision_before = ctl.registry().revision();

        let err = ctl.set_color_scheme("nonexistent").unwrap_err();

        assert_eq!(
            err,
            AppearanceError::UnknownScheme {
                id: "nonexistent".to_string()
            }
        );
        assert_eq!(ctl.state().scheme_id, scheme::DEFAULT_SCHEME);
        assert_eq!(ctl.registry().revision(), revision_before);
        assert_eq!(ctl.store().get(keys::COLOR_SCHEME), None);
    }

    #[test]
    fn test_scheme_push_preserves_reserved_tokens() {
        let mut ctl = controller(MemoryStore::new());
        ctl.initialize();

        ctl.set_color_scheme("purple").unwrap();

        let light = ctl.registry().palette(ColorMode::Light);
        let dark = ctl.registry().palette(ColorMode::Dark);
        assert_eq!(light.get("primary"), Some("#673AB7"));
        assert_eq!(dark.get("primary"), Some("#9C27B0"));
        // Framework-reserved tokens survive the scheme change.
        assert_eq!(light.get("background"), Some("#FFFFFF"));
        assert_eq!(dark.get("surface"), Some("#212121"));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = MemoryStore::seeded(&[("theme", "dark")]);
        let mut ctl = controller(store);

        ctl.initialize();
        let state_after_first = ctl.state().clone();

        // Mutate the store behind the controller's back; a second initialize
        // must not re-hydrate.
        ctl.store.set(keys::THEME, "light").unwrap();
        ctl.initialize();

        assert_eq!(ctl.state(), &state_after_first);
        assert_eq!(ctl.effective_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_invalid_persisted_values_fall_back() {
        let store = MemoryStore::seeded(&[("theme", "sepia"), ("colorScheme", "nope")]);
        let mut ctl = controller(store);
        ctl.initialize();

        assert_eq!(ctl.state().mode, ColorMode::Light);
        assert_eq!(ctl.state().scheme_id, scheme::DEFAULT_SCHEME);
    }

    #[test]
    fn test_store_failure_is_non_fatal() {
        struct FailingStore;
        impl SettingsStore for FailingStore {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Unavailable {
                    message: "quota exceeded".to_string(),
                })
            }
            fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
                Err(StoreError::Unavailable {
                    message: "quota exceeded".to_string(),
                })
            }
        }

        let mut ctl = AppearanceController::new(
            FailingStore,
            InMemoryRegistry::with_defaults(),
            ClassSet::new(),
        )
        .with_detector(|| ColorMode::Light);
        ctl.initialize();

        // Every mutation still lands in memory.
        ctl.set_mode(ColorMode::Dark);
        assert_eq!(ctl.state().mode, ColorMode::Dark);
        ctl.set_color_scheme("teal").unwrap();
        assert_eq!(ctl.state().scheme_id, "teal");
    }
}
