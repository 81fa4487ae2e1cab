use crate::theme::preference::{ThemePreference, THEME_STORAGE_KEY};
use crate::theme::store::PreferenceStore;
use crate::theme::surface::ThemeSurface;

/// Keeps three things in agreement: the persisted preference, the
/// presentation flag on the document root, and the glyph shown on the
/// toggle control.
pub struct ThemeToggleController<S, D> {
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeToggleController<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// One-time startup pass: restore the persisted preference and
    /// apply it to the surface. A missing control means the page does
    /// not carry the toggle, so this returns without touching anything.
    /// Never writes to the store.
    pub fn initialize(&mut self) {
        if !self.surface.control_present() {
            return;
        }
        let preference =
            ThemePreference::from_stored(self.store.get(THEME_STORAGE_KEY).as_deref());
        self.surface.set_flag(preference.is_light());
        self.surface.set_label(preference.glyph());
    }

    /// Click handler. The resulting state is read back from the
    /// post-toggle flag on the surface rather than from a tracked
    /// variable, so the flag and the indicator cannot drift apart. A
    /// failed persist is logged and otherwise ignored; the visual state
    /// still updates.
    pub fn on_toggle(&mut self) {
        let preference = if self.surface.toggle_flag() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.surface.set_label(preference.glyph());
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("could not persist theme preference: {}", err);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}
