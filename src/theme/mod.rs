mod controller;
mod preference;
mod store;
mod surface;

pub use controller::ThemeToggleController;
pub use preference::{ThemePreference, THEME_STORAGE_KEY};
pub use store::PreferenceStore;
pub use surface::ThemeSurface;

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub use surface::DocumentSurface;

/// Fixed id of the toggle control in the rendered document.
pub const CONTROL_ID: &str = "mode-toggle";

/// Class on `document.body` that switches the external stylesheet to
/// light mode.
pub const FLAG_CLASS: &str = "light-mode";

/// Restores the persisted preference against the live document. Called
/// once after mount.
#[cfg(target_arch = "wasm32")]
pub fn apply_saved_theme() {
    if let Some(mut controller) = dom_controller() {
        controller.initialize();
    }
}

/// Flips the theme against the live document and persists the result.
#[cfg(target_arch = "wasm32")]
pub fn toggle_theme() {
    if let Some(mut controller) = dom_controller() {
        controller.on_toggle();
    }
}

#[cfg(target_arch = "wasm32")]
fn dom_controller() -> Option<ThemeToggleController<LocalStorageStore, DocumentSurface>> {
    let surface = DocumentSurface::attach()?;
    Some(ThemeToggleController::new(LocalStorageStore::attach(), surface))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_saved_theme() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_theme() {}
