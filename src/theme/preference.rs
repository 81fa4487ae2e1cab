/// Key under which the preference is persisted, shared by the startup
/// read and the toggle write.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The user's persisted theme choice. Absence of a stored value means
/// dark, so dark is the default variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Only the literal `"light"` selects the light theme. Anything
    /// else, including an absent value, falls back to dark; "never set"
    /// and "set to something unrecognized" are not distinguished.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    /// Token written back to the store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Indicator text shown on the toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemePreference::Light
    }
}
