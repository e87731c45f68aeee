use serde::{Deserialize, Serialize};

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    /// Whether the page should render dark, given the OS preference.
    pub fn resolve(self, prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => prefers_dark,
        }
    }

    /// Flips whatever is currently shown. `System` becomes the explicit opposite.
    pub fn toggled(self, prefers_dark: bool) -> Theme {
        if self.resolve(prefers_dark) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Theme::Light => "themeLight",
            Theme::Dark => "themeDark",
            Theme::System => "themeSystem",
        }
    }
}

/// Visitor preferences, owned by the top-level app and handed down to pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
    /// OS-level dark mode, refreshed by the host page.
    pub prefers_dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesAction {
    SetLanguage(Language),
    SetTheme(Theme),
    ToggleTheme,
    SystemDarkChanged(bool),
}

impl Preferences {
    /// Builds preferences from raw storage values; anything unreadable falls back
    /// to the default.
    pub fn from_stored(language: Option<&str>, theme: Option<&str>, prefers_dark: bool) -> Self {
        Self {
            language: language.and_then(Language::from_code).unwrap_or_default(),
            theme: theme.and_then(Theme::parse).unwrap_or_default(),
            prefers_dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.resolve(self.prefers_dark)
    }

    pub fn apply(self, action: PreferencesAction) -> Preferences {
        match action {
            PreferencesAction::SetLanguage(language) => Preferences { language, ..self },
            PreferencesAction::SetTheme(theme) => Preferences { theme, ..self },
            PreferencesAction::ToggleTheme => Preferences {
                theme: self.theme.toggled(self.prefers_dark),
                ..self
            },
            PreferencesAction::SystemDarkChanged(prefers_dark) => Preferences { prefers_dark, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_with_fallbacks() {
        let prefs = Preferences::from_stored(Some("ja"), Some("dark"), false);
        assert_eq!(prefs.language, Language::Ja);
        assert_eq!(prefs.theme, Theme::Dark);

        let fallback = Preferences::from_stored(Some("klingon"), Some("sepia"), true);
        assert_eq!(fallback.language, Language::En);
        assert_eq!(fallback.theme, Theme::System);
        assert!(fallback.is_dark());
    }

    #[test]
    fn test_toggle_from_system_picks_explicit_opposite() {
        let prefs = Preferences { prefers_dark: true, ..Preferences::default() };
        let toggled = prefs.apply(PreferencesAction::ToggleTheme);
        assert_eq!(toggled.theme, Theme::Light);
        assert!(!toggled.is_dark());

        let back = toggled.apply(PreferencesAction::ToggleTheme);
        assert_eq!(back.theme, Theme::Dark);
    }

    #[test]
    fn test_actions_only_touch_their_field() {
        let prefs = Preferences::default()
            .apply(PreferencesAction::SetTheme(Theme::Light))
            .apply(PreferencesAction::SetLanguage(Language::Es));
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::Es);

        let os_dark = prefs.apply(PreferencesAction::SystemDarkChanged(true));
        assert_eq!(os_dark.theme, Theme::Light);
        assert!(!os_dark.is_dark());
    }

    #[test]
    fn test_theme_strings() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
