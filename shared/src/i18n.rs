use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::translations::{Entry, ENTRIES};

/// Languages the site is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Ja,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ru, Language::Ja, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Es => "es",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
            Language::Ja => "日本語",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Ru => "🇷🇺",
            Language::Ja => "🇯🇵",
            Language::Es => "🇪🇸",
        }
    }

    /// Open Graph locale, e.g. `ja_JP`.
    pub fn og_locale(self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Ru => "ru_RU",
            Language::Ja => "ja_JP",
            Language::Es => "es_ES",
        }
    }

    pub fn html_lang(self) -> &'static str {
        self.code()
    }

    /// Accepts bare codes and region tags (`EN`, `es-MX`, `ja_JP`).
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    fn pick(self, entry: &Entry) -> &'static str {
        match self {
            Language::En => entry.en,
            Language::Ru => entry.ru,
            Language::Ja => entry.ja,
            Language::Es => entry.es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static INDEX: Lazy<HashMap<&'static str, &'static Entry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.key, entry)).collect());

/// Translated string for `key`: the requested language, then English, then the
/// key itself.
pub fn lookup<'a>(key: &'a str, language: Language) -> &'a str {
    let Some(entry) = INDEX.get(key) else {
        log::warn!("Missing translation key: {}", key);
        return key;
    };

    match language.pick(entry) {
        "" if entry.en.is_empty() => key,
        "" => entry.en,
        text => text,
    }
}

pub fn has_key(key: &str) -> bool {
    INDEX.contains_key(key)
}
