use shared::constants::DEFAULT_SITE_URL;
use web_sys::window;

/// Origin the app is served from, used for canonical and alternate links.
pub fn site_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            // Local dev servers should still emit production canonicals
            if !origin.contains("127.0.0.1") && !origin.contains("localhost") {
                return origin;
            }
        }
    }

    DEFAULT_SITE_URL.to_string()
}

pub fn read_storage(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

pub fn write_storage(key: &str, value: &str) {
    let storage = window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not persist {} to localStorage", key);
            }
        }
        None => log::warn!("localStorage unavailable, {} not persisted", key),
    }
}

/// OS-level dark mode preference.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |query| query.matches())
}
