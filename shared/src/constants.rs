pub const SITE_NAME: &str = "Yes or No Wheel";
pub const DEFAULT_SITE_URL: &str = "https://yesornowheel.com";
pub const CONTACT_EMAIL: &str = "contact@yesornowheel.com";
pub const SOCIAL_IMAGE_PATH: &str = "/static/images/android-chrome-512x512.png";
pub const SOCIAL_IMAGE_SIZE: u32 = 512;

// Wheel animation
pub const SPIN_DURATION_MS: u64 = 3000;
pub const HISTORY_LIMIT: usize = 5;
pub const MIN_EXTRA_TURNS: u32 = 5;
pub const MAX_EXTRA_TURNS: u32 = 7;
pub const JITTER_DEGREES: f64 = 20.0;

// Pointer-angle centres of each half of the wheel face
pub const YES_POINTER_CENTER: f64 = 90.0;
pub const NO_POINTER_CENTER: f64 = 270.0;

pub const DATE_PUBLISHED: &str = "2024-01-01";
pub const DATE_MODIFIED: &str = "2025-11-26";
pub const SOFTWARE_VERSION: &str = "2.0";

pub const META_DESCRIPTION_MAX: usize = 160;

// localStorage keys
pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";
