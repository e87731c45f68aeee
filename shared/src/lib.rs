pub mod constants;
pub mod i18n;
pub mod preferences;
pub mod schema;
pub mod seo;
pub mod shared_wheel_game;
pub mod sitemap;
pub mod spin_timer;

mod translations;

pub use i18n::{lookup, Language};
pub use seo::PageKind;
