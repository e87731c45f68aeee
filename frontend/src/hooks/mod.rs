pub mod use_preferences;
pub mod use_wheel;

pub use use_preferences::*;
pub use use_wheel::*;
