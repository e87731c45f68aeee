pub mod decision_wheel;
pub mod faq;
pub mod language_switcher;
pub mod page_head;
pub mod theme_toggle;

pub use decision_wheel::DecisionWheel;
pub use faq::Faq;
pub use language_switcher::LanguageSwitcher;
pub use page_head::PageHead;
pub use theme_toggle::ThemeToggle;
