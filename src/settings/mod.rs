pub mod preferences;
pub mod theme;

pub use preferences::{Preferences, PreferencesStore};
pub use theme::{Theme, ThemeColors};
