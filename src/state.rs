use std::sync::Arc;

use crate::config::AppConfig;
use crate::ui::Theme;

/// Shared state for the web layer: configuration plus the brand theme.
///
/// The database adapters are deliberately not held here; the pages render
/// fixed or mock data and the adapters are consumed as a standalone library.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub theme: Arc<Theme>,
}

impl AppState {
    pub fn init() -> Self {
        Self {
            config: Arc::new(AppConfig::from_env()),
            theme: Arc::new(Theme::default()),
        }
    }

    pub fn from_parts(config: Arc<AppConfig>, theme: Arc<Theme>) -> Self {
        Self { config, theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_uses_the_default_theme() {
        let state = AppState::init();
        assert_eq!(*state.theme, Theme::default());
    }
}
