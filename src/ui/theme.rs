use serde::{Deserialize, Serialize};

/// Brand palette for the rendering layer.
///
/// Passed explicitly to every component that colors its output; nothing in
/// the crate reads theme colors from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub leaf_green: String,
    pub light_apple_green: String,
    pub dark_outline_green: String,
    pub background: String,
    pub light_gray: String,
    pub medium_gray: String,
    pub dark_gray: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            leaf_green: "#1D6A32".into(),
            light_apple_green: "#88B04B".into(),
            dark_outline_green: "#0F3D23".into(),
            background: "#FAF8F5".into(),
            light_gray: "#E2E2E0".into(),
            medium_gray: "#9A9A98".into(),
            dark_gray: "#4A4A48".into(),
            success: "#2E7D32".into(),
            warning: "#ED8936".into(),
            error: "#D32F2F".into(),
            info: "#2B6CB0".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_carries_the_brand_colors() {
        let theme = Theme::default();
        assert_eq!(theme.leaf_green, "#1D6A32");
        assert_eq!(theme.background, "#FAF8F5");
        assert_eq!(theme.error, "#D32F2F");
    }

    #[test]
    fn theme_round_trips_through_serde() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
