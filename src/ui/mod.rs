//! UI component library: theme tokens plus stateless HTML render helpers.

pub mod components;
pub mod theme;

pub use components::ButtonVariant;
pub use theme::Theme;
