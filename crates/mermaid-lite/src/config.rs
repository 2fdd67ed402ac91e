//! Configuration types for diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI. Layout geometry is fixed and deliberately absent
//! here; only presentation options are configurable.
//!
//! # Example
//!
//! ```
//! # use mermaid_lite::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().background_color(), Ok(None));
//! ```

use serde::Deserialize;

use mermaid_lite_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given style section.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background color, as a CSS color string. Transparent when unset.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style section with an optional background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_background() {
        let config = AppConfig::default();
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_deserialize_background_color() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "#fafafa"
            "##,
        )
        .unwrap();

        let color = config.style().background_color().unwrap();
        assert!(color.is_some());
    }

    #[test]
    fn test_deserialize_empty_file() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }
}
