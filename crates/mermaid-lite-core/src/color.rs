//! Color handling for rendered diagrams.
//!
//! [`Color`] wraps `DynamicColor` from the `color` crate so that colors taken
//! from configuration are parsed once and always serialized in a normalized
//! CSS form. Raw user strings never reach the SVG output.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"white"`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input when it is not a valid CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_lite_core::color::Color;
    ///
    /// assert!(Color::new("#fafafa").is_ok());
    /// assert!(Color::new("definitely not a color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
