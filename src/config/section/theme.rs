//! `[theme]` section: fonts injected into rendered markup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Font family for titles.
    pub heading_font: String,
    /// Font family for body copy and labels.
    pub body_font: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            heading_font: "Solway".into(),
            body_font: "Courier Prime".into(),
        }
    }
}

impl ThemeConfig {
    /// Inline `font-family` declaration for titles.
    pub fn heading_style(&self) -> String {
        font_family(&self.heading_font, "serif")
    }

    /// Inline `font-family` declaration for body text.
    pub fn body_style(&self) -> String {
        font_family(&self.body_font, "monospace")
    }
}

fn font_family(name: &str, fallback: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        format!("font-family: {fallback}")
    } else {
        format!("font-family: '{}', {fallback}", name.replace('\'', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_fonts() {
        let theme = test_parse_config("").theme;
        assert_eq!(theme.heading_style(), "font-family: 'Solway', serif");
        assert_eq!(theme.body_style(), "font-family: 'Courier Prime', monospace");
    }

    #[test]
    fn test_custom_and_empty_fonts() {
        let theme = test_parse_config("[theme]\nheading_font = \"Inter\"\nbody_font = \"\"").theme;
        assert_eq!(theme.heading_style(), "font-family: 'Inter', serif");
        assert_eq!(theme.body_style(), "font-family: monospace");
    }
}
