//! UI Configuration
//!
//! Settings read once from `<body data-*>` attributes at startup.

/// Sprite sheet served next to the page when nothing else is configured
pub const DEFAULT_SPRITE_URL: &str = "/svgs.html";

/// How long a status message stays visible
pub const STATUS_HIDE_MS: u32 = 2_800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Base URL of the shared SVG sprite (`<body data-sprite-url>`)
    pub sprite_url: String,
    /// Prefix for `/api/*` paths (`<body data-api-base>`), empty for same origin
    pub api_base: String,
    pub status_hide_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sprite_url: DEFAULT_SPRITE_URL.to_string(),
            api_base: String::new(),
            status_hide_ms: STATUS_HIDE_MS,
        }
    }
}

impl UiConfig {
    /// Build from raw attribute values. Missing or blank values fall back to defaults.
    pub fn from_attributes(sprite_url: Option<String>, api_base: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            sprite_url: non_blank(sprite_url).unwrap_or(defaults.sprite_url),
            api_base: non_blank(api_base)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            status_hide_ms: defaults.status_hide_ms,
        }
    }

    /// Read `data-sprite-url` / `data-api-base` from the document body
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        match body {
            Some(body) => Self::from_attributes(
                body.get_attribute("data-sprite-url"),
                body.get_attribute("data-api-base"),
            ),
            None => Self::default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = UiConfig::from_attributes(None, Some("   ".to_string()));
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.sprite_url, "/svgs.html");
        assert_eq!(config.status_hide_ms, 2_800);
    }

    #[test]
    fn test_explicit_values() {
        let config = UiConfig::from_attributes(
            Some("/static/sprite.svg".to_string()),
            Some("http://127.0.0.1:5000/".to_string()),
        );
        assert_eq!(config.sprite_url, "/static/sprite.svg");
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
    }
}
