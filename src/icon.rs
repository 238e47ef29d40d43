//! Sprite Icons
//!
//! References to symbols inside the shared SVG sprite sheet.

/// Reference to one `<symbol id=code>` in the sprite.
///
/// Carries both the modern `href` and the legacy `xlink:href` so older
/// renderers resolve it too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef {
    pub href: String,
    pub xlink_href: String,
}

impl IconRef {
    /// Inner markup for the wrapping `<svg>` element
    pub fn markup(&self) -> String {
        format!(
            r#"<use href="{}" xlink:href="{}"></use>"#,
            escape_attr(&self.href),
            escape_attr(&self.xlink_href)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFactory {
    sprite_url: String,
}

impl IconFactory {
    pub fn new(sprite_url: impl Into<String>) -> Self {
        Self {
            sprite_url: sprite_url.into(),
        }
    }

    pub fn create(&self, code: &str) -> IconRef {
        let target = format!("{}#{}", self.sprite_url, code);
        IconRef {
            href: target.clone(),
            xlink_href: target,
        }
    }
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
