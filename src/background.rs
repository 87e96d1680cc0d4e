//! Responsive page background chosen from `data-bg*` attributes on `<body>`.

use crate::escape::css_url;

/// Candidate sources read from `data-bg-desktop`, `data-bg-mobile` and
/// `data-bg`. Empty attributes count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundSources {
    pub desktop: Option<String>,
    pub mobile: Option<String>,
    pub fallback: Option<String>,
}

impl BackgroundSources {
    pub fn new(desktop: Option<String>, mobile: Option<String>, fallback: Option<String>) -> Self {
        let keep = |s: Option<String>| s.filter(|s| !s.is_empty());
        Self {
            desktop: keep(desktop),
            mobile: keep(mobile),
            fallback: keep(fallback),
        }
    }

    /// Source for the current viewport: the matching variant, then the
    /// other variant, then the generic fallback.
    pub fn pick(&self, is_mobile: bool) -> Option<&str> {
        let (first, second) = if is_mobile {
            (&self.mobile, &self.desktop)
        } else {
            (&self.desktop, &self.mobile)
        };
        first
            .as_deref()
            .or(second.as_deref())
            .or(self.fallback.as_deref())
    }
}

/// Whether the layer still needs a background. A stylesheet that already
/// set one wins.
pub fn needs_background(computed_background_image: &str) -> bool {
    let value = computed_background_image.trim();
    value.is_empty() || value == "none"
}

/// Inline style properties applied to the `.bg` layer.
pub fn background_style(src: &str) -> [(&'static str, String); 4] {
    [
        ("background-image", css_url(src)),
        ("background-position", "top center".to_string()),
        ("background-size", "cover".to_string()),
        ("background-repeat", "no-repeat".to_string()),
    ]
}
