//! Tunable values for the media panel and the alert dismissal.

use serde::{Deserialize, Serialize};

/// Settings used when computing what the media panel shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelConfig {
    /// Image shown while the empty option is selected. Captured from the
    /// container's `data-default-image` at initialization.
    pub default_image: String,
    pub default_alt: String,
    pub default_title: String,
    pub default_subtitle: String,
    /// Base URL of the image service used when an option has no picture.
    pub placeholder_service: String,
    /// Value the server renders for a perfume without an image.
    pub missing_image_sentinel: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_image: String::new(),
            default_alt: "Mascot".to_string(),
            default_title: "Our Mascot".to_string(),
            default_subtitle: "Select a perfume to see its image".to_string(),
            placeholder_service: "https://placehold.co/400x400/e0e7ff/4f46e5".to_string(),
            missing_image_sentinel: "None".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn with_default_image(mut self, default_image: impl Into<String>) -> Self {
        self.default_image = default_image.into();
        self
    }
}

/// Timing and styling of the alert fade-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DismissConfig {
    /// Delay (ms) between page-ready and the start of the fade.
    pub fade_delay_ms: u32,
    /// Delay (ms) between the start of the fade and the removal.
    pub removal_delay_ms: u32,
    /// Classes added to an alert to trigger the fade transition.
    pub fade_classes: Vec<String>,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 3000,
            removal_delay_ms: 500,
            fade_classes: vec![
                "opacity-0".to_string(),
                "transition-opacity".to_string(),
                "duration-500".to_string(),
            ],
        }
    }
}

impl DismissConfig {
    /// Time (ms from page-ready) at which an alert leaves the document.
    pub fn removal_at_ms(&self) -> u64 {
        u64::from(self.fade_delay_ms) + u64::from(self.removal_delay_ms)
    }
}

/// Panel overrides as sent from JavaScript; absent fields keep the default.
#[derive(Debug, Default, Deserialize)]
pub struct PartialPanelConfig {
    #[serde(default)]
    pub default_image: Option<String>,
    #[serde(default)]
    pub default_alt: Option<String>,
    #[serde(default)]
    pub default_title: Option<String>,
    #[serde(default)]
    pub default_subtitle: Option<String>,
    #[serde(default)]
    pub placeholder_service: Option<String>,
    #[serde(default)]
    pub missing_image_sentinel: Option<String>,
}

impl From<PartialPanelConfig> for PanelConfig {
    fn from(cfg: PartialPanelConfig) -> Self {
        let base = PanelConfig::default();
        Self {
            default_image: cfg.default_image.unwrap_or(base.default_image),
            default_alt: cfg.default_alt.unwrap_or(base.default_alt),
            default_title: cfg.default_title.unwrap_or(base.default_title),
            default_subtitle: cfg.default_subtitle.unwrap_or(base.default_subtitle),
            placeholder_service: cfg
                .placeholder_service
                .unwrap_or(base.placeholder_service),
            missing_image_sentinel: cfg
                .missing_image_sentinel
                .unwrap_or(base.missing_image_sentinel),
        }
    }
}

/// Dismissal overrides as sent from JavaScript.
#[derive(Debug, Default, Deserialize)]
pub struct PartialDismissConfig {
    #[serde(default)]
    pub fade_delay_ms: Option<u32>,
    #[serde(default)]
    pub removal_delay_ms: Option<u32>,
    #[serde(default)]
    pub fade_classes: Option<Vec<String>>,
}

impl From<PartialDismissConfig> for DismissConfig {
    fn from(cfg: PartialDismissConfig) -> Self {
        let mut base = DismissConfig::default();
        if let Some(delay) = cfg.fade_delay_ms {
            base.fade_delay_ms = delay;
        }
        if let Some(delay) = cfg.removal_delay_ms {
            base.removal_delay_ms = delay;
        }
        if let Some(classes) = cfg.fade_classes {
            base.fade_classes = classes;
        }
        base
    }
}
