//! Media panel: what the image, caption and placeholder show for a selection.

use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;
use crate::entities::decode_html_entities;
use crate::uri::encode_uri_component;

/// Attributes of one `<option>` of the perfume dropdown, as rendered by the
/// server. Missing attributes are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerfumeOption {
    pub value: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<String>,
}

impl PerfumeOption {
    /// The empty-valued option stands for "no selection".
    pub fn is_selection(&self) -> bool {
        !self.value.is_empty()
    }
}

/// CSS `display` values the panel toggles between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    Block,
    Flex,
    Hidden,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::Hidden => "none",
        }
    }
}

/// Display of the image element and of the dedicated placeholder element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visibility {
    pub image: Display,
    pub placeholder: Display,
}

/// Which branch produced the image source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// The option's own `data-image`.
    Selected,
    /// Image service URL built from the brand initial.
    Generated,
    /// The default image captured at initialization.
    Default,
}

/// Everything the panel displays after an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelView {
    pub source: ImageSource,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub subtitle: String,
}

impl PanelView {
    /// Compute the panel for the selected option. `None` (nothing selected)
    /// and the empty-valued option both reset to the default view.
    pub fn for_selection(option: Option<&PerfumeOption>, config: &PanelConfig) -> Self {
        match option.filter(|option| option.is_selection()) {
            Some(option) => Self::for_perfume(option, config),
            None => Self::default_view(config),
        }
    }

    pub fn default_view(config: &PanelConfig) -> Self {
        Self {
            source: ImageSource::Default,
            image_src: config.default_image.clone(),
            image_alt: config.default_alt.clone(),
            title: config.default_title.clone(),
            subtitle: config.default_subtitle.clone(),
        }
    }

    fn for_perfume(option: &PerfumeOption, config: &PanelConfig) -> Self {
        let brand = decode_html_entities(option.brand.as_deref().unwrap_or_default());
        let name = decode_html_entities(option.name.as_deref().unwrap_or_default());
        let capacity = option.capacity.as_deref().unwrap_or_default();

        let image = option
            .image
            .as_deref()
            .filter(|image| !image.is_empty() && *image != config.missing_image_sentinel);

        let (source, image_src, image_alt) = match image {
            Some(image) => (
                ImageSource::Selected,
                image.to_string(),
                format!("{brand} - {name}"),
            ),
            None => (
                ImageSource::Generated,
                generated_image_url(&config.placeholder_service, &brand),
                brand.clone(),
            ),
        };

        Self {
            source,
            image_src,
            image_alt,
            subtitle: format!("{name} ({capacity} ml)"),
            title: brand,
        }
    }

    /// Every update shows the image element and hides the placeholder, the
    /// generated URL included.
    pub fn visibility(&self) -> Visibility {
        Visibility {
            image: Display::Block,
            placeholder: Display::Hidden,
        }
    }

    pub fn apply<S: PanelSurface + ?Sized>(&self, surface: &S) -> Result<(), S::Error> {
        let visibility = self.visibility();
        surface.set_image_display(visibility.image)?;
        surface.set_placeholder_display(visibility.placeholder)?;
        surface.set_image(&self.image_src, &self.image_alt)?;
        surface.set_title(&self.title)?;
        surface.set_subtitle(&self.subtitle)
    }
}

/// URL of the image service with the brand initial as text.
pub fn generated_image_url(service: &str, brand: &str) -> String {
    let initial = brand.chars().next().map(String::from).unwrap_or_default();
    format!("{service}?text={}", encode_uri_component(&initial))
}

/// Outcome of loading the image element's current source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
    Loaded,
    Failed,
}

impl ImageEvent {
    pub fn visibility(self) -> Visibility {
        match self {
            ImageEvent::Loaded => Visibility {
                image: Display::Block,
                placeholder: Display::Hidden,
            },
            ImageEvent::Failed => Visibility {
                image: Display::Hidden,
                placeholder: Display::Flex,
            },
        }
    }

    pub fn apply<S: PanelSurface + ?Sized>(self, surface: &S) -> Result<(), S::Error> {
        let visibility = self.visibility();
        surface.set_image_display(visibility.image)?;
        surface.set_placeholder_display(visibility.placeholder)
    }
}

/// The elements a panel update writes to.
///
/// Implementations treat the placeholder, title and subtitle as optional
/// and skip them when they are not on the page.
pub trait PanelSurface {
    type Error;

    fn set_image_display(&self, display: Display) -> Result<(), Self::Error>;
    fn set_placeholder_display(&self, display: Display) -> Result<(), Self::Error>;
    fn set_image(&self, src: &str, alt: &str) -> Result<(), Self::Error>;
    fn set_title(&self, text: &str) -> Result<(), Self::Error>;
    fn set_subtitle(&self, text: &str) -> Result<(), Self::Error>;
}

/// Index of the only option with a non-empty value, if there is exactly one.
pub fn auto_select_index<I, S>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = None;
    for (index, value) in values.into_iter().enumerate() {
        if value.as_ref().is_empty() {
            continue;
        }
        if found.is_some() {
            return None;
        }
        found = Some(index);
    }
    found
}
