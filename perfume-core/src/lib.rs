//! Core logic for the perfume showcase page: media panel state and alert dismissal.

pub mod alert;
pub mod config;
pub mod entities;
pub mod page;
pub mod panel;
pub mod uri;

pub use alert::{schedule_dismissal, Dismissible, Scheduler};
pub use config::{DismissConfig, PanelConfig, PartialDismissConfig, PartialPanelConfig};
pub use entities::decode_html_entities;
pub use page::{
    bind_media_panel, ChangeHandler, Dropdown, ImageHandler, MediaPanel, PanelBinding, PanelPage,
};
pub use panel::{
    auto_select_index, generated_image_url, Display, ImageEvent, ImageSource, PanelSurface,
    PanelView, PerfumeOption, Visibility,
};
pub use uri::encode_uri_component;

/// Element ids and selectors making up the page contract.
pub mod dom_ids {
    pub const ALERT_SELECTOR: &str = ".alert";
    pub const IMAGE_CONTAINER: &str = "perfume-image-container";
    pub const DEFAULT_IMAGE_ATTR: &str = "data-default-image";
    pub const IMAGE: &str = "perfume-image";
    pub const PLACEHOLDER: &str = "image-placeholder";
    pub const TITLE: &str = "perfume-title";
    pub const SUBTITLE: &str = "perfume-subtitle";
    pub const SELECT: &str = "perfume-select";
    pub const DATA_IMAGE: &str = "data-image";
    pub const DATA_BRAND: &str = "data-brand";
    pub const DATA_NAME: &str = "data-name";
    pub const DATA_CAPACITY: &str = "data-capacity";
}

/// Errors shared by every crate of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum PerfumeError {
    #[error("element #{id} not found")]
    MissingElement { id: &'static str },
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement {
        id: &'static str,
        expected: &'static str,
    },
    #[error("input is missing required data")]
    MissingData,
    #[error("could not parse data: {0}")]
    Parse(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
