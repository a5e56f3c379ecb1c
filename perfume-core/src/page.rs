//! Binding the media panel to a page: default image capture, image
//! load/error handlers, the dropdown change handler and auto-selection.

use std::rc::Rc;

use crate::config::PanelConfig;
use crate::panel::{auto_select_index, ImageEvent, PanelSurface, PanelView, PerfumeOption};
use crate::PerfumeError;

/// The perfume `<select>`.
pub trait Dropdown {
    /// Values of every option, in document order.
    fn option_values(&self) -> Vec<String>;
    fn select_index(&self, index: usize);
    /// The currently selected option, `None` when nothing is selected.
    fn selected(&self) -> Option<PerfumeOption>;
}

pub type ImageHandler<E> = Box<dyn Fn(ImageEvent) -> Result<(), E>>;
pub type ChangeHandler<E> = Box<dyn Fn() -> Result<PanelView, E>>;

/// Element lookups and listener registration for one page.
pub trait PanelPage {
    type Surface: PanelSurface + 'static;
    type Dropdown: Dropdown + 'static;

    /// `data-default-image` of the image container. `None` when the
    /// container or the attribute is missing.
    fn default_image(&self) -> Option<String>;
    fn image(&self) -> Result<Self::Surface, PerfumeError>;
    fn dropdown(&self) -> Result<Self::Dropdown, PerfumeError>;
    /// Runs `handler` on every load and error of the image.
    fn on_image_event(
        &self,
        surface: &Self::Surface,
        handler: ImageHandler<<Self::Surface as PanelSurface>::Error>,
    );
    /// Runs `handler` on every change of the dropdown.
    fn on_change(
        &self,
        dropdown: &Self::Dropdown,
        handler: ChangeHandler<<Self::Surface as PanelSurface>::Error>,
    );
}

/// A bound panel: the dropdown it follows and the surface it writes to.
pub struct MediaPanel<S, D> {
    config: PanelConfig,
    surface: Rc<S>,
    dropdown: D,
}

impl<S: PanelSurface, D: Dropdown> MediaPanel<S, D> {
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Render the dropdown's current selection.
    pub fn refresh(&self) -> Result<PanelView, S::Error> {
        let view = PanelView::for_selection(self.dropdown.selected().as_ref(), &self.config);
        view.apply(&*self.surface)?;
        Ok(view)
    }
}

pub struct PanelBinding<S: PanelSurface, D> {
    pub panel: Rc<MediaPanel<S, D>>,
    /// Outcome of rendering the only perfume, when there was exactly one.
    pub auto_selected: Option<Result<PanelView, S::Error>>,
}

/// Bind the panel to `page`.
///
/// The image handlers are registered before the dropdown is looked up, so a
/// page without a dropdown still toggles the placeholder on image errors.
/// `config.default_image` is replaced only when the page carries the
/// attribute.
pub fn bind_media_panel<P: PanelPage>(
    page: &P,
    mut config: PanelConfig,
) -> Result<PanelBinding<P::Surface, P::Dropdown>, PerfumeError> {
    if let Some(default_image) = page.default_image() {
        config = config.with_default_image(default_image);
    }

    let surface = Rc::new(page.image()?);
    let target = Rc::clone(&surface);
    page.on_image_event(&surface, Box::new(move |event| event.apply(&*target)));

    let dropdown = page.dropdown()?;
    let values = dropdown.option_values();
    let panel = Rc::new(MediaPanel {
        config,
        surface,
        dropdown,
    });

    let target = Rc::clone(&panel);
    page.on_change(&panel.dropdown, Box::new(move || target.refresh()));

    let auto_selected = auto_select_index(&values).map(|index| {
        panel.dropdown.select_index(index);
        panel.refresh()
    });

    Ok(PanelBinding {
        panel,
        auto_selected,
    })
}
