use std::rc::Rc;

use gloo_events::EventListener;
use perfume_core::{
    dom_ids, ChangeHandler, Display, Dropdown, ImageEvent, ImageHandler, ImageSource, PanelConfig,
    PanelPage, PanelSurface, PanelView, PerfumeError, PerfumeOption,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, HtmlElement, HtmlImageElement, HtmlOptionElement, HtmlSelectElement,
};

fn dom_error(err: JsValue) -> PerfumeError {
    PerfumeError::Dom(format!("{err:?}"))
}

fn log_error(err: &PerfumeError) {
    console::error_1(&JsValue::from_str(&err.to_string()));
}

struct DomPage {
    document: Document,
}

/// Panel elements looked up in the live document. Only the image is required.
struct DomPanel {
    document: Document,
    image: HtmlImageElement,
}

impl DomPanel {
    fn optional(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }
}

impl PanelSurface for DomPanel {
    type Error = PerfumeError;

    fn set_image_display(&self, display: Display) -> Result<(), PerfumeError> {
        self.image
            .style()
            .set_property("display", display.as_css())
            .map_err(dom_error)
    }

    fn set_placeholder_display(&self, display: Display) -> Result<(), PerfumeError> {
        match self.optional(dom_ids::PLACEHOLDER) {
            Some(placeholder) => placeholder
                .style()
                .set_property("display", display.as_css())
                .map_err(dom_error),
            None => Ok(()),
        }
    }

    fn set_image(&self, src: &str, alt: &str) -> Result<(), PerfumeError> {
        self.image.set_src(src);
        self.image.set_alt(alt);
        Ok(())
    }

    fn set_title(&self, text: &str) -> Result<(), PerfumeError> {
        if let Some(title) = self.document.get_element_by_id(dom_ids::TITLE) {
            title.set_text_content(Some(text));
        }
        Ok(())
    }

    fn set_subtitle(&self, text: &str) -> Result<(), PerfumeError> {
        if let Some(subtitle) = self.document.get_element_by_id(dom_ids::SUBTITLE) {
            subtitle.set_text_content(Some(text));
        }
        Ok(())
    }
}

struct DomDropdown {
    select: HtmlSelectElement,
}

impl DomDropdown {
    fn options(&self) -> impl Iterator<Item = HtmlOptionElement> + '_ {
        (0..self.select.length())
            .filter_map(move |index| self.select.item(index))
            .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
    }
}

impl Dropdown for DomDropdown {
    fn option_values(&self) -> Vec<String> {
        self.options().map(|option| option.value()).collect()
    }

    fn select_index(&self, index: usize) {
        self.select.set_selected_index(i32::try_from(index).unwrap_or(-1));
    }

    fn selected(&self) -> Option<PerfumeOption> {
        let index = u32::try_from(self.select.selected_index()).ok()?;
        let option = self
            .select
            .item(index)?
            .dyn_into::<HtmlOptionElement>()
            .ok()?;

        Some(PerfumeOption {
            value: option.value(),
            image: option.get_attribute(dom_ids::DATA_IMAGE),
            brand: option.get_attribute(dom_ids::DATA_BRAND),
            name: option.get_attribute(dom_ids::DATA_NAME),
            capacity: option.get_attribute(dom_ids::DATA_CAPACITY),
        })
    }
}

impl PanelPage for DomPage {
    type Surface = DomPanel;
    type Dropdown = DomDropdown;

    fn default_image(&self) -> Option<String> {
        let default_image = self
            .document
            .get_element_by_id(dom_ids::IMAGE_CONTAINER)?
            .get_attribute(dom_ids::DEFAULT_IMAGE_ATTR)?;
        console::log_1(&JsValue::from_str(&format!(
            "Default image path: {default_image}"
        )));
        Some(default_image)
    }

    fn image(&self) -> Result<DomPanel, PerfumeError> {
        let image = self
            .document
            .get_element_by_id(dom_ids::IMAGE)
            .ok_or(PerfumeError::MissingElement { id: dom_ids::IMAGE })?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| PerfumeError::UnexpectedElement {
                id: dom_ids::IMAGE,
                expected: "<img> element",
            })?;
        Ok(DomPanel {
            document: self.document.clone(),
            image,
        })
    }

    fn dropdown(&self) -> Result<DomDropdown, PerfumeError> {
        let select = self
            .document
            .get_element_by_id(dom_ids::SELECT)
            .ok_or(PerfumeError::MissingElement { id: dom_ids::SELECT })?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| PerfumeError::UnexpectedElement {
                id: dom_ids::SELECT,
                expected: "<select> element",
            })?;
        Ok(DomDropdown { select })
    }

    fn on_image_event(&self, surface: &DomPanel, handler: ImageHandler<PerfumeError>) {
        let handler: Rc<dyn Fn(ImageEvent) -> Result<(), PerfumeError>> = Rc::from(handler);
        for (event_type, event) in [("load", ImageEvent::Loaded), ("error", ImageEvent::Failed)] {
            let handler = Rc::clone(&handler);
            let image = surface.image.clone();
            EventListener::new(&surface.image, event_type, move |_| {
                let src = image.src();
                match event {
                    ImageEvent::Loaded => console::log_1(&JsValue::from_str(&format!(
                        "Image loaded successfully: {src}"
                    ))),
                    ImageEvent::Failed => console::error_1(&JsValue::from_str(&format!(
                        "Image failed to load: {src}"
                    ))),
                }
                if let Err(err) = handler(event) {
                    log_error(&err);
                }
            })
            .forget();
        }
    }

    fn on_change(&self, dropdown: &DomDropdown, handler: ChangeHandler<PerfumeError>) {
        EventListener::new(&dropdown.select, "change", move |_| log_update(&handler())).forget();
    }
}

fn log_update(result: &Result<PanelView, PerfumeError>) {
    match result {
        Ok(view) => {
            let message = match view.source {
                ImageSource::Default => "Resetting to default image".to_string(),
                ImageSource::Selected | ImageSource::Generated => format!(
                    "Selected perfume: {} | {} | {}",
                    view.title, view.subtitle, view.image_src
                ),
            };
            console::log_1(&JsValue::from_str(&message));
        }
        Err(err) => log_error(err),
    }
}

/// Wire the image load/error handlers and the dropdown, then auto-select
/// the only perfume when there is exactly one.
pub(crate) fn bind_media_panel(
    document: &Document,
    config: PanelConfig,
) -> Result<(), PerfumeError> {
    let page = DomPage {
        document: document.clone(),
    };
    let binding = perfume_core::bind_media_panel(&page, config)?;
    if let Some(result) = &binding.auto_selected {
        log_update(result);
    }
    Ok(())
}
