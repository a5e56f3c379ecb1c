mod support;

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use perfume_core::{
    bind_media_panel, dom_ids, ChangeHandler, Display, Dropdown, ImageEvent, ImageHandler,
    ImageSource, PanelConfig, PanelPage, PanelView, PerfumeError, PerfumeOption,
};
use support::{RecordingSurface, Rendered};

struct FakeDropdown {
    options: Vec<PerfumeOption>,
    selected: Rc<Cell<Option<usize>>>,
}

impl Dropdown for FakeDropdown {
    fn option_values(&self) -> Vec<String> {
        self.options.iter().map(|option| option.value.clone()).collect()
    }

    fn select_index(&self, index: usize) {
        self.selected.set(Some(index));
    }

    fn selected(&self) -> Option<PerfumeOption> {
        self.selected
            .get()
            .and_then(|index| self.options.get(index).cloned())
    }
}

/// Page with optional elements whose listeners are fired by hand.
#[derive(Default)]
struct FakePage {
    default_image: Option<String>,
    surface: Option<RecordingSurface>,
    options: Option<Vec<PerfumeOption>>,
    selected: Rc<Cell<Option<usize>>>,
    image_handler: RefCell<Option<ImageHandler<Infallible>>>,
    change_handler: RefCell<Option<ChangeHandler<Infallible>>>,
    dropdown_lookups: Cell<usize>,
}

impl FakePage {
    fn with_options(options: Vec<PerfumeOption>) -> Self {
        Self {
            surface: Some(RecordingSurface::new()),
            options: Some(options),
            // Browsers select the first option by default.
            selected: Rc::new(Cell::new(Some(0))),
            ..Self::default()
        }
    }

    fn rendered(&self) -> Rendered {
        self.surface
            .as_ref()
            .expect("page has an image")
            .snapshot()
    }

    fn fire_image(&self, event: ImageEvent) {
        let handler = self.image_handler.borrow();
        let handler = handler.as_ref().expect("image handler bound");
        handler(event).expect("recording surface never fails");
    }

    fn choose(&self, index: usize) -> PanelView {
        self.selected.set(Some(index));
        let handler = self.change_handler.borrow();
        let handler = handler.as_ref().expect("change handler bound");
        handler().expect("recording surface never fails")
    }
}

impl PanelPage for FakePage {
    type Surface = RecordingSurface;
    type Dropdown = FakeDropdown;

    fn default_image(&self) -> Option<String> {
        self.default_image.clone()
    }

    fn image(&self) -> Result<RecordingSurface, PerfumeError> {
        self.surface
            .clone()
            .ok_or(PerfumeError::MissingElement { id: dom_ids::IMAGE })
    }

    fn dropdown(&self) -> Result<FakeDropdown, PerfumeError> {
        self.dropdown_lookups.set(self.dropdown_lookups.get() + 1);
        let options = self
            .options
            .clone()
            .ok_or(PerfumeError::MissingElement { id: dom_ids::SELECT })?;
        Ok(FakeDropdown {
            options,
            selected: Rc::clone(&self.selected),
        })
    }

    fn on_image_event(&self, _surface: &RecordingSurface, handler: ImageHandler<Infallible>) {
        *self.image_handler.borrow_mut() = Some(handler);
    }

    fn on_change(&self, _dropdown: &FakeDropdown, handler: ChangeHandler<Infallible>) {
        *self.change_handler.borrow_mut() = Some(handler);
    }
}

fn prompt() -> PerfumeOption {
    PerfumeOption::default()
}

fn perfume(value: &str, image: &str, brand: &str, name: &str, capacity: &str) -> PerfumeOption {
    PerfumeOption {
        value: value.to_string(),
        image: Some(image.to_string()),
        brand: Some(brand.to_string()),
        name: Some(name.to_string()),
        capacity: Some(capacity.to_string()),
    }
}

fn chanel() -> PerfumeOption {
    perfume("3", "/media/chanel-5.jpg", "Chanel", "No 5", "100")
}

fn dior() -> PerfumeOption {
    perfume("8", "None", "Dior", "Sauvage", "60")
}

#[test]
fn single_perfume_is_selected_and_rendered_on_bind() {
    let mut page = FakePage::with_options(vec![prompt(), chanel()]);
    page.default_image = Some("/static/images/mascot.png".to_string());

    let binding = bind_media_panel(&page, PanelConfig::default()).expect("panel binds");

    let view = binding
        .auto_selected
        .expect("single perfume is auto-selected")
        .expect("recording surface never fails");
    assert_eq!(view.source, ImageSource::Selected);
    assert_eq!(page.selected.get(), Some(1));

    let rendered = page.rendered();
    assert_eq!(rendered.src, "/media/chanel-5.jpg");
    assert_eq!(rendered.title, "Chanel");
    assert_eq!(rendered.subtitle, "No 5 (100 ml)");
}

#[test]
fn several_perfumes_keep_the_page_untouched_until_changed() {
    let page = FakePage::with_options(vec![prompt(), chanel(), dior()]);

    let binding = bind_media_panel(&page, PanelConfig::default()).expect("panel binds");

    assert!(binding.auto_selected.is_none());
    assert_eq!(page.selected.get(), Some(0));
    assert_eq!(page.rendered(), Rendered::default());

    let view = page.choose(2);
    assert_eq!(view.source, ImageSource::Generated);
    assert_eq!(page.rendered().title, "Dior");
    assert_eq!(
        page.rendered().src,
        "https://placehold.co/400x400/e0e7ff/4f46e5?text=D"
    );
}

#[test]
fn default_image_attribute_replaces_configured_default() {
    let mut page = FakePage::with_options(vec![prompt(), chanel(), dior()]);
    page.default_image = Some("/static/images/mascot.png".to_string());
    let config = PanelConfig::default().with_default_image("/static/fallback.png");

    let binding = bind_media_panel(&page, config).expect("panel binds");

    assert_eq!(
        binding.panel.config().default_image,
        "/static/images/mascot.png"
    );
}

#[test]
fn missing_attribute_leaves_the_empty_default_image() {
    let page = FakePage::with_options(vec![prompt(), chanel(), dior()]);

    let binding = bind_media_panel(&page, PanelConfig::default()).expect("panel binds");
    assert_eq!(binding.panel.config().default_image, "");

    page.choose(1);
    let view = page.choose(0);
    assert_eq!(view.source, ImageSource::Default);
    assert_eq!(page.rendered().src, "");
    assert_eq!(page.rendered().title, "Our Mascot");
}

#[test]
fn missing_attribute_keeps_the_configured_default_image() {
    let page = FakePage::with_options(vec![prompt(), chanel(), dior()]);
    let config = PanelConfig::default().with_default_image("/static/fallback.png");

    let binding = bind_media_panel(&page, config).expect("panel binds");
    assert_eq!(binding.panel.config().default_image, "/static/fallback.png");

    page.choose(1);
    page.choose(0);
    assert_eq!(page.rendered().src, "/static/fallback.png");
    assert_eq!(page.rendered().alt, "Mascot");
}

#[test]
fn missing_select_still_binds_the_image_handlers() {
    let page = FakePage {
        surface: Some(RecordingSurface::new()),
        ..FakePage::default()
    };

    let result = bind_media_panel(&page, PanelConfig::default());
    assert!(matches!(
        result,
        Err(PerfumeError::MissingElement { id }) if id == dom_ids::SELECT
    ));
    assert!(page.change_handler.borrow().is_none());

    page.fire_image(ImageEvent::Failed);
    assert_eq!(page.rendered().image_display, Display::Hidden);
    assert_eq!(page.rendered().placeholder_display, Display::Flex);

    page.fire_image(ImageEvent::Loaded);
    assert_eq!(page.rendered().image_display, Display::Block);
    assert_eq!(page.rendered().placeholder_display, Display::Hidden);
}

#[test]
fn missing_image_binds_nothing() {
    let page = FakePage {
        options: Some(vec![prompt(), chanel()]),
        ..FakePage::default()
    };

    let result = bind_media_panel(&page, PanelConfig::default());
    assert!(matches!(
        result,
        Err(PerfumeError::MissingElement { id }) if id == dom_ids::IMAGE
    ));
    assert!(page.image_handler.borrow().is_none());
    assert!(page.change_handler.borrow().is_none());
    assert_eq!(page.dropdown_lookups.get(), 0);
}

#[test]
fn image_error_after_selection_keeps_the_caption() {
    let page = FakePage::with_options(vec![prompt(), chanel()]);
    bind_media_panel(&page, PanelConfig::default()).expect("panel binds");

    page.fire_image(ImageEvent::Failed);

    let rendered = page.rendered();
    assert_eq!(rendered.image_display, Display::Hidden);
    assert_eq!(rendered.placeholder_display, Display::Flex);
    assert_eq!(rendered.title, "Chanel");
}
