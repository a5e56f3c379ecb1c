#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use perfume_core::{Display, PanelSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub image_display: Display,
    pub placeholder_display: Display,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for Rendered {
    fn default() -> Self {
        Self {
            image_display: Display::Block,
            placeholder_display: Display::Hidden,
            src: String::new(),
            alt: String::new(),
            title: String::new(),
            subtitle: String::new(),
        }
    }
}

/// In-memory stand-in for the panel elements. Clones share state.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    state: Rc<RefCell<Rendered>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Rendered {
        self.state.borrow().clone()
    }
}

impl PanelSurface for RecordingSurface {
    type Error = Infallible;

    fn set_image_display(&self, display: Display) -> Result<(), Infallible> {
        self.state.borrow_mut().image_display = display;
        Ok(())
    }

    fn set_placeholder_display(&self, display: Display) -> Result<(), Infallible> {
        self.state.borrow_mut().placeholder_display = display;
        Ok(())
    }

    fn set_image(&self, src: &str, alt: &str) -> Result<(), Infallible> {
        let mut state = self.state.borrow_mut();
        state.src = src.to_string();
        state.alt = alt.to_string();
        Ok(())
    }

    fn set_title(&self, text: &str) -> Result<(), Infallible> {
        self.state.borrow_mut().title = text.to_string();
        Ok(())
    }

    fn set_subtitle(&self, text: &str) -> Result<(), Infallible> {
        self.state.borrow_mut().subtitle = text.to_string();
        Ok(())
    }
}
