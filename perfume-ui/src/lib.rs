//! DOM behaviour of the perfume pages: flash alert auto-dismiss and the
//! selection-driven media panel.

#[cfg(target_arch = "wasm32")]
mod alerts;
#[cfg(target_arch = "wasm32")]
mod panel;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use perfume_core::{DismissConfig, PanelConfig, PartialDismissConfig, PartialPanelConfig};
    use serde::de::DeserializeOwned;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Window};

    /// Runs both behaviours with default settings once the document is ready.
    #[cfg(feature = "autostart")]
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let document = match document() {
            Ok(document) => document,
            Err(err) => {
                console::error_1(&err);
                return;
            }
        };

        when_ready(&document, |document| {
            crate::alerts::dismiss_alerts(document, &DismissConfig::default());
            if let Err(err) = crate::panel::bind_media_panel(document, PanelConfig::default()) {
                console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });
    }

    /// Schedule the fade-out of every `.alert` currently in the document.
    /// Returns the number of alerts scheduled.
    #[wasm_bindgen]
    pub fn init_alert_dismiss(config: Option<JsValue>) -> Result<u32, JsValue> {
        let document = document()?;
        let cfg: DismissConfig = read_config::<PartialDismissConfig, _>(config)?;
        let scheduled = crate::alerts::dismiss_alerts(&document, &cfg);
        Ok(u32::try_from(scheduled).unwrap_or(u32::MAX))
    }

    /// Bind the media panel to `#perfume-select` and `#perfume-image`.
    #[wasm_bindgen]
    pub fn init_media_panel(config: Option<JsValue>) -> Result<(), JsValue> {
        let document = document()?;
        let cfg: PanelConfig = read_config::<PartialPanelConfig, _>(config)?;
        crate::panel::bind_media_panel(&document, cfg)
            .map_err(|err| JsValue::from_str(&format!("Perfume error: {err}")))
    }

    fn document() -> Result<Document, JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        window
            .document()
            .ok_or_else(|| JsValue::from_str("Cannot access document"))
    }

    /// Run `init` now, or on `DOMContentLoaded` while the document is still loading.
    #[cfg(feature = "autostart")]
    fn when_ready<F>(document: &Document, init: F)
    where
        F: FnOnce(&Document) + 'static,
    {
        use gloo_events::EventListener;

        if document.ready_state() == "loading" {
            let target = document.clone();
            EventListener::once(document, "DOMContentLoaded", move |_| init(&target)).forget();
        } else {
            init(document);
        }
    }

    fn read_config<P, C>(config: Option<JsValue>) -> Result<C, JsValue>
    where
        P: DeserializeOwned + Into<C>,
        C: Default,
    {
        match config {
            Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
                let partial: P = from_value(js_cfg)
                    .map_err(|err| JsValue::from_str(&format!("Cannot read config: {err}")))?;
                Ok(partial.into())
            }
            _ => Ok(C::default()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::{init_alert_dismiss, init_media_panel};

#[cfg(not(target_arch = "wasm32"))]
pub fn init_alert_dismiss(_: Option<wasm_bindgen::JsValue>) -> Result<u32, wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "perfume-ui only supports the wasm32 target",
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_media_panel(_: Option<wasm_bindgen::JsValue>) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "perfume-ui only supports the wasm32 target",
    ))
}
