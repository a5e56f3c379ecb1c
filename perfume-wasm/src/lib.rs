//! Framework-neutral WASM <-> JavaScript bridge over the panel and catalog logic.

use perfume_core::{
    decode_html_entities, PanelConfig, PanelView, PartialPanelConfig, PerfumeError, PerfumeOption,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Compute what the media panel shows for `option` (a `PerfumeOption`-shaped
/// object, or `null` for no selection).
#[wasm_bindgen]
pub fn preview_selection(option: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let option: Option<PerfumeOption> = from_value(option)
        .map_err(|err| JsValue::from_str(&format!("Cannot read option: {err}")))?;
    let cfg = read_panel_config(config)?;

    let view = PanelView::for_selection(option.as_ref(), &cfg);
    to_value(&view).map_err(|err| JsValue::from_str(&format!("Cannot serialize view: {err}")))
}

#[wasm_bindgen]
pub fn decode_html(text: &str) -> String {
    decode_html_entities(text)
}

/// Render the `#perfume-select` markup for a `{ perfumes: [...] }` catalog.
#[wasm_bindgen]
pub fn render_catalog_select(
    catalog: JsValue,
    prompt: Option<String>,
    config: Option<JsValue>,
) -> Result<String, JsValue> {
    let catalog_value = from_value::<serde_json::Value>(catalog)
        .map_err(|err| JsValue::from_str(&format!("Cannot read catalog JSON: {err}")))?;
    let cfg = read_panel_config(config)?;

    let catalog = perfume_catalog::parse_catalog_value(&catalog_value)
        .map_err(|err| JsValue::from_str(&format_perfume_error(err)))?;

    let prompt = prompt.unwrap_or_else(|| "-- Select a perfume --".to_string());
    Ok(catalog.render_select(&prompt, &cfg))
}

fn read_panel_config(config: Option<JsValue>) -> Result<PanelConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: PartialPanelConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Cannot read config: {err}")))?;
            Ok(PanelConfig::from(cfg))
        }
        _ => Ok(PanelConfig::default()),
    }
}

fn format_perfume_error(err: PerfumeError) -> String {
    format!("Perfume error: {err}")
}
