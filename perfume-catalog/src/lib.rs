//! Perfume catalog JSON to the dropdown markup consumed by the media panel.

use perfume_core::{auto_select_index, PanelConfig, PerfumeError, PerfumeOption};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A perfume as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerfumeRecord {
    pub id: u64,
    pub brand: String,
    pub name: String,
    pub capacity_ml: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PerfumeRecord {
    /// Human readable label, e.g. `Chanel - No 5 (100ml)`.
    pub fn label(&self) -> String {
        format!("{} - {} ({}ml)", self.brand, self.name, self.capacity_ml)
    }

    /// Attribute values of this perfume's `<option>` as the page reads them.
    ///
    /// Brand and name stay entity-escaped inside the attribute value; a
    /// perfume without an image carries the configured sentinel.
    pub fn to_option(&self, config: &PanelConfig) -> PerfumeOption {
        let image = self
            .image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| config.missing_image_sentinel.clone());

        PerfumeOption {
            value: self.id.to_string(),
            image: Some(image),
            brand: Some(escape_html(&self.brand)),
            name: Some(escape_html(&self.name)),
            capacity: Some(self.capacity_ml.to_string()),
        }
    }
}

/// Perfumes in dropdown order (brand, then name).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Catalog {
    perfumes: Vec<PerfumeRecord>,
}

impl Catalog {
    pub fn from_records(mut perfumes: Vec<PerfumeRecord>) -> Self {
        perfumes.sort_by(|a, b| (&a.brand, &a.name).cmp(&(&b.brand, &b.name)));
        Self { perfumes }
    }

    pub fn perfumes(&self) -> &[PerfumeRecord] {
        &self.perfumes
    }

    pub fn find(&self, id: u64) -> Option<&PerfumeRecord> {
        self.perfumes.iter().find(|perfume| perfume.id == id)
    }

    /// Every option of the dropdown, the empty "no selection" entry first.
    pub fn options(&self, config: &PanelConfig) -> Vec<PerfumeOption> {
        std::iter::once(PerfumeOption::default())
            .chain(self.perfumes.iter().map(|perfume| perfume.to_option(config)))
            .collect()
    }

    /// The perfume the page selects on its own: only when there is exactly one.
    pub fn initial_selection(&self) -> Option<&PerfumeRecord> {
        auto_select_index(self.perfumes.iter().map(|perfume| perfume.id.to_string()))
            .and_then(|index| self.perfumes.get(index))
    }

    /// Render the `#perfume-select` dropdown.
    pub fn render_select(&self, prompt: &str, config: &PanelConfig) -> String {
        let mut lines = vec![
            r#"<select id="perfume-select" name="perfume">"#.to_string(),
            format!(r#"  <option value="">{}</option>"#, escape_html(prompt)),
        ];

        for perfume in &self.perfumes {
            let option = perfume.to_option(config);
            lines.push(format!(
                r#"  <option value="{}" data-image="{}" data-brand="{}" data-name="{}" data-capacity="{}">{}</option>"#,
                escape_html(&option.value),
                escape_html(option.image.as_deref().unwrap_or_default()),
                escape_html(option.brand.as_deref().unwrap_or_default()),
                escape_html(option.name.as_deref().unwrap_or_default()),
                escape_html(option.capacity.as_deref().unwrap_or_default()),
                escape_html(&perfume.label()),
            ));
        }

        lines.push("</select>".to_string());
        lines.join("\n")
    }
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog_str(catalog_json: &str) -> Result<Catalog, PerfumeError> {
    let value: Value =
        serde_json::from_str(catalog_json).map_err(|err| PerfumeError::Parse(err.to_string()))?;
    parse_catalog_value(&value)
}

/// Parse a catalog from `{ "perfumes": [...] }`.
pub fn parse_catalog_value(catalog: &Value) -> Result<Catalog, PerfumeError> {
    let entries = catalog
        .get("perfumes")
        .ok_or(PerfumeError::MissingData)?
        .as_array()
        .ok_or_else(|| PerfumeError::Parse("`perfumes` must be an array".to_string()))?;

    let perfumes = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            PerfumeRecord::deserialize(entry)
                .map_err(|err| PerfumeError::Parse(format!("perfume #{index}: {err}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::from_records(perfumes))
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
