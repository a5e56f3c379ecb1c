use std::fs;

use perfume_catalog::{escape_html, parse_catalog_str, parse_catalog_value};
use perfume_core::{decode_html_entities, ImageSource, PanelConfig, PanelView, PerfumeError};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn load_catalog(name: &str) -> perfume_catalog::Catalog {
    let json = fs::read_to_string(fixture_path(name)).expect("fixture catalog readable");
    parse_catalog_str(&json).expect("fixture catalog parses")
}

#[test]
fn select_markup_matches_golden() {
    let catalog = load_catalog("catalog.json");
    let expected =
        fs::read_to_string(fixture_path("catalog_select.html")).expect("golden markup readable");

    let actual = catalog.render_select("-- Select a perfume --", &PanelConfig::default());

    assert_eq!(actual, expected.trim_end());
}

#[test]
fn perfumes_are_ordered_by_brand_then_name() {
    let catalog = load_catalog("catalog.json");
    let ids: Vec<u64> = catalog.perfumes().iter().map(|perfume| perfume.id).collect();

    assert_eq!(ids, vec![3, 2, 7]);
}

#[test]
fn options_start_with_the_empty_entry() {
    let catalog = load_catalog("catalog.json");
    let options = catalog.options(&PanelConfig::default());

    assert_eq!(options.len(), 4);
    assert!(!options[0].is_selection());
    assert!(options[1..].iter().all(|option| option.is_selection()));
}

#[test]
fn escaped_attributes_decode_back_to_the_record() {
    let catalog = load_catalog("catalog.json");
    let config = PanelConfig::default();
    let artisan = catalog.find(7).expect("perfume 7 in fixture");

    let view = PanelView::for_selection(Some(&artisan.to_option(&config)), &config);

    assert_eq!(view.title, "L'Artisan Parfumeur");
    assert_eq!(view.subtitle, "Mûre et Musc (100 ml)");
    assert_eq!(view.source, ImageSource::Generated);
    assert!(view.image_src.ends_with("?text=L"));
}

#[test]
fn record_with_image_selects_it() {
    let catalog = load_catalog("catalog.json");
    let config = PanelConfig::default();
    let chanel = catalog.find(3).expect("perfume 3 in fixture");

    let view = PanelView::for_selection(Some(&chanel.to_option(&config)), &config);

    assert_eq!(view.source, ImageSource::Selected);
    assert_eq!(view.image_src, "/media/perfumes/chanel-no5.jpg");
    assert_eq!(view.image_alt, "Chanel - No 5");
}

#[test]
fn single_perfume_catalog_is_selected_automatically() {
    let catalog = load_catalog("single_perfume.json");
    let selected = catalog.initial_selection().expect("single perfume auto-selected");
    assert_eq!(selected.id, 11);

    let many = load_catalog("catalog.json");
    assert!(many.initial_selection().is_none());
}

#[test]
fn escape_then_decode_is_lossless() {
    for text in ["Terre d'Hermès", "Rose & Oud", "<b>\"Noir\"</b>", "plain"] {
        assert_eq!(decode_html_entities(&escape_html(text)), text);
    }
}

#[test]
fn label_follows_brand_name_capacity() {
    let catalog = load_catalog("single_perfume.json");
    assert_eq!(
        catalog.perfumes()[0].label(),
        "Hermès - Terre d'Hermès (75ml)"
    );
}

#[test]
fn rejects_malformed_catalogs() {
    let missing = parse_catalog_value(&serde_json::json!({ "items": [] }));
    assert!(matches!(missing, Err(PerfumeError::MissingData)));

    let not_array = parse_catalog_value(&serde_json::json!({ "perfumes": {} }));
    assert!(matches!(not_array, Err(PerfumeError::Parse(_))));

    let bad_entry = parse_catalog_str(r#"{ "perfumes": [ { "id": 1, "brand": "Dior" } ] }"#);
    match bad_entry {
        Err(PerfumeError::Parse(message)) => assert!(message.starts_with("perfume #0")),
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        parse_catalog_str("not json"),
        Err(PerfumeError::Parse(_))
    ));
}
