//! Integration tests for the data-view pipeline.
//!
//! Run with `RUST_LOG=horizon_dataview=trace` to see every transition.

use std::sync::Arc;

use chrono::NaiveDate;
use horizon_dataview::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct Product {
    sku: String,
    name: String,
    category: &'static str,
    price: f64,
    stock: Option<i64>,
    released: NaiveDate,
}

impl Record for Product {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "sku" => CellValue::from(&self.sku),
            "name" => CellValue::from(&self.name),
            "category" => CellValue::from(self.category),
            "price" => CellValue::from(self.price),
            "stock" => CellValue::from(self.stock),
            "released" => CellValue::from(self.released),
            _ => CellValue::None,
        }
    }

    fn field_values(&self) -> Vec<CellValue> {
        ["sku", "name", "category", "price", "stock", "released"]
            .iter()
            .map(|key| self.field(key))
            .collect()
    }
}

const CATEGORIES: [&str; 4] = ["Beverages", "Condiments", "Produce", "Seafood"];

fn product(i: usize) -> Product {
    Product {
        sku: format!("SKU-{i:03}"),
        name: format!("Item {i:03}"),
        category: CATEGORIES[i % CATEGORIES.len()],
        price: 2.5 * (i % 7) as f64,
        stock: (i % 5 != 0).then_some(i as i64),
        released: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(i as u64 * 11),
    }
}

fn catalog(n: usize) -> Vec<Product> {
    (1..=n).map(product).collect()
}

fn columns() -> ColumnRegistry<Product> {
    ColumnRegistry::new(vec![
        Column::new("sku", "SKU").sortable(true),
        Column::new("name", "Name").sortable(true),
        Column::new("category", "Category").sortable(true),
        Column::new("price", "Price")
            .sortable(true)
            .align(HorizontalAlignment::Right)
            .render(|value, _| format!("{:.2}", value.as_float().unwrap_or_default())),
        Column::new("stock", "Stock").sortable(true),
        Column::new("released", "Released"),
    ])
    .unwrap()
}

fn view(n: usize, page_size: usize) -> DataView<Product> {
    init_tracing();
    let config = DataViewConfig::default()
        .with_page_size(page_size)
        .with_locale("en-US");
    DataView::with_config(catalog(n), columns(), &config)
}

fn skus<'a>(rows: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    rows.into_iter().map(|p| p.sku.clone()).collect()
}

fn all_pages(view: &mut DataView<Product>) -> Vec<String> {
    let mut seen = Vec::new();
    for page in 1..=view.total_pages() {
        view.set_page(page);
        seen.extend(skus(view.visible()));
    }
    seen
}

#[test]
fn test_sort_is_stable_and_idempotent() {
    let mut view = view(40, 100);
    view.sort_by("category");
    let first = skus(view.visible());
    view.set_sort(Some(SortDirective::ascending("category")));
    assert_eq!(skus(view.visible()), first);

    // Equal categories keep source order.
    for category in CATEGORIES {
        let in_group: Vec<&Product> = view
            .visible()
            .into_iter()
            .filter(|p| p.category == category)
            .collect();
        let mut expected = skus(in_group.iter().copied());
        expected.sort();
        assert_eq!(skus(in_group), expected);
    }
}

#[test]
fn test_second_click_reverses_distinct_values() {
    let mut view = view(25, 100);
    view.sort_by("name");
    let ascending = skus(view.visible());
    view.sort_by("name");
    let mut descending = skus(view.visible());
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn test_missing_values_follow_direction() {
    let mut view = view(20, 100);
    view.sort_by("stock");
    assert!(view.visible()[..4].iter().all(|p| p.stock.is_none()));
    view.sort_by("stock");
    assert!(view.visible()[16..].iter().all(|p| p.stock.is_none()));
}

#[test]
fn test_filter_is_monotonic_and_matches() {
    let mut view = view(60, 10);
    for term in ["sea", "ITEM 01", "7.5", "2020-0", "zzz"] {
        view.set_search(term);
        let matched = view.filtered_records();
        assert!(matched.len() <= 60);
        let needle = term.to_lowercase();
        for record in matched {
            let hit = record
                .field_values()
                .iter()
                .filter_map(CellValue::search_text)
                .any(|text| text.to_lowercase().contains(&needle));
            assert!(hit, "{} does not contain {term:?}", record.sku);
        }
    }
    assert!(view.summary().is_empty);
}

#[test]
fn test_pages_cover_filtered_exactly_once() {
    let mut view = view(47, 6);
    view.sort_by("price");
    view.set_search("o");
    let expected = skus(view.filtered_records());
    assert!(view.total_pages() > 1);
    assert_eq!(all_pages(&mut view), expected);
}

#[test]
fn test_page_window_literal_cases() {
    let mut view = view(100, 10);
    assert_eq!(view.total_pages(), 10);
    assert_eq!(view.page_window(), vec![1, 2, 3, 4, 5]);
    view.set_page(10);
    assert_eq!(view.page_window(), vec![6, 7, 8, 9, 10]);
    view.set_page(5);
    assert_eq!(view.summary().page_window, vec![3, 4, 5, 6, 7]);

    let mut small = self::view(30, 10);
    for page in 1..=3 {
        small.set_page(page);
        assert_eq!(small.page_window(), vec![1, 2, 3]);
    }
}

#[test]
fn test_selection_resolution_scenario() {
    let mut view = view(9, 3);
    let page: Vec<Product> = view.visible().into_iter().cloned().collect();
    let (a, b, c) = (page[0].clone(), page[1].clone(), page[2].clone());

    let emitted: Arc<Mutex<Vec<Vec<Product>>>> = Arc::default();
    let sink = emitted.clone();
    view.selection_changed.connect(move |rows| sink.lock().push(rows.clone()));

    view.toggle_row(0);
    view.toggle_row(2);
    assert_eq!(view.selected_records(), vec![a.clone(), c.clone()]);

    view.select_all(true);
    assert_eq!(view.selected_records(), vec![a.clone(), b.clone(), c.clone()]);

    view.set_page(2);
    assert!(view.selected_records().is_empty());
    assert_eq!(view.summary().selected_count, 0);

    let emitted = emitted.lock();
    assert_eq!(emitted.len(), 4);
    assert_eq!(emitted[1], vec![a.clone(), c]);
    assert_eq!(emitted[2].len(), 3);
    assert!(emitted[3].is_empty());
}

#[test]
fn test_search_resets_page() {
    let mut view = view(50, 10);
    view.set_page(3);
    assert_eq!(view.total_pages(), 5);

    view.set_search("SKU-04");
    let summary = view.summary();
    assert_eq!(summary.total_pages, 1);
    assert_eq!(summary.page, 1);
    assert_eq!(view.visible().len(), 10);
}

#[test]
fn test_sort_and_search_clear_selection() {
    let mut view = view(20, 5);
    view.select_all(true);
    view.sort_by("price");
    assert_eq!(view.selection().selected_count(), 0);

    view.select_all(true);
    view.set_search("item");
    assert_eq!(view.selection().selected_count(), 0);
}

#[test]
fn test_headers_and_rendering() {
    let mut view = view(3, 10);
    view.sort_by("price");
    view.sort_by("price");
    let headers = view.headers();
    let price = headers.iter().find(|h| h.key == "price").unwrap();
    assert_eq!(price.indicator, SortIndicator::Descending);
    assert_eq!(price.align, HorizontalAlignment::Right);

    let first = view.visible()[0].clone();
    assert_eq!(view.render_cell("price", &first).as_deref(), Some("7.50"));
    assert_eq!(view.render_cell("released", &first).as_deref(), Some("2020-02-03"));
    assert_eq!(view.render_cell("nope", &first), None);
}

#[test]
fn test_view_state_survives_serialization() {
    let mut view = view(40, 10);
    view.sort_by("category");
    view.set_search("item");
    view.set_page(3);

    let json = serde_json::to_string(&view.state()).unwrap();
    let state: ViewState = serde_json::from_str(&json).unwrap();

    let mut restored = self::view(40, 10);
    restored.restore(state);
    assert_eq!(restored.page(), 3);
    assert_eq!(skus(restored.visible()), skus(view.visible()));
}

#[test]
fn test_data_refresh_keeps_directives() {
    let mut view = view(40, 10);
    view.sort_by("sku");
    view.sort_by("sku");
    view.set_page(4);
    view.set_records(catalog(15));
    assert_eq!(view.page(), 2);
    assert_eq!(view.sort(), Some(&SortDirective::descending("sku")));
    assert_eq!(skus(view.visible()), vec!["SKU-005", "SKU-004", "SKU-003", "SKU-002", "SKU-001"]);
}
