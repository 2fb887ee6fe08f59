//! Drives a data view over a small user list and prints each state as a
//! plain-text table.
//!
//! ```text
//! RUST_LOG=horizon_dataview=debug cargo run --example users_table
//! ```

use horizon_dataview::prelude::*;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

fn users() -> Vec<Value> {
    let names = [
        ("Åsa Berg", "admin", 41),
        ("zoe Park", "member", 29),
        ("Émile Roux", "member", 35),
        ("Bo Lind", "guest", 52),
        ("anna Kim", "admin", 23),
        ("Carl Ek", "member", 47),
        ("Dina Sol", "guest", 31),
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, (name, role, age))| {
            json!({
                "id": i + 1,
                "name": name,
                "role": role,
                "age": age,
                "email": format!("user{}@example.com", i + 1),
            })
        })
        .collect()
}

fn print_table(view: &DataView<Value>) {
    let headers = view.headers();
    let line: Vec<String> = headers
        .iter()
        .map(|h| {
            let arrow = match h.indicator {
                SortIndicator::Ascending => " ^",
                SortIndicator::Descending => " v",
                SortIndicator::None => "",
            };
            format!("{:<16}", format!("{}{arrow}", h.label))
        })
        .collect();
    println!("   {}", line.join(""));

    let snapshot = view.snapshot();
    for (row, record) in snapshot.visible.iter().enumerate() {
        let mark = if view.selection().is_selected(row) { "[x]" } else { "[ ]" };
        let cells: Vec<String> = headers
            .iter()
            .map(|h| format!("{:<16}", view.render_cell(&h.key, record).unwrap_or_default()))
            .collect();
        println!("{mark}{}", cells.join(""));
    }

    let summary = snapshot.summary;
    let range = summary
        .range
        .map(|(first, last)| format!("{first}-{last} of {}", summary.filtered_count))
        .unwrap_or_else(|| "no matches".to_string());
    println!(
        "page {}/{} {:?} | {range} | search {:?}\n",
        summary.page, summary.total_pages, summary.page_window, summary.search
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let columns = ColumnRegistry::new(vec![
        Column::new("name", "Name").sortable(true),
        Column::new("role", "Role").sortable(true),
        Column::new("age", "Age")
            .sortable(true)
            .align(HorizontalAlignment::Right),
        Column::new("email", "Email").render(|value, record: &Value| {
            if record["role"] == "admin" {
                format!("{value} *")
            } else {
                value.to_string()
            }
        }),
    ])?;

    let config = DataViewConfig::default().with_page_size(3);
    let mut view = DataView::with_config(users(), columns, &config);

    view.selection_changed.connect(|rows| {
        let names: Vec<String> = rows.iter().map(|r| r["name"].to_string()).collect();
        println!(">> selection: [{}]", names.join(", "));
    });
    view.row_clicked.connect(|record| println!(">> clicked: {}", record["email"]));

    print_table(&view);

    view.sort_by("name");
    print_table(&view);

    view.toggle_row(0);
    view.toggle_row(2);
    view.click_row(1);
    print_table(&view);

    view.next_page();
    print_table(&view);

    view.set_search("member");
    print_table(&view);

    view.sort_by("age");
    view.sort_by("age");
    print_table(&view);

    let mut csv = Vec::new();
    view.export_csv(&mut csv, ExportScope::Filtered)?;
    println!("{}", String::from_utf8(csv)?);

    println!("saved state: {}", serde_json::to_string(&view.state())?);
    Ok(())
}
