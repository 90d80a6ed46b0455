//! Walkthrough of a configured list view: the same interactions a dashboard
//! table performs, driven from the terminal.
//!
//! ```bash
//! cargo run --example dashboard
//! ```

use listwise::prelude::*;

fn seizures() -> Vec<DynRecord> {
    let rows = [
        (1, "MH-12-AB-1234", "Kohima", "2024-03-01"),
        (2, "NL-01-K-7777", "Dimapur", "2024-01-15"),
        (3, "AS-03-C-0042", "Mokokchung", "2024-02-20"),
        (4, "NL-02-D-9999", "Dimapur", "2024-02-01"),
        (5, "MN-04-E-5151", "Kohima", "2024-01-28"),
        (6, "NL-03-F-3030", "Wokha", "2024-03-10"),
        (7, "AS-01-G-8118", "Dimapur", "2024-02-14"),
        (8, "NL-01-H-6006", "Zunheboto", "2024-01-02"),
        (9, "MH-31-J-2468", "Kohima", "2024-03-05"),
        (10, "NL-05-K-1357", "Mon", "2024-02-25"),
        (11, "AS-07-L-9753", "Dimapur", "2024-01-20"),
        (12, "NL-02-M-8642", "Kohima", "2024-03-15"),
    ];
    rows.into_iter()
        .map(|(id, vehicle, location, date)| {
            DynRecord::new()
                .with("id", id)
                .with("vehicle_number", vehicle)
                .with("location", location)
                .with("seizure_date", date)
        })
        .collect()
}

fn print_page(label: &str, view: &ListView<DynRecord>) {
    let page = view.visible();
    println!("\n== {} ==", label);
    for record in &page.records {
        println!(
            "  {:>2}  {:<14} {:<12} {}",
            record.id("id").unwrap_or_default(),
            record
                .field_value("vehicle_number")
                .map(|v| v.search_text())
                .unwrap_or_default(),
            record
                .field_value("location")
                .map(|v| v.search_text())
                .unwrap_or_default(),
            record
                .field_value("seizure_date")
                .map(|v| v.search_text())
                .unwrap_or_default(),
        );
    }
    println!(
        "  Showing {} to {} of {} (page {}/{})",
        page.meta.range_start,
        page.meta.range_end,
        page.meta.total_count,
        page.meta.page,
        page.meta.total_pages
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = DashboardConfig::from_yaml_str(
        r#"
resources:
  - name: illegal-vehicles
    path: /illegal-vehicles
    searchable_fields: [vehicle_number, location]
"#,
    )?;
    let resource = config.resource("illegal-vehicles")?;

    let mut view = resource.list_view();
    view.set_records(seizures());

    print_page("Initial load", &view);

    view.go_to_page(2);
    print_page("Page 2", &view);

    view.search("kohima");
    print_page("Search: kohima", &view);

    view.search("");
    view.toggle_sort("seizure_date");
    print_page("Sorted by seizure_date, ascending", &view);

    view.toggle_sort("seizure_date");
    print_page("Sorted by seizure_date, descending", &view);

    view.toggle_sort("seizure_date");
    print_page("Sort cleared, insertion order", &view);

    Ok(())
}
