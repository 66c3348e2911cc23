//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use memberhub_core::types::pagination::PageInfo;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of rows in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items, "[]"),
    }
}

/// Print one page of rows followed by its position
pub fn print_page<T: Serialize + Tabled>(items: &[T], info: &PageInfo, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            print_list(items, format);
            let total = if info.total_items_estimated {
                format!("~{}", info.total_items)
            } else {
                info.total_items.to_string()
            };
            print_kv(
                "Page",
                &format!("{} of {} ({} items)", info.current_page, info.total_pages, total),
            );
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PageView<'a, T> {
                data: &'a [T],
                pagination: &'a PageInfo,
            }
            print_json(
                &PageView {
                    data: items,
                    pagination: info,
                },
                "{}",
            );
        }
    }
}

/// Print a single record as a one-row table or as JSON
pub fn print_record<T: Serialize + Tabled>(item: T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([item])),
        OutputFormat::Json => print_json(&item, "{}"),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{:#?}", item),
        OutputFormat::Json => print_json(item, "{}"),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

fn print_json<T: Serialize + ?Sized>(value: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string());
    println!("{}", json);
}
