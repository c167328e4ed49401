use crate::config::{self, Config};
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::Result;
use crate::geo::TAMIL_NADU_CENTER;
use crate::types::{FilterSelection, GroupRow, PointRow, RecordRow, StatusRow};
use crate::util::{bar, format_currency, format_int, format_number};
use log::info;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub const EMPTY_WARNING: &str = "No data available. Please adjust your filters.";
pub const NO_COORDS_WARNING: &str =
    "Latitude and Longitude columns not found. Using predefined coordinates.";

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(rows).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

fn subheader(title: &str) {
    println!("\n{}\n", title);
}

pub fn group_rows(d: &Dashboard, width: usize) -> Vec<GroupRow> {
    let max = d.groups.iter().map(|g| g.balance_due).fold(0.0, f64::max);
    d.groups
        .iter()
        .map(|g| GroupRow {
            location: g.location.clone(),
            status: g.status.clone(),
            balance_due: format_number(g.balance_due, 2),
            bar: bar(g.balance_due, max, width),
        })
        .collect()
}

pub fn status_rows(d: &Dashboard) -> Vec<StatusRow> {
    let total = d.total_records.max(1) as f64;
    d.statuses
        .iter()
        .map(|s| StatusRow {
            status: s.status.clone(),
            count: s.count,
            share: format!("{}%", format_number(s.count as f64 / total * 100.0, 1)),
        })
        .collect()
}

fn point_row(location: &str, lat: f64, lon: f64, balance: f64) -> PointRow {
    PointRow {
        location: location.to_string(),
        lat: format!("{:.2}", lat),
        lon: format!("{:.2}", lon),
        balance_due: format_number(balance, 2),
    }
}

pub fn render_selection(selection: &FilterSelection) {
    if selection.is_unrestricted() {
        println!("No filters applied.\n");
        return;
    }
    let show = |set: &std::collections::BTreeSet<String>| {
        if set.is_empty() {
            "(all)".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };
    println!("Locations: {}", show(&selection.locations));
    println!("Statuses:  {}\n", show(&selection.statuses));
}

pub fn render(view: &DashboardView, cfg: &Config) {
    println!("Scheme Collection Dashboard");
    println!("===========================\n");
    let d = match view {
        DashboardView::Empty => {
            println!("Warning: {}\n", EMPTY_WARNING);
            return;
        }
        DashboardView::Ready(d) => d,
    };

    println!("Total Records:     {}", format_int(d.total_records));
    println!("Total Balance Due: {}", format_currency(d.total_balance));

    subheader("Balance Due by Location and Status");
    print_table(group_rows(d, cfg.bar_width));

    subheader("Scheme Status Distribution");
    print_table(status_rows(d));

    subheader("Tamil Nadu Location Map");
    match &d.row_points {
        Some(points) => {
            println!(
                "Centre: {:.4}, {:.4}\n",
                TAMIL_NADU_CENTER.0, TAMIL_NADU_CENTER.1
            );
            print_table(
                points
                    .iter()
                    .map(|p| point_row(&p.location, p.lat, p.lon, p.balance_due))
                    .collect(),
            );
        }
        None => println!("Warning: {}", NO_COORDS_WARNING),
    }

    subheader("Location-wise Distribution");
    print_table(
        d.locations
            .iter()
            .map(|p| point_row(&p.location, p.lat, p.lon, p.balance_due))
            .collect(),
    );

    subheader("Filtered Data Table");
    let rows: Vec<RecordRow> = d
        .records
        .iter()
        .take(cfg.preview_rows)
        .map(RecordRow::from)
        .collect();
    print_table(rows);
    if d.records.len() > cfg.preview_rows {
        println!(
            "(showing {} of {} rows; export for the full table)\n",
            format_int(cfg.preview_rows),
            format_int(d.records.len())
        );
    }
}

/// Write every dashboard table to `dir`. Returns the written file names.
pub fn export(d: &Dashboard, selection: &FilterSelection, dir: &Path) -> Result<Vec<String>> {
    write_csv(&dir.join(config::GROUPED_CSV), &d.groups)?;
    write_csv(&dir.join(config::STATUS_CSV), &d.statuses)?;
    write_csv(&dir.join(config::LOCATION_CSV), &d.locations)?;
    let rows: Vec<RecordRow> = d.records.iter().map(RecordRow::from).collect();
    write_csv(&dir.join(config::RECORDS_CSV), &rows)?;
    write_json(&dir.join(config::SUMMARY_JSON), &d.summary(selection))?;
    info!("exported dashboard tables to {}", dir.display());
    Ok([
        config::GROUPED_CSV,
        config::STATUS_CSV,
        config::LOCATION_CSV,
        config::RECORDS_CSV,
        config::SUMMARY_JSON,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect())
}
