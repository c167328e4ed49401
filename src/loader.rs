use crate::error::{DashboardError, Result};
use crate::types::{RawRow, Record};
use crate::util::{non_empty, parse_f64_safe};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::path::Path;

/// Everything read from the input file, before cleaning.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    /// Both `Latitude` and `Longitude` headers are present.
    pub has_coordinates: bool,
    /// Rows the CSV reader could not deserialize at all.
    pub unreadable_rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub missing_fields: usize,
    pub bad_balance: usize,
}

pub fn load_raw(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(DashboardError::MissingFile(path.to_path_buf()));
    }
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    // Headers are trimmed once and handed back to the reader, so serde's
    // column matching and the coordinate check see the same names.
    let headers: StringRecord = rdr.headers()?.iter().map(str::trim).collect();
    rdr.set_headers(headers.clone());
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    let has_coordinates = has_column("Latitude") && has_column("Longitude");

    let mut rows = Vec::new();
    let mut unreadable_rows = 0usize;
    for result in rdr.deserialize::<RawRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                debug!("skipping unreadable row: {}", e);
                unreadable_rows += 1;
            }
        }
    }
    info!(
        "read {} rows from {} (coordinates: {})",
        rows.len(),
        path.display(),
        has_coordinates
    );
    Ok(RawTable {
        rows,
        has_coordinates,
        unreadable_rows,
    })
}

/// Drop rows missing a required field, then coerce `Balance Due` and drop the
/// rows whose balance did not parse. Nothing downstream sees a null balance.
/// Text fields are stored trimmed.
pub fn clean(rows: &[RawRow]) -> (Vec<Record>, CleanReport) {
    let mut report = CleanReport {
        total_rows: rows.len(),
        ..CleanReport::default()
    };
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let required = (
            non_empty(row.location.as_deref()),
            non_empty(row.maturity_date.as_deref()),
            non_empty(row.employee.as_deref()),
            non_empty(row.status.as_deref()),
            non_empty(row.balance_due.as_deref()),
        );
        let (Some(location), Some(maturity_date), Some(employee), Some(status), Some(balance)) =
            required
        else {
            report.missing_fields += 1;
            continue;
        };
        let Some(balance_due) = parse_f64_safe(Some(balance)) else {
            report.bad_balance += 1;
            continue;
        };

        out.push(Record {
            location: location.to_string(),
            maturity_date: maturity_date.to_string(),
            employee: employee.to_string(),
            status: status.to_string(),
            customer_name: row
                .customer_name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            balance_due,
            latitude: parse_f64_safe(row.latitude.as_deref()),
            longitude: parse_f64_safe(row.longitude.as_deref()),
        });
    }

    report.kept_rows = out.len();
    debug!(
        "cleaned {} rows: kept {}, {} missing fields, {} bad balance",
        report.total_rows, report.kept_rows, report.missing_fields, report.bad_balance
    );
    (out, report)
}
