use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tabled::Tabled;

/// One CSV row as it comes off disk. Every column is optional so a sparse
/// export still deserializes; validation happens in `loader::clean`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Maturity Date", default)]
    pub maturity_date: Option<String>,
    #[serde(rename = "RSOEmp", default)]
    pub employee: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Customer Name", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "Balance Due", default)]
    pub balance_due: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub location: String,
    pub maturity_date: String,
    pub employee: String,
    pub status: String,
    pub customer_name: String,
    pub balance_due: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Record> for RawRow {
    fn from(r: &Record) -> Self {
        RawRow {
            location: Some(r.location.clone()),
            maturity_date: Some(r.maturity_date.clone()),
            employee: Some(r.employee.clone()),
            status: Some(r.status.clone()),
            customer_name: Some(r.customer_name.clone()),
            // `Display` for f64 round-trips through `str::parse`.
            balance_due: Some(r.balance_due.to_string()),
            latitude: r.latitude.map(|v| v.to_string()),
            longitude: r.longitude.map(|v| v.to_string()),
        }
    }
}

/// Inclusion sets chosen by the user. An empty set means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub locations: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
}

impl FilterSelection {
    pub fn is_unrestricted(&self) -> bool {
        self.locations.is_empty() && self.statuses.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Balance Due")]
    pub balance_due: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "count")]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationAggregate {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Balance Due")]
    pub balance_due: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPoint {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Balance Due")]
    pub balance_due: f64,
    pub lat: f64,
    pub lon: f64,
}

/// A record carrying its own coordinates from the `Latitude`/`Longitude`
/// columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPoint {
    pub location: String,
    pub balance_due: f64,
    pub lat: f64,
    pub lon: f64,
}

// Console rows. Numbers are pre-formatted so the tables read like the
// exported reports.

#[derive(Debug, Clone, Tabled)]
pub struct GroupRow {
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Balance Due")]
    pub balance_due: String,
    #[tabled(rename = "")]
    pub bar: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct StatusRow {
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Share")]
    pub share: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct PointRow {
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Lat")]
    pub lat: String,
    #[tabled(rename = "Lon")]
    pub lon: String,
    #[tabled(rename = "Balance Due")]
    pub balance_due: String,
}

/// The six columns of the filtered data table, in display order.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RecordRow {
    #[serde(rename = "Location")]
    #[tabled(rename = "Location")]
    pub location: String,
    #[serde(rename = "Maturity Date")]
    #[tabled(rename = "Maturity Date")]
    pub maturity_date: String,
    #[serde(rename = "RSOEmp")]
    #[tabled(rename = "RSOEmp")]
    pub employee: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
    #[serde(rename = "Customer Name")]
    #[tabled(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Balance Due")]
    #[tabled(rename = "Balance Due")]
    pub balance_due: f64,
}

impl From<&Record> for RecordRow {
    fn from(r: &Record) -> Self {
        RecordRow {
            location: r.location.clone(),
            maturity_date: r.maturity_date.clone(),
            employee: r.employee.clone(),
            status: r.status.clone(),
            customer_name: r.customer_name.clone(),
            balance_due: r.balance_due,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_records: usize,
    pub total_balance_due: f64,
    pub selection: FilterSelection,
}
