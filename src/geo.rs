use crate::types::{LocationAggregate, LocationPoint, Record, RowPoint};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type CoordinateTable = HashMap<&'static str, (f64, f64)>;

/// Known branch locations and their `(lat, lon)`. Names match the dataset
/// spelling exactly, including case.
pub static LOCATION_COORDS: Lazy<CoordinateTable> = Lazy::new(|| {
    HashMap::from([
        ("Sivakasi", (11.67, 78.13)),
        ("Tirunelveli", (8.73, 77.70)),
        ("TENKASI", (8.96, 77.30)),
    ])
});

/// Map centre used when rendering row coordinates.
pub const TAMIL_NADU_CENTER: (f64, f64) = (11.1271, 78.6569);

/// Attach coordinates to each location sum. Locations missing from `table`
/// are left out of the result.
pub fn resolve_coordinates(
    aggregates: &[LocationAggregate],
    table: &CoordinateTable,
) -> Vec<LocationPoint> {
    aggregates
        .iter()
        .filter_map(|agg| {
            let (lat, lon) = *table.get(agg.location.as_str())?;
            Some(LocationPoint {
                location: agg.location.clone(),
                balance_due: agg.balance_due,
                lat,
                lon,
            })
        })
        .collect()
}

/// Records with both per-row coordinates present.
pub fn row_points(data: &[Record]) -> Vec<RowPoint> {
    data.iter()
        .filter_map(|r| match (r.latitude, r.longitude) {
            (Some(lat), Some(lon)) => Some(RowPoint {
                location: r.location.clone(),
                balance_due: r.balance_due,
                lat,
                lon,
            }),
            _ => None,
        })
        .collect()
}
