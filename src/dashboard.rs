// One full recompute pass: filter, aggregate, resolve coordinates.
//
// Nothing is cached between calls; every selection change rebuilds the view
// from the cleaned dataset.
use crate::aggregate::{
    group_by_location, group_by_location_status, status_distribution, total_balance,
    total_records,
};
use crate::filter::apply_filters;
use crate::geo::{resolve_coordinates, row_points, LOCATION_COORDS};
use crate::types::{
    FilterSelection, GroupAggregate, LocationPoint, Record, RowPoint, StatusCount, SummaryStats,
};

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub total_records: usize,
    pub total_balance: f64,
    pub groups: Vec<GroupAggregate>,
    pub statuses: Vec<StatusCount>,
    /// `Some` only when the input file carried `Latitude`/`Longitude`.
    pub row_points: Option<Vec<RowPoint>>,
    pub locations: Vec<LocationPoint>,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone)]
pub enum DashboardView {
    /// The selection matched no rows; only a warning is shown.
    Empty,
    Ready(Dashboard),
}

pub fn build(data: &[Record], selection: &FilterSelection, has_coordinates: bool) -> DashboardView {
    let records = apply_filters(data, selection);
    if records.is_empty() {
        return DashboardView::Empty;
    }
    DashboardView::Ready(Dashboard {
        total_records: total_records(&records),
        total_balance: total_balance(&records),
        groups: group_by_location_status(&records),
        statuses: status_distribution(&records),
        row_points: has_coordinates.then(|| row_points(&records)),
        locations: resolve_coordinates(&group_by_location(&records), &LOCATION_COORDS),
        records,
    })
}

impl Dashboard {
    pub fn summary(&self, selection: &FilterSelection) -> SummaryStats {
        SummaryStats {
            total_records: self.total_records,
            total_balance_due: self.total_balance,
            selection: selection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::clean;
    use crate::types::RawRow;

    fn raw(location: &str, status: &str, balance: &str) -> RawRow {
        RawRow {
            location: Some(location.to_string()),
            maturity_date: Some("2025-01-15".to_string()),
            employee: Some("E21".to_string()),
            status: Some(status.to_string()),
            customer_name: Some("Lakshmi".to_string()),
            balance_due: Some(balance.to_string()),
            ..RawRow::default()
        }
    }

    fn dataset() -> Vec<Record> {
        clean(&[
            raw("Sivakasi", "Pending", "100"),
            raw("Sivakasi", "Closed", "abc"),
            raw("Tirunelveli", "Closed", "60"),
            raw("Unknown City", "Pending", "40"),
        ])
        .0
    }

    #[test]
    fn sivakasi_scenario_totals() {
        let data = clean(&[
            raw("Sivakasi", "Pending", "100"),
            raw("Sivakasi", "Closed", "abc"),
        ])
        .0;
        let DashboardView::Ready(d) = build(&data, &FilterSelection::default(), false) else {
            panic!("expected a populated dashboard");
        };
        assert_eq!(d.total_records, 1);
        assert_eq!(d.total_balance, 100.0);
        assert_eq!(d.statuses.len(), 1);
    }

    #[test]
    fn selection_without_matches_is_empty_view() {
        let selection = FilterSelection {
            locations: ["TENKASI".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert!(matches!(build(&dataset(), &selection, false), DashboardView::Empty));
    }

    #[test]
    fn map_skips_unresolved_locations() {
        let DashboardView::Ready(d) = build(&dataset(), &FilterSelection::default(), false) else {
            panic!("expected a populated dashboard");
        };
        let names: Vec<&str> = d.locations.iter().map(|p| p.location.as_str()).collect();
        assert_eq!(names, vec!["Sivakasi", "Tirunelveli"]);
        // Unmapped rows still count toward the metrics.
        assert_eq!(d.total_records, 3);
        assert_eq!(d.total_balance, 200.0);
        assert!(d.row_points.is_none());
    }

    #[test]
    fn row_points_follow_coordinate_columns() {
        let mut with_coords = raw("Sivakasi", "Pending", "10");
        with_coords.latitude = Some("9.45".to_string());
        with_coords.longitude = Some("77.8".to_string());
        let data = clean(&[with_coords, raw("TENKASI", "Pending", "5")]).0;
        let DashboardView::Ready(d) = build(&data, &FilterSelection::default(), true) else {
            panic!("expected a populated dashboard");
        };
        assert_eq!(d.row_points.map(|p| p.len()), Some(1));
    }

    #[test]
    fn summary_carries_selection() {
        let selection = FilterSelection {
            statuses: ["Closed".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let DashboardView::Ready(d) = build(&dataset(), &selection, false) else {
            panic!("expected a populated dashboard");
        };
        let summary = d.summary(&selection);
        assert_eq!(summary.total_records, 1);
        assert_eq!(summary.total_balance_due, 60.0);
        assert_eq!(summary.selection, selection);
    }
}
