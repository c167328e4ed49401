use crate::types::{FilterSelection, Record};
use std::collections::{BTreeSet, HashSet};

fn allows(set: &BTreeSet<String>, value: &str) -> bool {
    // Empty set: nothing chosen, so no constraint on this column.
    set.is_empty() || set.contains(value)
}

/// Rows passing both the location and the status selection. The input is
/// left untouched; the result may be empty.
pub fn apply_filters(data: &[Record], selection: &FilterSelection) -> Vec<Record> {
    data.iter()
        .filter(|r| allows(&selection.locations, &r.location))
        .filter(|r| allows(&selection.statuses, &r.status))
        .cloned()
        .collect()
}

/// Distinct values in first-appearance order.
fn distinct<'a, F>(data: &'a [Record], field: F) -> Vec<String>
where
    F: Fn(&'a Record) -> &'a str,
{
    let mut seen: HashSet<&str> = HashSet::new();
    data.iter()
        .map(field)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

pub fn distinct_locations(data: &[Record]) -> Vec<String> {
    distinct(data, |r| r.location.as_str())
}

pub fn distinct_statuses(data: &[Record]) -> Vec<String> {
    distinct(data, |r| r.status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(location: &str, status: &str, balance: f64) -> Record {
        Record {
            location: location.to_string(),
            maturity_date: "2024-06-30".to_string(),
            employee: "E7".to_string(),
            status: status.to_string(),
            customer_name: String::new(),
            balance_due: balance,
            latitude: None,
            longitude: None,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("Sivakasi", "Pending", 100.0),
            rec("Tirunelveli", "Closed", 50.0),
            rec("Sivakasi", "Closed", 25.0),
            rec("Madurai", "Pending", 10.0),
        ]
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let data = sample();
        assert_eq!(apply_filters(&data, &FilterSelection::default()), data);
    }

    #[test]
    fn location_filter_keeps_only_members() {
        let data = sample();
        let selection = FilterSelection {
            locations: set(&["Sivakasi", "Madurai"]),
            ..Default::default()
        };
        let out = apply_filters(&data, &selection);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| selection.locations.contains(&r.location)));
    }

    #[test]
    fn location_and_status_combine_with_and() {
        let data = sample();
        let selection = FilterSelection {
            locations: set(&["Sivakasi"]),
            statuses: set(&["Closed"]),
        };
        let out = apply_filters(&data, &selection);
        assert_eq!(out, vec![rec("Sivakasi", "Closed", 25.0)]);
    }

    #[test]
    fn filters_commute() {
        let data = sample();
        let by_location = FilterSelection {
            locations: set(&["Sivakasi", "Tirunelveli"]),
            ..Default::default()
        };
        let by_status = FilterSelection {
            statuses: set(&["Closed"]),
            ..Default::default()
        };
        let a = apply_filters(&apply_filters(&data, &by_location), &by_status);
        let b = apply_filters(&apply_filters(&data, &by_status), &by_location);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn unknown_location_yields_empty_view() {
        let data = sample();
        let selection = FilterSelection {
            locations: set(&["TENKASI"]),
            ..Default::default()
        };
        assert!(apply_filters(&data, &selection).is_empty());
        // Source is unchanged.
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let data = sample();
        assert_eq!(
            distinct_locations(&data),
            vec!["Sivakasi", "Tirunelveli", "Madurai"]
        );
        assert_eq!(distinct_statuses(&data), vec!["Pending", "Closed"]);
    }
}
