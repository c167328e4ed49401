use crate::types::{GroupAggregate, LocationAggregate, Record, StatusCount};
use std::collections::{BTreeMap, HashMap};

pub fn total_records(data: &[Record]) -> usize {
    data.len()
}

pub fn total_balance(data: &[Record]) -> f64 {
    data.iter().map(|r| r.balance_due).sum()
}

/// Summed balance per `(location, status)`, ordered by key.
pub fn group_by_location_status(data: &[Record]) -> Vec<GroupAggregate> {
    let mut map: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for r in data {
        *map.entry((r.location.as_str(), r.status.as_str()))
            .or_insert(0.0) += r.balance_due;
    }
    map.into_iter()
        .map(|((location, status), balance_due)| GroupAggregate {
            location: location.to_string(),
            status: status.to_string(),
            balance_due,
        })
        .collect()
}

/// Row count per status, largest first; ties fall back to the status name.
pub fn status_distribution(data: &[Record]) -> Vec<StatusCount> {
    let mut map: HashMap<&str, usize> = HashMap::new();
    for r in data {
        *map.entry(r.status.as_str()).or_default() += 1;
    }
    let mut counts: Vec<StatusCount> = map
        .into_iter()
        .map(|(status, count)| StatusCount {
            status: status.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
    counts
}

pub fn group_by_location(data: &[Record]) -> Vec<LocationAggregate> {
    let mut map: BTreeMap<&str, f64> = BTreeMap::new();
    for r in data {
        *map.entry(r.location.as_str()).or_insert(0.0) += r.balance_due;
    }
    map.into_iter()
        .map(|(location, balance_due)| LocationAggregate {
            location: location.to_string(),
            balance_due,
        })
        .collect()
}
