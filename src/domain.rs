use crate::reshape::Record;
use chrono::NaiveDate;
use std::collections::HashSet;

/// The selectable universes derived from the loaded records. Computed
/// once after reshaping; the prompts index into these by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Domains {
    pub commodities: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub locations: Vec<String>,
}

/// Collect the sorted, de-duplicated commodity, date, and location
/// universes. Names sort lexicographically, dates chronologically.
pub fn extract_domains(records: &[Record]) -> Domains {
    let mut commodities: HashSet<&str> = HashSet::new();
    let mut dates: HashSet<NaiveDate> = HashSet::new();
    let mut locations: HashSet<&str> = HashSet::new();
    for record in records {
        commodities.insert(&record.commodity);
        dates.insert(record.date);
        locations.insert(&record.location);
    }

    let mut commodities: Vec<String> = commodities.into_iter().map(String::from).collect();
    commodities.sort();
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    dates.sort();
    let mut locations: Vec<String> = locations.into_iter().map(String::from).collect();
    locations.sort();

    Domains {
        commodities,
        dates,
        locations,
    }
}
