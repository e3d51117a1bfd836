use crate::reshape::Record;
use crate::select::Selection;
use std::collections::HashMap;

/// Mean price per (location, commodity) over the filtered records.
/// Pairs with no matching record have no entry; zero-filling is the
/// chart builder's business, not this table's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AverageTable {
    means: HashMap<String, HashMap<String, f64>>,
}

impl AverageTable {
    pub fn mean(&self, location: &str, commodity: &str) -> Option<f64> {
        self.means.get(location)?.get(commodity).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Keep the records matching the selection on all three dimensions.
pub fn filter_records(records: &[Record], selection: &Selection) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            selection.commodities.contains(&record.commodity)
                && selection.dates.contains(&record.date)
                && selection.locations.contains(&record.location)
        })
        .cloned()
        .collect()
}

/// Group the records by (location, commodity) and take the unweighted
/// arithmetic mean of each group. Duplicate source rows count like any
/// other observation.
pub fn average_prices(records: &[Record]) -> AverageTable {
    let mut sums: HashMap<(String, String), (f64, usize)> = HashMap::new();
    for record in records {
        let key = (record.location.clone(), record.commodity.clone());
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    let mut means: HashMap<String, HashMap<String, f64>> = HashMap::new();
    for ((location, commodity), (sum, count)) in sums {
        means
            .entry(location)
            .or_default()
            .insert(commodity, sum / count as f64);
    }
    AverageTable { means }
}
