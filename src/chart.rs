use crate::aggregate::AverageTable;
use crate::select::Selection;
use serde::Serialize;

/// Everything the rendering sink needs to draw the comparison chart.
/// Built entirely from the selection and the average table; the sink
/// adds no data of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    /// Category axis entries, one per selected commodity, in the order
    /// the user picked them.
    pub categories: Vec<String>,
    /// One bar series per selected location, same order story.
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Assemble the grouped-bar spec. A (location, commodity) pair with no
/// average gets a zero-height bar; on the chart that is indistinguishable
/// from a true $0.00 mean, and deliberately so.
pub fn build_chart(selection: &Selection, averages: &AverageTable) -> ChartSpec {
    let title = match (selection.dates.first(), selection.dates.last()) {
        (Some(start), Some(end)) => format!(
            "Produce Prices from {} through {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        _ => "Produce Prices".to_string(),
    };

    let categories = selection.commodities.clone();
    let series = selection
        .locations
        .iter()
        .map(|location| Series {
            label: location.clone(),
            values: categories
                .iter()
                .map(|commodity| averages.mean(location, commodity).unwrap_or(0.0))
                .collect(),
        })
        .collect();

    ChartSpec {
        title,
        category_label: "Product".to_string(),
        value_label: "Average Price".to_string(),
        categories,
        series,
    }
}
