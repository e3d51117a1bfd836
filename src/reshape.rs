use crate::cell::Cell;
use crate::error::TableError;
use chrono::NaiveDate;

/// One price observation, unpivoted from the wide table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub commodity: String,
    pub date: NaiveDate,
    pub location: String,
    pub price: f64,
}

/// Reshape the normalized wide table into flat records.
///
/// Row 0 is the location header: its first two cells are discarded and
/// every remaining cell names a location column. Each data row then
/// contributes one record per location. Emission is row-outer,
/// location-inner, so the output preserves the source row order.
pub fn reshape(table: &[Vec<Cell>]) -> Result<Vec<Record>, TableError> {
    // 1. Consume the header
    if table.is_empty() {
        return Err(TableError::Empty);
    }
    let header = &table[0];
    if header.len() <= 2 {
        return Err(TableError::NoLocations);
    }
    let mut locations = Vec::with_capacity(header.len() - 2);
    for (offset, cell) in header[2..].iter().enumerate() {
        match cell {
            Cell::Text(name) => locations.push(name.clone()),
            other => {
                return Err(TableError::CellType {
                    row: 0,
                    column: 2 + offset,
                    expected: "a location name",
                    found: other.describe(),
                })
            }
        }
    }

    let data_rows = &table[1..];
    if data_rows.is_empty() {
        return Err(TableError::NoRows);
    }

    // 2. Unpivot each data row
    let expected_width = 2 + locations.len();
    let mut records = Vec::with_capacity(data_rows.len() * locations.len());
    for (offset, row) in data_rows.iter().enumerate() {
        let row_idx = offset + 1;
        if row.len() != expected_width {
            return Err(TableError::RowWidth {
                row: row_idx,
                expected: expected_width,
                found: row.len(),
            });
        }

        let commodity = match &row[0] {
            Cell::Text(name) => name.clone(),
            other => {
                return Err(TableError::CellType {
                    row: row_idx,
                    column: 0,
                    expected: "a commodity name",
                    found: other.describe(),
                })
            }
        };
        let date = match &row[1] {
            Cell::Date(date) => *date,
            other => {
                return Err(TableError::CellType {
                    row: row_idx,
                    column: 1,
                    expected: "a date",
                    found: other.describe(),
                })
            }
        };

        for (col_offset, (cell, location)) in row[2..].iter().zip(&locations).enumerate() {
            let price = match cell {
                Cell::Number(price) => *price,
                other => {
                    return Err(TableError::CellType {
                        row: row_idx,
                        column: 2 + col_offset,
                        expected: "a price",
                        found: other.describe(),
                    })
                }
            };
            records.push(Record {
                commodity: commodity.clone(),
                date,
                location: location.clone(),
                price,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::normalize_rows;

    fn make_table(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        let raw: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        normalize_rows(&raw).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%m/%d/%Y").unwrap()
    }

    #[test]
    fn test_reshape_two_rows_two_locations() {
        let table = make_table(&[
            &["", "", "CityA", "CityB"],
            &["Corn", "01/01/2020", "$1.00", "$2.00"],
            &["Corn", "01/02/2020", "$3.00", "$4.00"],
        ]);
        let records = reshape(&table).unwrap();
        assert_eq!(records.len(), 4);
        // Row-outer, location-inner.
        assert_eq!(
            records[0],
            Record {
                commodity: "Corn".to_string(),
                date: date("01/01/2020"),
                location: "CityA".to_string(),
                price: 1.0,
            }
        );
        assert_eq!(records[1].location, "CityB");
        assert_eq!(records[1].price, 2.0);
        assert_eq!(records[2].location, "CityA");
        assert_eq!(records[2].price, 3.0);
        assert_eq!(records[3].location, "CityB");
        assert_eq!(records[3].price, 4.0);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let table = make_table(&[
            &["", "", "CityA", "CityB"],
            &["Corn", "01/01/2020", "$1.00", "$2.00"],
            &["Corn", "01/02/2020", "$3.00"],
        ]);
        match reshape(&table).unwrap_err() {
            TableError::RowWidth { row, expected, found } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_price_must_be_a_number() {
        let table = make_table(&[
            &["", "", "CityA"],
            &["Corn", "01/01/2020", "cheap"],
        ]);
        match reshape(&table).unwrap_err() {
            TableError::CellType { row, column, expected, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, 2);
                assert_eq!(expected, "a price");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_date_column_must_hold_dates() {
        let table = make_table(&[
            &["", "", "CityA"],
            &["Corn", "soon", "$1.00"],
        ]);
        match reshape(&table).unwrap_err() {
            TableError::CellType { row, column, expected, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, 1);
                assert_eq!(expected, "a date");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_header_location_must_be_text() {
        let table = make_table(&[
            &["", "", "CityA", "01/01/2020"],
            &["Corn", "01/01/2020", "$1.00", "$2.00"],
        ]);
        match reshape(&table).unwrap_err() {
            TableError::CellType { row, column, expected, .. } => {
                assert_eq!(row, 0);
                assert_eq!(column, 3);
                assert_eq!(expected, "a location name");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_tables() {
        assert!(matches!(reshape(&[]), Err(TableError::Empty)));

        let header_only = make_table(&[&["", "", "CityA"]]);
        assert!(matches!(reshape(&header_only), Err(TableError::NoRows)));

        let no_locations = make_table(&[&["", ""], &["", ""]]);
        assert!(matches!(
            reshape(&no_locations),
            Err(TableError::NoLocations)
        ));
    }
}
