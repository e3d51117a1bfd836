use crate::error::{CellError, TableError};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// A normalized table value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Cell {
    /// Classify and convert one raw cell.
    ///
    /// A `$` anywhere marks a currency amount: every `$` is stripped and
    /// the remainder must parse as a number. A `/` marks a date in
    /// MM/DD/YYYY. Everything else passes through as text. The checks are
    /// ordered, so a malformed currency cell never falls back to text.
    pub fn parse(raw: &str) -> Result<Cell, CellError> {
        if raw.contains('$') {
            let stripped = raw.replace('$', "");
            return stripped
                .trim()
                .parse::<f64>()
                .map(Cell::Number)
                .map_err(|_| CellError::Currency(raw.to_string()));
        }
        if raw.contains('/') {
            return NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(Cell::Date)
                .map_err(|_| CellError::Date(raw.to_string()));
        }
        Ok(Cell::Text(raw.to_string()))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Number(_) => "a number",
            Cell::Date(_) => "a date",
            Cell::Text(_) => "text",
        }
    }

    /// Cell rendered for error messages, e.g. `text "Corn"`.
    pub fn describe(&self) -> String {
        match self {
            Cell::Number(n) => format!("the number {}", n),
            Cell::Date(d) => format!("the date {}", d.format("%Y-%m-%d")),
            Cell::Text(t) => format!("text {:?}", t),
        }
    }
}

/// Normalize every cell of a raw table, keeping coordinates for errors.
/// Any malformed cell aborts the load.
pub fn normalize_rows(rows: &[Vec<String>]) -> Result<Vec<Vec<Cell>>, TableError> {
    let mut normalized = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (col_idx, raw) in row.iter().enumerate() {
            let cell = Cell::parse(raw).map_err(|source| TableError::Format {
                row: row_idx,
                column: col_idx,
                source,
            })?;
            cells.push(cell);
        }
        normalized.push(cells);
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_cells() {
        assert_eq!(Cell::parse("$1.00").unwrap(), Cell::Number(1.0));
        assert_eq!(Cell::parse("$12.5").unwrap(), Cell::Number(12.5));
        // Position of the sign does not matter.
        assert_eq!(Cell::parse("12.50$").unwrap(), Cell::Number(12.5));
        assert_eq!(Cell::parse("$0.00").unwrap(), Cell::Number(0.0));
    }

    #[test]
    fn test_malformed_currency() {
        assert_eq!(
            Cell::parse("$1.2.3"),
            Err(CellError::Currency("$1.2.3".to_string()))
        );
        assert_eq!(Cell::parse("$"), Err(CellError::Currency("$".to_string())));
        assert_eq!(
            Cell::parse("$1,000.50"),
            Err(CellError::Currency("$1,000.50".to_string()))
        );
    }

    #[test]
    fn test_date_cells() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(Cell::parse("01/15/2020").unwrap(), Cell::Date(d));
        // Unpadded month and day are accepted.
        let d = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        assert_eq!(Cell::parse("1/2/2020").unwrap(), Cell::Date(d));
    }

    #[test]
    fn test_malformed_date() {
        assert_eq!(
            Cell::parse("13/45/2020"),
            Err(CellError::Date("13/45/2020".to_string()))
        );
        assert_eq!(
            Cell::parse("2020/01/15"),
            Err(CellError::Date("2020/01/15".to_string()))
        );
        assert_eq!(Cell::parse("a/b"), Err(CellError::Date("a/b".to_string())));
    }

    #[test]
    fn test_currency_takes_precedence_over_date() {
        // '$' wins, so the remainder must be a number, not a date.
        assert_eq!(
            Cell::parse("$1/2"),
            Err(CellError::Currency("$1/2".to_string()))
        );
    }

    #[test]
    fn test_text_cells() {
        assert_eq!(Cell::parse("Corn").unwrap(), Cell::Text("Corn".to_string()));
        assert_eq!(Cell::parse("").unwrap(), Cell::Text(String::new()));
        assert_eq!(
            Cell::parse("1.50").unwrap(),
            Cell::Text("1.50".to_string())
        );
    }

    #[test]
    fn test_normalize_rows_coordinates() {
        let rows = vec![
            vec!["".to_string(), "".to_string(), "Denver".to_string()],
            vec!["Corn".to_string(), "01/01/2020".to_string(), "$oops".to_string()],
        ];
        let err = normalize_rows(&rows).unwrap_err();
        match err {
            TableError::Format { row, column, source } => {
                assert_eq!(row, 1);
                assert_eq!(column, 2);
                assert_eq!(source, CellError::Currency("$oops".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_rows_ok() {
        let rows = vec![vec![
            "Corn".to_string(),
            "01/01/2020".to_string(),
            "$1.00".to_string(),
        ]];
        let cells = normalize_rows(&rows).unwrap();
        assert_eq!(cells[0][0], Cell::Text("Corn".to_string()));
        assert!(matches!(cells[0][1], Cell::Date(_)));
        assert_eq!(cells[0][2], Cell::Number(1.0));
    }
}
