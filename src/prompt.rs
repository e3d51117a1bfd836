use crate::domain::Domains;
use crate::select::{resolve_date_range, resolve_subset, Selection};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const NAME_COLUMN_WIDTH: usize = 20;
const DATE_COLUMN_WIDTH: usize = 10;
const COLUMNS_PER_LINE: usize = 3;

/// The interactive selection dialog over any input/output pair, so the
/// whole exchange can run against in-memory buffers in tests.
///
/// Recoverable selection errors are reported and the prompt repeats;
/// end of input mid-dialog is fatal.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Walk the user through the three selections.
    pub fn run_selection(&mut self, domains: &Domains) -> Result<Selection> {
        self.banner()?;

        writeln!(self.output, "\nSELECT PRODUCTS BY NUMBER...")?;
        self.print_columns(&domains.commodities, NAME_COLUMN_WIDTH)?;
        let commodities = self.pick_subset(
            "Enter product numbers separated by spaces: ",
            &domains.commodities,
        )?;
        writeln!(self.output, "Selected products: {}", commodities.join(" "))?;

        writeln!(self.output, "\nSELECT DATE RANGE BY NUMBER...")?;
        let date_labels: Vec<String> = domains
            .dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect();
        self.print_columns(&date_labels, DATE_COLUMN_WIDTH)?;
        let dates = self.pick_date_range(&domains.dates)?;
        if let (Some(start), Some(end)) = (dates.first(), dates.last()) {
            writeln!(
                self.output,
                "Dates from {} to {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )?;
        }

        writeln!(self.output, "\nSELECT LOCATIONS BY NUMBER...")?;
        self.print_columns(&domains.locations, NAME_COLUMN_WIDTH)?;
        let locations = self.pick_subset(
            "\nEnter location numbers separated by spaces: ",
            &domains.locations,
        )?;
        writeln!(self.output, "Selected locations: {}", locations.join(" "))?;

        Ok(Selection {
            commodities,
            dates,
            locations,
        })
    }

    /// Report how many records survived the filter.
    pub fn report_count(&mut self, count: usize) -> Result<()> {
        writeln!(self.output, "{} records have been selected", count)?;
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        let rule = "=".repeat(30);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Analysis of Commodity Data")?;
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    /// Indexed listing, three columns per line.
    fn print_columns(&mut self, items: &[String], column_width: usize) -> Result<()> {
        for (idx, item) in items.iter().enumerate() {
            write!(
                self.output,
                "[{:>2}] {:<width$}",
                idx,
                item,
                width = column_width
            )?;
            if (idx + 1) % COLUMNS_PER_LINE == 0 {
                writeln!(self.output)?;
            }
        }
        if items.len() % COLUMNS_PER_LINE != 0 {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn pick_subset(&mut self, prompt: &str, domain: &[String]) -> Result<Vec<String>> {
        loop {
            let line = self.prompt_line(prompt)?;
            match resolve_subset(&line, domain) {
                Ok(picked) => return Ok(picked),
                Err(err) => writeln!(self.output, "invalid selection: {}", err)?,
            }
        }
    }

    fn pick_date_range(&mut self, dates: &[NaiveDate]) -> Result<Vec<NaiveDate>> {
        loop {
            let line =
                self.prompt_line("\nEnter start/end date numbers separated by a space: ")?;
            match resolve_date_range(&line, dates) {
                Ok(range) => return Ok(range),
                Err(err) => writeln!(self.output, "invalid selection: {}", err)?,
            }
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            bail!("Input ended before the selection was completed");
        }
        Ok(line.trim().to_string())
    }
}
