use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use std::{
    fmt::{self, Display},
    fs,
    path::Path,
    time::Duration,
};

use crate::usd::Usd;

/// Name of the results file written to the working directory on every run.
pub const RESULTS_FILE: &str = "SalesResults.txt";

const TITLE: &str = "Sales total report";

/// The outcome of a run: the reconciled total plus run metadata.
///
/// To get the printable text block, use the [`Display`] implementation.
///
/// To persist it, use [`Report::save`], or [`Report::save_to`] for an
/// explicit path.
#[derive(Debug)]
pub struct Report {
    pub total: Usd,
    pub catalogue_file: String,
    pub sales_file: String,
    pub elapsed: Duration,
    pub timestamp: DateTime<Local>,
}

impl Report {
    /// Writes the rendered report to `path`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns any error from creating or writing the file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(&path, self.to_string())
            .with_context(|| format!("writing results to {:?}", path.as_ref()))
    }

    /// Writes the rendered report to [`RESULTS_FILE`] in the current
    /// working directory, overwriting any previous run's results.
    ///
    /// # Errors
    ///
    /// Returns any error from creating or writing the file.
    pub fn save(&self) -> Result<()> {
        self.save_to(RESULTS_FILE)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{:-<width$}", "", width = TITLE.len())?;
        writeln!(f, "Generated: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Catalogue: {}", self.catalogue_file)?;
        writeln!(f, "Sales:     {}", self.sales_file)?;
        writeln!(f)?;
        writeln!(f, "Total cost: {} USD", self.total)?;
        writeln!(f, "Elapsed:    {:.6} seconds", self.elapsed.as_secs_f64())?;
        Ok(())
    }
}
