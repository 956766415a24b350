//! Load → partition → render-or-abort, shared by both chart programs.

use crate::charts::{render_or_abort, Chart, ChartError, ChartSurface, RenderOutcome};
use crate::config::ChartConfig;
use crate::data::{ChartSeries, DataLoader, LoaderError};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// What one run showed the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRun {
    pub outcome: RenderOutcome,
    /// Advisories printed to stdout, in order
    pub advisories: Vec<String>,
}

/// Load the configured CSV as `S` and show it on `surface` if there is anything to draw.
pub fn run_chart<S, C>(config: &ChartConfig, surface: &mut C) -> Result<ChartRun, RunError>
where
    S: ChartSeries,
    Chart: From<S>,
    C: ChartSurface + ?Sized,
{
    let mut advisories = Vec::new();

    let loader = DataLoader::new(&config.csv_path);
    let loaded = loader.load::<S::Record>()?;
    debug!(
        path = %loader.file_path().display(),
        rows_read = loaded.rows_read,
        rows_kept = loaded.records.len(),
        rows_skipped = loaded.rows_skipped(),
        "CSV loaded"
    );
    if let Some(advisory) = loaded.advisory {
        println!("{advisory}");
        advisories.push(advisory);
    }

    let series = S::from_records(loaded.records);
    let outcome = render_or_abort(series, surface)?;
    if let Some(advisory) = outcome.advisory() {
        println!("{advisory}");
        advisories.push(advisory.to_string());
    }

    Ok(ChartRun {
        outcome,
        advisories,
    })
}
