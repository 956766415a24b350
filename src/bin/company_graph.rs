//! Company price history chart.
//!
//! Reads `company_graph_data.csv` from the working directory and shows actual
//! prices alongside next-year predictions.

use anyhow::{Context, Result};
use chartify_plots::data::PriceSeries;
use chartify_plots::gui::NativeSurface;
use chartify_plots::{logging, run_chart, ChartConfig};

fn main() -> Result<()> {
    logging::init();

    let config = ChartConfig::company_graph();
    let mut surface = NativeSurface::new(&config);

    run_chart::<PriceSeries, _>(&config, &mut surface)
        .with_context(|| format!("plotting {}", config.csv_path.display()))?;

    Ok(())
}
