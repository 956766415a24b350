//! Currency conversion chart.
//!
//! Reads `currency_conversion_data.csv` from the working directory and compares
//! the converted amounts, with the exchange rate when exactly two are given.

use anyhow::{Context, Result};
use chartify_plots::data::CurrencySeries;
use chartify_plots::gui::NativeSurface;
use chartify_plots::{logging, run_chart, ChartConfig};

fn main() -> Result<()> {
    logging::init();

    let config = ChartConfig::currency_conversion();
    let mut surface = NativeSurface::new(&config);

    run_chart::<CurrencySeries, _>(&config, &mut surface)
        .with_context(|| format!("plotting {}", config.csv_path.display()))?;

    Ok(())
}
