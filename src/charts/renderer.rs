//! Chart Renderer
//! Decides whether a series is worth drawing and hands it to a display surface.

use crate::charts::Chart;
use crate::data::ChartSeries;
use thiserror::Error;

pub const NO_DATA_MESSAGE: &str = "No data to plot.";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to open chart window: {0}")]
    Window(String),
}

/// Somewhere a finished chart can be shown.
pub trait ChartSurface {
    /// Show the chart, returning once the viewer is done with it.
    fn present(&mut self, chart: Chart) -> Result<(), ChartError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    NoData,
}

impl RenderOutcome {
    /// Message for the user when nothing was drawn.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            RenderOutcome::Rendered => None,
            RenderOutcome::NoData => Some(NO_DATA_MESSAGE),
        }
    }
}

/// Present the series, or report that there is nothing to draw.
pub fn render_or_abort<S, C>(series: S, surface: &mut C) -> Result<RenderOutcome, ChartError>
where
    S: ChartSeries,
    Chart: From<S>,
    C: ChartSurface + ?Sized,
{
    if !series.is_plottable() {
        return Ok(RenderOutcome::NoData);
    }

    surface.present(Chart::from(series))?;
    Ok(RenderOutcome::Rendered)
}
