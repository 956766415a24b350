//! Charts module - Chart models, drawing and render-or-abort

mod format;
mod plotter;
mod renderer;

pub use format::{exchange_rate, format_amount, format_rate};
pub use plotter::{
    Chart, ChartPlotter, CurrencyBar, CurrencyChart, PriceHistoryChart, RateAnnotation,
    CURRENCY_TITLE, PRICE_HISTORY_TITLE,
};
pub use renderer::{render_or_abort, ChartError, ChartSurface, RenderOutcome, NO_DATA_MESSAGE};
