//! Chartify Plots - price history and currency conversion charts from CSV data
//!
//! Both programs run the same pipeline: load typed rows from a CSV file,
//! partition them into plot series, then draw the chart or print
//! `No data to plot.` when there is nothing to show.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod pipeline;

pub use config::ChartConfig;
pub use pipeline::{run_chart, ChartRun, RunError};
