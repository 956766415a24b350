//! GUI module - Native chart window

mod app;

pub use app::{ChartWindow, NativeSurface};
