//! Per-chart settings: where the data lives and how big the window is.

use std::path::PathBuf;

pub const COMPANY_GRAPH_CSV: &str = "company_graph_data.csv";
pub const CURRENCY_CONVERSION_CSV: &str = "currency_conversion_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Resolved against the working directory when relative
    pub csv_path: PathBuf,
    /// Window inner size in points
    pub window_size: [f32; 2],
}

impl ChartConfig {
    pub fn company_graph() -> Self {
        Self {
            csv_path: PathBuf::from(COMPANY_GRAPH_CSV),
            window_size: [800.0, 400.0],
        }
    }

    pub fn currency_conversion() -> Self {
        Self {
            csv_path: PathBuf::from(CURRENCY_CONVERSION_CSV),
            window_size: [1000.0, 600.0],
        }
    }

    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }
}
