//! Data module - CSV loading and partitioning

mod loader;
mod processor;
mod records;

pub use loader::{
    missing_file_advisory, CsvRow, DataLoader, LoadedRows, LoaderError, RowRejection,
    TabularRecord,
};
pub use processor::{ChartSeries, CurrencySeries, PriceSeries, MIN_CURRENCIES};
pub use records::{ConversionAmount, PriceKind, PricePoint};
