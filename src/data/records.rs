//! Typed rows of the two chart inputs.

use crate::data::loader::{CsvRow, RowRejection, TabularRecord};

/// Whether a price was observed or forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    Actual,
    Predicted,
}

impl Default for PriceKind {
    fn default() -> Self {
        PriceKind::Actual
    }
}

impl PriceKind {
    /// Only the exact value `predicted` marks a forecast; anything else is actual.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("predicted") => PriceKind::Predicted,
            _ => PriceKind::Actual,
        }
    }
}

/// One row of `company_graph_data.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub year: i64,
    pub price: f64,
    pub kind: PriceKind,
}

impl TabularRecord for PricePoint {
    const COLUMNS: &'static [&'static str] = &["year", "price", "kind"];

    fn from_row(row: &CsvRow<'_>) -> Result<Self, RowRejection> {
        Ok(Self {
            year: row.parse("year")?,
            price: row.parse("price")?,
            kind: PriceKind::from_field(row.get("kind")),
        })
    }
}

/// One row of `currency_conversion_data.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionAmount {
    pub currency: String,
    pub amount: f64,
}

impl TabularRecord for ConversionAmount {
    const COLUMNS: &'static [&'static str] = &["currency", "amount"];

    fn from_row(row: &CsvRow<'_>) -> Result<Self, RowRejection> {
        let currency = row.require("currency")?;
        let amount = row.parse("amount")?;

        Ok(Self {
            currency: currency.to_string(),
            amount,
        })
    }
}
