//! Data Processor Module
//! Partitions loaded records into the co-indexed sequences each chart plots.

use crate::data::loader::TabularRecord;
use crate::data::records::{ConversionAmount, PriceKind, PricePoint};

/// Bars needed before a currency comparison means anything.
pub const MIN_CURRENCIES: usize = 2;

/// Plot-ready sequences built from one kind of record.
pub trait ChartSeries: Sized {
    type Record: TabularRecord;

    /// Build the sequences, keeping source order.
    fn from_records(records: Vec<Self::Record>) -> Self;

    /// Whether there is enough data to draw anything.
    fn is_plottable(&self) -> bool;
}

/// Price history split into observed and forecast series.
///
/// `years_actual[i]` pairs with `prices_actual[i]`, and likewise for the
/// predicted pair. Years are in file order, not sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub years_actual: Vec<i64>,
    pub prices_actual: Vec<f64>,
    pub years_predicted: Vec<i64>,
    pub prices_predicted: Vec<f64>,
}

impl PriceSeries {
    pub fn push(&mut self, point: PricePoint) {
        match point.kind {
            PriceKind::Predicted => {
                self.years_predicted.push(point.year);
                self.prices_predicted.push(point.price);
            }
            PriceKind::Actual => {
                self.years_actual.push(point.year);
                self.prices_actual.push(point.price);
            }
        }
    }

    pub fn has_actual(&self) -> bool {
        !self.years_actual.is_empty()
    }

    pub fn has_predicted(&self) -> bool {
        !self.years_predicted.is_empty()
    }

    /// `[year, price]` pairs of the observed series.
    pub fn actual_points(&self) -> Vec<[f64; 2]> {
        Self::zip_points(&self.years_actual, &self.prices_actual)
    }

    /// `[year, price]` pairs of the forecast series.
    pub fn predicted_points(&self) -> Vec<[f64; 2]> {
        Self::zip_points(&self.years_predicted, &self.prices_predicted)
    }

    fn zip_points(years: &[i64], prices: &[f64]) -> Vec<[f64; 2]> {
        years
            .iter()
            .zip(prices)
            .map(|(&year, &price)| [year as f64, price])
            .collect()
    }
}

impl ChartSeries for PriceSeries {
    type Record = PricePoint;

    fn from_records(records: Vec<PricePoint>) -> Self {
        let mut series = Self::default();
        for point in records {
            series.push(point);
        }
        series
    }

    fn is_plottable(&self) -> bool {
        self.has_actual() || self.has_predicted()
    }
}

/// Currency codes with the amount converted into each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencySeries {
    pub currencies: Vec<String>,
    pub amounts: Vec<f64>,
}

impl ChartSeries for CurrencySeries {
    type Record = ConversionAmount;

    fn from_records(records: Vec<ConversionAmount>) -> Self {
        let (currencies, amounts) = records
            .into_iter()
            .map(|record| (record.currency, record.amount))
            .unzip();

        Self {
            currencies,
            amounts,
        }
    }

    fn is_plottable(&self) -> bool {
        self.currencies.len() >= MIN_CURRENCIES && self.amounts.len() >= MIN_CURRENCIES
    }
}
