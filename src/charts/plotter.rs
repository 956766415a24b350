//! Chart Plotter Module
//! Turns partitioned series into chart models and draws them with egui_plot.

use crate::charts::format::{exchange_rate, format_amount, format_rate};
use crate::data::{CurrencySeries, PriceSeries};
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points,
    Text,
};

pub const PRICE_HISTORY_TITLE: &str = "Company Price History and Next-Year Prediction";
pub const CURRENCY_TITLE: &str = "Currency Conversion Comparison";

pub const ACTUAL_LABEL: &str = "Actual";
pub const PREDICTED_LABEL: &str = "Predicted next year";

pub const ACTUAL_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue
pub const PREDICTED_COLOR: Color32 = Color32::from_rgb(214, 39, 40); // Red

/// Bar colors, cycled per currency
pub const BAR_PALETTE: [Color32; 2] = [
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(52, 152, 219), // Blue
];
const BAR_OPACITY: f32 = 0.7;
const BAR_WIDTH: f64 = 0.6;

/// Wheat at half opacity
const RATE_BOX_COLOR: Color32 = Color32::from_rgba_premultiplied(122, 111, 89, 128);

/// Fraction of the tallest bar at which the exchange rate is written.
pub const RATE_HEIGHT_FACTOR: f64 = 0.9;

/// A chart ready to be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    PriceHistory(PriceHistoryChart),
    CurrencyComparison(CurrencyChart),
}

impl Chart {
    pub fn title(&self) -> &'static str {
        match self {
            Chart::PriceHistory(_) => PRICE_HISTORY_TITLE,
            Chart::CurrencyComparison(_) => CURRENCY_TITLE,
        }
    }
}

/// Observed prices as a solid line, forecasts as a dashed one.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistoryChart {
    pub actual: Vec<[f64; 2]>,
    pub predicted: Vec<[f64; 2]>,
}

impl From<PriceSeries> for PriceHistoryChart {
    fn from(series: PriceSeries) -> Self {
        Self {
            actual: series.actual_points(),
            predicted: series.predicted_points(),
        }
    }
}

impl From<PriceSeries> for Chart {
    fn from(series: PriceSeries) -> Self {
        Chart::PriceHistory(series.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyBar {
    pub currency: String,
    pub amount: f64,
    /// Amount as printed above the bar
    pub label: String,
}

/// Exchange rate text written between the two bars.
#[derive(Debug, Clone, PartialEq)]
pub struct RateAnnotation {
    pub rate: f64,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl RateAnnotation {
    /// Rate from the first currency into the second.
    pub fn between(source: &CurrencyBar, target: &CurrencyBar) -> Self {
        let rate = exchange_rate(source.amount, target.amount);
        let text = format!(
            "Exchange Rate: 1 {} = {} {}",
            source.currency,
            format_rate(rate),
            target.currency
        );

        Self {
            rate,
            text,
            x: 0.5,
            y: source.amount.max(target.amount) * RATE_HEIGHT_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyChart {
    pub bars: Vec<CurrencyBar>,
    /// Present only for an exact source/target pair
    pub rate: Option<RateAnnotation>,
}

impl From<CurrencySeries> for CurrencyChart {
    fn from(series: CurrencySeries) -> Self {
        let bars: Vec<CurrencyBar> = series
            .currencies
            .into_iter()
            .zip(series.amounts)
            .map(|(currency, amount)| CurrencyBar {
                label: format_amount(amount),
                currency,
                amount,
            })
            .collect();

        let rate = match bars.as_slice() {
            [source, target] => Some(RateAnnotation::between(source, target)),
            _ => None,
        };

        Self { bars, rate }
    }
}

impl From<CurrencySeries> for Chart {
    fn from(series: CurrencySeries) -> Self {
        Chart::CurrencyComparison(series.into())
    }
}

/// Draws chart models with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
        match chart {
            Chart::PriceHistory(price) => Self::draw_price_history(ui, price),
            Chart::CurrencyComparison(currency) => Self::draw_currency_comparison(ui, currency),
        }
    }

    /// Bar color for the bar at `index`.
    pub fn bar_color(index: usize) -> Color32 {
        BAR_PALETTE[index % BAR_PALETTE.len()].gamma_multiply(BAR_OPACITY)
    }

    /// Overlaid line chart: X-axis year, Y-axis price
    pub fn draw_price_history(ui: &mut egui::Ui, chart: &PriceHistoryChart) {
        Plot::new("price_history")
            .height(ui.available_height())
            .legend(Legend::default())
            .x_axis_label("Year")
            .y_axis_label("Price")
            .show_grid(true)
            .show(ui, |plot_ui| {
                if !chart.actual.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(chart.actual.clone()))
                            .color(ACTUAL_COLOR)
                            .width(2.0)
                            .name(ACTUAL_LABEL),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(chart.actual.clone()))
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(4.0)
                            .color(ACTUAL_COLOR)
                            .name(ACTUAL_LABEL),
                    );
                }

                if !chart.predicted.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(chart.predicted.clone()))
                            .color(PREDICTED_COLOR)
                            .width(2.0)
                            .style(LineStyle::dashed_loose())
                            .name(PREDICTED_LABEL),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(chart.predicted.clone()))
                            .shape(MarkerShape::Asterisk)
                            .radius(6.0)
                            .color(PREDICTED_COLOR)
                            .name(PREDICTED_LABEL),
                    );
                }
            });
    }

    /// Bar chart: one bar per currency, amount printed above each bar
    pub fn draw_currency_comparison(ui: &mut egui::Ui, chart: &CurrencyChart) {
        let x_labels: Vec<String> = chart.bars.iter().map(|bar| bar.currency.clone()).collect();
        let max_amount = chart
            .bars
            .iter()
            .map(|bar| bar.amount)
            .fold(0.0_f64, f64::max);

        Plot::new("currency_comparison")
            .height(ui.available_height())
            .x_axis_label("Currency")
            .y_axis_label("Amount")
            .show_grid([false, true])
            .include_y(0.0)
            .include_y(max_amount * 1.1)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        Bar::new(i as f64, bar.amount)
                            .name(&bar.currency)
                            .width(BAR_WIDTH)
                            .fill(Self::bar_color(i))
                            .stroke(Stroke::new(1.5, Color32::BLACK))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));

                for (i, bar) in chart.bars.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, bar.amount),
                            RichText::new(&bar.label).strong().size(11.0),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }

                if let Some(rate) = &chart.rate {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(rate.x, rate.y),
                            RichText::new(&rate.text)
                                .size(10.0)
                                .background_color(RATE_BOX_COLOR),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency_series(pairs: &[(&str, f64)]) -> CurrencySeries {
        CurrencySeries {
            currencies: pairs.iter().map(|(code, _)| code.to_string()).collect(),
            amounts: pairs.iter().map(|(_, amount)| *amount).collect(),
        }
    }

    #[test]
    fn price_chart_keeps_both_series() {
        let series = PriceSeries {
            years_actual: vec![2020, 2021],
            prices_actual: vec![10.5, 11.25],
            years_predicted: vec![2022],
            prices_predicted: vec![12.0],
        };

        let chart = PriceHistoryChart::from(series);

        assert_eq!(chart.actual, vec![[2020.0, 10.5], [2021.0, 11.25]]);
        assert_eq!(chart.predicted, vec![[2022.0, 12.0]]);
    }

    #[test]
    fn two_currencies_get_a_rate_annotation() {
        let chart = CurrencyChart::from(currency_series(&[("USD", 100.0), ("EUR", 92.5)]));

        let rate = chart.rate.expect("two bars carry a rate");
        assert!((rate.rate - 0.925).abs() < 1e-12);
        assert_eq!(rate.text, "Exchange Rate: 1 USD = 0.9250 EUR");
        assert_eq!(rate.x, 0.5);
        assert!((rate.y - 90.0).abs() < 1e-9);

        let labels: Vec<&str> = chart.bars.iter().map(|bar| bar.label.as_str()).collect();
        assert_eq!(labels, vec!["100.00", "92.50"]);
    }

    #[test]
    fn zero_source_amount_gives_zero_rate() {
        let chart = CurrencyChart::from(currency_series(&[("USD", 0.0), ("EUR", 50.0)]));

        let rate = chart.rate.expect("two bars carry a rate");
        assert_eq!(rate.rate, 0.0);
        assert_eq!(rate.text, "Exchange Rate: 1 USD = 0.0000 EUR");
        assert!((rate.y - 45.0).abs() < 1e-9);
    }

    #[test]
    fn more_than_two_currencies_have_no_rate() {
        let chart = CurrencyChart::from(currency_series(&[
            ("USD", 100.0),
            ("EUR", 92.5),
            ("JPY", 15000.0),
        ]));

        assert_eq!(chart.bars.len(), 3);
        assert_eq!(chart.bars[2].label, "15,000.00");
        assert!(chart.rate.is_none());
    }

    #[test]
    fn bar_colors_cycle() {
        assert_eq!(ChartPlotter::bar_color(0), ChartPlotter::bar_color(2));
        assert_ne!(ChartPlotter::bar_color(0), ChartPlotter::bar_color(1));
    }

    #[test]
    fn titles_follow_chart_kind() {
        let price = Chart::from(PriceSeries::default());
        let currency = Chart::from(CurrencySeries::default());

        assert_eq!(price.title(), PRICE_HISTORY_TITLE);
        assert_eq!(currency.title(), CURRENCY_TITLE);
    }
}
