use chartify_plots::charts::{Chart, ChartError, ChartSurface, RenderOutcome};
use chartify_plots::data::{CurrencySeries, PriceSeries};
use chartify_plots::{run_chart, ChartConfig};
use std::fs;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingSurface {
    shown: Vec<Chart>,
}

impl ChartSurface for RecordingSurface {
    fn present(&mut self, chart: Chart) -> Result<(), ChartError> {
        self.shown.push(chart);
        Ok(())
    }
}

#[test]
fn missing_price_file_renders_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("company_graph_data.csv");
    let config = ChartConfig::company_graph().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<PriceSeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::NoData);
    assert!(surface.shown.is_empty());
    assert_eq!(
        run.advisories,
        vec![
            format!("CSV file not found: {}", path.display()),
            "No data to plot.".to_string(),
        ]
    );
}

#[test]
fn missing_currency_file_renders_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("currency_conversion_data.csv");
    let config = ChartConfig::currency_conversion().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<CurrencySeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::NoData);
    assert!(surface.shown.is_empty());
    assert_eq!(
        run.advisories,
        vec![
            format!("CSV file not found: {}", path.display()),
            "No data to plot.".to_string(),
        ]
    );
}

#[test]
fn only_malformed_rows_renders_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("company_graph_data.csv");
    fs::write(&path, "year,price\nabc,10.5\n").unwrap();
    let config = ChartConfig::company_graph().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<PriceSeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::NoData);
    assert!(surface.shown.is_empty());
    assert_eq!(run.advisories, vec!["No data to plot.".to_string()]);
}

#[test]
fn newline_only_file_renders_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("currency_conversion_data.csv");
    fs::write(&path, "\n").unwrap();
    let config = ChartConfig::currency_conversion().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<CurrencySeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::NoData);
    assert!(surface.shown.is_empty());
    assert_eq!(run.advisories, vec!["No data to plot.".to_string()]);
}

#[test]
fn price_history_is_split_by_kind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("company_graph_data.csv");
    fs::write(
        &path,
        "year,price,kind\n2020,10.5,actual\n2021,11.0,predicted\n2019,oops,actual\n",
    )
    .unwrap();
    let config = ChartConfig::company_graph().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<PriceSeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::Rendered);
    assert!(run.advisories.is_empty());
    match surface.shown.as_slice() {
        [Chart::PriceHistory(chart)] => {
            assert_eq!(chart.actual, vec![[2020.0, 10.5]]);
            assert_eq!(chart.predicted, vec![[2021.0, 11.0]]);
        }
        other => panic!("unexpected charts {other:?}"),
    }
}

#[test]
fn currency_pair_shows_exchange_rate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("currency_conversion_data.csv");
    fs::write(&path, "currency,amount\nUSD,100\nEUR,92.5\n").unwrap();
    let config = ChartConfig::currency_conversion().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<CurrencySeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::Rendered);
    match surface.shown.as_slice() {
        [Chart::CurrencyComparison(chart)] => {
            let rate = chart.rate.as_ref().unwrap();
            assert_eq!(rate.text, "Exchange Rate: 1 USD = 0.9250 EUR");
            assert_eq!(chart.bars.len(), 2);
        }
        other => panic!("unexpected charts {other:?}"),
    }
}

#[test]
fn zero_source_amount_is_not_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("currency_conversion_data.csv");
    fs::write(&path, "currency,amount\nUSD,0\nEUR,50\n").unwrap();
    let config = ChartConfig::currency_conversion().with_csv_path(&path);
    let mut surface = RecordingSurface::default();

    let run = run_chart::<CurrencySeries, _>(&config, &mut surface).unwrap();

    assert_eq!(run.outcome, RenderOutcome::Rendered);
    match surface.shown.as_slice() {
        [Chart::CurrencyComparison(chart)] => {
            assert_eq!(chart.rate.as_ref().unwrap().rate, 0.0);
        }
        other => panic!("unexpected charts {other:?}"),
    }
}
