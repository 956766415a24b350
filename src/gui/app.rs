//! Chart Window
//! Native window showing a single chart until the user closes it.

use crate::charts::{Chart, ChartError, ChartPlotter, ChartSurface};
use crate::config::ChartConfig;
use egui::RichText;
use tracing::info;

/// Main application window.
pub struct ChartWindow {
    chart: Chart,
}

impl ChartWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.chart.title()).size(16.0).strong());
            });
            ui.add_space(6.0);
            ChartPlotter::draw(ui, &self.chart);
        });
    }
}

/// Shows charts in a blocking native window.
pub struct NativeSurface {
    window_size: [f32; 2],
}

impl NativeSurface {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            window_size: config.window_size,
        }
    }
}

impl ChartSurface for NativeSurface {
    fn present(&mut self, chart: Chart) -> Result<(), ChartError> {
        let title = chart.title();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_title(title),
            ..Default::default()
        };

        info!(title, "opening chart window");
        eframe::run_native(
            title,
            options,
            Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, chart)))),
        )
        .map_err(|e| ChartError::Window(e.to_string()))?;

        Ok(())
    }
}
