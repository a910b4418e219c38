use eframe::egui;

use crate::present::ScatterChart;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ProportionPlotApp {
    pub chart: ScatterChart,
}

impl ProportionPlotApp {
    pub fn new(chart: ScatterChart) -> Self {
        Self { chart }
    }

    /// Lay out one frame.
    pub fn show(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.chart);
        });
    }
}

impl eframe::App for ProportionPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
