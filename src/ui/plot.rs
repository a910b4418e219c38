use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::present::ScatterChart;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart as a single point series with default axes.
pub fn scatter_plot(ui: &mut Ui, chart: &ScatterChart) {
    let points: PlotPoints = chart.drawable_points().collect();

    Plot::new("proportion_plot")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(points).radius(2.5));
        });
}
