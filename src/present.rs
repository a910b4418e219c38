use anyhow::{anyhow, Result};
use eframe::egui;

use crate::app::ProportionPlotApp;
use crate::data::sort::SortedView;

// ---------------------------------------------------------------------------
// ScatterChart – what gets drawn
// ---------------------------------------------------------------------------

/// Parallel position / value series for one scatter plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterChart {
    pub points: Vec<[f64; 2]>,
}

impl ScatterChart {
    pub fn from_view(view: &SortedView) -> Self {
        Self {
            points: view.points(),
        }
    }

    /// Points with a finite value. NaN entries have no place on the y axis.
    pub fn drawable_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().copied().filter(|[_, y]| y.is_finite())
    }
}

// ---------------------------------------------------------------------------
// Presenters
// ---------------------------------------------------------------------------

/// Shows a chart and returns once the display has been torn down.
pub trait Presenter {
    fn present(&mut self, chart: ScatterChart) -> Result<()>;
}

/// Opens a native window and blocks until the user closes it.
pub struct WindowPresenter {
    title: String,
}

impl WindowPresenter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Presenter for WindowPresenter {
    fn present(&mut self, chart: ScatterChart) -> Result<()> {
        log::info!("Opening plot window with {} points", chart.points.len());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 600.0])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        // run_native returns only after the window is closed.
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(ProportionPlotApp::new(chart)))),
        )
        .map_err(|e| anyhow!("plot window failed: {e}"))?;

        log::debug!("Plot window closed");
        Ok(())
    }
}

/// Skips the display entirely, for environments without a screen.
#[derive(Debug, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self, chart: ScatterChart) -> Result<()> {
        log::info!(
            "Headless mode: skipping plot of {} points",
            chart.drawable_points().count()
        );
        Ok(())
    }
}
