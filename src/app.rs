use eframe::egui;

use crate::chart::Chart;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SigmaPlotApp {
    pub chart: Chart,
}

impl SigmaPlotApp {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for SigmaPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.chart {
            Chart::Line(chart) => plot::line_plot(ui, chart),
            Chart::Histograms(grid) => plot::histogram_grid(ui, grid),
        });
    }
}
