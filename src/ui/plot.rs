use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Line, Plot, PlotPoints};

use crate::chart::{HistogramGrid, HistogramPanel, LegendPosition, LineChart};
use crate::color::series_color;

// ---------------------------------------------------------------------------
// Line chart (central panel)
// ---------------------------------------------------------------------------

fn legend_corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::UpperLeft => Corner::LeftTop,
        LegendPosition::UpperRight => Corner::RightTop,
    }
}

/// Render every curve of `chart` on one set of axes.
pub fn line_plot(ui: &mut Ui, chart: &LineChart) {
    let mut plot = Plot::new("line_plot")
        .legend(Legend::default().position(legend_corner(chart.legend)))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if let Some(label) = &chart.x_label {
        plot = plot.x_axis_label(label.as_str());
    }
    if let Some(label) = &chart.y_label {
        plot = plot.y_axis_label(label.as_str());
    }

    plot.show(ui, |plot_ui| {
        for (i, curve) in chart.curves.iter().enumerate() {
            let points: PlotPoints = curve.points().collect();
            let line = Line::new(points)
                .name(&curve.label)
                .color(series_color(i))
                .width(1.5);
            plot_ui.line(line);
        }
    });
}

// ---------------------------------------------------------------------------
// Histogram grid
// ---------------------------------------------------------------------------

/// Render the panels side by side with minimal spacing between them.
pub fn histogram_grid(ui: &mut Ui, grid: &HistogramGrid) {
    if grid.panels.is_empty() {
        return;
    }
    ui.spacing_mut().item_spacing.x = 2.0;
    ui.columns(grid.panels.len(), |columns: &mut [Ui]| {
        for (i, (col, panel)) in columns.iter_mut().zip(&grid.panels).enumerate() {
            histogram_plot(col, i, panel);
        }
    });
}

/// An inverted panel draws its bars with negative heights and labels the
/// ticks by magnitude, so counts read top-down.
fn histogram_plot(ui: &mut Ui, index: usize, panel: &HistogramPanel) {
    let sign = if panel.inverted_y { -1.0 } else { 1.0 };
    let color = series_color(index);

    let bars: Vec<Bar> = panel
        .histogram
        .bars()
        .map(|(centre, width, count)| Bar::new(centre, sign * count as f64).width(width))
        .collect();

    let mut chart = BarChart::new(bars).name(&panel.label).color(color);

    let mut plot = Plot::new(format!("histogram_{index}"))
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if panel.inverted_y {
        let label = panel.label.clone();
        chart = chart.element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
            hover_text(&label, bar.argument, bar.value)
        }));
        plot = plot
            .y_axis_formatter(|mark: GridMark, _range| {
                format_count(mark.value.abs(), mark.step_size)
            })
            .label_formatter(|name, value| hover_text(name, value.x, value.y));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

fn format_count(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Hover text for a histogram bar or cursor position; counts show as magnitudes.
fn hover_text(name: &str, x: f64, count: f64) -> String {
    format!("{name}\nx = {x:.3}\ncount = {:.0}", count.abs())
}
