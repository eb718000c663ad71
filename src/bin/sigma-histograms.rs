//! Histograms of the three sigma series, side by side.

use sigma_plot::Mode;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sigma_plot::run(Mode::HistogramGrid)
}
