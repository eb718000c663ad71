//! The sigma 1 series over x in [0, 0.5].

use sigma_plot::Mode;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sigma_plot::run(Mode::SingleSeries)
}
