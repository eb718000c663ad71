//! All three sigma series as curves over x in [0, 255].

use sigma_plot::Mode;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    sigma_plot::run(Mode::LineOverlay)
}
