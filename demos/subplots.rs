//! Example: Subplot grid
//!
//! What it demonstrates
//! - Laying out a 2x2 grid with `subplot` and giving each cell its own
//!   title, labels and limits.
//! - Drawing centered text with `LabelStyle`.
//!
//! How to run
//! ```bash
//! cargo run --example subplots
//! ```

use demofig::{AxesConfig, LabelStyle};

fn main() -> eframe::Result<()> {
    demofig::figure(AxesConfig::new()).expect("valid figure configuration");

    for index in 1..=4 {
        demofig::subplot(
            2,
            2,
            index,
            AxesConfig::new()
                .with_title(format!("cell {index}"))
                .with_xlim(0.0, 1.0)
                .with_ylim(0.0, 1.0),
        )
        .expect("index is within the grid");
        demofig::draw_text(0.5, 0.5, format!("subplot {index}"), LabelStyle::default());
    }

    demofig::show_current("subplot demo")
}
