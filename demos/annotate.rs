//! Example: Annotated equilibrium point
//!
//! What it demonstrates
//! - Creating a figure with a title, axis labels and explicit limits.
//! - Marking points with style specs and annotating one of them with a
//!   percentage offset so the label clears the marker.
//!
//! How to run
//! ```bash
//! cargo run --example annotate
//! ```
//! A window opens showing a few marked points and one annotated point.

use demofig::{Annotation, AxesConfig};

fn main() -> eframe::Result<()> {
    demofig::figure(
        AxesConfig::new()
            .with_title("Equilibrium of supply and demand")
            .with_labels("quantity", "price")
            .with_xlim(0.0, 10.0)
            .with_ylim(0.0, 5.0),
    )
    .expect("valid figure configuration");

    // A few plain markers along the demand curve.
    for (x, y) in [(1.0, 4.0), (3.0, 3.0), (7.0, 1.5)] {
        demofig::mark_point(x, y, "k.", None).expect("valid style spec");
    }

    // The interesting point, marked and labeled with the default 5% offset.
    demofig::annotate(5.0, 2.2, "q* = 5", &Annotation::default())
        .expect("valid annotation");

    demofig::show_current("annotate demo")
}
