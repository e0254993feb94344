//! Example: Quick static plot
//!
//! What it demonstrates
//! - `qplot`: one call to write a themed SVG line chart, no window needed.
//! - Relative file names resolve into the configured save directory
//!   (`./figures` by default).
//!
//! How to run
//! ```bash
//! cargo run --example qplot
//! ```

use std::path::Path;

use demofig::AxesConfig;

fn main() -> demofig::Result<()> {
    let xs: Vec<f64> = (0..=200).map(|i| f64::from(i) * 0.05).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (-x / 4.0).exp() * x.sin()).collect();

    let out = demofig::qplot(
        &xs,
        &ys,
        &AxesConfig::new()
            .with_title("Damped oscillation")
            .with_labels("t", "amplitude"),
        Path::new("damped_oscillation"),
    )?;
    println!("wrote {}", out.display());
    Ok(())
}
