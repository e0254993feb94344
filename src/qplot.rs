//! Quick static plots through plotters, with a fixed theme.
//!
//! [`qplot`] is pure delegation: it hands an x/y series plus a label/limit
//! configuration straight to a plotters SVG chart and layers the house theme
//! (white background, light grid, default line width/font size) on top.
//! [`save_figure_svg`] writes a retained [`Figure`] the same way, honoring
//! the figure's background option.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::config::{defaults, AxesConfig};
use crate::error::{Error, Result};
use crate::figure::{Axes, DrawItem, Figure};

// Fixed theme constants.
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(217, 217, 217);

/// Draw `ys` against `xs` as a single line chart and write it as SVG.
///
/// A relative `path` without a parent directory resolves into the global
/// save directory (created on demand). Returns the path written.
pub fn qplot(xs: &[f64], ys: &[f64], config: &AxesConfig, path: &Path) -> Result<PathBuf> {
    if xs.len() != ys.len() {
        return Err(Error::InvalidArgument(format!(
            "qplot needs equal-length series, got {} x and {} y values",
            xs.len(),
            ys.len()
        )));
    }
    config.validate()?;
    let d = defaults();
    let out = resolve_save_path(path)?;
    // The backend borrows its path for the drawing area's lifetime; give it
    // its own copy so `out` can be returned.
    let target = out.clone();
    let (w, h) = d.figure_size;
    let root = SVGBackend::new(&target, (w as u32, h as u32)).into_drawing_area();
    root.fill(&WHITE).map_err(to_backend_err)?;

    let (x0, x1) = config.xlim.unwrap_or_else(|| span(xs));
    let (y0, y1) = config.ylim.unwrap_or_else(|| span(ys));

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60);
    if let Some(title) = &config.title {
        builder.caption(title, ("sans-serif", d.font_size * 1.2));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(to_backend_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(GRID_COLOR.mix(0.5))
        .bold_line_style(GRID_COLOR)
        .label_style(("sans-serif", d.font_size * 0.8));
    if let Some(xlabel) = &config.xlabel {
        mesh.x_desc(xlabel.clone());
    }
    if let Some(ylabel) = &config.ylabel {
        mesh.y_desc(ylabel.clone());
    }
    mesh.draw().map_err(to_backend_err)?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(ys.iter().copied()),
            LINE_COLOR.stroke_width(d.line_width.round() as u32),
        ))
        .map_err(to_backend_err)?;

    root.present().map_err(to_backend_err)?;
    Ok(out)
}

/// Write a retained figure as SVG: one chart per subplot cell, markers as
/// filled circles, labels as text.
pub fn save_figure_svg(fig: &Figure, path: &Path) -> Result<PathBuf> {
    let d = defaults();
    let out = resolve_save_path(path)?;
    let target = out.clone();
    let (w, h) = fig.options.size.unwrap_or(d.figure_size);
    let root = SVGBackend::new(&target, (w as u32, h as u32)).into_drawing_area();
    let background = match fig.options.background {
        Some(code) => {
            let (r, g, b) = code.rgb();
            RGBColor(r, g, b)
        }
        None => WHITE,
    };
    root.fill(&background).map_err(to_backend_err)?;

    let (rows, cols) = fig.grid();
    let cells = root.split_evenly((rows, cols));
    for (ax, cell) in fig.all_axes().iter().zip(cells) {
        draw_axes_svg(ax, &cell, d.font_size)?;
    }
    root.present().map_err(to_backend_err)?;
    Ok(out)
}

fn draw_axes_svg(
    ax: &Axes,
    area: &DrawingArea<SVGBackend, plotters::coord::Shift>,
    font_size: f32,
) -> Result<()> {
    let (x0, x1) = ax.xlim();
    let (y0, y1) = ax.ylim();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50);
    if let Some(title) = &ax.config.title {
        builder.caption(title, ("sans-serif", font_size * 1.2));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(to_backend_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(GRID_COLOR.mix(0.5))
        .bold_line_style(GRID_COLOR)
        .label_style(("sans-serif", font_size * 0.8));
    if let Some(xlabel) = &ax.config.xlabel {
        mesh.x_desc(xlabel.clone());
    }
    if let Some(ylabel) = &ax.config.ylabel {
        mesh.y_desc(ylabel.clone());
    }
    mesh.draw().map_err(to_backend_err)?;

    for item in ax.items() {
        match item {
            DrawItem::Marker { x, y, spec, size } => {
                let (r, g, b) = spec
                    .color
                    .unwrap_or(crate::style::ColorCode::Black)
                    .rgb();
                let style = RGBColor(r, g, b).filled();
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (*x, *y),
                        (size * 0.5) as i32,
                        style,
                    )))
                    .map_err(to_backend_err)?;
            }
            DrawItem::Label { x, y, text, style } => {
                let (r, g, b) = style
                    .color
                    .unwrap_or(crate::style::ColorCode::Black)
                    .rgb();
                let text_style = ("sans-serif", style.font_size)
                    .into_font()
                    .color(&RGBColor(r, g, b));
                chart
                    .draw_series(std::iter::once(plotters::element::Text::new(
                        text.clone(),
                        (*x, *y),
                        text_style,
                    )))
                    .map_err(to_backend_err)?;
            }
        }
    }
    Ok(())
}

/// Data span with a small pad, for auto-ranged quick plots.
fn span(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.iter().copied().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Resolve a save path: bare relative file names land in the configured save
/// directory; an `.svg` extension is added when missing.
fn resolve_save_path(path: &Path) -> Result<PathBuf> {
    let mut out = if path.is_relative() && path.parent() == Some(Path::new("")) {
        let dir = defaults().save_dir;
        std::fs::create_dir_all(&dir).map_err(|e| Error::Io(e.to_string()))?;
        dir.join(path)
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::Io(e.to_string()))?;
            }
        }
        path.to_path_buf()
    };
    if out.extension().is_none() {
        out.set_extension("svg");
    }
    Ok(out)
}

fn to_backend_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Backend(e.to_string())
}
