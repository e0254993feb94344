//! The retained figure/axes model: subplot grid, markers, labels and the
//! annotation offset arithmetic.
//!
//! A [`Figure`] owns a row-major grid of [`Axes`]. Each axes holds the
//! label/limit configuration plus the draw items (markers and text labels)
//! placed on it. Rendering is elsewhere: `render` paints a figure into an
//! egui `Ui`, `qplot` writes it through plotters.

use serde::{Deserialize, Serialize};

use crate::config::{defaults, AxesConfig, FigureOptions};
use crate::error::{Error, Result};
use crate::style::{LabelStyle, StyleSpec};

/// Handle to one axes cell within a figure. Row-major, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxesId(pub usize);

/// One draw item placed on an axes, in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawItem {
    /// A single marker with no connecting line.
    Marker {
        x: f64,
        y: f64,
        spec: StyleSpec,
        /// Marker diameter in points.
        size: f32,
    },
    /// A text label.
    Label {
        x: f64,
        y: f64,
        text: String,
        style: LabelStyle,
    },
}

// Fraction added on each side when auto-scaling limits from data.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// A single axes: label/limit configuration plus draw items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub config: AxesConfig,
    items: Vec<DrawItem>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a label/limit configuration. Fields that are `None` in `config`
    /// clear the corresponding setting, matching a fresh configure call.
    ///
    /// Validates before mutating, so a failing call leaves the axes untouched.
    pub fn apply_config(&mut self, config: AxesConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Set explicit x limits (`min < max`).
    pub fn set_xlim(&mut self, min: f64, max: f64) -> Result<()> {
        let cfg = AxesConfig {
            xlim: Some((min, max)),
            ..self.config.clone()
        };
        cfg.validate()?;
        self.config = cfg;
        Ok(())
    }

    /// Set explicit y limits (`min < max`).
    pub fn set_ylim(&mut self, min: f64, max: f64) -> Result<()> {
        let cfg = AxesConfig {
            ylim: Some((min, max)),
            ..self.config.clone()
        };
        cfg.validate()?;
        self.config = cfg;
        Ok(())
    }

    /// Current x limits: the explicit ones if set, otherwise auto-scaled
    /// from the draw items (5% margin each side, `(0, 1)` when empty).
    pub fn xlim(&self) -> (f64, f64) {
        match self.config.xlim {
            Some(lim) => lim,
            None => autoscale(self.items.iter().map(item_x)),
        }
    }

    /// Current y limits, same rules as [`Axes::xlim`].
    pub fn ylim(&self) -> (f64, f64) {
        match self.config.ylim {
            Some(lim) => lim,
            None => autoscale(self.items.iter().map(item_y)),
        }
    }

    /// Draw a single marker at `(x, y)` with no connecting line.
    ///
    /// `spec` is a matplotlib-style format string such as `"k."` or `"ro"`;
    /// `marker_size` is the marker diameter, `None` for the global default.
    pub fn mark_point(
        &mut self,
        x: f64,
        y: f64,
        spec: &str,
        marker_size: Option<f32>,
    ) -> Result<()> {
        let spec: StyleSpec = spec.parse()?;
        let size = marker_size.unwrap_or_else(|| defaults().marker_size);
        self.items.push(DrawItem::Marker { x, y, spec, size });
        Ok(())
    }

    /// Draw a text label at `(x, y)`.
    pub fn draw_text<S: Into<String>>(&mut self, x: f64, y: f64, text: S, style: LabelStyle) {
        self.items.push(DrawItem::Label {
            x,
            y,
            text: text.into(),
            style,
        });
    }

    /// Mark `(x, y)` and place `text` next to it, offset by a percentage of
    /// the current axis ranges.
    ///
    /// The axis limits are read BEFORE the marker is drawn: adding the marker
    /// could move auto-scaled limits, and the offset must be computed from
    /// the limits the caller currently sees.
    pub fn annotate<S: Into<String>>(
        &mut self,
        x: f64,
        y: f64,
        text: S,
        opts: &Annotation,
    ) -> Result<()> {
        let spec: StyleSpec = opts.spec.parse()?;
        let (xl0, xl1) = self.xlim();
        let (yl0, yl1) = self.ylim();
        let dx = opts.offset.0 * (xl1 - xl0) / 100.0;
        let dy = opts.offset.1 * (yl1 - yl0) / 100.0;
        self.items.push(DrawItem::Marker {
            x,
            y,
            spec,
            size: opts.marker_size,
        });
        self.draw_text(
            x + dx,
            y + dy,
            text,
            LabelStyle {
                font_size: opts.font_size,
                extra: opts.extra.clone(),
                ..LabelStyle::default()
            },
        );
        Ok(())
    }

    /// All draw items placed so far, in insertion order.
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Remove all draw items, keeping the configuration.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Options for [`Axes::annotate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Marker style spec, e.g. `"ko"`.
    pub spec: String,
    /// Label offset from the marker, in percent of the axis ranges.
    pub offset: (f64, f64),
    pub font_size: f32,
    pub marker_size: f32,
    /// Opaque passthrough forwarded onto the label.
    pub extra: std::collections::BTreeMap<String, String>,
}

impl Default for Annotation {
    fn default() -> Self {
        Self {
            spec: "ko".to_string(),
            offset: (5.0, 5.0),
            font_size: defaults().font_size,
            marker_size: 14.0,
            extra: Default::default(),
        }
    }
}

fn item_x(item: &DrawItem) -> f64 {
    match item {
        DrawItem::Marker { x, .. } | DrawItem::Label { x, .. } => *x,
    }
}

fn item_y(item: &DrawItem) -> f64 {
    match item {
        DrawItem::Marker { y, .. } | DrawItem::Label { y, .. } => *y,
    }
}

/// Auto-scale limits over a coordinate iterator: data range padded by
/// [`AUTOSCALE_MARGIN`] each side; a degenerate range is widened by 0.5 each
/// way; no data yields `(0, 1)`.
fn autoscale(coords: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in coords.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * AUTOSCALE_MARGIN;
    (min - pad, max + pad)
}

// ─────────────────────────────────────────────────────────────────────────────
// Figure
// ─────────────────────────────────────────────────────────────────────────────

/// A figure: creation options plus a row-major grid of axes.
///
/// New figures start with a 1×1 grid whose single axes is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub options: FigureOptions,
    rows: usize,
    cols: usize,
    axes: Vec<Axes>,
    current: usize,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(FigureOptions::default())
    }
}

impl Figure {
    pub fn new(options: FigureOptions) -> Self {
        Self {
            options,
            rows: 1,
            cols: 1,
            axes: vec![Axes::new()],
            current: 0,
        }
    }

    /// Subplot grid as `(rows, cols)`.
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Select the axes cell at 1-based row-major `index` in a
    /// `rows × cols` grid, apply `config` to it, make it current and return
    /// its handle.
    ///
    /// Requesting a grid different from the figure's current one replaces
    /// the grid (and all axes on it), like starting a fresh subplot layout.
    /// `index` must satisfy `1 <= index <= rows * cols`.
    pub fn subplot(
        &mut self,
        rows: usize,
        cols: usize,
        index: usize,
        config: AxesConfig,
    ) -> Result<AxesId> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidArgument(format!(
                "subplot grid must be non-empty, got {rows}x{cols}"
            )));
        }
        if index == 0 || index > rows * cols {
            return Err(Error::InvalidArgument(format!(
                "subplot index {index} out of range 1..={} for a {rows}x{cols} grid",
                rows * cols
            )));
        }
        config.validate()?;
        if (rows, cols) != (self.rows, self.cols) {
            self.rows = rows;
            self.cols = cols;
            self.axes = vec![Axes::new(); rows * cols];
        }
        let id = AxesId(index - 1);
        self.axes[id.0].config = config;
        self.current = id.0;
        Ok(id)
    }

    pub fn axes(&self, id: AxesId) -> Option<&Axes> {
        self.axes.get(id.0)
    }

    pub fn axes_mut(&mut self, id: AxesId) -> Option<&mut Axes> {
        self.axes.get_mut(id.0)
    }

    /// The currently selected axes.
    pub fn current_axes(&self) -> &Axes {
        &self.axes[self.current]
    }

    /// The currently selected axes, mutably.
    pub fn current_axes_mut(&mut self) -> &mut Axes {
        &mut self.axes[self.current]
    }

    /// Handle of the currently selected axes.
    pub fn current_axes_id(&self) -> AxesId {
        AxesId(self.current)
    }

    /// All axes in row-major order.
    pub fn all_axes(&self) -> &[Axes] {
        &self.axes
    }
}
