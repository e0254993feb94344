//! Figure context: the explicit "current figure/axes" handle, plus the
//! default-context free functions that preserve the classic demo call style.
//!
//! The context owns every figure created through it and tracks which one is
//! current. Library code takes a `&mut FigureContext` (dependency injection,
//! easy to test); demo scripts can instead call the free functions at the
//! bottom of this module, which operate on a process-wide default context.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{AxesConfig, FigureOptions};
use crate::error::Result;
use crate::figure::{Annotation, Axes, AxesId, Figure};
use crate::style::LabelStyle;

/// Handle to a figure owned by a [`FigureContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureId(pub usize);

/// Owns figures and the notion of which figure/axes is current.
///
/// The first draw or configure call on an empty context creates a default
/// figure implicitly; each `figure` call replaces the current figure with a
/// new one; everything is dropped with the context.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FigureContext {
    figures: Vec<Figure>,
    current: Option<usize>,
}

impl FigureContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of figures created so far.
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Create a new figure with default options, configure its axes, and
    /// make it current. Returns the figure handle.
    pub fn figure(&mut self, config: AxesConfig) -> Result<FigureId> {
        self.figure_with(FigureOptions::default(), config)
    }

    /// Create a new figure with explicit pass-through options.
    ///
    /// The configuration is validated before the figure is created, so a
    /// failing call leaves the context unchanged.
    pub fn figure_with(&mut self, options: FigureOptions, config: AxesConfig) -> Result<FigureId> {
        config.validate()?;
        let mut fig = Figure::new(options);
        fig.current_axes_mut().config = config;
        self.figures.push(fig);
        let id = FigureId(self.figures.len() - 1);
        self.current = Some(id.0);
        Ok(id)
    }

    /// Apply a label/limit configuration to the current axes of the current
    /// figure (created implicitly if none exists).
    pub fn configure_axes(&mut self, config: AxesConfig) -> Result<()> {
        // Validate before touching the context, so a bad config does not
        // leave an implicitly created figure behind.
        config.validate()?;
        self.current_figure_mut().current_axes_mut().apply_config(config)
    }

    /// Select/create the subplot cell at 1-based `index` in a `rows × cols`
    /// grid on the current figure and apply `config` to it.
    pub fn subplot(
        &mut self,
        rows: usize,
        cols: usize,
        index: usize,
        config: AxesConfig,
    ) -> Result<AxesId> {
        self.current_figure_mut().subplot(rows, cols, index, config)
    }

    /// Draw a single marker on the current axes; see [`Axes::mark_point`].
    pub fn mark_point(
        &mut self,
        x: f64,
        y: f64,
        spec: &str,
        marker_size: Option<f32>,
    ) -> Result<()> {
        self.current_figure_mut()
            .current_axes_mut()
            .mark_point(x, y, spec, marker_size)
    }

    /// Draw a text label on the current axes; see [`Axes::draw_text`].
    pub fn draw_text<S: Into<String>>(&mut self, x: f64, y: f64, text: S, style: LabelStyle) {
        self.current_figure_mut()
            .current_axes_mut()
            .draw_text(x, y, text, style);
    }

    /// Annotate a point on the current axes; see [`Axes::annotate`].
    pub fn annotate<S: Into<String>>(
        &mut self,
        x: f64,
        y: f64,
        text: S,
        opts: &Annotation,
    ) -> Result<()> {
        self.current_figure_mut()
            .current_axes_mut()
            .annotate(x, y, text, opts)
    }

    pub fn figure_at(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(id.0)
    }

    pub fn figure_at_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.get_mut(id.0)
    }

    /// The current figure, if any figure exists.
    pub fn current_figure(&self) -> Option<&Figure> {
        self.current.and_then(|i| self.figures.get(i))
    }

    /// The current axes, if any figure exists.
    pub fn current_axes(&self) -> Option<&Axes> {
        self.current_figure().map(|f| f.current_axes())
    }

    /// The current figure, created implicitly on first use.
    pub fn current_figure_mut(&mut self) -> &mut Figure {
        if self.figures.is_empty() {
            self.figures.push(Figure::default());
            self.current = Some(0);
        }
        let idx = self.current.unwrap_or(self.figures.len() - 1);
        &mut self.figures[idx]
    }

    /// Take the current figure out of the context (e.g. to hand it to an
    /// eframe window), leaving the remaining figures in place.
    pub fn take_current_figure(&mut self) -> Option<Figure> {
        let idx = self.current.take()?;
        let fig = self.figures.remove(idx);
        self.current = self.figures.len().checked_sub(1);
        Some(fig)
    }

    /// Drop all figures.
    pub fn clear(&mut self) {
        self.figures.clear();
        self.current = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default context and free functions
// ─────────────────────────────────────────────────────────────────────────────

// Process-wide default context backing the free functions below. The mutex
// upholds the aliasing rules; usage is single-threaded by convention, the
// same single-writer assumption interactive plotting has always made.
static CONTEXT: Lazy<Mutex<FigureContext>> = Lazy::new(|| Mutex::new(FigureContext::new()));

/// Run `f` against the process-wide default context.
pub fn with_context<R>(f: impl FnOnce(&mut FigureContext) -> R) -> R {
    let mut guard = CONTEXT.lock().unwrap();
    f(&mut guard)
}

/// Create a new figure on the default context; see [`FigureContext::figure`].
pub fn figure(config: AxesConfig) -> Result<FigureId> {
    with_context(|ctx| ctx.figure(config))
}

/// Create a new figure with explicit options on the default context.
pub fn figure_with(options: FigureOptions, config: AxesConfig) -> Result<FigureId> {
    with_context(|ctx| ctx.figure_with(options, config))
}

/// Configure the current axes of the default context.
pub fn configure_axes(config: AxesConfig) -> Result<()> {
    with_context(|ctx| ctx.configure_axes(config))
}

/// Select a subplot cell on the default context; see [`FigureContext::subplot`].
pub fn subplot(rows: usize, cols: usize, index: usize, config: AxesConfig) -> Result<AxesId> {
    with_context(|ctx| ctx.subplot(rows, cols, index, config))
}

/// Draw a single marker on the default context's current axes.
pub fn mark_point(x: f64, y: f64, spec: &str, marker_size: Option<f32>) -> Result<()> {
    with_context(|ctx| ctx.mark_point(x, y, spec, marker_size))
}

/// Draw a text label on the default context's current axes.
pub fn draw_text<S: Into<String>>(x: f64, y: f64, text: S, style: LabelStyle) {
    with_context(|ctx| ctx.draw_text(x, y, text, style))
}

/// Annotate a point on the default context's current axes.
pub fn annotate<S: Into<String>>(x: f64, y: f64, text: S, opts: &Annotation) -> Result<()> {
    with_context(|ctx| ctx.annotate(x, y, text, opts))
}

// ─────────────────────────────────────────────────────────────────────────────
// Deprecated aliases
// ─────────────────────────────────────────────────────────────────────────────

/// Deprecated alias for [`figure`], kept for old demo call sites.
#[deprecated(note = "use demofig::figure instead")]
pub fn demofigure(
    title: &str,
    xlabel: &str,
    ylabel: &str,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
) -> Result<FigureId> {
    log::warn!("demofigure is deprecated; use demofig::figure instead");
    figure(legacy_config(title, xlabel, ylabel, xlim, ylim))
}

/// Deprecated alias for [`configure_axes`], kept for old demo call sites.
#[deprecated(note = "use demofig::configure_axes (or subplot) instead")]
pub fn demoaxes(
    title: &str,
    xlabel: &str,
    ylabel: &str,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
) -> Result<()> {
    log::warn!("demoaxes is deprecated; use demofig::configure_axes instead");
    configure_axes(legacy_config(title, xlabel, ylabel, xlim, ylim))
}

fn legacy_config(
    title: &str,
    xlabel: &str,
    ylabel: &str,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
) -> AxesConfig {
    AxesConfig {
        title: Some(title.to_string()),
        xlabel: Some(xlabel.to_string()),
        ylabel: Some(ylabel.to_string()),
        xlim,
        ylim,
    }
}
