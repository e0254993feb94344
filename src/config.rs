//! Configuration types for figures and axes, plus process-wide presentation
//! defaults.
//!
//! The defaults mirror what demo scripts traditionally set once at startup
//! (line width, font size, figure size, save directory). They are presentation
//! defaults only; nothing in the figure model depends on them for correctness.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::ColorCode;

// ─────────────────────────────────────────────────────────────────────────────
// AxesConfig – the label/limit tuple applied to one axes
// ─────────────────────────────────────────────────────────────────────────────

/// Title, axis labels and optional axis limits for a single axes.
///
/// Constructed from call arguments and applied immediately; it has no
/// lifecycle of its own beyond a single configure call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// `(min, max)` with `min < max`; `None` leaves the axis auto-scaled.
    pub xlim: Option<(f64, f64)>,
    /// `(min, max)` with `min < max`; `None` leaves the axis auto-scaled.
    pub ylim: Option<(f64, f64)>,
}

impl AxesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_labels<S: Into<String>>(mut self, xlabel: S, ylabel: S) -> Self {
        self.xlabel = Some(xlabel.into());
        self.ylabel = Some(ylabel.into());
        self
    }

    pub fn with_xlim(mut self, min: f64, max: f64) -> Self {
        self.xlim = Some((min, max));
        self
    }

    pub fn with_ylim(mut self, min: f64, max: f64) -> Self {
        self.ylim = Some((min, max));
        self
    }

    /// Check that any given limits are finite and ordered (`min < max`).
    ///
    /// Called before the configuration is applied, so a failing call leaves
    /// the target axes untouched.
    pub fn validate(&self) -> Result<()> {
        validate_limits("xlim", self.xlim)?;
        validate_limits("ylim", self.ylim)
    }
}

fn validate_limits(name: &str, lim: Option<(f64, f64)>) -> Result<()> {
    if let Some((min, max)) = lim {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "{name} must be finite, got ({min}, {max})"
            )));
        }
        if min >= max {
            return Err(Error::InvalidArgument(format!(
                "{name} min must be below max, got ({min}, {max})"
            )));
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// FigureOptions – pass-through options for figure creation
// ─────────────────────────────────────────────────────────────────────────────

/// Options applied when a new figure is created.
///
/// The recognized options are enumerated fields; `extra` is an escape hatch
/// of opaque key/value pairs forwarded verbatim to whoever renders the
/// figure. The facade never interprets `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigureOptions {
    /// Figure size in pixels; `None` uses [`Defaults::figure_size`].
    pub size: Option<(f32, f32)>,
    /// Plot background tint; `None` uses the host theme background.
    pub background: Option<ColorCode>,
    /// Opaque passthrough options, carried but not interpreted.
    pub extra: BTreeMap<String, String>,
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some((width, height));
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults – process-wide presentation defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Process-wide presentation defaults, set once near startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Default line width for quick plots.
    pub line_width: f32,
    /// Default font size for titles and labels.
    pub font_size: f32,
    /// Default marker size (diameter) for [`mark_point`](crate::context::mark_point).
    pub marker_size: f32,
    /// Default figure size in pixels.
    pub figure_size: (f32, f32),
    /// Directory that relative save paths resolve into.
    pub save_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            line_width: 2.5,
            font_size: 18.0,
            marker_size: 16.0,
            figure_size: (1200.0, 600.0),
            save_dir: PathBuf::from("./figures"),
        }
    }
}

impl Defaults {
    /// Load defaults from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| Error::Io(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| Error::Io(e.to_string()))
    }

    /// Save defaults to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).map_err(|e| Error::Io(e.to_string()))?;
        std::fs::write(path, data).map_err(|e| Error::Io(e.to_string()))
    }
}

// Global defaults. The lock only upholds the aliasing rules; the facade is
// single-threaded by convention (one writer, interactive use).
static DEFAULTS: Lazy<RwLock<Defaults>> = Lazy::new(|| RwLock::new(Defaults::default()));

/// Get a copy of the current presentation defaults.
pub fn defaults() -> Defaults {
    DEFAULTS.read().unwrap().clone()
}

/// Replace the presentation defaults.
pub fn set_defaults(new: Defaults) {
    let mut guard = DEFAULTS.write().unwrap();
    *guard = new;
}
