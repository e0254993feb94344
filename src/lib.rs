//! demofig crate root: re-exports and module wiring.
//!
//! Styling helpers that give instructional demo figures a consistent look:
//! titles, axis labels, limits, marked and annotated points, plus quick
//! static plots. The interactive host surface is egui/egui_plot; static
//! output goes through plotters.
//!
//! The crate is organised into cohesive modules:
//! - `config`: axes/figure configuration and process-wide presentation defaults
//! - `style`: matplotlib-style format strings mapped onto egui types
//! - `figure`: the retained figure/axes model (subplot grid, markers, labels)
//! - `context`: explicit figure context and the default-context free functions
//! - `render`: painting a figure onto the egui host surface
//! - `qplot`: quick static plots through plotters with a fixed theme

pub mod config;
pub mod context;
pub mod error;
pub mod figure;
pub mod qplot;
pub mod render;
pub mod style;

// Public re-exports for a compact external API
pub use config::{defaults, set_defaults, AxesConfig, Defaults, FigureOptions};
pub use context::{
    annotate, configure_axes, draw_text, figure, figure_with, mark_point, subplot, with_context,
    FigureContext, FigureId,
};
pub use error::{Error, Result};
pub use figure::{Annotation, Axes, AxesId, DrawItem, Figure};
pub use qplot::{qplot, save_figure_svg};
pub use render::{render_figure, show, show_current};
pub use style::{ColorCode, HAlign, LabelStyle, LineCode, MarkerCode, StyleSpec, VAlign};

#[allow(deprecated)]
pub use context::{demoaxes, demofigure};
