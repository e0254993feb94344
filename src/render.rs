//! Rendering a [`Figure`] onto the egui host surface.
//!
//! Each axes cell becomes one `egui_plot::Plot`: explicit limits are applied
//! through `set_plot_bounds_x`/`set_plot_bounds_y`, markers become `Points`
//! and labels become `Text` elements. [`show`] wraps a figure in a minimal
//! eframe app for standalone demo scripts.

use eframe::egui;
use eframe::egui::RichText;
use egui_plot::{Plot, PlotPoint, Points, Text};

use crate::config::defaults;
use crate::figure::{Axes, DrawItem, Figure};

/// Paint a whole figure into `ui`, laying the subplot grid out evenly over
/// the available space.
pub fn render_figure(ui: &mut egui::Ui, fig: &Figure) {
    let (rows, cols) = fig.grid();
    let avail = ui.available_size();
    let cell = egui::vec2(avail.x / cols as f32, avail.y / rows as f32);
    let background = fig.options.background.map(|c| c.to_color32());
    let axes = fig.all_axes();
    for r in 0..rows {
        ui.horizontal(|ui| {
            for c in 0..cols {
                let idx = r * cols + c;
                ui.allocate_ui(cell, |ui| {
                    ui.vertical(|ui| {
                        render_axes(ui, &axes[idx], idx, cell, background);
                    });
                });
            }
        });
    }
}

/// Paint a single axes into `ui` as one plot widget.
fn render_axes(
    ui: &mut egui::Ui,
    ax: &Axes,
    idx: usize,
    cell: egui::Vec2,
    background: Option<egui::Color32>,
) {
    // egui_plot fills the plot area with the extreme background color; the
    // override is scoped to this child Ui.
    if let Some(bg) = background {
        ui.style_mut().visuals.extreme_bg_color = bg;
    }
    let font_size = defaults().font_size;
    let mut title_height = 0.0;
    if let Some(title) = &ax.config.title {
        let resp = ui.label(RichText::new(title).size(font_size).strong());
        title_height = resp.rect.height();
    }

    let mut plot = Plot::new(egui::Id::new(("demofig_axes", idx)))
        .width(cell.x - 8.0)
        .height((cell.y - title_height - 8.0).max(32.0));
    if let Some(xlabel) = &ax.config.xlabel {
        plot = plot.x_axis_label(xlabel.clone());
    }
    if let Some(ylabel) = &ax.config.ylabel {
        plot = plot.y_axis_label(ylabel.clone());
    }

    plot.show(ui, |plot_ui| {
        if let Some((min, max)) = ax.config.xlim {
            plot_ui.set_plot_bounds_x(min..=max);
        }
        if let Some((min, max)) = ax.config.ylim {
            plot_ui.set_plot_bounds_y(min..=max);
        }
        for (i, item) in ax.items().iter().enumerate() {
            match item {
                DrawItem::Marker { x, y, spec, size } => {
                    plot_ui.points(
                        Points::new("", vec![[*x, *y]])
                            .radius(size * 0.5)
                            .shape(spec.marker_shape())
                            .color(spec.color32()),
                    );
                }
                DrawItem::Label { x, y, text, style } => {
                    let mut rich = RichText::new(text).size(style.font_size);
                    if let Some(color) = style.color {
                        rich = rich.color(color.to_color32());
                    }
                    plot_ui.text(
                        Text::new(format!("label_{idx}_{i}"), PlotPoint::new(*x, *y), rich)
                            .anchor(style.anchor()),
                    );
                }
            }
        }
    });
}

struct FigureApp {
    figure: Figure,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_figure(ui, &self.figure);
        });
    }
}

/// Open a native window showing `figure` and block until it is closed.
///
/// The window size comes from the figure's pass-through options, falling
/// back to the global default figure size.
pub fn show(figure: Figure, title: &str) -> eframe::Result<()> {
    let (w, h) = figure.options.size.unwrap_or_else(|| defaults().figure_size);
    let mut options = eframe::NativeOptions::default();
    options.viewport = egui::ViewportBuilder::default().with_inner_size([w, h]);
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureApp { figure }))),
    )
}

/// Show the default context's current figure, taking it out of the context.
///
/// Does nothing when no figure has been created yet.
pub fn show_current(title: &str) -> eframe::Result<()> {
    match crate::context::with_context(|ctx| ctx.take_current_figure()) {
        Some(fig) => show(fig, title),
        None => {
            log::warn!("show_current called with no current figure");
            Ok(())
        }
    }
}
