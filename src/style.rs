//! Style specs: short matplotlib-style format strings mapped onto egui types.
//!
//! Demo call sites pass specs like `"k."` (black point) or `"ro"` (red
//! circle). A [`StyleSpec`] holds the parsed color/marker/line components;
//! the enums here are plain serde-serializable mirrors of the corresponding
//! `egui`/`egui_plot` types, which cannot derive serde themselves.

use std::str::FromStr;

use egui::Color32;
use egui_plot::MarkerShape;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Single-letter color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorCode {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl ColorCode {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(ColorCode::Blue),
            'g' => Some(ColorCode::Green),
            'r' => Some(ColorCode::Red),
            'c' => Some(ColorCode::Cyan),
            'm' => Some(ColorCode::Magenta),
            'y' => Some(ColorCode::Yellow),
            'k' => Some(ColorCode::Black),
            'w' => Some(ColorCode::White),
            _ => None,
        }
    }

    /// RGB triple of this code.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorCode::Blue => (0, 0, 255),
            ColorCode::Green => (0, 128, 0),
            ColorCode::Red => (255, 0, 0),
            ColorCode::Cyan => (0, 191, 191),
            ColorCode::Magenta => (191, 0, 191),
            ColorCode::Yellow => (191, 191, 0),
            ColorCode::Black => (0, 0, 0),
            ColorCode::White => (255, 255, 255),
        }
    }

    pub fn to_color32(self) -> Color32 {
        let (r, g, b) = self.rgb();
        Color32::from_rgb(r, g, b)
    }
}

/// Marker codes. `Point` and `Circle` share the circle shape; `Point` is
/// conventionally drawn smaller by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerCode {
    Point,
    Circle,
    Square,
    Diamond,
    Cross,
    Plus,
    Star,
    TriangleUp,
    TriangleDown,
}

impl MarkerCode {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(MarkerCode::Point),
            'o' => Some(MarkerCode::Circle),
            's' => Some(MarkerCode::Square),
            'd' => Some(MarkerCode::Diamond),
            'x' => Some(MarkerCode::Cross),
            '+' => Some(MarkerCode::Plus),
            '*' => Some(MarkerCode::Star),
            '^' => Some(MarkerCode::TriangleUp),
            'v' => Some(MarkerCode::TriangleDown),
            _ => None,
        }
    }

    pub fn to_marker_shape(self) -> MarkerShape {
        match self {
            MarkerCode::Point | MarkerCode::Circle => MarkerShape::Circle,
            MarkerCode::Square => MarkerShape::Square,
            MarkerCode::Diamond => MarkerShape::Diamond,
            MarkerCode::Cross => MarkerShape::Cross,
            MarkerCode::Plus => MarkerShape::Plus,
            MarkerCode::Star => MarkerShape::Asterisk,
            MarkerCode::TriangleUp => MarkerShape::Up,
            MarkerCode::TriangleDown => MarkerShape::Down,
        }
    }
}

/// Line codes (`-`, `--`, `:`, `-.`).
///
/// Accepted for compatibility with full format strings; the point helpers
/// draw lone markers with no connecting line, so the line component is
/// parsed and carried but never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCode {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Parsed style spec: optional color, marker and line components.
///
/// An empty spec is valid and means "all defaults" (black, point marker,
/// no line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub color: Option<ColorCode>,
    pub marker: Option<MarkerCode>,
    pub line: Option<LineCode>,
}

impl StyleSpec {
    /// Effective color: the parsed code, or black.
    pub fn color32(&self) -> Color32 {
        self.color.unwrap_or(ColorCode::Black).to_color32()
    }

    /// Effective marker shape: the parsed code, or a point.
    pub fn marker_shape(&self) -> MarkerShape {
        self.marker.unwrap_or(MarkerCode::Point).to_marker_shape()
    }
}

impl FromStr for StyleSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut spec = StyleSpec::default();
        let chars: Vec<char> = s.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            // Two-char line codes first so "--" and "-." win over "-".
            if i + 1 < chars.len() {
                let pair = (chars[i], chars[i + 1]);
                let code = match pair {
                    ('-', '-') => Some(LineCode::Dashed),
                    ('-', '.') => Some(LineCode::DashDot),
                    _ => None,
                };
                if let Some(code) = code {
                    set_line(&mut spec, code, s)?;
                    i += 2;
                    continue;
                }
            }
            let c = chars[i];
            if let Some(code) = ColorCode::from_char(c) {
                if spec.color.is_some() {
                    return Err(Error::InvalidArgument(format!(
                        "style spec '{s}' has more than one color code"
                    )));
                }
                spec.color = Some(code);
            } else if let Some(code) = MarkerCode::from_char(c) {
                if spec.marker.is_some() {
                    return Err(Error::InvalidArgument(format!(
                        "style spec '{s}' has more than one marker code"
                    )));
                }
                spec.marker = Some(code);
            } else if c == '-' {
                set_line(&mut spec, LineCode::Solid, s)?;
            } else if c == ':' {
                set_line(&mut spec, LineCode::Dotted, s)?;
            } else {
                return Err(Error::InvalidArgument(format!(
                    "unrecognized character '{c}' in style spec '{s}'"
                )));
            }
            i += 1;
        }
        Ok(spec)
    }
}

fn set_line(spec: &mut StyleSpec, code: LineCode, s: &str) -> Result<()> {
    if spec.line.is_some() {
        return Err(Error::InvalidArgument(format!(
            "style spec '{s}' has more than one line code"
        )));
    }
    spec.line = Some(code);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Text alignment and label styling
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Styling for a text label drawn in data coordinates.
///
/// `extra` is an opaque passthrough for key/value pairs the facade does not
/// interpret; they are carried on the label and available to custom renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub ha: HAlign,
    pub va: VAlign,
    pub font_size: f32,
    pub color: Option<ColorCode>,
    pub extra: std::collections::BTreeMap<String, String>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            ha: HAlign::Center,
            va: VAlign::Center,
            font_size: crate::config::defaults().font_size,
            color: None,
            extra: Default::default(),
        }
    }
}

impl LabelStyle {
    /// The egui anchor corresponding to this alignment pair: the anchor names
    /// the part of the text box placed at the target position.
    pub fn anchor(&self) -> egui::Align2 {
        use egui::Align2;
        match (self.ha, self.va) {
            (HAlign::Left, VAlign::Top) => Align2::LEFT_TOP,
            (HAlign::Left, VAlign::Center) => Align2::LEFT_CENTER,
            (HAlign::Left, VAlign::Bottom) => Align2::LEFT_BOTTOM,
            (HAlign::Center, VAlign::Top) => Align2::CENTER_TOP,
            (HAlign::Center, VAlign::Center) => Align2::CENTER_CENTER,
            (HAlign::Center, VAlign::Bottom) => Align2::CENTER_BOTTOM,
            (HAlign::Right, VAlign::Top) => Align2::RIGHT_TOP,
            (HAlign::Right, VAlign::Center) => Align2::RIGHT_CENTER,
            (HAlign::Right, VAlign::Bottom) => Align2::RIGHT_BOTTOM,
        }
    }
}
