//! Drawing primitives for the graphs, histograms and gauge.
//!
//! Scene builders are pure functions from component state to a [`Scene`]:
//! an ordered list of [`Primitive`]s in pixel coordinates (origin top-left,
//! y pointing down). A [`Renderer`] turns a scene into output; the crate
//! ships [`SvgRenderer`].

pub mod bubble;
pub mod graph;
pub mod histogram;
pub mod svg;

pub use bubble::bubble_scene;
pub use graph::{GraphSpec, PlotMode};
pub use histogram::histogram_scene;
pub use svg::SvgRenderer;

use serde::{Deserialize, Serialize};

/// Factor used by `brighter` and `darker`.
const SHADE_FACTOR: f64 = 0.7;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
    pub const ORANGE: Rgba = Rgba::rgb(255, 200, 0);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);
    pub const PINK: Rgba = Rgba::rgb(255, 175, 175);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale each channel by 0.7, keeping alpha.
    pub fn darker(self) -> Self {
        let shade = |c: u8| (c as f64 * SHADE_FACTOR) as u8;
        Self {
            r: shade(self.r),
            g: shade(self.g),
            b: shade(self.b),
            a: self.a,
        }
    }

    /// Divide each channel by 0.7, keeping alpha.
    ///
    /// Black becomes a dark grey, and small non-zero channels are raised to
    /// a floor first so they visibly change.
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self {
                r: floor,
                g: floor,
                b: floor,
                a: self.a,
            };
        }
        let lift = |c: u8| {
            let c = if c > 0 && c < floor { floor } else { c };
            (c as f64 / SHADE_FACTOR).min(255.0) as u8
        };
        Self {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
            a: self.a,
        }
    }

    /// `#rrggbb`, alpha excluded.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// Horizontal alignment of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    FillEllipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        color: Rgba,
    },
    /// `y` is the text baseline
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: Anchor,
        size: f64,
        bold: bool,
        color: Rgba,
    },
    /// Restrict subsequent drawing to an ellipse until the matching `PopClip`.
    PushClipEllipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    PopClip,
}

/// A sized, ordered list of primitives on a background.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<String>,
        anchor: Anchor,
        style: TextStyle,
    ) {
        self.push(Primitive::Text {
            x,
            y,
            text: text.into(),
            anchor,
            size: style.size,
            bold: style.bold,
            color: style.color,
        });
    }

    /// Number of primitives of the kind `matches` accepts.
    pub fn count(&self, matches: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| matches(p)).count()
    }

    /// All text in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Font settings for a text primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub color: Rgba,
}

impl TextStyle {
    pub const LABEL: TextStyle = TextStyle {
        size: 10.0,
        bold: false,
        color: Rgba::BLACK,
    };
    pub const TITLE: TextStyle = TextStyle {
        size: 14.0,
        bold: true,
        color: Rgba::BLACK,
    };
}

/// Consumer of scenes.
pub trait Renderer {
    type Output;

    fn render(&mut self, scene: &Scene) -> Self::Output;
}

/// Pixel rectangle inside a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Area left after a 15% margin on every side.
    pub fn with_margins(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            left: 0.15 * w,
            top: 0.15 * h,
            width: 0.7 * w,
            height: 0.7 * h,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darker() {
        assert_eq!(Rgba::YELLOW.darker().darker(), Rgba::rgb(124, 124, 0));
        assert_eq!(Rgba::BLACK.darker(), Rgba::BLACK);
    }

    #[test]
    fn test_brighter() {
        assert_eq!(Rgba::rgb(238, 238, 238).brighter(), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::BLACK.brighter(), Rgba::rgb(3, 3, 3));
        assert_eq!(Rgba::rgb(1, 70, 0).brighter(), Rgba::rgb(4, 100, 0));
        assert_eq!(Rgba::rgb(10, 10, 10).with_alpha(200).brighter().a, 200);
    }

    #[test]
    fn test_hex_and_opacity() {
        assert_eq!(Rgba::ORANGE.hex(), "#ffc800");
        assert_eq!(Rgba::CYAN.opacity(), 1.0);
        assert_eq!(Rgba::CYAN.with_alpha(0).opacity(), 0.0);
    }

    #[test]
    fn test_plot_area_margins() {
        let area = PlotArea::with_margins(600, 300);
        assert!((area.left - 90.0).abs() < 1e-9);
        assert!((area.right() - 510.0).abs() < 1e-9);
        assert!((area.top - 45.0).abs() < 1e-9);
        assert!((area.bottom() - 255.0).abs() < 1e-9);
    }
}
