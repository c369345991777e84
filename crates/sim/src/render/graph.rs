//! Time-series graph scenes.

use crate::render::{Anchor, PlotArea, Rgba, Scene, TextStyle};
use crate::storage::{Category, CategoryFilter, SeriesStore, Window};

/// Colour of each data category, indexed by category.
pub const PALETTE: [Rgba; 10] = [
    Rgba::BLACK,
    Rgba::RED,
    Rgba::BLUE,
    Rgba::GREEN,
    Rgba::rgb(124, 124, 0),
    Rgba::ORANGE,
    Rgba::GRAY,
    Rgba::CYAN,
    Rgba::MAGENTA,
    Rgba::PINK,
];

pub fn category_color(category: Category) -> Rgba {
    PALETTE[category.index() as usize]
}

/// How points are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlotMode {
    /// Join consecutive in-range points of each category
    #[default]
    Lines,
    /// Mark each in-range point with an "x"
    Points,
}

/// Axes, titles and plot mode of one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub window: Window,
    pub x_divisions: usize,
    pub y_divisions: usize,
    pub mode: PlotMode,
    /// Half-length of tick marks and point markers, in pixels
    pub tick_radius: f64,
}

impl GraphSpec {
    /// Allele frequency over `[0, generations] x [0, 1]`.
    pub fn allele_frequency(generations: usize) -> Self {
        Self {
            title: "Allele Frequency".into(),
            x_label: "Generation".into(),
            y_label: "Frequency".into(),
            window: Window::new(0.0, generations as f64, 0.0, 1.0),
            x_divisions: 10,
            y_divisions: 10,
            mode: PlotMode::Lines,
            tick_radius: 3.0,
        }
    }

    /// Heterozygosity over `[0, generations] x [0, 0.5]`.
    pub fn heterozygosity(generations: usize) -> Self {
        Self {
            title: "Heterozygosity".into(),
            x_label: "Generation".into(),
            y_label: "Heterozygosity".into(),
            window: Window::new(0.0, generations as f64, 0.0, 0.5),
            x_divisions: 10,
            y_divisions: 5,
            mode: PlotMode::Lines,
            tick_radius: 3.0,
        }
    }

    pub fn with_mode(mut self, mode: PlotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Draw `store` on this graph.
    pub fn scene(&self, store: &SeriesStore, width: u32, height: u32, background: Rgba) -> Scene {
        let area = PlotArea::with_margins(width, height);
        let mut scene = Scene::new(width, height, background);

        self.draw_axes(&mut scene, &area);
        match self.mode {
            PlotMode::Lines => {
                for category in Category::all() {
                    let color = category_color(category);
                    for (a, b) in store.segments(self.window, category) {
                        let (x1, y1) = self.to_pixel(&area, a.x, a.y);
                        let (x2, y2) = self.to_pixel(&area, b.x, b.y);
                        scene.line(x1, y1, x2, y2, color);
                    }
                }
            }
            PlotMode::Points => {
                let r = self.tick_radius;
                for point in store.filtered_view(self.window, CategoryFilter::All) {
                    let color = category_color(point.category);
                    let (x, y) = self.to_pixel(&area, point.x, point.y);
                    scene.line(x - r, y - r, x + r, y + r, color);
                    scene.line(x - r, y + r, x + r, y - r, color);
                }
            }
        }
        scene
    }

    fn to_pixel(&self, area: &PlotArea, x: f64, y: f64) -> (f64, f64) {
        let w = &self.window;
        let px = area.left + fraction(x, w.x_min, w.x_max) * area.width;
        let py = area.bottom() - fraction(y, w.y_min, w.y_max) * area.height;
        (px, py)
    }

    fn draw_axes(&self, scene: &mut Scene, area: &PlotArea) {
        let w = self.window;
        let r = self.tick_radius;
        let black = Rgba::BLACK;

        scene.line(area.left, area.bottom(), area.right(), area.bottom(), black);
        scene.line(area.left, area.top, area.left, area.bottom(), black);

        let x_divisions = self.x_divisions.max(1);
        let x_step = (w.x_max - w.x_min) / x_divisions as f64;
        for i in 0..=x_divisions {
            let value = w.x_min + x_step * i as f64;
            let (x, y) = self.to_pixel(area, value, w.y_min);
            scene.line(x, y - r, x, y + r, black);
            scene.text(
                x,
                y + r + 12.0,
                tick_label(value, x_step),
                Anchor::Middle,
                TextStyle::LABEL,
            );
        }

        let y_divisions = self.y_divisions.max(1);
        let y_step = (w.y_max - w.y_min) / y_divisions as f64;
        for i in 0..=y_divisions {
            let value = w.y_min + y_step * i as f64;
            let (x, y) = self.to_pixel(area, w.x_min, value);
            scene.line(x - r, y, x + r, y, black);
            scene.text(
                x - r - 4.0,
                y + 4.0,
                tick_label(value, y_step),
                Anchor::End,
                TextStyle::LABEL,
            );
        }

        let center_x = area.left + area.width / 2.0;
        scene.text(
            center_x,
            area.top / 2.0 + 5.0,
            &self.title,
            Anchor::Middle,
            TextStyle::TITLE,
        );
        scene.text(
            center_x,
            area.bottom() + r + 28.0,
            &self.x_label,
            Anchor::Middle,
            TextStyle::LABEL,
        );
        scene.text(4.0, area.top - 8.0, &self.y_label, Anchor::Start, TextStyle::LABEL);
    }
}

/// Position of `value` within `[min, max]` as a fraction.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        0.0
    } else {
        (value - min) / span
    }
}

/// Tick label: whole numbers when the step is integral, else two decimals.
pub fn tick_label(value: f64, step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}
