//! Category-tagged time series.
//!
//! A `SeriesStore` keeps `(x, y, category)` points in insertion order. Up to
//! ten categories share one store, so several single-run trajectories can be
//! overlaid on one graph and told apart by colour.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Data-series tag in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Category(u8);

impl Category {
    /// Number of distinct categories.
    pub const COUNT: u8 = 10;

    /// `None` if `index` is outside `0..=9`.
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Category `index` modulo ten.
    pub const fn wrapping(index: u8) -> Self {
        Self(index % Self::COUNT)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// All categories in ascending order.
    pub fn all() -> impl Iterator<Item = Category> {
        (0..Self::COUNT).map(Category)
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| format!("category {index} is outside 0..=9"))
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// Which categories a view includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// One stored point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub category: Category,
}

/// Closed rectangle of visible values, usually a graph's axis ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, point: &DataPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

/// Ordered x and y values of one category, as written to an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub category: Category,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Append-only point store with bulk removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStore {
    label: String,
    points: Vec<DataPoint>,
}

impl SeriesStore {
    /// Create an empty store. The label names exports of this store.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn append(&mut self, x: f64, y: f64, category: Category) {
        self.points.push(DataPoint { x, y, category });
    }

    /// Remove every point matching `filter`, keeping the order of the rest.
    pub fn clear(&mut self, filter: CategoryFilter) {
        match filter {
            CategoryFilter::All => self.points.clear(),
            CategoryFilter::Only(category) => self.points.retain(|p| p.category != category),
        }
    }

    /// Points inside `window` that match `filter`, in insertion order.
    ///
    /// The iterator borrows the store and can be cloned to restart it.
    pub fn filtered_view(
        &self,
        window: Window,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = &DataPoint> + Clone + '_ {
        self.points
            .iter()
            .filter(move |p| filter.matches(p.category) && window.contains(p))
    }

    /// Line segments joining consecutive in-range points of `category`.
    ///
    /// An out-of-range point ends the current line; the next in-range point
    /// starts a new one.
    pub fn segments(&self, window: Window, category: Category) -> Vec<(DataPoint, DataPoint)> {
        let mut segments = Vec::new();
        let mut previous: Option<DataPoint> = None;
        for point in self.points.iter().filter(|p| p.category == category) {
            if !window.contains(point) {
                previous = None;
                continue;
            }
            if let Some(prev) = previous {
                segments.push((prev, *point));
            }
            previous = Some(*point);
        }
        segments
    }

    /// Per-category values for every non-empty category, ascending.
    pub fn export_series(&self) -> Vec<CategorySeries> {
        Category::all()
            .filter_map(|category| {
                let (xs, ys): (Vec<f64>, Vec<f64>) = self
                    .points
                    .iter()
                    .filter(|p| p.category == category)
                    .map(|p| (p.x, p.y))
                    .unzip();
                (!xs.is_empty()).then_some(CategorySeries { category, xs, ys })
            })
            .collect()
    }

    /// Render the export as text.
    ///
    /// Two lines per non-empty category: `type <i> x,...` then
    /// `type <i> y,...`. Values use the shortest representation that reads
    /// back to the same number.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for series in self.export_series() {
            let index = series.category.index();
            write_line(&mut out, &format!("type {index} x"), &series.xs);
            write_line(&mut out, &format!("type {index} y"), &series.ys);
        }
        out
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points tagged with `category`.
    pub fn count(&self, category: Category) -> usize {
        self.points.iter().filter(|p| p.category == category).count()
    }
}

fn write_line(out: &mut String, head: &str, values: &[f64]) {
    out.push_str(head);
    for value in values {
        // Writing to a String cannot fail
        let _ = write!(out, ",{value:?}");
    }
    out.push('\n');
}
