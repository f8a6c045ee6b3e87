//! Running extent of the laid-out clades and the derived axis ranges.

use crate::layout::Point;

/// Share of the width added left of the tree.
const LEFT_MARGIN: f64 = 0.05;
/// Share of the width added right of the tree, leaving room for labels.
const RIGHT_MARGIN: f64 = 0.5;
/// Share of the height added above and below the tree.
const VERTICAL_MARGIN: f64 = 0.05;

/// Minimum and maximum coordinates seen so far.
///
/// Starts empty (`+inf`/`-inf`) and grows with every [include](Self::include).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

impl Bounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    /// Returns `true` if no point has been included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns `[min_x - 5% width, max_x + 50% width]`.
    pub fn x_range(&self) -> [f64; 2] {
        let width = self.width();
        [self.min_x - LEFT_MARGIN * width, self.max_x + RIGHT_MARGIN * width]
    }

    /// Returns the inverted range `[max_y + 5% height, min_y - 5% height]`,
    /// so the first terminal is drawn at the top.
    pub fn y_range(&self) -> [f64; 2] {
        let height = self.height();
        [self.max_y + VERTICAL_MARGIN * height, self.min_y - VERTICAL_MARGIN * height]
    }
}
