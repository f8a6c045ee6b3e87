//! Figure assembly: traces for every clade and edge plus the axis layout.
//!
//! A [Figure] serializes to the JSON shape of a Plotly figure
//! (`{"data": [...], "layout": {...}}`), so it can be handed to any
//! Plotly frontend as is.

pub mod axis;
pub mod bounds;
pub mod trace;

pub use axis::{AxisLayout, FigureLayout};
pub use bounds::Bounds;
pub use trace::{Line, Marker, Trace};

use crate::layout::{Dendrogram, Point, Positions};
use crate::model::{Clade, PhyloTree};
use serde::Serialize;
use tracing::debug;

// =#========================================================================#=
// FIGURE
// =#========================================================================#=
/// Ordered traces plus layout.
///
/// # Example
/// ```
/// use cladogram::{LayoutConfig, create_phylogenetic_tree};
///
/// let figure = create_phylogenetic_tree("(A,B,(C,D)E)F;", &LayoutConfig::default())?;
/// assert_eq!(figure.markers().count(), 6);
/// assert_eq!(figure.lines().count(), 10);
///
/// let json = figure.to_json()?;
/// assert!(json.starts_with(r#"{"data":[{"type":"scatter""#));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: FigureLayout,
}

impl Figure {
    /// Generates the traces of the dendrogram and derives the layout.
    pub fn from_dendrogram(dendrogram: &Dendrogram) -> Self {
        let generator = TraceGenerator::new(dendrogram.show_labels());
        let (data, bounds) = generator.generate(
            dendrogram.tree(),
            dendrogram.positions(),
            dendrogram.unclassified(),
        );
        debug!(traces = data.len(), ?bounds, "generated figure");

        Self {
            data,
            layout: FigureLayout::from_bounds(&bounds),
        }
    }

    pub fn data(&self) -> &[Trace] {
        &self.data
    }

    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    /// Returns the markers in emission order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.data.iter().filter_map(Trace::as_marker)
    }

    /// Returns the lines in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.data.iter().filter_map(Trace::as_line)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =#========================================================================#=
// TRACE GENERATOR
// =#========================================================================#=
/// Emits the traces of a laid-out tree.
///
/// Walks the tree in level order. Each clade yields one [Marker]; each edge
/// to a child yields two [Line]s forming an elbow: a vertical segment at the
/// parent's x down to the child's y, then a horizontal segment along the
/// child's y out to the child's x. The unclassified clade, if given, gets one
/// trailing marker.
///
/// Visible text is only shown for terminals and only if labels are enabled;
/// all other clades carry their name as hover text.
#[derive(Debug, Clone, Copy)]
pub struct TraceGenerator {
    show_labels: bool,
}

impl TraceGenerator {
    pub fn new(show_labels: bool) -> Self {
        Self { show_labels }
    }

    /// Returns the traces and the extent of the tree clades. The
    /// unclassified marker does not count towards the extent.
    ///
    /// Clades without a position are placed at the origin.
    pub fn generate(
        &self,
        tree: &PhyloTree,
        positions: &Positions,
        unclassified: Option<&Clade>,
    ) -> (Vec<Trace>, Bounds) {
        let position = |clade: &Clade| positions.get(clade.index()).unwrap_or(Point::new(0.0, 0.0));

        let mut traces = Vec::with_capacity(3 * tree.num_clades());
        let mut bounds = Bounds::new();

        for clade in tree.level_order_iter() {
            let node = position(clade);
            bounds.include(node);
            traces.push(Trace::Marker(self.marker(clade, node)));

            for &child in clade.children() {
                let child = position(&tree[child]);
                let elbow = Point::new(node.x, child.y);
                traces.push(Trace::Line(Line::new(node, elbow)));
                traces.push(Trace::Line(Line::new(elbow, child)));
            }
        }

        if let Some(unclassified) = unclassified {
            traces.push(Trace::Marker(self.marker(unclassified, position(unclassified))));
        }

        (traces, bounds)
    }

    fn marker(&self, clade: &Clade, point: Point) -> Marker {
        let label_visible = clade.is_terminal() && self.show_labels;
        Marker::new(point, clade.name().unwrap_or_default(), label_visible)
    }
}
