//! Scatter primitives: node markers and line segments.
//!
//! Traces serialize to Plotly `scatter` traces, e.g. a marker:
//!
//! ```json
//! {"type":"scatter","x":[1.0],"y":[0.0],"mode":"markers+text","text":["A"],
//!  "hoverinfo":"text","hovertext":[],"textposition":"middle right",
//!  "marker":{"color":"black","size":1}}
//! ```
//!
//! and a line:
//!
//! ```json
//! {"type":"scatter","x":[0.0,0.0],"y":[1.5,0.0],"mode":"lines","line":{"color":"black"}}
//! ```

use crate::layout::Point;
use serde::{Serialize, Serializer};

const TRACE_TYPE: &str = "scatter";
const MARKER_MODE: &str = "markers+text";
const LINE_MODE: &str = "lines";
const HOVER_INFO: &str = "text";
const TEXT_POSITION: &str = "middle right";
const COLOR: &str = "black";
const MARKER_SIZE: u32 = 1;

/// One drawing primitive of the dendrogram.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Marker(Marker),
    Line(Line),
}

impl Trace {
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Trace::Marker(marker) => Some(marker),
            Trace::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Trace::Line(line) => Some(line),
            Trace::Marker(_) => None,
        }
    }
}

// ============================================================================
// Marker
// ============================================================================
/// A clade drawn as a point, its name shown either as visible text or as
/// hover text, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    point: Point,
    label: String,
    label_visible: bool,
}

impl Marker {
    pub fn new(point: Point, label: impl Into<String>, label_visible: bool) -> Self {
        Self {
            point,
            label: label.into(),
            label_visible,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the always visible text, if the label is shown.
    pub fn text(&self) -> Option<&str> {
        self.label_visible.then_some(self.label.as_str())
    }

    /// Returns the hover text, if the label is not shown.
    pub fn hover_text(&self) -> Option<&str> {
        (!self.label_visible).then_some(self.label.as_str())
    }
}

// ============================================================================
// Line
// ============================================================================
/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }
}

// ============================================================================
// Serialization
// ============================================================================
#[derive(Serialize)]
struct ScatterTrace<'a> {
    #[serde(rename = "type")]
    trace_type: &'static str,
    x: Vec<f64>,
    y: Vec<f64>,
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hoverinfo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hovertext: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    textposition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<MarkerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<LineStyle>,
}

#[derive(Serialize)]
struct MarkerStyle {
    color: &'static str,
    size: u32,
}

#[derive(Serialize)]
struct LineStyle {
    color: &'static str,
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let scatter = match self {
            Trace::Marker(marker) => ScatterTrace {
                trace_type: TRACE_TYPE,
                x: vec![marker.point.x],
                y: vec![marker.point.y],
                mode: MARKER_MODE,
                text: Some(marker.text().into_iter().collect()),
                hoverinfo: Some(HOVER_INFO),
                hovertext: Some(marker.hover_text().into_iter().collect()),
                textposition: Some(TEXT_POSITION),
                marker: Some(MarkerStyle {
                    color: COLOR,
                    size: MARKER_SIZE,
                }),
                line: None,
            },
            Trace::Line(line) => ScatterTrace {
                trace_type: TRACE_TYPE,
                x: vec![line.from.x, line.to.x],
                y: vec![line.from.y, line.to.y],
                mode: LINE_MODE,
                text: None,
                hoverinfo: None,
                hovertext: None,
                textposition: None,
                marker: None,
                line: Some(LineStyle { color: COLOR }),
            },
        };
        scatter.serialize(serializer)
    }
}
