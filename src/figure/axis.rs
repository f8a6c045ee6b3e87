//! Figure and axis layout for the consuming renderer.

use crate::figure::bounds::Bounds;
use serde::Serialize;

/// Layout of the figure: both axes plus global display options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub showlegend: bool,
    pub autosize: bool,
    pub hovermode: &'static str,
}

impl FigureLayout {
    /// Derives the layout from the extent of the drawn clades.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            xaxis: AxisLayout::with_range(bounds.x_range()),
            yaxis: AxisLayout::with_range(bounds.y_range()),
            showlegend: false,
            autosize: true,
            hovermode: "closest",
        }
    }
}

/// A bare axis: no ticks, tick labels, grid or zero line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub ticks: &'static str,
    pub tickvals: Vec<f64>,
    pub rangemode: &'static str,
    pub zeroline: bool,
    pub showgrid: bool,
    pub automargin: bool,
    pub range: [f64; 2],
}

impl AxisLayout {
    pub fn with_range(range: [f64; 2]) -> Self {
        Self {
            ticks: "",
            tickvals: Vec::new(),
            rangemode: "tozero",
            zeroline: false,
            showgrid: false,
            automargin: true,
            range,
        }
    }
}
