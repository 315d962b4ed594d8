use crate::rendering::primitives::{Color, Shape};
use serde::{Deserialize, Serialize};

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Continuous line on the primary axis
    Line,
    /// Vertical marker needles where the value is non-zero
    Marker,
}

/// A data series plotted against the category axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub name: String,
    /// Report column the values come from
    pub column: String,
    pub kind: SeriesKind,
    pub color: Color,
    pub dashed: bool,
    pub values: Vec<f64>,
}

/// Chart metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// One label per record: the date, followed by the sign name on transitions
    pub categories: Vec<String>,
    pub series: Vec<SeriesMetadata>,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background_color: Color::WHITE,
            shapes: Vec::new(),
            metadata: ChartMetadata {
                title: String::new(),
                x_axis_title: String::new(),
                y_axis_title: String::new(),
                categories: Vec::new(),
                series: Vec::new(),
            },
        }
    }
}
