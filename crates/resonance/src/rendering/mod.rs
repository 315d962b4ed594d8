pub mod generator;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::{category_label, ChartSpecGenerator};
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor};
pub use spec::{ChartMetadata, ChartSpec, SeriesKind, SeriesMetadata};
pub use svg::render_svg;
pub use visual_config::VisualConfig;
