use crate::report::{DailyRecord, Report, TRANSITION_MARKER};
use crate::rendering::primitives::{Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec, SeriesKind, SeriesMetadata};
use crate::rendering::visual_config::VisualConfig;
use chrono::Datelike;

const Y_TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Category label for a record: the date, plus the sign name on a transition
pub fn category_label(record: &DailyRecord) -> String {
    match record.transition {
        Some(sign) => format!("{} {}", record.date, sign),
        None => record.date.to_string(),
    }
}

/// Plot area in chart coordinates
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl PlotArea {
    fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn right(&self) -> f32 {
        self.left + self.width
    }

    fn x(&self, index: usize, count: usize) -> f32 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f32 / (count - 1) as f32
    }

    /// Values are percentages: 0 at the bottom, 100 at the top
    fn y(&self, value: f64) -> f32 {
        let clamped = value.clamp(0.0, 100.0) as f32;
        self.bottom() - self.height * clamped / 100.0
    }
}

/// ChartSpec generator - converts a yearly report into a line chart with
/// sign-transition markers
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self::with_config(VisualConfig::default())
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    /// Generate ChartSpec from an assembled report
    pub fn generate(&self, report: &Report, width: f32, height: f32) -> ChartSpec {
        let cfg = &self.visual_config;
        let [left, top, right, bottom] = cfg.margins;
        let area = PlotArea {
            left,
            top,
            width: (width - left - right).max(1.0),
            height: (height - top - bottom).max(1.0),
        };

        let metadata = self.build_metadata(report);

        let mut shapes = Vec::new();
        shapes.extend(self.grid_shapes(&area));
        shapes.extend(self.marker_shapes(report, &area));
        shapes.extend(self.score_shapes(report, &area));
        shapes.extend(self.axis_shapes(report, &area));
        shapes.extend(self.title_shapes(&metadata, &area, width, height));

        ChartSpec {
            width,
            height,
            background_color: cfg.background_color,
            shapes,
            metadata,
        }
    }

    fn build_metadata(&self, report: &Report) -> ChartMetadata {
        let cfg = &self.visual_config;
        ChartMetadata {
            title: format!("Astrological score {} (with zodiac axis)", report.year),
            x_axis_title: "Timeline".to_string(),
            y_axis_title: "Score in %".to_string(),
            categories: report.records.iter().map(category_label).collect(),
            series: vec![
                SeriesMetadata {
                    name: "Score in %".to_string(),
                    column: "score_percent".to_string(),
                    kind: SeriesKind::Line,
                    color: cfg.score_color,
                    dashed: false,
                    values: report.records.iter().map(|r| r.normalized_score).collect(),
                },
                SeriesMetadata {
                    name: "Zodiac start".to_string(),
                    column: "zodiac_start".to_string(),
                    kind: SeriesKind::Marker,
                    color: cfg.marker_color,
                    dashed: true,
                    values: report.records.iter().map(|r| r.transition_marker()).collect(),
                },
            ],
        }
    }

    fn grid_shapes(&self, area: &PlotArea) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let mut shapes = Vec::new();
        for tick in Y_TICKS {
            let y = area.y(tick);
            shapes.push(Shape::Line {
                from: Point::new(area.left, y),
                to: Point::new(area.right(), y),
                stroke: Stroke::solid(cfg.grid_color, 0.5),
            });
            shapes.push(Shape::Text {
                position: Point::new(area.left - 8.0, y + cfg.label_size / 3.0),
                content: format!("{}", tick),
                size: cfg.label_size,
                color: cfg.text_color,
                anchor: TextAnchor::End,
                rotation: None,
            });
        }
        shapes.push(Shape::Rect {
            origin: Point::new(area.left, area.top),
            width: area.width,
            height: area.height,
            fill: None,
            stroke: Some(Stroke::solid(cfg.grid_color, 0.5)),
        });
        shapes
    }

    /// Dashed needles from 0 to the marker height on each transition day
    fn marker_shapes(&self, report: &Report, area: &PlotArea) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let count = report.records.len();
        let mut shapes = Vec::new();

        for (index, record) in report.records.iter().enumerate() {
            let Some(sign) = record.transition else {
                continue;
            };
            let x = area.x(index, count);
            shapes.push(Shape::Line {
                from: Point::new(x, area.y(0.0)),
                to: Point::new(x, area.y(TRANSITION_MARKER)),
                stroke: Stroke::dashed(
                    cfg.marker_color,
                    cfg.marker_stroke_width,
                    cfg.marker_dash.clone(),
                ),
            });
            shapes.push(Shape::Text {
                position: Point::new(x, area.bottom() + 30.0),
                content: sign.name().to_string(),
                size: cfg.label_size * 0.9,
                color: cfg.marker_color,
                anchor: TextAnchor::Middle,
                rotation: None,
            });
        }
        shapes
    }

    fn score_shapes(&self, report: &Report, area: &PlotArea) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let count = report.records.len();
        if count == 0 {
            return Vec::new();
        }

        let points: Vec<Point> = report
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| Point::new(area.x(i, count), area.y(r.normalized_score)))
            .collect();

        vec![Shape::Path {
            points,
            closed: false,
            fill: None,
            stroke: Some(Stroke::solid(cfg.score_color, cfg.score_stroke_width)),
        }]
    }

    /// Axis lines plus a date label on the first day of each month
    fn axis_shapes(&self, report: &Report, area: &PlotArea) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let axis = Stroke::solid(cfg.axis_color, 1.0);
        let mut shapes = vec![
            Shape::Line {
                from: Point::new(area.left, area.top),
                to: Point::new(area.left, area.bottom()),
                stroke: axis.clone(),
            },
            Shape::Line {
                from: Point::new(area.left, area.bottom()),
                to: Point::new(area.right(), area.bottom()),
                stroke: axis,
            },
        ];

        let count = report.records.len();
        for (index, record) in report.records.iter().enumerate() {
            if record.date.day() != 1 {
                continue;
            }
            shapes.push(Shape::Text {
                position: Point::new(area.x(index, count), area.bottom() + 14.0),
                content: record.date.format("%b %d").to_string(),
                size: cfg.label_size,
                color: cfg.text_color,
                anchor: TextAnchor::Middle,
                rotation: None,
            });
        }
        shapes
    }

    fn title_shapes(
        &self,
        metadata: &ChartMetadata,
        area: &PlotArea,
        width: f32,
        height: f32,
    ) -> Vec<Shape> {
        let cfg = &self.visual_config;
        vec![
            Shape::Text {
                position: Point::new(width / 2.0, area.top / 2.0 + cfg.title_size / 3.0),
                content: metadata.title.clone(),
                size: cfg.title_size,
                color: cfg.text_color,
                anchor: TextAnchor::Middle,
                rotation: None,
            },
            Shape::Text {
                position: Point::new(area.left + area.width / 2.0, height - 10.0),
                content: metadata.x_axis_title.clone(),
                size: cfg.label_size * 1.2,
                color: cfg.text_color,
                anchor: TextAnchor::Middle,
                rotation: None,
            },
            Shape::Text {
                position: Point::new(16.0, area.top + area.height / 2.0),
                content: metadata.y_axis_title.clone(),
                size: cfg.label_size * 1.2,
                color: cfg.text_color,
                anchor: TextAnchor::Middle,
                rotation: Some(-90.0),
            },
        ]
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
