use crate::rendering::primitives::Color;

/// Visual styling configuration for the score chart
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub score_color: Color,
    pub score_stroke_width: f32,
    pub marker_color: Color,
    pub marker_stroke_width: f32,
    pub marker_dash: Vec<f32>,
    pub title_size: f32,
    pub label_size: f32,
    /// Plot margins: left, top, right, bottom
    pub margins: [f32; 4],
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            axis_color: Color::from_hex("#404040").unwrap_or(Color::BLACK),
            grid_color: Color::from_hex("#DDDDDD").unwrap_or(Color::BLACK),
            text_color: Color::from_hex("#222222").unwrap_or(Color::BLACK),
            score_color: Color::from_hex("#1F77B4").unwrap_or(Color::BLACK),
            score_stroke_width: 1.5,
            marker_color: Color::RED,
            marker_stroke_width: 1.0,
            // sysDash
            marker_dash: vec![3.0, 1.0],
            title_size: 16.0,
            label_size: 10.0,
            margins: [64.0, 48.0, 24.0, 72.0],
        }
    }
}
