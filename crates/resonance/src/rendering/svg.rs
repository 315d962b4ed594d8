//! SVG serialization of a [`ChartSpec`].

use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use std::fmt::Write;

/// Render a chart spec as a standalone SVG document
pub fn render_svg(spec: &ChartSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        w = spec.width,
        h = spec.height
    );
    let _ = writeln!(out, "<title>{}</title>", escape(&spec.metadata.title));
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        spec.width,
        spec.height,
        spec.background_color.to_css_string()
    );

    for shape in &spec.shapes {
        write_shape(&mut out, shape);
    }

    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    let _ = match shape {
        Shape::Rect {
            origin,
            width,
            height,
            fill,
            stroke,
        } => writeln!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}{}/>"#,
            origin.x,
            origin.y,
            width,
            height,
            fill_attr(*fill),
            stroke_attrs(stroke.as_ref())
        ),
        Shape::Line { from, to, stroke } => writeln!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(Some(stroke))
        ),
        Shape::Path {
            points,
            closed,
            fill,
            stroke,
        } => {
            let element = if *closed { "polygon" } else { "polyline" };
            writeln!(
                out,
                r#"<{} points="{}"{}{}/>"#,
                element,
                points_attr(points),
                fill_attr(*fill),
                stroke_attrs(stroke.as_ref())
            )
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            rotation,
        } => {
            let transform = rotation
                .map(|deg| {
                    format!(
                        r#" transform="rotate({:.1} {:.2} {:.2})""#,
                        deg, position.x, position.y
                    )
                })
                .unwrap_or_default();
            writeln!(
                out,
                concat!(
                    r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" "#,
                    r#"font-size="{:.1}" fill="{}" text-anchor="{}"{}>{}</text>"#
                ),
                position.x,
                position.y,
                size,
                color.to_css_string(),
                anchor_attr(*anchor),
                transform,
                escape(content)
            )
        }
    };
}

fn fill_attr(fill: Option<Color>) -> String {
    match fill {
        Some(c) => format!(r#" fill="{}""#, c.to_css_string()),
        None => r#" fill="none""#.to_string(),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(stroke) = stroke else {
        return String::new();
    };
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_css_string(),
        stroke.width
    );
    if let Some(dash) = &stroke.dash_array {
        let dash: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
        let _ = write!(attrs, r#" stroke-dasharray="{}""#, dash.join(" "));
    }
    attrs
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
