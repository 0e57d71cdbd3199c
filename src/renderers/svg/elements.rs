//! SVG element rendering

use crate::renderers::display_list::{RenderPath, RenderStroke};

pub struct SVGElementRenderer;

impl SVGElementRenderer {
    /// One `<line>` element
    pub fn render_stroke(stroke: &RenderStroke, color: &str, line_width: f64) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            stroke.x1,
            stroke.y1,
            stroke.x2,
            stroke.y2,
            escape_attr(color),
            line_width
        )
    }

    /// A `<g>` group holding every stroke of one skyline line
    pub fn render_path(path: &RenderPath) -> String {
        let mut out = String::new();
        out.push_str(&format!("  <g class=\"skyline-{}\">\n", side_class(path)));
        for stroke in &path.strokes {
            out.push_str(&format!(
                "    {}\n",
                Self::render_stroke(stroke, &path.color, path.line_width)
            ));
        }
        out.push_str("  </g>\n");
        out
    }
}

fn side_class(path: &RenderPath) -> &'static str {
    if path.side.is_north() {
        "north"
    } else {
        "south"
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
