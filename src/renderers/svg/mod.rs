//! SVG rendering output
//!
//! Standalone SVG for inspecting a skyline outside the editor.

pub mod elements;

pub use elements::*;

use crate::renderers::display_list::SkylineDisplayList;

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    /// Render the display list as an SVG document whose view box is the
    /// bounding box of its strokes, padded by the stroke width
    pub fn render_skyline(list: &SkylineDisplayList) -> String {
        let pad = list.north.line_width.max(list.south.line_width);
        let (left, top, right, bottom) = list.bounds().unwrap_or((0.0, 0.0, 0.0, 0.0));
        let width = right - left + 2.0 * pad;
        let height = bottom - top + 2.0 * pad;

        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
            left - pad,
            top - pad,
            width,
            height,
            width,
            height
        ));
        out.push_str(&SVGElementRenderer::render_path(&list.north));
        out.push_str(&SVGElementRenderer::render_path(&list.south));
        out.push_str("</svg>\n");
        out
    }
}

impl SkylineDisplayList {
    pub fn to_svg(&self) -> String {
        SVGRenderer::render_skyline(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SkylineConfig;
    use crate::models::Rect;
    use crate::skyline::Skyline;

    #[test]
    fn test_svg_contains_both_sides() {
        let mut skyline = Skyline::new();
        skyline.add_rect(&Rect::new(0.0, 10.0, 5.0, 10.0));
        let svg = skyline.paint(&SkylineConfig::default()).to_svg();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="-1 9 7 12""#));
        assert!(svg.contains(r#"<g class="skyline-north">"#));
        assert!(svg.contains(r#"<g class="skyline-south">"#));
        assert_eq!(svg.matches("<line ").count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_empty_skyline_svg() {
        let svg = Skyline::new().paint(&SkylineConfig::default()).to_svg();
        assert_eq!(svg.matches("<line ").count(), 0);
        assert!(svg.contains(r#"viewBox="-1 -1 2 2""#));
    }
}
