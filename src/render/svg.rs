//! SVG canvas: accumulates sink calls into an SVG document string.

use crate::config::Palette;
use crate::geometry::{BoxSpec, CanvasSize, Point};
use crate::render::{RenderSink, TextRole};

const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

pub struct SvgCanvas {
    canvas: CanvasSize,
    palette: Palette,
    font_size: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(canvas: CanvasSize, palette: Palette, font_size: f64) -> Self {
        Self {
            canvas,
            palette,
            font_size,
            body: String::new(),
        }
    }

    /// Wrap the accumulated shapes into a complete SVG document.
    pub fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" "#,
                r#"viewBox="0 0 {w} {h}" font-family="{font}">"#,
                "\n{body}</svg>\n"
            ),
            w = fmt_num(self.canvas.width),
            h = fmt_num(self.canvas.height),
            font = FONT_FAMILY,
            body = self.body,
        )
    }
}

impl RenderSink for SvgCanvas {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw_rect(&mut self, origin: Point, box_spec: &BoxSpec) {
        self.body.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\"/>\n",
            fmt_num(origin.x),
            fmt_num(origin.y),
            fmt_num(box_spec.width),
            fmt_num(box_spec.height),
            fmt_num(box_spec.corner_radius),
            self.palette.fill,
            self.palette.stroke,
        ));
    }

    fn draw_text(&mut self, anchor: Point, text: &str, role: TextRole) {
        // The kind headline is drawn slightly larger than detail lines.
        let size = match role {
            TextRole::Kind => self.font_size + 2.0,
            TextRole::Detail => self.font_size,
        };
        self.body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\">",
            fmt_num(anchor.x),
            fmt_num(anchor.y),
            fmt_num(size),
            self.palette.text,
        ));
        for (i, line) in text.lines().enumerate() {
            if i == 0 {
                self.body.push_str(&escape(line));
            } else {
                self.body.push_str(&format!(
                    "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
                    fmt_num(anchor.x),
                    fmt_num(self.font_size),
                    escape(line),
                ));
            }
        }
        self.body.push_str("</text>\n");
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.body.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            self.palette.line,
        ));
    }
}

/// Integral coordinates without a trailing `.0`, fractional ones as-is.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
