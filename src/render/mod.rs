//! Rendering: the sink contract and the diagram renderer bridging layout
//! geometry to drawing calls.

pub mod svg;

pub use svg::SvgCanvas;

use crate::geometry::{BoxSpec, Connector, Point};
use crate::label::label_for;
use crate::layout::LayoutSink;
use crate::node::AstNode;

/// Distinguishes the kind headline from the detail lines below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Kind,
    Detail,
}

/// Narrow drawing contract. Calls arrive in draw order and the sink is
/// expected to execute them in that order.
pub trait RenderSink {
    /// Discard previously drawn output before a fresh pass.
    fn clear(&mut self);
    fn draw_rect(&mut self, origin: Point, box_spec: &BoxSpec);
    /// `anchor.x` is the horizontal center of the text.
    fn draw_text(&mut self, anchor: Point, text: &str, role: TextRole);
    fn draw_line(&mut self, from: Point, to: Point);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }
    fn draw_rect(&mut self, origin: Point, box_spec: &BoxSpec) {
        (**self).draw_rect(origin, box_spec);
    }
    fn draw_text(&mut self, anchor: Point, text: &str, role: TextRole) {
        (**self).draw_text(anchor, text, role);
    }
    fn draw_line(&mut self, from: Point, to: Point) {
        (**self).draw_line(from, to);
    }
}

/// Turns each visited node into sink calls: box, connector line, kind text,
/// then the optional label detail.
pub struct DiagramRenderer<S> {
    sink: S,
    box_spec: BoxSpec,
    font_size: f64,
}

impl<S: RenderSink> DiagramRenderer<S> {
    pub fn new(sink: S, box_spec: BoxSpec, font_size: f64) -> Self {
        Self {
            sink,
            box_spec,
            font_size,
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<'a, S: RenderSink> LayoutSink<'a> for DiagramRenderer<S> {
    fn visit(&mut self, node: &'a AstNode, position: Point, connector: Option<Connector>) {
        self.sink.draw_rect(position, &self.box_spec);
        if let Some(c) = connector {
            self.sink.draw_line(c.from, c.to);
        }

        let headline = Point::new(
            position.x + self.box_spec.width / 2.0,
            position.y + self.font_size,
        );
        self.sink.draw_text(headline, node.kind(), TextRole::Kind);

        let detail = label_for(node);
        if !detail.is_empty() {
            let below = Point::new(headline.x, headline.y + self.font_size);
            self.sink.draw_text(below, &detail, TextRole::Detail);
        }
    }
}
