//! Level layout: one depth-first pass assigning an absolute position to
//! every node and a parent connector to every non-root node.
//!
//! Parent before children, siblings left to right. A parent is horizontally
//! centered over its children's row; the root is centered on the canvas.
//! Each sibling's subtree grows downward independently of its siblings, so
//! unevenly deep branches can overlap visually. Likewise every connector of
//! a parent starts from the same bottom-center point instead of fanning out.
//! Both are kept as documented behavior of the diagram style.

use tracing::{debug, instrument};

use crate::fields::children_of;
use crate::geometry::{BoxSpec, CanvasSize, Connector, Placement, Point};
use crate::node::AstNode;

/// Receives one call per visited node, in traversal order.
pub trait LayoutSink<'a> {
    fn visit(&mut self, node: &'a AstNode, position: Point, connector: Option<Connector>);
}

/// Explicit layout context: box size, margin, and canvas dimensions,
/// constructed once by the caller and threaded through the traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub box_spec: BoxSpec,
    pub margin: f64,
    pub canvas: CanvasSize,
}

impl LayoutContext {
    pub fn new(box_spec: BoxSpec, margin: f64, canvas: CanvasSize) -> Self {
        Self {
            box_spec,
            margin,
            canvas,
        }
    }

    /// Run one full layout pass over `root`, emitting every node to `sink`.
    ///
    /// Precondition: the tree is acyclic. `AstNode` is an owned value type,
    /// so safe code cannot construct a cycle.
    #[instrument(level = "debug", skip_all)]
    pub fn layout<'a, S>(&self, root: &'a AstNode, sink: &mut S)
    where
        S: LayoutSink<'a> + ?Sized,
    {
        let origin = Point::new(
            self.canvas.width / 2.0 - self.box_spec.width / 2.0,
            self.margin,
        );
        debug!("root origin: ({}, {})", origin.x, origin.y);
        self.place(root, origin, None, sink);
    }

    /// Collected variant of [`layout`](Self::layout): the full geometry
    /// sequence as a vector, in emission order.
    pub fn placements<'a>(&self, root: &'a AstNode) -> Vec<Placement<'a>> {
        let mut collector = Collector {
            placements: Vec::new(),
        };
        self.layout(root, &mut collector);
        collector.placements
    }

    fn place<'a, S>(
        &self,
        node: &'a AstNode,
        position: Point,
        connector: Option<Connector>,
        sink: &mut S,
    ) where
        S: LayoutSink<'a> + ?Sized,
    {
        sink.visit(node, position, connector);

        let children = children_of(node);
        if children.is_empty() {
            return;
        }

        let b = self.box_spec;
        // One shared anchor for every child of this node.
        let anchor = Point::new(position.x + b.width / 2.0, position.y + b.height);
        let row_y = position.y + b.height + self.margin;

        // Center the children's row under the parent. A single child sits
        // directly below; a wider row shifts left by half its own width.
        let mut x = position.x;
        if children.len() > 1 {
            x += b.width / 2.0 + self.margin / 2.0
                - children.len() as f64 / 2.0 * (b.width + self.margin);
        }

        for child in children {
            let child_pos = Point::new(x, row_y);
            let child_connector = Connector {
                from: anchor,
                to: Point::new(x + b.width / 2.0, row_y),
            };
            self.place(child, child_pos, Some(child_connector), sink);
            x += b.width + self.margin;
        }
    }
}

struct Collector<'a> {
    placements: Vec<Placement<'a>>,
}

impl<'a> LayoutSink<'a> for Collector<'a> {
    fn visit(&mut self, node: &'a AstNode, position: Point, connector: Option<Connector>) {
        self.placements.push(Placement {
            node,
            position,
            connector,
        });
    }
}
