//! Geometry value types shared by layout and rendering.
//!
//! Positions are plain values; the traversal never shares a mutable
//! coordinate between call frames.

use serde::{Deserialize, Serialize};

use crate::node::AstNode;

/// A 2D point. For node placements this is the box's top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The fixed rectangle drawn for every node, regardless of content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSpec {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 50.0,
            corner_radius: 10.0,
        }
    }
}

/// Drawing surface dimensions, captured once before the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Straight segment from a parent's bottom-center to a child's top-center.
///
/// All of a parent's connectors share the same `from` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
}

/// One emitted geometry tuple: a node, its position, and the connector to
/// its parent (`None` for the root).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub node: &'a AstNode,
    pub position: Point,
    pub connector: Option<Connector>,
}
