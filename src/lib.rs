//! astview: draw parsed syntax trees as labeled box diagrams.
//!
//! The crate's core is a deterministic level-layout algorithm: one
//! depth-first pass over a heterogeneously shaped tree, discovering
//! children from a fixed allow-list of field names and centering each
//! parent over its children's row. Parsing source text and putting pixels
//! on a screen are collaborators behind the [`source::TreeSource`] and
//! [`render::RenderSink`] traits; the bundled realizations consume
//! ESTree-shaped JSON and emit SVG.
//!
//! ```
//! use astview::{AstNode, FieldValue, Settings};
//!
//! let root = AstNode::new("Program").with_field(
//!     "body",
//!     FieldValue::Nodes(vec![AstNode::new("EmptyStatement")]),
//! );
//!
//! let placements = Settings::default().layout_context().placements(&root);
//! assert_eq!(placements.len(), 2);
//! assert_eq!(placements[0].position.x, 325.0);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod fields;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod node;
pub mod outline;
pub mod render;
pub mod session;
pub mod source;
pub mod util;

pub use config::{Palette, Settings};
pub use errors::{AstViewError, AstViewResult};
pub use geometry::{BoxSpec, CanvasSize, Connector, Placement, Point};
pub use layout::{LayoutContext, LayoutSink};
pub use node::{AstNode, FieldValue, Scalar};
pub use session::{Outcome, RenderSession};
pub use source::{JsonSource, TreeSource};
