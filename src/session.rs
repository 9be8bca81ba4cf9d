//! Render session: memoized parse → layout → render orchestration.
//!
//! The session is the host-facing entry point. It owns the only persistent
//! state in the crate, a content hash of the last successfully processed
//! input, used purely to skip redundant recomputation. It is meant to be
//! invoked serially, once per completed input change.

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::fields::node_count;
use crate::render::{DiagramRenderer, RenderSink};
use crate::source::{JsonSource, TreeSource};

/// Result of one [`RenderSession::process`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input textually identical to the last processed one; nothing was
    /// recomputed and the sink was not touched.
    Unchanged,
    /// Full layout pass completed; every reachable node was emitted.
    Rendered { nodes: usize },
    /// The supplier rejected the input; the sink was not touched and the
    /// previously drawn diagram (if any) is the caller's to clear or keep.
    ParseFailed { message: String },
}

pub struct RenderSession<T: TreeSource = JsonSource> {
    settings: Settings,
    source: T,
    /// Content hash of the last successfully rendered input.
    last_input: Option<String>,
}

impl RenderSession<JsonSource> {
    /// Canvas dimensions and the rest of the settings are captured here,
    /// once, before the first layout call.
    pub fn new(settings: Settings) -> Self {
        Self::with_source(settings, JsonSource)
    }
}

impl<T: TreeSource> RenderSession<T> {
    pub fn with_source(settings: Settings, source: T) -> Self {
        Self {
            settings,
            source,
            last_input: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Process one input: skip if unchanged, otherwise parse and, on
    /// success, clear the sink and emit the whole diagram. A successful
    /// pass always emits the full tree, never partial output.
    #[instrument(level = "debug", skip_all)]
    pub fn process<S: RenderSink>(&mut self, input: &str, sink: &mut S) -> Outcome {
        let hash = content_hash(input.as_bytes());
        if self.last_input.as_deref() == Some(hash.as_str()) {
            debug!("input unchanged, skipping layout pass");
            return Outcome::Unchanged;
        }

        match self.source.supply(input) {
            Err(e) => {
                // A failed parse forgets the memo: a later retry of the
                // same text goes through the supplier again.
                self.last_input = None;
                Outcome::ParseFailed {
                    message: e.to_string(),
                }
            }
            Ok(root) => {
                self.last_input = Some(hash);
                sink.clear();
                let context = self.settings.layout_context();
                let mut renderer = DiagramRenderer::new(
                    &mut *sink,
                    self.settings.box_spec,
                    self.settings.font_size,
                );
                context.layout(&root, &mut renderer);
                Outcome::Rendered {
                    nodes: node_count(&root),
                }
            }
        }
    }
}

/// Hex SHA-256 of `content`, the memo key for one input text.
fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
