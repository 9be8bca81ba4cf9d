//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (matching the classic diagram style)
//! 2. Global config: `$XDG_CONFIG_HOME/astview/astview.toml`
//! 3. Environment variables: `ASTVIEW_*` prefix (nested keys via `__`,
//!    e.g. `ASTVIEW_PALETTE__FILL`)

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AstViewResult;
use crate::geometry::{BoxSpec, CanvasSize};
use crate::layout::LayoutContext;

/// Diagram colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    /// Node box fill
    pub fill: String,
    /// Node box outline
    pub stroke: String,
    /// Label text
    pub text: String,
    /// Connector lines
    pub line: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: "#3AA".to_string(),
            stroke: "#FFF".to_string(),
            text: "#FFF".to_string(),
            line: "#CCC".to_string(),
        }
    }
}

/// Effective settings for one diagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub margin: f64,
    pub font_size: f64,
    pub canvas: CanvasSize,
    #[serde(rename = "box")]
    pub box_spec: BoxSpec,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            margin: 20.0,
            font_size: 12.0,
            canvas: CanvasSize::default(),
            box_spec: BoxSpec::default(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> AstViewResult<Self> {
        let mut builder = Config::builder();

        if let Some(dirs) = ProjectDirs::from("", "", "astview") {
            let path = dirs.config_dir().join("astview.toml");
            debug!("global config candidate: {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        let cfg = builder
            .add_source(
                Environment::with_prefix("ASTVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Missing keys fall back to compiled defaults via serde.
        Ok(cfg.try_deserialize()?)
    }

    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext::new(self.box_spec, self.margin, self.canvas)
    }
}
