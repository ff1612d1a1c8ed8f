//! Render options, persisted as TOML.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input shown when nothing else is supplied.
pub const DEFAULT_INPUT: &str =
    "10 180 50 60 185 180 280 200 360 80 350 255 200 320 130 240 60 290 10 200";

const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 400;

/// A toggleable part of the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layer {
    /// The input points.
    Points,
    /// Straight polyline through the input points.
    Line,
    /// Input points used directly as a control polygon.
    BSpline,
    /// Curve from the exact reverse fit.
    Smooth,
    /// Curve from the legacy approximate reverse fit.
    OldSmooth,
    /// Edge midpoints of the input polyline.
    MidPoints,
    /// Edge third-points of the input polyline.
    ThirdPoints,
}

impl Layer {
    pub const ALL: [Layer; 7] = [
        Layer::Points,
        Layer::Line,
        Layer::BSpline,
        Layer::Smooth,
        Layer::OldSmooth,
        Layer::MidPoints,
        Layer::ThirdPoints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Points => "points",
            Layer::Line => "line",
            Layer::BSpline => "bSpline",
            Layer::Smooth => "smooth",
            Layer::OldSmooth => "oldSmooth",
            Layer::MidPoints => "midPoints",
            Layer::ThirdPoints => "thirdPoints",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown layer '{0}'. Expected one of: points, line, bSpline, smooth, oldSmooth, midPoints, thirdPoints.")]
pub struct UnknownLayer(pub String);

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

/// Canvas size, visible layers and fallback input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub hidden_layers: Vec<Layer>,
    pub default_input: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            hidden_layers: vec![Layer::OldSmooth],
            default_input: DEFAULT_INPUT.to_string(),
        }
    }
}

impl RenderOptions {
    /// Loads options from a TOML file. Falls back to defaults when the file is
    /// missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Loaded render options from {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Malformed options file {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No options file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Writes options as pretty-printed TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Saved render options to {}", path.display());
        Ok(())
    }

    pub fn is_visible(&self, layer: Layer) -> bool {
        !self.hidden_layers.contains(&layer)
    }

    pub fn show(&mut self, layer: Layer) {
        self.hidden_layers.retain(|&l| l != layer);
    }

    pub fn hide(&mut self, layer: Layer) {
        if self.is_visible(layer) {
            self.hidden_layers.push(layer);
        }
    }
}
