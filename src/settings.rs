// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! The constants below are the built-in defaults. A host can override any of
//! them by loading an [`EditorConfig`] from TOML; missing keys fall back to
//! the constants.

use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// GRID SETTINGS
// ============================================================================
/// Number of grid cells along each side of the symbol
const GRID_ELEMENTS: u32 = 16;

/// Side length of the symbol space (symbol units)
const GRID_EXTENT: f64 = 1.0;

// ============================================================================
// SNAP SETTINGS
// ============================================================================
/// Maximum distance from a grid intersection for snap-to-grid to apply
const SNAP_GRID_TOLERANCE: f64 = 0.02;

/// Maximum distance from a guide for snap-to-guide to apply
const SNAP_GUIDE_TOLERANCE: f64 = 0.02;

/// Maximum distance from a node for a press to start dragging it
const SNAP_NODE_TOLERANCE: f64 = 0.02;

/// Step between allowed guide line angles (degrees)
const GUIDE_ANGLE_STEP: f64 = 15.0;

/// Number of allowed guide line angles, covering [0°, 180°)
const GUIDE_ANGLE_COUNT: usize = 12;

// ============================================================================
// LINE WIDTH SETTINGS
// ============================================================================
const LINE_WIDTH_MIN: f64 = 0.01;
const LINE_WIDTH_MAX: f64 = 0.1;
const LINE_WIDTH_STEP: f64 = 0.01;
const LINE_WIDTH_DEFAULT: f64 = 0.01;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Grid geometry defaults
pub mod grid {
    pub const ELEMENTS: u32 = super::GRID_ELEMENTS;
    pub const EXTENT: f64 = super::GRID_EXTENT;
}

/// Snap tolerances, in symbol units
pub mod snap {
    pub const GRID_TOLERANCE: f64 = super::SNAP_GRID_TOLERANCE;
    pub const GUIDE_TOLERANCE: f64 = super::SNAP_GUIDE_TOLERANCE;
    pub const NODE_TOLERANCE: f64 = super::SNAP_NODE_TOLERANCE;
}

/// Guide line angles
pub mod guides {
    pub const ANGLE_STEP: f64 = super::GUIDE_ANGLE_STEP;
    pub const ANGLE_COUNT: usize = super::GUIDE_ANGLE_COUNT;

    /// The default allowed angles in degrees: 0, 15, ... 165
    pub fn default_angles() -> Vec<f64> {
        (0..ANGLE_COUNT).map(|i| i as f64 * ANGLE_STEP).collect()
    }
}

/// Line width limits, in symbol units
pub mod line_width {
    pub const MIN: f64 = super::LINE_WIDTH_MIN;
    pub const MAX: f64 = super::LINE_WIDTH_MAX;
    pub const STEP: f64 = super::LINE_WIDTH_STEP;
    pub const DEFAULT: f64 = super::LINE_WIDTH_DEFAULT;
}

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================

/// Errors raised while loading an [`EditorConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Grid layout of the symbol space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells along each side
    pub elements: u32,
    /// Side length of the square symbol space
    pub extent: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            elements: grid::ELEMENTS,
            extent: grid::EXTENT,
        }
    }
}

impl GridConfig {
    /// Distance between adjacent grid lines
    pub fn spacing(&self) -> f64 {
        self.extent / self.elements as f64
    }

    /// Geometric centre of the grid
    pub fn center(&self) -> kurbo::Point {
        kurbo::Point::new(self.extent / 2.0, self.extent / 2.0)
    }

    /// The visible symbol area
    pub fn bounds(&self) -> kurbo::Rect {
        kurbo::Rect::new(0.0, 0.0, self.extent, self.extent)
    }
}

/// Snapping tolerances and the allowed guide angles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub grid_tolerance: f64,
    pub guide_tolerance: f64,
    pub node_tolerance: f64,
    /// Guide line angles in degrees
    pub guide_angles: Vec<f64>,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_tolerance: snap::GRID_TOLERANCE,
            guide_tolerance: snap::GUIDE_TOLERANCE,
            node_tolerance: snap::NODE_TOLERANCE,
            guide_angles: guides::default_angles(),
        }
    }
}

/// Line width limits and increment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWidthConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for LineWidthConfig {
    fn default() -> Self {
        Self {
            min: line_width::MIN,
            max: line_width::MAX,
            step: line_width::STEP,
            default: line_width::DEFAULT,
        }
    }
}

impl LineWidthConfig {
    /// Clamp a width into the allowed range
    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min, self.max)
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid: GridConfig,
    pub snap: SnapConfig,
    pub line_width: LineWidthConfig,
}

impl EditorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded editor config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the values are usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.elements == 0 {
            return Err(ConfigError::Invalid("grid.elements must be at least 1".into()));
        }
        if !(self.grid.extent > 0.0) {
            return Err(ConfigError::Invalid("grid.extent must be positive".into()));
        }
        if self.snap.guide_angles.is_empty() {
            return Err(ConfigError::Invalid("snap.guide_angles must not be empty".into()));
        }
        let tolerances = [
            self.snap.grid_tolerance,
            self.snap.guide_tolerance,
            self.snap.node_tolerance,
        ];
        if tolerances.iter().any(|t| !(*t >= 0.0)) {
            return Err(ConfigError::Invalid("snap tolerances must be non-negative".into()));
        }
        let width = &self.line_width;
        if !(width.min > 0.0) || width.min > width.max {
            return Err(ConfigError::Invalid(format!(
                "line_width range [{}, {}] is empty",
                width.min, width.max
            )));
        }
        if !(width.step > 0.0) {
            return Err(ConfigError::Invalid("line_width.step must be positive".into()));
        }
        Ok(())
    }
}
