// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The persisted symbol: a path plus its rendering attributes.
//!
//! The path is kept as a `kurbo::BezPath`, the form storage collaborators
//! exchange; the editor deconstructs it into elements and points on load.
//! With serde the path is written as SVG path data.

use kurbo::{BezPath, Cap, Join, Stroke};
use peniko::Fill;
use serde::{Deserialize, Serialize};

use crate::settings;

/// Library slot of a symbol; `0` means not yet saved
pub type SymbolIndex = u16;

/// Index used for a new symbol that has no library slot yet
pub const UNSAVED: SymbolIndex = 0;

/// Rule deciding which regions of a self-intersecting path are filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    EvenOdd,
    #[default]
    WindingNonZero,
}

/// Shape of open stroke ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapStyle {
    Flat,
    Square,
    #[default]
    Round,
}

/// Shape of stroke corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStyle {
    Miter,
    Bevel,
    #[default]
    Round,
}

impl From<FillRule> for Fill {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::EvenOdd => Fill::EvenOdd,
            FillRule::WindingNonZero => Fill::NonZero,
        }
    }
}

impl From<CapStyle> for Cap {
    fn from(cap: CapStyle) -> Self {
        match cap {
            CapStyle::Flat => Cap::Butt,
            CapStyle::Square => Cap::Square,
            CapStyle::Round => Cap::Round,
        }
    }
}

impl From<JoinStyle> for Join {
    fn from(join: JoinStyle) -> Self {
        match join {
            JoinStyle::Miter => Join::Miter,
            JoinStyle::Bevel => Join::Bevel,
            JoinStyle::Round => Join::Round,
        }
    }
}

/// Fill and stroke attributes of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub filled: bool,
    pub fill_rule: FillRule,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
    pub line_width: f64,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            filled: true,
            fill_rule: FillRule::default(),
            cap_style: CapStyle::default(),
            join_style: JoinStyle::default(),
            line_width: settings::line_width::DEFAULT,
        }
    }
}

impl Attributes {
    /// Default attributes with the line width taken from a config
    pub fn with_line_width(line_width: f64) -> Self {
        Self {
            line_width,
            ..Self::default()
        }
    }

    /// The drawing style a host surface needs to paint the path
    pub fn style(&self) -> PathStyle {
        PathStyle {
            filled: self.filled,
            fill: self.fill_rule.into(),
            stroke: Stroke::new(self.line_width)
                .with_caps(self.cap_style.into())
                .with_join(self.join_style.into()),
        }
    }
}

/// Attributes translated into the types a kurbo/peniko renderer consumes
#[derive(Debug, Clone)]
pub struct PathStyle {
    /// Whether to fill the path in addition to stroking it
    pub filled: bool,
    pub fill: Fill,
    pub stroke: Stroke,
}

/// A symbol as exchanged with storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    #[serde(with = "svg_path_data")]
    pub path: BezPath,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Symbol {
    pub fn new(path: BezPath, attributes: Attributes) -> Self {
        Self { path, attributes }
    }

    /// Encode as JSON for a storage collaborator
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Serialize a `BezPath` as an SVG path data string
mod svg_path_data {
    use kurbo::BezPath;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&path.to_svg())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BezPath, D::Error> {
        let data = String::deserialize(deserializer)?;
        if data.trim().is_empty() {
            return Ok(BezPath::new());
        }
        BezPath::from_svg(&data).map_err(serde::de::Error::custom)
    }
}
