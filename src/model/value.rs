//! Typed property values read out of the session's subsystem models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A configuration value as exposed by a filter, layout or preview property.
///
/// Covers every shape a session setting can take:
/// - Scalars: Bool, Int, Float, Text
/// - Ranges: filter bounds with an optional open upper end
/// - Colors: plain colors and the three wrapper kinds that carry a custom color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Range(Range),

    // Color types
    Color(Color),
    DependentColor(DependentColor),
    DependentOriginalColor(DependentOriginalColor),
    EdgeColor(EdgeColor),
}

// ============================================================================
// Color
// ============================================================================

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Canonical form: `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

// ============================================================================
// Color wrappers
// ============================================================================

/// How a dependent color is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependentColorMode {
    Parent,
    Custom,
}

/// A color computed relative to its parent element unless a custom color is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentColor {
    pub mode: DependentColorMode,
    pub custom: Option<Color>,
}

impl DependentColor {
    pub fn parent() -> Self {
        Self { mode: DependentColorMode::Parent, custom: None }
    }

    pub fn custom(color: Color) -> Self {
        Self { mode: DependentColorMode::Custom, custom: Some(color) }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            DependentColorMode::Parent => "parent",
            DependentColorMode::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependentOriginalColorMode {
    Parent,
    Original,
    Custom,
}

/// Like [`DependentColor`], but may also fall back to the element's original color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentOriginalColor {
    pub mode: DependentOriginalColorMode,
    pub custom: Option<Color>,
}

impl DependentOriginalColor {
    pub fn new(mode: DependentOriginalColorMode) -> Self {
        Self { mode, custom: None }
    }

    pub fn custom(color: Color) -> Self {
        Self { mode: DependentOriginalColorMode::Custom, custom: Some(color) }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            DependentOriginalColorMode::Parent => "parent",
            DependentOriginalColorMode::Original => "original",
            DependentOriginalColorMode::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeColorMode {
    Source,
    Target,
    Mixed,
    Original,
    Custom,
}

/// Edge coloring rule: from an endpoint, mixed, original, or a custom color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColor {
    pub mode: EdgeColorMode,
    pub custom: Option<Color>,
}

impl EdgeColor {
    pub fn new(mode: EdgeColorMode) -> Self {
        Self { mode, custom: None }
    }

    pub fn custom(color: Color) -> Self {
        Self { mode: EdgeColorMode::Custom, custom: Some(color) }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            EdgeColorMode::Source => "source",
            EdgeColorMode::Target => "target",
            EdgeColorMode::Mixed => "mixed",
            EdgeColorMode::Original => "original",
            EdgeColorMode::Custom => "custom",
        }
    }
}

// ============================================================================
// Range
// ============================================================================

/// Numeric bounds of a range filter. `max == None` is an open upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: Option<f64>,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}–{}", self.min, max),
            None => write!(f, "{}–∞", self.min),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for PropertyValue { fn from(v: bool) -> Self { PropertyValue::Bool(v) } }
impl From<i32> for PropertyValue { fn from(v: i32) -> Self { PropertyValue::Int(v as i64) } }
impl From<i64> for PropertyValue { fn from(v: i64) -> Self { PropertyValue::Int(v) } }
impl From<f32> for PropertyValue { fn from(v: f32) -> Self { PropertyValue::Float(v as f64) } }
impl From<f64> for PropertyValue { fn from(v: f64) -> Self { PropertyValue::Float(v) } }
impl From<String> for PropertyValue { fn from(v: String) -> Self { PropertyValue::Text(v) } }
impl From<&str> for PropertyValue { fn from(v: &str) -> Self { PropertyValue::Text(v.to_owned()) } }
impl From<Range> for PropertyValue { fn from(v: Range) -> Self { PropertyValue::Range(v) } }
impl From<Color> for PropertyValue { fn from(v: Color) -> Self { PropertyValue::Color(v) } }
impl From<DependentColor> for PropertyValue {
    fn from(v: DependentColor) -> Self { PropertyValue::DependentColor(v) }
}
impl From<DependentOriginalColor> for PropertyValue {
    fn from(v: DependentOriginalColor) -> Self { PropertyValue::DependentOriginalColor(v) }
}
impl From<EdgeColor> for PropertyValue {
    fn from(v: EdgeColor) -> Self { PropertyValue::EdgeColor(v) }
}
