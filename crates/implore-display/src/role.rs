//! Symbolic rendering roles
//!
//! A role is the purpose a data dimension serves on a display: a spatial
//! axis, a color channel, a flow vector component, and so on. Roles are a
//! closed set. Their order mirrors the rendering engine's role array, so
//! the slot index of a role (its position in [`ScalarRole::ALL`]) is the
//! value handed across the engine boundary.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Number of roles in the table
pub const ROLE_COUNT: usize = 48;

/// A symbolic rendering role.
///
/// Variant order is the engine's role-array order and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[repr(u8)]
pub enum ScalarRole {
    XAxis,
    YAxis,
    ZAxis,
    Latitude,
    Longitude,
    Radius,
    List,
    Red,
    Green,
    Blue,
    Rgb,
    Rgba,
    Hue,
    Saturation,
    Value,
    Hsv,
    Cyan,
    Magenta,
    Yellow,
    Cmy,
    Alpha,
    Animation,
    SelectValue,
    SelectRange,
    IsoContour,
    Flow1X,
    Flow1Y,
    Flow1Z,
    Flow2X,
    Flow2Y,
    Flow2Z,
    XAxisOffset,
    YAxisOffset,
    ZAxisOffset,
    Shape,
    Text,
    ShapeScale,
    LineWidth,
    PointSize,
    CylRadius,
    CylAzimuth,
    CylZAxis,
    Flow1Elevation,
    Flow1Azimuth,
    Flow1Radial,
    Flow2Elevation,
    Flow2Azimuth,
    Flow2Radial,
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, ScalarRole> = ScalarRole::ALL
        .iter()
        .map(|role| (role.name(), *role))
        .collect();
}

impl ScalarRole {
    /// Every role, in slot order.
    pub const ALL: [ScalarRole; ROLE_COUNT] = [
        Self::XAxis,
        Self::YAxis,
        Self::ZAxis,
        Self::Latitude,
        Self::Longitude,
        Self::Radius,
        Self::List,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Rgb,
        Self::Rgba,
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::Hsv,
        Self::Cyan,
        Self::Magenta,
        Self::Yellow,
        Self::Cmy,
        Self::Alpha,
        Self::Animation,
        Self::SelectValue,
        Self::SelectRange,
        Self::IsoContour,
        Self::Flow1X,
        Self::Flow1Y,
        Self::Flow1Z,
        Self::Flow2X,
        Self::Flow2Y,
        Self::Flow2Z,
        Self::XAxisOffset,
        Self::YAxisOffset,
        Self::ZAxisOffset,
        Self::Shape,
        Self::Text,
        Self::ShapeScale,
        Self::LineWidth,
        Self::PointSize,
        Self::CylRadius,
        Self::CylAzimuth,
        Self::CylZAxis,
        Self::Flow1Elevation,
        Self::Flow1Azimuth,
        Self::Flow1Radial,
        Self::Flow2Elevation,
        Self::Flow2Azimuth,
        Self::Flow2Radial,
    ];

    /// Look up a role by its symbolic name ("x", "hue", "flow1x", ...).
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Position of this role in the engine's role array.
    pub fn slot_index(&self) -> usize {
        *self as usize
    }

    /// Role at a given slot index
    pub fn from_slot(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Symbolic name accepted by [`ScalarRole::lookup`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::XAxis => "x",
            Self::YAxis => "y",
            Self::ZAxis => "z",
            Self::Latitude => "lat",
            Self::Longitude => "lon",
            Self::Radius => "rad",
            Self::List => "list",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Value => "value",
            Self::Hsv => "hsv",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Cmy => "cmy",
            Self::Alpha => "alpha",
            Self::Animation => "animation",
            Self::SelectValue => "selectvalue",
            Self::SelectRange => "selectrange",
            Self::IsoContour => "contour",
            Self::Flow1X => "flow1x",
            Self::Flow1Y => "flow1y",
            Self::Flow1Z => "flow1z",
            Self::Flow2X => "flow2x",
            Self::Flow2Y => "flow2y",
            Self::Flow2Z => "flow2z",
            Self::XAxisOffset => "xoffset",
            Self::YAxisOffset => "yoffset",
            Self::ZAxisOffset => "zoffset",
            Self::Shape => "shape",
            Self::Text => "text",
            Self::ShapeScale => "shapescale",
            Self::LineWidth => "linewidth",
            Self::PointSize => "pointsize",
            Self::CylRadius => "cylradius",
            Self::CylAzimuth => "cylazimuth",
            Self::CylZAxis => "cylzaxis",
            Self::Flow1Elevation => "flow1elev",
            Self::Flow1Azimuth => "flow1azimuth",
            Self::Flow1Radial => "flow1radial",
            Self::Flow2Elevation => "flow2elev",
            Self::Flow2Azimuth => "flow2azimuth",
            Self::Flow2Radial => "flow2radial",
        }
    }

    /// Engine-side name of the role, used in log output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::XAxis => "DisplayXAxis",
            Self::YAxis => "DisplayYAxis",
            Self::ZAxis => "DisplayZAxis",
            Self::Latitude => "DisplayLatitude",
            Self::Longitude => "DisplayLongitude",
            Self::Radius => "DisplayRadius",
            Self::List => "DisplayList",
            Self::Red => "DisplayRed",
            Self::Green => "DisplayGreen",
            Self::Blue => "DisplayBlue",
            Self::Rgb => "DisplayRGB",
            Self::Rgba => "DisplayRGBA",
            Self::Hue => "DisplayHue",
            Self::Saturation => "DisplaySaturation",
            Self::Value => "DisplayValue",
            Self::Hsv => "DisplayHSV",
            Self::Cyan => "DisplayCyan",
            Self::Magenta => "DisplayMagenta",
            Self::Yellow => "DisplayYellow",
            Self::Cmy => "DisplayCMY",
            Self::Alpha => "DisplayAlpha",
            Self::Animation => "DisplayAnimation",
            Self::SelectValue => "DisplaySelectValue",
            Self::SelectRange => "DisplaySelectRange",
            Self::IsoContour => "DisplayIsoContour",
            Self::Flow1X => "DisplayFlow1X",
            Self::Flow1Y => "DisplayFlow1Y",
            Self::Flow1Z => "DisplayFlow1Z",
            Self::Flow2X => "DisplayFlow2X",
            Self::Flow2Y => "DisplayFlow2Y",
            Self::Flow2Z => "DisplayFlow2Z",
            Self::XAxisOffset => "DisplayXAxisOffset",
            Self::YAxisOffset => "DisplayYAxisOffset",
            Self::ZAxisOffset => "DisplayZAxisOffset",
            Self::Shape => "DisplayShape",
            Self::Text => "DisplayText",
            Self::ShapeScale => "DisplayShapeScale",
            Self::LineWidth => "DisplayLineWidth",
            Self::PointSize => "DisplayPointSize",
            Self::CylRadius => "DisplayCylRadius",
            Self::CylAzimuth => "DisplayCylAzimuth",
            Self::CylZAxis => "DisplayCylZAxis",
            Self::Flow1Elevation => "DisplayFlow1Elevation",
            Self::Flow1Azimuth => "DisplayFlow1Azimuth",
            Self::Flow1Radial => "DisplayFlow1Radial",
            Self::Flow2Elevation => "DisplayFlow2Elevation",
            Self::Flow2Azimuth => "DisplayFlow2Azimuth",
            Self::Flow2Radial => "DisplayFlow2Radial",
        }
    }

    /// The spatial axis this role drives, if it is one of x/y/z
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::XAxis => Some(Axis::X),
            Self::YAxis => Some(Axis::Y),
            Self::ZAxis => Some(Axis::Z),
            _ => None,
        }
    }

    /// Check if this role needs a depth axis to render
    pub fn is_depth(&self) -> bool {
        matches!(self, Self::ZAxis)
    }
}

impl fmt::Display for ScalarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScalarRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| s.to_string())
    }
}

/// A spatial display axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Role that places data along this axis
    pub fn role(&self) -> ScalarRole {
        match self {
            Axis::X => ScalarRole::XAxis,
            Axis::Y => ScalarRole::YAxis,
            Axis::Z => ScalarRole::ZAxis,
        }
    }

    /// Name of the generic type that stands in for this axis
    pub fn generic_name(&self) -> &'static str {
        self.role().name()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generic_name())
    }
}
