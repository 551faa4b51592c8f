// components/responsive.rs
//
// Per-breakpoint overrides of a keyframe's model pose.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::transform::ModelTransform;

/// Viewport class the page is previewed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// Reference viewport width in CSS pixels.
    pub fn width(self) -> u32 {
        match self {
            Breakpoint::Desktop => 1280,
            Breakpoint::Tablet => 768,
            Breakpoint::Mobile => 375,
        }
    }

    /// Classify a viewport width. Widths below the tablet reference are mobile.
    pub fn for_width(width: u32) -> Self {
        if width >= Breakpoint::Desktop.width() {
            Breakpoint::Desktop
        } else if width >= Breakpoint::Tablet.width() {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }
}

/// A partial `{x, y, z}`: each axis left `None` keeps the base value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl AxisOverride {
    pub fn apply(&self, base: DVec3) -> DVec3 {
        DVec3::new(
            self.x.unwrap_or(base.x),
            self.y.unwrap_or(base.y),
            self.z.unwrap_or(base.z),
        )
    }
}

impl From<DVec3> for AxisOverride {
    fn from(v: DVec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }
}

/// A partial [`ModelTransform`]: any field or axis left `None` keeps the
/// base value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<AxisOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl TransformOverride {
    pub fn apply(&self, base: &ModelTransform) -> ModelTransform {
        ModelTransform {
            position: self.position.map_or(base.position, |o| o.apply(base.position)),
            rotation: self.rotation.map_or(base.rotation, |o| o.apply(base.rotation)),
            scale: self.scale.unwrap_or(base.scale),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }
}

/// Mobile overrides may also hide the model entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MobileOverride {
    #[serde(flatten)]
    pub transform: TransformOverride,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsiveOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<TransformOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileOverride>,
}

impl ResponsiveOverrides {
    /// Resolve `base` for `breakpoint`. Returns `None` when the model is hidden.
    pub fn apply(&self, base: &ModelTransform, breakpoint: Breakpoint) -> Option<ModelTransform> {
        match breakpoint {
            Breakpoint::Desktop => Some(*base),
            Breakpoint::Tablet => Some(self.tablet.map_or(*base, |o| o.apply(base))),
            Breakpoint::Mobile => match self.mobile {
                Some(MobileOverride { hidden: Some(true), .. }) => None,
                Some(m) => Some(m.transform.apply(base)),
                None => Some(*base),
            },
        }
    }
}

/// Resolve a model pose for `breakpoint` when overrides may be absent.
/// Returns `None` when the model is hidden at that breakpoint.
pub fn apply_breakpoint(
    model: &ModelTransform,
    overrides: Option<&ResponsiveOverrides>,
    breakpoint: Breakpoint,
) -> Option<ModelTransform> {
    match overrides {
        Some(overrides) => overrides.apply(model, breakpoint),
        None => Some(*model),
    }
}
