// components/keyframe.rs
//
// Keyframes on the scroll timeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::camera::CameraConfig;
use super::responsive::{apply_breakpoint, Breakpoint, ResponsiveOverrides};
use super::transform::ModelTransform;
use crate::core::easing::Easing;

/// Binds a normalized scroll position to a model pose and camera framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub id: String,
    /// Normalized scroll position in [0, 1].
    pub scroll: f64,
    /// Section this keyframe was authored in.
    pub section_id: String,
    /// Free-form note for whoever implements the page.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: ModelTransform,
    #[serde(default)]
    pub camera: CameraConfig,
    /// Curve used when blending INTO this keyframe from the previous one.
    #[serde(default)]
    pub ease_from: Easing,
    /// Pin this keyframe's state until scroll reaches the next keyframe.
    #[serde(default)]
    pub hold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<KeyframeEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<ResponsiveOverrides>,
}

impl Keyframe {
    pub fn new(id: impl Into<String>, scroll: f64, section_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scroll,
            section_id: section_id.into(),
            description: String::new(),
            model: ModelTransform::default(),
            camera: CameraConfig::default(),
            ease_from: Easing::default(),
            hold: false,
            event: None,
            responsive: None,
        }
    }

    // -- Builder methods --

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_model(mut self, model: ModelTransform) -> Self {
        self.model = model;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_ease_from(mut self, easing: Easing) -> Self {
        self.ease_from = easing;
        self
    }

    pub fn held(mut self) -> Self {
        self.hold = true;
        self
    }

    pub fn with_event(mut self, event: KeyframeEvent) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_responsive(mut self, responsive: ResponsiveOverrides) -> Self {
        self.responsive = Some(responsive);
        self
    }

    /// This keyframe's model pose at a breakpoint, or `None` when the model
    /// is hidden there.
    pub fn model_at(&self, breakpoint: Breakpoint) -> Option<ModelTransform> {
        apply_breakpoint(&self.model, self.responsive.as_ref(), breakpoint)
    }
}

/// Kind of scripted event fired when scroll reaches a keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyframeEventKind {
    Split,
    Rejoin,
    MaterialSwap,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Event metadata. The engine carries it but never acts on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyframeEvent {
    #[serde(rename = "type")]
    pub kind: KeyframeEventKind,
    /// Mesh group names for a split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<Vec<String>>,
    /// How far pieces separate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    /// Split direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    /// Delay between pieces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    /// Material name for a material swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<BTreeMap<String, serde_json::Value>>,
}

impl KeyframeEvent {
    pub fn new(kind: KeyframeEventKind) -> Self {
        Self {
            kind,
            pieces: None,
            spread: None,
            axis: None,
            stagger: None,
            material: None,
            custom_data: None,
        }
    }

    /// A split event separating `pieces` along `axis`.
    pub fn split(pieces: Vec<String>, spread: f64, axis: Axis) -> Self {
        Self {
            pieces: Some(pieces),
            spread: Some(spread),
            axis: Some(axis),
            ..Self::new(KeyframeEventKind::Split)
        }
    }
}
