use glam::DVec3;
use serde::Serialize;

use crate::api::config::PreviewConfig;
use crate::api::project::ModelConfig;
use crate::components::transform::ModelTransform;
use crate::core::math::deg_to_rad;

/// Model transform resolved into world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPlacement {
    pub translation: [f64; 3],
    /// Euler XYZ, radians, with the model's initial rotation folded in.
    pub rotation_radians: [f64; 3],
    pub scale: f64,
    pub opacity: f64,
    /// Opacity below 1: the renderer must blend.
    pub transparent: bool,
}

impl ModelPlacement {
    pub fn translation(&self) -> DVec3 {
        DVec3::from(self.translation)
    }
}

/// Horizontal viewport percent to world X. 50 is the center.
pub fn vw_to_world(vw: f64, units_per_percent: f64) -> f64 {
    (vw - 50.0) * units_per_percent
}

/// Vertical viewport percent to world Y. Screen Y grows downward, world Y up.
pub fn vh_to_world(vh: f64, units_per_percent: f64) -> f64 {
    -(vh - 50.0) * units_per_percent
}

pub fn model_placement(
    transform: &ModelTransform,
    model: &ModelConfig,
    config: &PreviewConfig,
) -> ModelPlacement {
    let units = config.units_per_percent;
    let rotation = transform.rotation + model.initial_rotation;

    ModelPlacement {
        translation: [
            vw_to_world(transform.position.x, units),
            vh_to_world(transform.position.y, units),
            transform.position.z * config.depth_scale,
        ],
        rotation_radians: [
            deg_to_rad(rotation.x),
            deg_to_rad(rotation.y),
            deg_to_rad(rotation.z),
        ],
        scale: transform.scale * model.initial_scale,
        opacity: transform.opacity,
        transparent: transform.opacity < 1.0,
    }
}
