use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::vector::xyz;
use crate::core::math::{lerp, lerp_dvec3};

/// Pose of the 3D model at a point on the scroll timeline.
///
/// `position` is viewport-relative: x in vw, y in vh (0-100), z is depth
/// (positive = in front of page content). `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    #[serde(with = "xyz")]
    pub position: DVec3,
    #[serde(with = "xyz")]
    pub rotation: DVec3,
    pub scale: f64,
    /// Logically in [0, 1]; not enforced here.
    pub opacity: f64,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: DVec3::new(50.0, 50.0, 0.0),
            rotation: DVec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl ModelTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: DVec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Blend every field independently. Rotation is a per-axis Euler lerp.
    pub fn lerp(&self, other: &ModelTransform, t: f64) -> ModelTransform {
        ModelTransform {
            position: lerp_dvec3(self.position, other.position, t),
            rotation: lerp_dvec3(self.rotation, other.rotation, t),
            scale: lerp(self.scale, other.scale, t),
            opacity: lerp(self.opacity, other.opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_centers_model() {
        let t = ModelTransform::default();
        assert_eq!(t.position, DVec3::new(50.0, 50.0, 0.0));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn lerp_blends_each_field() {
        let a = ModelTransform::new()
            .with_position(DVec3::ZERO)
            .with_scale(1.0);
        let b = ModelTransform::new()
            .with_position(DVec3::new(100.0, 100.0, 10.0))
            .with_rotation(DVec3::new(90.0, 180.0, 45.0))
            .with_scale(2.0)
            .with_opacity(0.5);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.position.x - 50.0).abs() < 1e-9);
        assert!((mid.position.z - 5.0).abs() < 1e-9);
        assert!((mid.rotation.y - 90.0).abs() < 1e-9);
        assert!((mid.scale - 1.5).abs() < 1e-9);
        assert!((mid.opacity - 0.75).abs() < 1e-9);
    }

    #[test]
    fn rotation_does_not_take_shortest_path() {
        let a = ModelTransform::new().with_rotation(DVec3::new(0.0, 350.0, 0.0));
        let b = ModelTransform::new().with_rotation(DVec3::new(0.0, 10.0, 0.0));
        let mid = a.lerp(&b, 0.5);
        assert!((mid.rotation.y - 180.0).abs() < 1e-9);
    }

    #[test]
    fn json_shape_uses_named_axes() {
        let json = serde_json::to_value(ModelTransform::default()).unwrap();
        assert_eq!(json["position"]["x"], 50.0);
        assert_eq!(json["rotation"]["z"], 0.0);
        assert_eq!(json["opacity"], 1.0);
    }
}
