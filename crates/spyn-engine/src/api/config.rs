use crate::components::camera::CameraConfig;
use crate::components::transform::ModelTransform;

/// Preview configuration, provided by the host editor.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// World units per vw/vh percent point (default: 0.1).
    pub units_per_percent: f64,
    /// World units per unit of model depth (default: 0.1).
    pub depth_scale: f64,
    /// Fraction of the remaining distance the camera rig covers per frame
    /// (default: 0.08). 1.0 snaps instantly.
    pub camera_smoothing: f64,
    /// FOV differences below this are left alone (default: 0.01 degrees).
    pub fov_epsilon: f64,
    /// Transform shown before any keyframe exists.
    pub default_model: ModelTransform,
    /// Camera shown before any keyframe exists.
    pub default_camera: CameraConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            units_per_percent: 0.1,
            depth_scale: 0.1,
            camera_smoothing: 0.08,
            fov_epsilon: 0.01,
            default_model: ModelTransform::default(),
            default_camera: CameraConfig::default(),
        }
    }
}

impl PreviewConfig {
    pub fn with_camera_smoothing(mut self, smoothing: f64) -> Self {
        self.camera_smoothing = smoothing.clamp(0.0, 1.0);
        self
    }
}
