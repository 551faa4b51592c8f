use glam::{DMat4, DVec3};
use serde::Serialize;

use crate::api::config::PreviewConfig;
use crate::components::camera::{CameraConfig, LookAt};
use crate::core::math::deg_to_rad;

/// World-space camera position for a framing.
///
/// Spherical placement around the origin: `orbit` sweeps around the Y axis
/// starting from +Z, `elevation` tilts up toward +Y. The offset shifts X and Y.
pub fn camera_position(config: &CameraConfig) -> DVec3 {
    let orbit = deg_to_rad(config.orbit);
    let elevation = deg_to_rad(config.elevation);

    let x = config.distance * elevation.cos() * orbit.sin();
    let y = config.distance * elevation.sin();
    let z = config.distance * elevation.cos() * orbit.cos();

    DVec3::new(x + config.offset.x, y + config.offset.y, z)
}

/// Point the camera aims at. `model_world` is the model's placed translation.
pub fn look_target(config: &CameraConfig, model_world: DVec3) -> DVec3 {
    match config.look_at {
        LookAt::TrackModel => model_world,
        LookAt::Point(point) => point,
    }
}

/// Right-handed view matrix, Y up.
pub fn view_matrix(eye: DVec3, target: DVec3) -> DMat4 {
    DMat4::look_at_rh(eye, target, DVec3::Y)
}

/// Camera pose handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: [f64; 3],
    pub target: [f64; 3],
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl CameraPose {
    pub fn view_matrix(&self) -> DMat4 {
        view_matrix(DVec3::from(self.position), DVec3::from(self.target))
    }
}

/// Per-frame camera smoother.
///
/// The first update snaps to the target framing. Later updates cover
/// `smoothing` of the remaining distance per frame. FOV differences at or
/// below `fov_epsilon` are left alone so the projection is not rebuilt for
/// noise.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: DVec3,
    fov: f64,
    smoothing: f64,
    fov_epsilon: f64,
    initialized: bool,
}

impl CameraRig {
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            position: DVec3::ZERO,
            fov: config.default_camera.fov,
            smoothing: config.camera_smoothing,
            fov_epsilon: config.fov_epsilon,
            initialized: false,
        }
    }

    /// Step toward `camera`, aiming at `model_world` when the framing tracks
    /// the model.
    pub fn update(&mut self, camera: &CameraConfig, model_world: DVec3) -> CameraPose {
        let target_position = camera_position(camera);

        if !self.initialized {
            self.position = target_position;
            self.fov = camera.fov;
            self.initialized = true;
        } else {
            self.position += (target_position - self.position) * self.smoothing;
            if (self.fov - camera.fov).abs() > self.fov_epsilon {
                self.fov += (camera.fov - self.fov) * self.smoothing;
            }
        }

        CameraPose {
            position: self.position.to_array(),
            target: look_target(camera, model_world).to_array(),
            fov: self.fov,
        }
    }

    /// Forget the current pose; the next update snaps again.
    pub fn reset(&mut self) {
        self.initialized = false;
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    const EPS: f64 = 1e-9;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn front_view_sits_on_positive_z() {
        let cam = CameraConfig::default().with_elevation(0.0).with_distance(5.0);
        assert!(close(camera_position(&cam), DVec3::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn side_and_top_views() {
        let side = CameraConfig::default().with_orbit(90.0).with_elevation(0.0);
        assert!(close(camera_position(&side), DVec3::new(5.0, 0.0, 0.0)));

        let top = CameraConfig::default().with_elevation(90.0);
        let p = camera_position(&top);
        assert!((p.y - 5.0).abs() < EPS);
        assert!(p.x.abs() < EPS && p.z.abs() < EPS);
    }

    #[test]
    fn offset_shifts_x_and_y_only() {
        let mut cam = CameraConfig::default().with_elevation(0.0);
        cam.offset = DVec2::new(1.0, -2.0);
        assert!(close(camera_position(&cam), DVec3::new(1.0, -2.0, 5.0)));
    }

    #[test]
    fn distance_is_preserved_without_offset() {
        let cam = CameraConfig::default().with_orbit(37.0).with_elevation(22.0).with_distance(8.0);
        assert!((camera_position(&cam).length() - 8.0).abs() < EPS);
    }

    #[test]
    fn look_target_tracks_model_or_point() {
        let model = DVec3::new(1.0, 2.0, 3.0);
        let tracking = CameraConfig::default();
        assert_eq!(look_target(&tracking, model), model);

        let fixed = CameraConfig::default().with_look_at(LookAt::Point(DVec3::new(0.0, 1.0, 0.0)));
        assert_eq!(look_target(&fixed, model), DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let eye = DVec3::new(0.0, 0.0, 5.0);
        let view = view_matrix(eye, DVec3::ZERO);
        let target_in_view = view.transform_point3(DVec3::ZERO);
        assert!(close(target_in_view, DVec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn rig_snaps_then_smooths() {
        let mut rig = CameraRig::new(&PreviewConfig::default());
        let a = CameraConfig::default().with_elevation(0.0).with_distance(5.0);
        let b = CameraConfig::default().with_elevation(0.0).with_distance(10.0);

        let pose = rig.update(&a, DVec3::ZERO);
        assert_eq!(pose.position, [0.0, 0.0, 5.0]);

        let pose = rig.update(&b, DVec3::ZERO);
        assert!((pose.position[2] - (5.0 + 5.0 * 0.08)).abs() < EPS);

        for _ in 0..500 {
            rig.update(&b, DVec3::ZERO);
        }
        assert!((rig.position().z - 10.0).abs() < 1e-6);
    }

    #[test]
    fn rig_ignores_tiny_fov_changes() {
        let mut rig = CameraRig::new(&PreviewConfig::default());
        let cam = CameraConfig::default();
        rig.update(&cam, DVec3::ZERO);
        assert_eq!(rig.fov(), 50.0);

        rig.update(&cam.with_fov(50.005), DVec3::ZERO);
        assert_eq!(rig.fov(), 50.0);

        rig.update(&cam.with_fov(60.0), DVec3::ZERO);
        assert!((rig.fov() - 50.8).abs() < EPS);
    }

    #[test]
    fn reset_snaps_again() {
        let mut rig = CameraRig::new(&PreviewConfig::default());
        rig.update(&CameraConfig::default().with_distance(5.0), DVec3::ZERO);
        rig.reset();
        let far = CameraConfig::default().with_elevation(0.0).with_distance(20.0);
        let pose = rig.update(&far, DVec3::ZERO);
        assert_eq!(pose.position, [0.0, 0.0, 20.0]);
    }

    #[test]
    fn full_smoothing_snaps_every_frame() {
        let config = PreviewConfig::default().with_camera_smoothing(1.0);
        let mut rig = CameraRig::new(&config);
        rig.update(&CameraConfig::default().with_elevation(0.0), DVec3::ZERO);
        let pose = rig.update(
            &CameraConfig::default().with_elevation(0.0).with_distance(9.0),
            DVec3::ZERO,
        );
        assert!((pose.position[2] - 9.0).abs() < EPS);
    }
}
