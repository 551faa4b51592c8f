use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::vector::{xy, Xyz};
use crate::core::math::{lerp, lerp_dvec2};

/// What the camera points at.
///
/// Serialized as the string `"model"` or an `{x, y, z}` point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "LookAtRepr", into = "LookAtRepr")]
pub enum LookAt {
    /// Follow the model wherever the current transform places it.
    #[default]
    TrackModel,
    /// A fixed world-space point.
    Point(DVec3),
}

#[derive(Serialize, Deserialize)]
enum LookAtTag {
    #[serde(rename = "model")]
    Model,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LookAtRepr {
    Tag(LookAtTag),
    Point(Xyz),
}

impl From<LookAtRepr> for LookAt {
    fn from(repr: LookAtRepr) -> Self {
        match repr {
            LookAtRepr::Tag(LookAtTag::Model) => LookAt::TrackModel,
            LookAtRepr::Point(p) => LookAt::Point(p.into()),
        }
    }
}

impl From<LookAt> for LookAtRepr {
    fn from(look_at: LookAt) -> Self {
        match look_at {
            LookAt::TrackModel => LookAtRepr::Tag(LookAtTag::Model),
            LookAt::Point(p) => LookAtRepr::Point(p.into()),
        }
    }
}

/// Camera framing at a point on the scroll timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    /// Degrees around the model (0 = front, 90 = side, 180 = back).
    pub orbit: f64,
    /// Degrees above the model (0 = eye level, 90 = top down).
    pub elevation: f64,
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub look_at: LookAt,
    /// Shifts the camera for off-center framing.
    #[serde(with = "xy")]
    pub offset: DVec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit: 0.0,
            elevation: 15.0,
            distance: 5.0,
            fov: 50.0,
            look_at: LookAt::TrackModel,
            offset: DVec2::ZERO,
        }
    }
}

impl CameraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbit(mut self, orbit: f64) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_look_at(mut self, look_at: LookAt) -> Self {
        self.look_at = look_at;
        self
    }

    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Blend the numeric fields. `look_at` is never blended: it is carried
    /// from `self`, so a change of target is a hard cut at the bracket edge.
    pub fn lerp(&self, other: &CameraConfig, t: f64) -> CameraConfig {
        CameraConfig {
            orbit: lerp(self.orbit, other.orbit, t),
            elevation: lerp(self.elevation, other.elevation, t),
            distance: lerp(self.distance, other.distance, t),
            fov: lerp(self.fov, other.fov, t),
            look_at: self.look_at,
            offset: lerp_dvec2(self.offset, other.offset, t),
        }
    }
}
