// components/vector.rs
//
// Serde adapters so glam vectors read and write as `{ "x": .., "y": .., "z": .. }`
// maps, matching the editor store and the export document.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<DVec3> for Xyz {
    fn from(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Xyz> for DVec3 {
    fn from(p: Xyz) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Xy {
    x: f64,
    y: f64,
}

/// `#[serde(with = "xyz")]` for `DVec3` fields.
pub mod xyz {
    use super::*;

    pub fn serialize<S: Serializer>(v: &DVec3, serializer: S) -> Result<S::Ok, S::Error> {
        Xyz::from(*v).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DVec3, D::Error> {
        Xyz::deserialize(deserializer).map(DVec3::from)
    }
}

/// `#[serde(with = "xy")]` for `DVec2` fields.
pub mod xy {
    use super::*;

    pub fn serialize<S: Serializer>(v: &DVec2, serializer: S) -> Result<S::Ok, S::Error> {
        Xy { x: v.x, y: v.y }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DVec2, D::Error> {
        let p = Xy::deserialize(deserializer)?;
        Ok(DVec2::new(p.x, p.y))
    }
}
