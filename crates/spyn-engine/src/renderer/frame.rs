use serde::Serialize;

use super::camera::CameraPose;
use super::placement::ModelPlacement;
use crate::core::interpolate::SceneState;
use crate::core::scroll::SectionProgress;
use crate::error::Result;

/// Everything the host renderer needs to draw one preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub scroll: f64,
    pub section: SectionProgress,
    /// Interpolated scene state in editor units.
    pub state: SceneState,
    pub model: ModelPlacement,
    pub camera: CameraPose,
}

impl Frame {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
