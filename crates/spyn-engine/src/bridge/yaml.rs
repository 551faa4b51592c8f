// bridge/yaml.rs
//
// Hand-off document for the developer who implements the page.
//
// The export schema is snake_case and differs from the editor store format,
// so the project is re-shaped through borrowed mirror structs rather than
// serialized directly. Field order below is the document's key order.

use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::api::project::{PhysicsConfig, Project};
use crate::components::camera::{CameraConfig, LookAt};
use crate::components::keyframe::{Keyframe, KeyframeEvent};
use crate::components::responsive::ResponsiveOverrides;
use crate::components::section::{BlockKind, BlockRect, ContentBlock, Section, SectionPreset};
use crate::components::transform::ModelTransform;
use crate::components::vector::{xy, xyz};
use crate::core::easing::Easing;
use crate::error::Result;

#[derive(Serialize)]
struct ExportDoc<'a> {
    project: &'a str,
    model: ExportModel<'a>,
    physics: &'a PhysicsConfig,
    sections: Vec<ExportSection<'a>>,
    keyframes: Vec<ExportKeyframe<'a>>,
}

#[derive(Serialize)]
struct ExportModel<'a> {
    file: Option<&'a str>,
    initial_scale: f64,
    #[serde(with = "xyz")]
    initial_rotation: DVec3,
}

#[derive(Serialize)]
struct ExportSection<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: SectionPreset,
    label: &'a str,
    height_vh: f64,
    content_blocks: Vec<ExportBlock<'a>>,
}

#[derive(Serialize)]
struct ExportBlock<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: BlockKind,
    label: &'a str,
    position: &'a BlockRect,
    z_layer: i32,
}

#[derive(Serialize)]
struct ExportKeyframe<'a> {
    scroll: f64,
    section: &'a str,
    description: &'a str,
    model: &'a ModelTransform,
    camera: ExportCamera,
    easing: Easing,
    hold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'a KeyframeEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    responsive: Option<&'a ResponsiveOverrides>,
}

#[derive(Serialize)]
struct ExportCamera {
    orbit: f64,
    elevation: f64,
    distance: f64,
    fov: f64,
    look_at: LookAt,
    #[serde(with = "xy")]
    offset: DVec2,
}

impl<'a> From<&'a Section> for ExportSection<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            id: &section.id,
            kind: section.kind,
            label: &section.label,
            height_vh: section.height,
            content_blocks: section.content_blocks.iter().map(ExportBlock::from).collect(),
        }
    }
}

impl<'a> From<&'a ContentBlock> for ExportBlock<'a> {
    fn from(block: &'a ContentBlock) -> Self {
        Self {
            id: &block.id,
            kind: block.kind,
            label: &block.label,
            position: &block.position,
            z_layer: block.z_layer,
        }
    }
}

impl From<&CameraConfig> for ExportCamera {
    fn from(camera: &CameraConfig) -> Self {
        Self {
            orbit: camera.orbit,
            elevation: camera.elevation,
            distance: camera.distance,
            fov: camera.fov,
            look_at: camera.look_at,
            offset: camera.offset,
        }
    }
}

impl<'a> From<&'a Keyframe> for ExportKeyframe<'a> {
    fn from(keyframe: &'a Keyframe) -> Self {
        Self {
            scroll: keyframe.scroll,
            section: &keyframe.section_id,
            description: &keyframe.description,
            model: &keyframe.model,
            camera: ExportCamera::from(&keyframe.camera),
            easing: keyframe.ease_from,
            hold: keyframe.hold,
            event: keyframe.event.as_ref(),
            responsive: keyframe.responsive.as_ref(),
        }
    }
}

/// Render the project as the YAML hand-off document.
pub fn export_yaml(project: &Project) -> Result<String> {
    let doc = ExportDoc {
        project: &project.name,
        model: ExportModel {
            file: project.model.file.as_deref(),
            initial_scale: project.model.initial_scale,
            initial_rotation: project.model.initial_rotation,
        },
        physics: &project.physics,
        sections: project.sections().iter().map(ExportSection::from).collect(),
        keyframes: project.keyframes().iter().map(ExportKeyframe::from).collect(),
    };
    Ok(serde_yaml::to_string(&doc)?)
}
