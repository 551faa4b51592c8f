pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod bridge;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::PreviewConfig;
pub use api::project::{ModelConfig, PhysicsConfig, Project};
pub use api::types::{CounterIds, IdSource};
pub use assets::presets::{create_section, DEFAULT_SECTION_HEIGHT};
pub use bridge::json::{interpolate_json, parse_keyframes};
#[cfg(feature = "yaml")]
pub use bridge::yaml::export_yaml;
pub use components::camera::{CameraConfig, LookAt};
pub use components::keyframe::{Axis, Keyframe, KeyframeEvent, KeyframeEventKind};
pub use components::responsive::{
    apply_breakpoint, AxisOverride, Breakpoint, MobileOverride, ResponsiveOverrides,
    TransformOverride,
};
pub use components::section::{BlockKind, BlockRect, ContentBlock, Section, SectionPreset};
pub use components::transform::ModelTransform;
pub use crate::core::easing::{apply_easing, Easing};
pub use crate::core::interpolate::{
    active_bracket, interpolate_at_scroll, locate, Bracket, SceneState, TimelinePosition,
};
pub use crate::core::math::{clamp, deg_to_rad, lerp, rad_to_deg};
pub use crate::core::scroll::{
    scroll_to_section_progress, section_progress_to_scroll, total_scroll_height, SectionHeight,
    SectionProgress,
};
pub use error::{Error, Result};
pub use renderer::{
    camera_position, look_target, model_placement, view_matrix, CameraPose, CameraRig, Frame,
    ModelPlacement,
};
