pub mod camera;
pub mod frame;
pub mod placement;

// Re-export key types for convenient access
pub use camera::{camera_position, look_target, view_matrix, CameraPose, CameraRig};
pub use frame::Frame;
pub use placement::{model_placement, ModelPlacement};
