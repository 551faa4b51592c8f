pub mod camera;
pub mod keyframe;
pub mod responsive;
pub mod section;
pub mod transform;
pub mod vector;
