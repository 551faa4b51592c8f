pub mod easing;
pub mod interpolate;
pub mod math;
pub mod scroll;
