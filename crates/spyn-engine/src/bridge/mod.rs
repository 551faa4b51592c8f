pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;
