use thiserror::Error;

/// Errors from the project document layer.
///
/// The interpolation core never fails; these only come from parsing,
/// exporting, and editing a project.
#[derive(Debug, Error)]
pub enum Error {
    #[error("project json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("yaml export error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown easing `{0}`")]
    UnknownEasing(String),

    #[error("no keyframe with id `{0}`")]
    UnknownKeyframe(String),

    #[error("no section with id `{0}`")]
    UnknownSection(String),

    #[error("no content block `{block}` in section `{section}`")]
    UnknownBlock { section: String, block: String },
}

pub type Result<T> = std::result::Result<T, Error>;
