// bridge/json.rs
//
// JSON entry points for hosts that hand over editor-store data as text.

use crate::components::keyframe::Keyframe;
use crate::core::interpolate::interpolate_at_scroll;
use crate::error::Result;

/// Parse a keyframe array in the editor store format. Order is preserved.
pub fn parse_keyframes(json: &str) -> Result<Vec<Keyframe>> {
    Ok(serde_json::from_str(json)?)
}

/// Interpolate a JSON keyframe array at `scroll`.
///
/// Returns the scene state as JSON, or `"null"` for an empty array.
/// Keyframes must already be sorted by scroll.
pub fn interpolate_json(keyframes_json: &str, scroll: f64) -> Result<String> {
    let keyframes = parse_keyframes(keyframes_json)?;
    let state = interpolate_at_scroll(&keyframes, scroll);
    Ok(serde_json::to_string(&state)?)
}
