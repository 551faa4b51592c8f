//! Browser bridge for the SPYN editor.
//!
//! JSON strings cross the boundary in both directions. Stateless helpers are
//! plain exports; the live preview goes through a thread-local
//! [`PreviewRunner`].

pub mod runner;

pub use runner::PreviewRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PreviewRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut PreviewRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(PreviewRunner::default);
        f(runner)
    })
}

fn to_js(err: spyn_engine::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn spyn_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("spyn: initialized");
}

/// Interpolate a JSON keyframe array. Returns `"null"` for an empty array.
#[wasm_bindgen]
pub fn interpolate_json(keyframes_json: &str, scroll: f64) -> Result<String, JsValue> {
    spyn_engine::interpolate_json(keyframes_json, scroll).map_err(to_js)
}

/// Returns `[section_index, local_progress]`.
#[wasm_bindgen]
pub fn scroll_to_section(scroll: f64, heights: Vec<f64>) -> Vec<f64> {
    let at = spyn_engine::scroll_to_section_progress(scroll, &heights);
    vec![at.section_index as f64, at.local_progress]
}

#[wasm_bindgen]
pub fn section_to_scroll(section_index: usize, local_progress: f64, heights: Vec<f64>) -> f64 {
    spyn_engine::section_progress_to_scroll(section_index, local_progress, &heights)
}

#[cfg(feature = "yaml")]
#[wasm_bindgen]
pub fn export_project_yaml(project_json: &str) -> Result<String, JsValue> {
    let project = spyn_engine::Project::from_json(project_json).map_err(to_js)?;
    spyn_engine::export_yaml(&project).map_err(to_js)
}

// ---- Live preview ----

#[wasm_bindgen]
pub fn preview_load(project_json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load(project_json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn preview_scroll(scroll: f64) {
    with_runner(|r| r.set_scroll(scroll));
}

/// Advance one frame and return it as JSON.
#[wasm_bindgen]
pub fn preview_frame() -> Result<String, JsValue> {
    with_runner(|r| r.frame().to_json()).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_helpers_round_trip() {
        let heights = vec![100.0, 50.0, 50.0];
        let at = scroll_to_section(0.625, heights.clone());
        assert_eq!(at[0], 1.0);
        assert!((at[1] - 0.5).abs() < 1e-9);
        assert!((section_to_scroll(1, 0.5, heights) - 0.625).abs() < 1e-9);
    }

    #[test]
    fn empty_heights_map_to_first_section() {
        assert_eq!(scroll_to_section(0.4, Vec::new()), vec![0.0, 0.0]);
        assert_eq!(section_to_scroll(3, 0.5, Vec::new()), 0.0);
    }

    #[test]
    fn preview_runs_without_init() {
        preview_scroll(0.3);
        let frame: serde_json::Value = serde_json::from_str(&preview_frame().unwrap()).unwrap();
        assert_eq!(frame["scroll"], 0.3);
    }
}
