use spyn_engine::{
    clamp, model_placement, scroll_to_section_progress, CameraRig, Frame, PreviewConfig, Project,
    SceneState,
};

/// Live preview driver for the editor viewport.
///
/// Holds the last published project snapshot and the current scroll
/// position, and smooths the camera across frames. The editor creates one
/// behind a `thread_local!` and drives it through free `#[wasm_bindgen]`
/// functions, because wasm-bindgen cannot export generic or stateful
/// engine types directly.
pub struct PreviewRunner {
    project: Project,
    config: PreviewConfig,
    rig: CameraRig,
    scroll: f64,
    /// Shown while the project has no keyframes.
    last_state: SceneState,
}

impl PreviewRunner {
    pub fn new(config: PreviewConfig) -> Self {
        let rig = CameraRig::new(&config);
        let last_state = SceneState {
            model: config.default_model,
            camera: config.default_camera,
        };
        Self {
            project: Project::default(),
            config,
            rig,
            scroll: 0.0,
            last_state,
        }
    }

    /// Replace the project snapshot. The camera snaps on the next frame.
    pub fn load(&mut self, project_json: &str) -> spyn_engine::Result<()> {
        let project = Project::from_json(project_json)?;
        log::info!(
            "preview: loaded '{}' ({} sections, {} keyframes)",
            project.name,
            project.sections().len(),
            project.keyframes().len()
        );
        self.project = project;
        self.rig.reset();
        Ok(())
    }

    /// Set the preview scroll position, clamped to [0, 1].
    pub fn set_scroll(&mut self, scroll: f64) {
        self.scroll = clamp(scroll, 0.0, 1.0);
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Evaluate the current scroll and advance the camera rig one frame.
    pub fn frame(&mut self) -> Frame {
        if let Some(state) = self.project.state_at(self.scroll) {
            self.last_state = state;
        }
        let state = self.last_state;

        let model = model_placement(&state.model, &self.project.model, &self.config);
        let camera = self.rig.update(&state.camera, model.translation());

        Frame {
            scroll: self.scroll,
            section: scroll_to_section_progress(self.scroll, self.project.sections()),
            state,
            model,
            camera,
        }
    }
}

impl Default for PreviewRunner {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}
