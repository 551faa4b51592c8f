// api/project.rs
//
// The project document: model and physics settings, sections and keyframes.
//
// Edits republish sorted snapshots. Every keyframe mutation re-sorts by
// ascending `scroll`, so `Project::keyframes` can be handed straight to the
// interpolator, which never sorts.

use std::collections::HashMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::keyframe::Keyframe;
use crate::components::section::{ContentBlock, Section};
use crate::components::vector::xyz;
use crate::core::interpolate::{interpolate_at_scroll, SceneState};
use crate::core::scroll::{scroll_to_section_progress, SectionProgress};
use crate::error::{Error, Result};

/// The 3D asset and its base pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// Path or name of the GLB/GLTF file, if one is attached.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,
    /// Degrees, added to every keyframe rotation.
    #[serde(default, with = "xyz")]
    pub initial_rotation: DVec3,
}

fn default_initial_scale() -> f64 {
    1.0
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            file: None,
            initial_scale: 1.0,
            initial_rotation: DVec3::ZERO,
        }
    }
}

/// Scroll-feel settings consumed by the page runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub momentum: bool,
    /// 0-1: resistance to sudden scroll changes.
    pub drag: f64,
    /// 0-1: slide past the target when scrolling stops.
    pub overshoot: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            momentum: true,
            drag: 0.3,
            overshoot: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    keyframes: Vec<Keyframe>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            model: ModelConfig::default(),
            physics: PhysicsConfig::default(),
            sections: Vec::new(),
            keyframes: Vec::new(),
        }
    }
}

fn sort_by_scroll(keyframes: &mut [Keyframe]) {
    keyframes.sort_by(|a, b| a.scroll.total_cmp(&b.scroll));
}

fn is_sorted_by_scroll(keyframes: &[Keyframe]) -> bool {
    keyframes.windows(2).all(|pair| pair[0].scroll <= pair[1].scroll)
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a project from the editor's JSON store format.
    /// Keyframes out of scroll order are re-sorted.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut project: Project = serde_json::from_str(json)?;
        if !is_sorted_by_scroll(&project.keyframes) {
            log::warn!(
                "project '{}': keyframes out of scroll order, re-sorting",
                project.name
            );
            sort_by_scroll(&mut project.keyframes);
        }
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    // ---- Keyframes ----

    /// Keyframes sorted by ascending scroll.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn keyframe(&self, id: &str) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| k.id == id)
    }

    /// Insert a keyframe, keeping scroll order. Equal scrolls keep insertion order.
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        log::debug!("add keyframe {} at scroll {}", keyframe.id, keyframe.scroll);
        self.keyframes.push(keyframe);
        sort_by_scroll(&mut self.keyframes);
    }

    /// Remove a keyframe by id. Returns whether one was removed.
    pub fn remove_keyframe(&mut self, id: &str) -> bool {
        let before = self.keyframes.len();
        self.keyframes.retain(|k| k.id != id);
        before != self.keyframes.len()
    }

    /// Edit a keyframe in place, then restore scroll order.
    pub fn update_keyframe(&mut self, id: &str, edit: impl FnOnce(&mut Keyframe)) -> Result<()> {
        let keyframe = self
            .keyframes
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| Error::UnknownKeyframe(id.to_string()))?;
        edit(keyframe);
        sort_by_scroll(&mut self.keyframes);
        Ok(())
    }

    // ---- Sections ----

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn add_section(&mut self, section: Section) {
        log::debug!("add section {} ({} vh)", section.id, section.height);
        self.sections.push(section);
    }

    pub fn remove_section(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        before != self.sections.len()
    }

    /// Edit a section in place. Its position in the page is kept.
    pub fn update_section(&mut self, id: &str, edit: impl FnOnce(&mut Section)) -> Result<()> {
        edit(self.section_mut(id)?);
        log::debug!("update section {}", id);
        Ok(())
    }

    pub fn add_content_block(&mut self, section_id: &str, block: ContentBlock) -> Result<()> {
        self.section_mut(section_id)?.content_blocks.push(block);
        Ok(())
    }

    /// Remove a block from a section. Returns whether one was removed.
    pub fn remove_content_block(&mut self, section_id: &str, block_id: &str) -> Result<bool> {
        let blocks = &mut self.section_mut(section_id)?.content_blocks;
        let before = blocks.len();
        blocks.retain(|b| b.id != block_id);
        Ok(before != blocks.len())
    }

    pub fn update_content_block(
        &mut self,
        section_id: &str,
        block_id: &str,
        edit: impl FnOnce(&mut ContentBlock),
    ) -> Result<()> {
        let block = self
            .section_mut(section_id)?
            .content_blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| Error::UnknownBlock {
                section: section_id.to_string(),
                block: block_id.to_string(),
            })?;
        edit(block);
        Ok(())
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::UnknownSection(id.to_string()))
    }

    /// Reorder sections to match `ids`. Ids that match no section are
    /// skipped; sections whose ids are not listed are dropped.
    pub fn reorder_sections(&mut self, ids: &[&str]) {
        let mut by_id: HashMap<String, Section> = self
            .sections
            .drain(..)
            .map(|s| (s.id.clone(), s))
            .collect();
        self.sections = ids.iter().filter_map(|id| by_id.remove(*id)).collect();
    }

    /// Ordered section heights, as consumed by the scroll mapper.
    pub fn section_heights(&self) -> Vec<f64> {
        self.sections.iter().map(|s| s.height).collect()
    }

    // ---- Evaluation ----

    /// Scene state at `scroll`, or `None` when the project has no keyframes.
    pub fn state_at(&self, scroll: f64) -> Option<SceneState> {
        interpolate_at_scroll(&self.keyframes, scroll)
    }

    /// Section under `scroll`.
    pub fn section_at(&self, scroll: f64) -> SectionProgress {
        scroll_to_section_progress(scroll, &self.sections)
    }
}
