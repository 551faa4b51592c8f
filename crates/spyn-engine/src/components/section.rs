// components/section.rs
//
// Page sections and their content blocks.
//
// Only `height` matters to the scroll mapper; the rest is editor metadata that
// travels through the project document untouched.

use serde::{Deserialize, Serialize};

use crate::core::scroll::SectionHeight;

/// Layout template a section was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionPreset {
    HeroBanner,
    FeaturesGrid,
    TextImage,
    OurTeam,
    Testimonials,
    ContactForm,
    Gallery,
    Pricing,
    Stats,
    CtaBanner,
    #[default]
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionPreset,
    pub label: String,
    /// Height in vh units. Zero is a valid, degenerate section.
    pub height: f64,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    /// Timeline region color, `#rrggbb`.
    #[serde(default)]
    pub color: String,
}

impl SectionHeight for Section {
    fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Heading,
    Subtitle,
    TextBlock,
    Button,
    Card,
    Image,
    Form,
    Custom,
}

/// Viewport-relative rectangle: x/w in vw, y/h in vh from the section top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub label: String,
    pub position: BlockRect,
    /// z-index layer used for depth ordering against the model.
    #[serde(default)]
    pub z_layer: i32,
}
