// assets/presets.rs
//
// Section templates: label, timeline color and starter content layout for
// each SectionPreset. Ids come from a caller-supplied IdSource.

use crate::api::types::IdSource;
use crate::components::section::{BlockKind, BlockRect, ContentBlock, Section, SectionPreset};

/// Height given to new sections, in vh.
pub const DEFAULT_SECTION_HEIGHT: f64 = 100.0;

impl SectionPreset {
    pub const ALL: [SectionPreset; 11] = [
        SectionPreset::HeroBanner,
        SectionPreset::FeaturesGrid,
        SectionPreset::TextImage,
        SectionPreset::OurTeam,
        SectionPreset::Testimonials,
        SectionPreset::ContactForm,
        SectionPreset::Gallery,
        SectionPreset::Pricing,
        SectionPreset::Stats,
        SectionPreset::CtaBanner,
        SectionPreset::Blank,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionPreset::HeroBanner => "Hero Banner",
            SectionPreset::FeaturesGrid => "Features Grid",
            SectionPreset::TextImage => "Text + Image",
            SectionPreset::OurTeam => "Our Team",
            SectionPreset::Testimonials => "Testimonials",
            SectionPreset::ContactForm => "Contact Form",
            SectionPreset::Gallery => "Gallery",
            SectionPreset::Pricing => "Pricing",
            SectionPreset::Stats => "Stats",
            SectionPreset::CtaBanner => "CTA Banner",
            SectionPreset::Blank => "Blank Section",
        }
    }

    /// Timeline region color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            SectionPreset::HeroBanner => "#6366f1",
            SectionPreset::FeaturesGrid => "#22c55e",
            SectionPreset::TextImage => "#f59e0b",
            SectionPreset::OurTeam => "#ec4899",
            SectionPreset::Testimonials => "#8b5cf6",
            SectionPreset::ContactForm => "#14b8a6",
            SectionPreset::Gallery => "#f97316",
            SectionPreset::Pricing => "#06b6d4",
            SectionPreset::Stats => "#84cc16",
            SectionPreset::CtaBanner => "#ef4444",
            SectionPreset::Blank => "#6b7280",
        }
    }

    /// Starter blocks as (kind, label, x, y, w, h).
    fn layout(self) -> &'static [(BlockKind, &'static str, f64, f64, f64, f64)] {
        use BlockKind::*;
        match self {
            SectionPreset::HeroBanner => &[
                (Heading, "Main Heading", 10.0, 30.0, 45.0, 10.0),
                (Subtitle, "Subheading", 10.0, 45.0, 40.0, 6.0),
                (Button, "CTA Button", 10.0, 58.0, 15.0, 6.0),
            ],
            SectionPreset::FeaturesGrid => &[
                (Heading, "Section Title", 25.0, 5.0, 50.0, 8.0),
                (Card, "Feature 1", 5.0, 25.0, 28.0, 35.0),
                (Card, "Feature 2", 36.0, 25.0, 28.0, 35.0),
                (Card, "Feature 3", 67.0, 25.0, 28.0, 35.0),
            ],
            SectionPreset::TextImage => &[
                (Heading, "Heading", 5.0, 20.0, 40.0, 8.0),
                (TextBlock, "Body Text", 5.0, 35.0, 40.0, 25.0),
                (Image, "Image", 55.0, 15.0, 40.0, 55.0),
            ],
            SectionPreset::OurTeam => &[
                (Heading, "Our Team", 25.0, 5.0, 50.0, 8.0),
                (Card, "Member 1", 5.0, 25.0, 20.0, 40.0),
                (Card, "Member 2", 28.0, 25.0, 20.0, 40.0),
                (Card, "Member 3", 52.0, 25.0, 20.0, 40.0),
                (Card, "Member 4", 75.0, 25.0, 20.0, 40.0),
            ],
            SectionPreset::Testimonials => &[
                (Heading, "Testimonials", 25.0, 5.0, 50.0, 8.0),
                (Card, "Quote 1", 10.0, 25.0, 35.0, 45.0),
                (Card, "Quote 2", 55.0, 25.0, 35.0, 45.0),
            ],
            SectionPreset::ContactForm => &[
                (Heading, "Contact Us", 25.0, 5.0, 50.0, 8.0),
                (Form, "Contact Form", 20.0, 20.0, 60.0, 60.0),
            ],
            SectionPreset::Gallery => &[
                (Heading, "Gallery", 25.0, 5.0, 50.0, 8.0),
                (Image, "Image 1", 5.0, 20.0, 30.0, 35.0),
                (Image, "Image 2", 37.0, 20.0, 26.0, 35.0),
                (Image, "Image 3", 65.0, 20.0, 30.0, 35.0),
            ],
            SectionPreset::Pricing => &[
                (Heading, "Pricing", 25.0, 5.0, 50.0, 8.0),
                (Card, "Basic Plan", 8.0, 22.0, 25.0, 55.0),
                (Card, "Pro Plan", 37.0, 15.0, 26.0, 65.0),
                (Card, "Enterprise", 67.0, 22.0, 25.0, 55.0),
            ],
            SectionPreset::Stats => &[
                (Heading, "By the Numbers", 20.0, 10.0, 60.0, 8.0),
                (Card, "Stat 1", 5.0, 35.0, 20.0, 25.0),
                (Card, "Stat 2", 28.0, 35.0, 20.0, 25.0),
                (Card, "Stat 3", 52.0, 35.0, 20.0, 25.0),
                (Card, "Stat 4", 75.0, 35.0, 20.0, 25.0),
            ],
            SectionPreset::CtaBanner => &[
                (Heading, "Ready to Start?", 20.0, 25.0, 60.0, 10.0),
                (Subtitle, "Join thousands of users", 25.0, 42.0, 50.0, 6.0),
                (Button, "Get Started", 37.0, 58.0, 26.0, 7.0),
            ],
            SectionPreset::Blank => &[],
        }
    }
}

/// Build a section from a preset, with fresh ids for it and its blocks.
pub fn create_section(preset: SectionPreset, height: f64, ids: &mut impl IdSource) -> Section {
    let id = ids.next_id();
    let content_blocks = preset
        .layout()
        .iter()
        .map(|&(kind, label, x, y, w, h)| ContentBlock {
            id: ids.next_id(),
            kind,
            label: label.to_string(),
            position: BlockRect { x, y, w, h },
            z_layer: 0,
        })
        .collect();

    Section {
        id,
        kind: preset,
        label: preset.label().to_string(),
        height,
        content_blocks,
        color: preset.color().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::CounterIds;
    use std::collections::HashSet;

    #[test]
    fn every_preset_has_label_and_hex_color() {
        for preset in SectionPreset::ALL {
            assert!(!preset.label().is_empty());
            let color = preset.color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{}", color);
        }
    }

    #[test]
    fn create_section_copies_preset_metadata() {
        let mut ids = CounterIds::default();
        for preset in SectionPreset::ALL {
            let section = create_section(preset, DEFAULT_SECTION_HEIGHT, &mut ids);
            assert_eq!(section.kind, preset);
            assert_eq!(section.label, preset.label());
            assert_eq!(section.color, preset.color());
            assert_eq!(section.height, 100.0);
        }
    }

    #[test]
    fn custom_height() {
        let section = create_section(SectionPreset::Blank, 200.0, &mut CounterIds::default());
        assert_eq!(section.height, 200.0);
    }

    #[test]
    fn block_counts() {
        let mut ids = CounterIds::default();
        let hero = create_section(SectionPreset::HeroBanner, 100.0, &mut ids);
        let kinds: Vec<BlockKind> = hero.content_blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, [BlockKind::Heading, BlockKind::Subtitle, BlockKind::Button]);

        assert_eq!(create_section(SectionPreset::Blank, 100.0, &mut ids).content_blocks.len(), 0);
        assert_eq!(create_section(SectionPreset::FeaturesGrid, 100.0, &mut ids).content_blocks.len(), 4);
        assert_eq!(create_section(SectionPreset::OurTeam, 100.0, &mut ids).content_blocks.len(), 5);
    }

    #[test]
    fn ids_are_unique_across_sections_and_blocks() {
        let mut ids = CounterIds::new("t");
        let a = create_section(SectionPreset::OurTeam, 100.0, &mut ids);
        let b = create_section(SectionPreset::OurTeam, 100.0, &mut ids);
        assert_ne!(a.id, b.id);

        let mut all: HashSet<&str> = HashSet::new();
        for section in [&a, &b] {
            all.insert(section.id.as_str());
            all.extend(section.content_blocks.iter().map(|b| b.id.as_str()));
        }
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn blocks_start_on_layer_zero() {
        let section = create_section(SectionPreset::TextImage, 100.0, &mut CounterIds::default());
        for block in &section.content_blocks {
            assert!(!block.label.is_empty());
            assert_eq!(block.z_layer, 0);
        }
    }
}
