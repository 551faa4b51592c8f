// core/scroll.rs
//
// Two-way mapping between a global scroll fraction and a
// (section index, local progress) pair, driven by section heights.
//
// Degenerate inputs (no sections, all-zero heights) map to index 0 /
// progress 0 / scroll 0 instead of failing.

use serde::{Deserialize, Serialize};

use super::math::clamp;

/// Anything with a vertical extent on the page.
pub trait SectionHeight {
    fn height(&self) -> f64;
}

impl SectionHeight for f64 {
    fn height(&self) -> f64 {
        *self
    }
}

/// Position within one section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub section_index: usize,
    /// Progress through that section, in [0, 1].
    pub local_progress: f64,
}

/// Sum of all section heights.
pub fn total_scroll_height<S: SectionHeight>(sections: &[S]) -> f64 {
    sections.iter().map(SectionHeight::height).sum()
}

/// Map a normalized scroll value to the section it lands in.
///
/// The first section whose end is at or past the scroll position wins, so a
/// position exactly on a boundary belongs to the earlier section at progress 1.
pub fn scroll_to_section_progress<S: SectionHeight>(scroll: f64, sections: &[S]) -> SectionProgress {
    let total = total_scroll_height(sections);
    if total.is_nan() || total <= 0.0 {
        return SectionProgress::default();
    }

    let position = clamp(scroll, 0.0, 1.0) * total;
    let mut accumulated = 0.0;

    for (i, section) in sections.iter().enumerate() {
        let height = section.height();
        let end = accumulated + height;
        if position <= end {
            let local_progress = if height > 0.0 {
                (position - accumulated) / height
            } else {
                0.0
            };
            return SectionProgress { section_index: i, local_progress };
        }
        accumulated = end;
    }

    // Rounding pushed the position past the last boundary.
    SectionProgress {
        section_index: sections.len() - 1,
        local_progress: 1.0,
    }
}

/// Inverse of [`scroll_to_section_progress`].
///
/// An index past the end contributes the full height of every section and
/// nothing more.
pub fn section_progress_to_scroll<S: SectionHeight>(
    section_index: usize,
    local_progress: f64,
    sections: &[S],
) -> f64 {
    let total = total_scroll_height(sections);
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }

    let before: f64 = sections
        .iter()
        .take(section_index)
        .map(SectionHeight::height)
        .sum();
    let within = sections
        .get(section_index)
        .map_or(0.0, |s| s.height() * local_progress);

    (before + within) / total
}

impl SectionProgress {
    /// Convert back to a global scroll value for `sections`.
    pub fn to_scroll<S: SectionHeight>(self, sections: &[S]) -> f64 {
        section_progress_to_scroll(self.section_index, self.local_progress, sections)
    }
}
