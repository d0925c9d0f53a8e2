use serde::{Deserialize, Serialize};
use shared::domain::ThreadKind;

use crate::spacing::SpacingCategory;

/// Pixel constants supplied by the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleMetrics {
    pub default_radius: u32,
    pub collapse_radius: u32,
    pub spacing_default: u32,
    pub spacing_collapsed: u32,
    pub group_gutter: u32,
    pub individual_gutter: u32,
}

impl Default for BubbleMetrics {
    fn default() -> Self {
        Self {
            default_radius: 18,
            collapse_radius: 4,
            spacing_default: 8,
            spacing_collapsed: 1,
            group_gutter: 48,
            individual_gutter: 16,
        }
    }
}

impl BubbleMetrics {
    pub fn gap(&self, spacing: SpacingCategory) -> u32 {
        match spacing {
            SpacingCategory::Default => self.spacing_default,
            SpacingCategory::Collapsed => self.spacing_collapsed,
        }
    }

    pub fn gutter(&self, thread: ThreadKind) -> u32 {
        match thread {
            ThreadKind::Group => self.group_gutter,
            ThreadKind::Direct => self.individual_gutter,
        }
    }
}
