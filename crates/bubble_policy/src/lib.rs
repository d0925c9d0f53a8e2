//! Bubble grouping for conversation threads.
//!
//! Consecutive messages by the same author on the same day are drawn as one
//! merged cluster. [`ClusterRules`] classifies each message against its
//! neighbours and derives corner radii, spacing and per-item visibility.

pub mod cluster;
pub mod corners;
pub mod item;
pub mod message;
pub mod metrics;
pub mod spacing;
pub mod thread;

pub use cluster::ClusterRules;
pub use corners::{BubbleBackground, CornerRadii, CornerStyle};
pub use item::{
    primary_attachment, Footer, FooterHost, Gutter, GutterTarget, ItemLayout, StatusIndicator,
    ThumbnailLayout,
};
pub use message::{ItemMessage, ThreadMessage};
pub use metrics::BubbleMetrics;
pub use spacing::{classify_spacing, SpacingCategory};
pub use thread::neighbors;
