use serde::Serialize;
use shared::calendar::DayCalendar;

use crate::{cluster::ClusterRules, message::ThreadMessage, metrics::BubbleMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerStyle {
    Alone,
    ClusterStart,
    ClusterEnd,
    ClusterMiddle,
}

/// Bubble drawable family: alignment side plus position in the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "side", content = "style", rename_all = "snake_case")]
pub enum BubbleBackground {
    Sent(CornerStyle),
    Received(CornerStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CornerRadii {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_right: u32,
    pub bottom_left: u32,
}

impl CornerRadii {
    pub fn uniform(radius: u32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    fn square_top(&mut self) {
        self.top_left = 0;
        self.top_right = 0;
    }

    fn square_bottom(&mut self) {
        self.bottom_left = 0;
        self.bottom_right = 0;
    }
}

impl<C: DayCalendar> ClusterRules<C> {
    pub fn corner_style<M: ThreadMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        next: Option<&M>,
    ) -> CornerStyle {
        let start = self.is_start_of_cluster(current, previous);
        let end = self.is_end_of_cluster(current, next);

        if start && end {
            CornerStyle::Alone
        } else if start {
            CornerStyle::ClusterStart
        } else if end {
            CornerStyle::ClusterEnd
        } else {
            CornerStyle::ClusterMiddle
        }
    }

    pub fn background<M: ThreadMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        next: Option<&M>,
    ) -> BubbleBackground {
        let style = self.corner_style(current, previous, next);
        if current.is_outgoing() {
            BubbleBackground::Sent(style)
        } else {
            BubbleBackground::Received(style)
        }
    }

    /// Radii for a media thumbnail filling the bubble.
    ///
    /// The overrides run in a fixed order and later ones win: body text
    /// squares the bottom, a group sender header squares the top, a quote
    /// squares the top.
    pub fn corner_radii<M: ThreadMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        next: Option<&M>,
        metrics: &BubbleMetrics,
    ) -> CornerRadii {
        let collapse = metrics.collapse_radius;
        let outgoing = current.is_outgoing();
        let mut radii = CornerRadii::uniform(metrics.default_radius);

        match self.corner_style(current, previous, next) {
            CornerStyle::Alone => {}
            CornerStyle::ClusterStart => {
                if outgoing {
                    radii.bottom_right = collapse;
                } else {
                    radii.bottom_left = collapse;
                }
            }
            CornerStyle::ClusterEnd => {
                if outgoing {
                    radii.top_right = collapse;
                } else {
                    radii.top_left = collapse;
                }
            }
            CornerStyle::ClusterMiddle => {
                if outgoing {
                    radii.top_right = collapse;
                    radii.bottom_right = collapse;
                } else {
                    radii.top_left = collapse;
                    radii.bottom_left = collapse;
                }
            }
        }

        if current.has_body() {
            radii.square_bottom();
        }

        if self.thread().is_group() && !outgoing && self.is_start_of_cluster(current, previous) {
            radii.square_top();
        }

        if current.has_quote() {
            radii.square_top();
        }

        radii
    }
}

#[cfg(test)]
#[path = "tests/corners_tests.rs"]
mod tests;
