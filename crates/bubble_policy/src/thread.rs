use std::ops::Range;

use shared::calendar::DayCalendar;
use tracing::{debug, trace};

use crate::{
    cluster::ClusterRules,
    item::ItemLayout,
    message::{ItemMessage, ThreadMessage},
    metrics::BubbleMetrics,
};

/// Previous and next entries around `index`, `None` at the list edges.
pub fn neighbors<M>(messages: &[M], index: usize) -> (Option<&M>, Option<&M>) {
    let previous = index.checked_sub(1).and_then(|i| messages.get(i));
    let next = index.checked_add(1).and_then(|i| messages.get(i));
    (previous, next)
}

impl<C: DayCalendar> ClusterRules<C> {
    pub fn layout_thread<M: ItemMessage>(
        &self,
        messages: &[M],
        metrics: &BubbleMetrics,
    ) -> Vec<ItemLayout> {
        let layouts: Vec<ItemLayout> = messages
            .iter()
            .enumerate()
            .map(|(index, current)| {
                let (previous, next) = neighbors(messages, index);
                let layout = self.item_layout(current, previous, next, metrics);
                trace!(index, style = ?layout.corner_style, gap = layout.gap, "laid out item");
                layout
            })
            .collect();

        debug!(
            thread = ?self.thread(),
            messages = messages.len(),
            "laid out thread"
        );
        layouts
    }

    /// Maximal runs of merged bubbles, split after every end-of-cluster.
    pub fn clusters<M: ThreadMessage>(&self, messages: &[M]) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start = 0;

        for (index, current) in messages.iter().enumerate() {
            let (_, next) = neighbors(messages, index);
            if self.is_end_of_cluster(current, next) {
                runs.push(start..index + 1);
                start = index + 1;
            }
        }

        debug!(thread = ?self.thread(), clusters = runs.len(), "split thread into clusters");
        runs
    }
}

#[cfg(test)]
#[path = "tests/thread_tests.rs"]
mod tests;
