use shared::{calendar::DayCalendar, domain::ThreadKind};

use crate::message::ThreadMessage;

/// Decides where a message sits in its run of same-author messages.
///
/// Holds no per-message state: every method is a pure function of its
/// arguments, the thread kind and the calendar.
#[derive(Debug, Clone)]
pub struct ClusterRules<C> {
    thread: ThreadKind,
    calendar: C,
}

impl<C: DayCalendar> ClusterRules<C> {
    pub fn new(thread: ThreadKind, calendar: C) -> Self {
        Self { thread, calendar }
    }

    pub fn thread(&self) -> ThreadKind {
        self.thread
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Sender in group threads, direction in one-to-one threads.
    pub fn same_grouping_key<M: ThreadMessage>(&self, a: &M, b: &M) -> bool {
        if self.thread.is_group() {
            a.sender() == b.sender()
        } else {
            a.is_outgoing() == b.is_outgoing()
        }
    }

    fn breaks_cluster<M: ThreadMessage>(&self, current: &M, neighbor: Option<&M>) -> bool {
        let Some(neighbor) = neighbor else {
            return true;
        };

        neighbor.is_update()
            || !self.calendar.same_day(current.timestamp(), neighbor.timestamp())
            || !self.same_grouping_key(current, neighbor)
    }

    pub fn is_start_of_cluster<M: ThreadMessage>(&self, current: &M, previous: Option<&M>) -> bool {
        self.breaks_cluster(current, previous)
    }

    pub fn is_end_of_cluster<M: ThreadMessage>(&self, current: &M, next: Option<&M>) -> bool {
        self.breaks_cluster(current, next)
    }

    pub fn is_singular<M: ThreadMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        next: Option<&M>,
    ) -> bool {
        self.is_start_of_cluster(current, previous) && self.is_end_of_cluster(current, next)
    }
}

#[cfg(test)]
#[path = "tests/cluster_tests.rs"]
mod tests;
