use std::ops::Range;

use bubble_policy::{Footer, ItemLayout, StatusIndicator};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use shared::domain::{Address, MessageId, MessageRecord};

#[derive(Debug, Serialize)]
pub struct LayoutRow<'a> {
    pub id: MessageId,
    pub sender: &'a Address,
    #[serde(flatten)]
    pub layout: &'a ItemLayout,
}

#[derive(Debug, Serialize)]
pub struct ClusterRow<'a> {
    pub start: usize,
    pub end: usize,
    pub sender: &'a Address,
    pub outgoing: bool,
}

fn clock(timestamp: i64, tz: &FixedOffset) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|utc| utc.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "????-??-?? ??:??".to_string())
}

pub fn describe_item(message: &MessageRecord, layout: &ItemLayout, tz: &FixedOffset) -> String {
    let mut extras = Vec::new();
    if layout.show_sender_header {
        extras.push("header".to_string());
    }
    if layout.show_avatar {
        extras.push("avatar".to_string());
    }
    if let Footer::Shown { host } = layout.footer {
        extras.push(format!("footer:{host:?}"));
    }
    if let Some(kind) = layout.attachment {
        extras.push(format!("attachment:{kind:?}"));
    }
    if let Some(thumbnail) = &layout.thumbnail {
        let r = thumbnail.radii;
        extras.push(format!(
            "radii:{}/{}/{}/{}",
            r.top_left, r.top_right, r.bottom_right, r.bottom_left
        ));
    }
    match layout.status {
        StatusIndicator::None => {}
        status => extras.push(format!("status:{status:?}")),
    }

    format!(
        "{:>6}  {}  {:<3} {:<16} {:<14} gap={:<3} {}",
        message.id,
        clock(message.timestamp, tz),
        if message.is_outgoing { "out" } else { "in" },
        message.sender.as_str(),
        format!("{:?}", layout.corner_style),
        layout.gap,
        extras.join(" ")
    )
    .trim_end()
    .to_string()
}

pub fn describe_cluster(messages: &[MessageRecord], range: &Range<usize>) -> Option<String> {
    let first = messages.get(range.start)?;
    Some(format!(
        "{:>4}..{:<4} {:<3} {:<16} {} message(s)",
        range.start,
        range.end,
        if first.is_outgoing { "out" } else { "in" },
        first.sender.as_str(),
        range.len()
    ))
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
