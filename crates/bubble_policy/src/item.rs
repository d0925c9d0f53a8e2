use serde::Serialize;
use shared::{calendar::DayCalendar, domain::AttachmentKind};

use crate::{
    cluster::ClusterRules,
    corners::{BubbleBackground, CornerRadii, CornerStyle},
    message::ItemMessage,
    metrics::BubbleMetrics,
    spacing::{classify_spacing, SpacingCategory},
};

const ATTACHMENT_PRECEDENCE: [AttachmentKind; 4] = [
    AttachmentKind::SharedContact,
    AttachmentKind::Audio,
    AttachmentKind::Document,
    AttachmentKind::Thumbnail,
];

/// The one attachment view an item shows when several are present.
pub fn primary_attachment(attachments: &[AttachmentKind]) -> Option<AttachmentKind> {
    ATTACHMENT_PRECEDENCE
        .into_iter()
        .find(|kind| attachments.contains(kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterHost {
    Bubble,
    SharedContact,
    Thumbnail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Footer {
    Shown { host: FooterHost },
    Hidden { collapsed_padding: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GutterTarget {
    Container,
    Bubble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gutter {
    pub target: GutterTarget,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatusIndicator {
    None,
    Failed { details_hint: bool },
    PendingApproval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThumbnailLayout {
    pub radii: CornerRadii,
    /// Set when the thumbnail has no caption and carries the bubble shape itself.
    pub shade: Option<BubbleBackground>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLayout {
    pub corner_style: CornerStyle,
    pub background: BubbleBackground,
    pub spacing: SpacingCategory,
    pub gap: u32,
    pub show_sender_header: bool,
    pub show_avatar: bool,
    pub footer: Footer,
    pub attachment: Option<AttachmentKind>,
    pub thumbnail: Option<ThumbnailLayout>,
    pub gutter: Gutter,
    pub status: StatusIndicator,
}

impl<C: DayCalendar> ClusterRules<C> {
    pub fn item_layout<M: ItemMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        next: Option<&M>,
        metrics: &BubbleMetrics,
    ) -> ItemLayout {
        let group_incoming = self.thread().is_group() && !current.is_outgoing();
        let corner_style = self.corner_style(current, previous, next);
        let background = self.background(current, previous, next);
        let spacing = classify_spacing(current, next);
        let attachment = primary_attachment(current.attachments());

        let thumbnail =
            (attachment == Some(AttachmentKind::Thumbnail)).then(|| ThumbnailLayout {
                radii: self.corner_radii(current, previous, next, metrics),
                shade: (!current.has_body()).then_some(background),
            });

        ItemLayout {
            corner_style,
            background,
            spacing,
            gap: metrics.gap(spacing),
            show_sender_header: group_incoming && self.is_start_of_cluster(current, previous),
            show_avatar: group_incoming && self.is_end_of_cluster(current, next),
            footer: self.footer(current, previous, attachment),
            attachment,
            thumbnail,
            gutter: Gutter {
                target: if current.is_outgoing() {
                    GutterTarget::Container
                } else {
                    GutterTarget::Bubble
                },
                width: metrics.gutter(self.thread()),
            },
            status: status_indicator(current),
        }
    }

    fn footer<M: ItemMessage>(
        &self,
        current: &M,
        previous: Option<&M>,
        attachment: Option<AttachmentKind>,
    ) -> Footer {
        let different_minute = previous.is_some_and(|prev| {
            !self
                .calendar()
                .same_minute(prev.timestamp(), current.timestamp())
        });

        if current.is_outgoing()
            || current.expires_in_ms() > 0
            || !current.is_secure()
            || different_minute
        {
            let host = match attachment {
                Some(AttachmentKind::SharedContact) => FooterHost::SharedContact,
                Some(AttachmentKind::Thumbnail) if !current.has_body() => FooterHost::Thumbnail,
                _ => FooterHost::Bubble,
            };
            Footer::Shown { host }
        } else {
            Footer::Hidden {
                collapsed_padding: current.has_body(),
            }
        }
    }
}

fn status_indicator<M: ItemMessage>(current: &M) -> StatusIndicator {
    if current.is_failed() {
        StatusIndicator::Failed {
            details_hint: current.is_outgoing(),
        }
    } else if current.is_pending_insecure_fallback() {
        StatusIndicator::PendingApproval
    } else {
        StatusIndicator::None
    }
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
