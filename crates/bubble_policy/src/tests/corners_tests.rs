use super::*;
use shared::{
    calendar::ZonedCalendar,
    domain::{Address, MessageId, MessageRecord, ThreadKind},
};

// 2024-03-10T12:00:00Z
const NOON: i64 = 1_710_072_000_000;

const METRICS: BubbleMetrics = BubbleMetrics {
    default_radius: 20,
    collapse_radius: 5,
    spacing_default: 8,
    spacing_collapsed: 1,
    group_gutter: 48,
    individual_gutter: 16,
};

fn message(id: i64, outgoing: bool, sender: &str) -> MessageRecord {
    MessageRecord::new(MessageId(id), NOON + id * 1_000, outgoing, Address::new(sender))
}

fn rules_for(thread: ThreadKind) -> ClusterRules<impl DayCalendar> {
    ClusterRules::new(thread, ZonedCalendar::utc())
}

fn radii(top_left: u32, top_right: u32, bottom_right: u32, bottom_left: u32) -> CornerRadii {
    CornerRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    }
}

#[test]
fn style_precedence_follows_cluster_position() {
    let rules = rules_for(ThreadKind::Direct);
    let a = message(1, true, "me");
    let b = message(2, true, "me");
    let c = message(3, true, "me");

    assert_eq!(rules.corner_style(&b, None, None), CornerStyle::Alone);
    assert_eq!(rules.corner_style(&a, None, Some(&b)), CornerStyle::ClusterStart);
    assert_eq!(rules.corner_style(&c, Some(&b), None), CornerStyle::ClusterEnd);
    assert_eq!(rules.corner_style(&b, Some(&a), Some(&c)), CornerStyle::ClusterMiddle);
}

#[test]
fn background_reflects_side_and_style() {
    let rules = rules_for(ThreadKind::Direct);
    let sent = message(1, true, "me");
    let received = message(2, false, "dana");
    let received_again = message(3, false, "dana");

    assert_eq!(
        rules.background(&sent, None, Some(&received)),
        BubbleBackground::Sent(CornerStyle::Alone)
    );
    assert_eq!(
        rules.background(&received, Some(&sent), Some(&received_again)),
        BubbleBackground::Received(CornerStyle::ClusterStart)
    );
}

#[test]
fn alone_keeps_default_radius() {
    let rules = rules_for(ThreadKind::Direct);
    let current = message(1, true, "me");
    assert_eq!(
        rules.corner_radii(&current, None, None, &METRICS),
        CornerRadii::uniform(20)
    );
}

#[test]
fn collapses_corners_on_the_alignment_side() {
    let rules = rules_for(ThreadKind::Direct);
    let sent = [message(1, true, "me"), message(2, true, "me"), message(3, true, "me")];
    let received = [
        message(4, false, "dana"),
        message(5, false, "dana"),
        message(6, false, "dana"),
    ];

    assert_eq!(
        rules.corner_radii(&sent[0], None, Some(&sent[1]), &METRICS),
        radii(20, 20, 5, 20)
    );
    assert_eq!(
        rules.corner_radii(&sent[2], Some(&sent[1]), None, &METRICS),
        radii(20, 5, 20, 20)
    );
    assert_eq!(
        rules.corner_radii(&sent[1], Some(&sent[0]), Some(&sent[2]), &METRICS),
        radii(20, 5, 5, 20)
    );

    assert_eq!(
        rules.corner_radii(&received[0], None, Some(&received[1]), &METRICS),
        radii(20, 20, 20, 5)
    );
    assert_eq!(
        rules.corner_radii(&received[2], Some(&received[1]), None, &METRICS),
        radii(5, 20, 20, 20)
    );
    assert_eq!(
        rules.corner_radii(&received[1], Some(&received[0]), Some(&received[2]), &METRICS),
        radii(5, 20, 20, 5)
    );
}

#[test]
fn body_text_squares_bottom_corners() {
    let rules = rules_for(ThreadKind::Direct);
    let previous = message(1, true, "me");
    let current = message(2, true, "me").with_body("caption");
    let next = message(3, true, "me");

    assert_eq!(
        rules.corner_radii(&current, Some(&previous), Some(&next), &METRICS),
        radii(20, 5, 0, 0)
    );
}

#[test]
fn incoming_group_cluster_start_squares_top_corners() {
    let rules = rules_for(ThreadKind::Group);
    let current = message(1, false, "erin");
    let next = message(2, false, "erin");

    assert_eq!(
        rules.corner_radii(&current, None, Some(&next), &METRICS),
        radii(0, 0, 20, 5)
    );
}

#[test]
fn outgoing_group_cluster_start_keeps_top_corners() {
    let rules = rules_for(ThreadKind::Group);
    let current = message(1, true, "me");
    let next = message(2, true, "me");

    assert_eq!(
        rules.corner_radii(&current, None, Some(&next), &METRICS),
        radii(20, 20, 5, 20)
    );
}

#[test]
fn quote_squares_top_corners_in_every_position() {
    let rules = rules_for(ThreadKind::Direct);
    let a = message(1, false, "dana");
    let b = message(2, false, "dana");
    let c = message(3, false, "dana");
    let quoted = |m: &MessageRecord| m.clone().with_quote();

    let cases = [
        (quoted(&b), None, None),
        (quoted(&a), None, Some(&b)),
        (quoted(&c), Some(&b), None),
        (quoted(&b), Some(&a), Some(&c)),
    ];
    for (current, previous, next) in &cases {
        let result = rules.corner_radii(current, *previous, *next, &METRICS);
        assert_eq!((result.top_left, result.top_right), (0, 0));
    }
}

#[test]
fn overrides_stack_in_order() {
    // Incoming group cluster start with body and quote ends up fully square.
    let rules = rules_for(ThreadKind::Group);
    let current = message(1, false, "erin").with_body("see above").with_quote();
    let next = message(2, false, "erin");

    assert_eq!(
        rules.corner_radii(&current, None, Some(&next), &METRICS),
        radii(0, 0, 0, 0)
    );
}
