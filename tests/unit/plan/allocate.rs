use super::*;
use crate::document::dsl::ElementBuilder;
use crate::document::model::ElementKind;
use crate::plan::groups::collect_groups;
use crate::plan::order::resolve_order;

fn plan_parts(
    elements: Vec<DrawingElement>,
    config: &PlanConfig,
) -> (Timeline, Vec<AnimationDescriptor>) {
    let ordered = resolve_order(&elements);
    let groups = collect_groups(&ordered);
    allocate(&ordered, &groups, config).unwrap()
}

fn element_window(descriptors: &[AnimationDescriptor], id: &str) -> (u64, u64) {
    let mut start = u64::MAX;
    let mut end = 0;
    for d in descriptors.iter().filter(|d| d.element_id == id) {
        start = start.min(d.span.start.0);
        end = end.max(d.span.end().0);
    }
    (start, end)
}

#[test]
fn grouped_pair_then_individual_text_matches_documented_numbers() {
    // A (filled rectangle, g1), B (ellipse, g1), C (text, ungrouped), in
    // creation order: g1 budget 5000 over 3 shares = 1667 ms per member.
    // A's fill means its stroke and fill together span the full share.
    let elements = vec![
        ElementBuilder::new("a", ElementKind::Rectangle)
            .fill("#fff")
            .group("g1")
            .created_at(1)
            .build(),
        ElementBuilder::new("b", ElementKind::Ellipse)
            .group("g1")
            .created_at(2)
            .build(),
        ElementBuilder::new("c", ElementKind::Text)
            .text("hi")
            .created_at(3)
            .build(),
    ];
    let (timeline, descriptors) = plan_parts(elements, &PlanConfig::default());

    let (a_start, a_end) = element_window(&descriptors, "a");
    let (b_start, b_end) = element_window(&descriptors, "b");
    let (c_start, c_end) = element_window(&descriptors, "c");

    assert_eq!(a_start, 1000);
    assert_eq!(a_end, 2667);
    assert_eq!(b_start, 2667);
    assert_eq!(b_end, 4334);
    assert_eq!(c_start, 4334);
    assert_eq!(c_end, 4834);
    assert_eq!(timeline.cursor.0, 4834);
    assert_eq!(timeline.total_duration_ms, 5834);
}

#[test]
fn empty_drawing_yields_minimum_total_and_no_descriptors() {
    let (timeline, descriptors) = plan_parts(Vec::new(), &PlanConfig::default());
    assert_eq!(timeline.total_duration_ms, 3000);
    assert!(descriptors.is_empty());
}

#[test]
fn individual_duration_override_is_honored() {
    let elements = vec![
        ElementBuilder::new("slow", ElementKind::Line)
            .duration_override(2500)
            .created_at(1)
            .build(),
        ElementBuilder::new("fast", ElementKind::Line).created_at(2).build(),
    ];
    let (timeline, descriptors) = plan_parts(elements, &PlanConfig::default());

    assert_eq!(element_window(&descriptors, "slow"), (1000, 3500));
    assert_eq!(element_window(&descriptors, "fast"), (3500, 4000));
    assert_eq!(timeline.total_duration_ms, 5000);
}

#[test]
fn group_is_scheduled_at_its_first_member() {
    // Resolved order a(g1), x, b(g1): the whole group animates at a's
    // position and b's later slot is skipped.
    let elements = vec![
        ElementBuilder::new("a", ElementKind::Line).group("g1").created_at(1).build(),
        ElementBuilder::new("x", ElementKind::Text).created_at(2).build(),
        ElementBuilder::new("b", ElementKind::Line).group("g1").created_at(3).build(),
    ];
    let (_, descriptors) = plan_parts(elements, &PlanConfig::default());

    let share = crate::foundation::core::div_round(5000, 3);
    assert_eq!(element_window(&descriptors, "a"), (1000, 1000 + share));
    assert_eq!(
        element_window(&descriptors, "b"),
        (1000 + share, 1000 + 2 * share)
    );
    assert_eq!(
        element_window(&descriptors, "x"),
        (1000 + 2 * share, 1000 + 2 * share + 500)
    );
}

#[test]
fn group_time_spans_form_one_contiguous_interval() {
    let elements = vec![
        ElementBuilder::new("g1a", ElementKind::Line).group("g1").created_at(1).build(),
        ElementBuilder::new("g1b", ElementKind::Line).group("g1").created_at(2).build(),
        ElementBuilder::new("g2a", ElementKind::Line).group("g2").created_at(3).build(),
        ElementBuilder::new("g2b", ElementKind::Line).group("g2").created_at(4).build(),
    ];
    let (_, descriptors) = plan_parts(elements, &PlanConfig::default());

    let (g1_start, g1_end) = element_window(&descriptors, "g1a");
    let (_, g1b_end) = element_window(&descriptors, "g1b");
    let g1_interval = (g1_start, g1b_end.max(g1_end));

    // No descriptor of another group starts inside g1's interval.
    for d in descriptors.iter().filter(|d| d.group_id.as_deref() == Some("g2")) {
        assert!(
            d.span.start.0 >= g1_interval.1,
            "g2 descriptor interleaved into g1's window"
        );
    }
}

#[test]
fn single_member_group_degenerates_cleanly() {
    let elements = vec![
        ElementBuilder::new("solo", ElementKind::Line).group("g1").build(),
    ];
    let (timeline, descriptors) = plan_parts(elements, &PlanConfig::default());

    // Budget 5000 over 2 shares = 2500.
    assert_eq!(element_window(&descriptors, "solo"), (1000, 3500));
    assert_eq!(timeline.total_duration_ms, 4500);
}

#[test]
fn descriptors_are_sorted_by_start() {
    let elements = vec![
        ElementBuilder::new("a", ElementKind::Rectangle)
            .fill("#fff")
            .group("g1")
            .created_at(1)
            .build(),
        ElementBuilder::new("b", ElementKind::Freehand).group("g1").created_at(2).build(),
        ElementBuilder::new("c", ElementKind::Arrow).created_at(3).build(),
    ];
    let (_, descriptors) = plan_parts(elements, &PlanConfig::default());
    for pair in descriptors.windows(2) {
        assert!(pair[0].span.start <= pair[1].span.start);
    }
}

#[test]
fn total_duration_bounds_every_descriptor() {
    let elements = vec![
        ElementBuilder::new("a", ElementKind::Rectangle).fill("#fff").created_at(1).build(),
        ElementBuilder::new("b", ElementKind::Text).text("words").created_at(2).build(),
        ElementBuilder::new("c", ElementKind::Image).created_at(3).build(),
    ];
    let (timeline, descriptors) = plan_parts(elements, &PlanConfig::default());
    for d in &descriptors {
        assert!(d.span.end().0 <= timeline.total_duration_ms);
    }
}

#[test]
fn invalid_config_fails_before_any_allocation() {
    let elements = vec![ElementBuilder::new("a", ElementKind::Line).build()];
    let ordered = resolve_order(&elements);
    let groups = collect_groups(&ordered);
    let bad = PlanConfig {
        stroke_fill_ratio: 0.0,
        ..PlanConfig::default()
    };
    assert!(allocate(&ordered, &groups, &bad).is_err());
}

#[test]
fn allocation_is_deterministic() {
    let elements = vec![
        ElementBuilder::new("a", ElementKind::Rectangle).fill("#fff").group("g1").build(),
        ElementBuilder::new("b", ElementKind::Freehand).group("g1").build(),
        ElementBuilder::new("c", ElementKind::Text).text("t").build(),
    ];
    let first = plan_parts(elements.clone(), &PlanConfig::default());
    let second = plan_parts(elements, &PlanConfig::default());
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}
