/// Modifier chains measured end to end, including inside policies.
use ravel_testing::{FakeMeasurable, LayoutTestRule};
use ravel_ui_layout::{
    AlignmentLine, Constraints, EdgeInsets, ErrorKind, FirstBaselineToTop, IntOffset, IntSize,
    LayoutError, LayoutModifier, Measurable, MeasurableExt, Padding, SizeModifier,
    StaggeredGridMeasurePolicy,
};

#[test]
fn baseline_request_offsets_child_and_grows_height() {
    let text = FakeMeasurable::text_line("Hi there!", 60, 20, 8);
    let probe = text.probe();

    let placeable = text
        .then(FirstBaselineToTop::new(32))
        .measure(Constraints::unbounded())
        .unwrap();
    placeable.place(0, 0);

    assert_eq!(placeable.size(), IntSize::new(60, 44));
    assert_eq!(probe.position(), Some(IntOffset::new(0, 24)));
}

#[test]
fn baseline_request_without_baseline_fails() {
    let image = FakeMeasurable::new(50, 50).named("image");

    let err = FirstBaselineToTop::new(32)
        .measure(&image, Constraints::unbounded())
        .err()
        .unwrap();

    assert_eq!(err.kind(), ErrorKind::MissingMetric);
    assert_eq!(
        err,
        LayoutError::MissingAlignmentLine(AlignmentLine::FirstBaseline)
    );
}

#[test]
fn padding_outside_baseline_shifts_reported_baseline() {
    let text = FakeMeasurable::text_line("Hi", 30, 20, 8);
    let probe = text.probe();

    let placeable = text
        .then(FirstBaselineToTop::new(24))
        .then(Padding::new(EdgeInsets::from_components(8, 8, 0, 0)))
        .measure(Constraints::unbounded())
        .unwrap();
    placeable.place(0, 0);

    assert_eq!(placeable.size(), IntSize::new(38, 44));
    assert_eq!(
        placeable.alignment_line(AlignmentLine::FirstBaseline),
        Some(32)
    );
    assert_eq!(probe.position(), Some(IntOffset::new(8, 24)));
}

#[test]
fn padding_shifts_first_and_last_baselines() {
    let paragraph = FakeMeasurable::new(120, 40).with_baselines(15, 35);

    let placeable = paragraph
        .then(Padding::new(EdgeInsets::vertical(6)))
        .measure(Constraints::unbounded())
        .unwrap();

    assert_eq!(placeable.size(), IntSize::new(120, 52));
    assert_eq!(
        placeable.alignment_line(AlignmentLine::FirstBaseline),
        Some(21)
    );
    assert_eq!(
        placeable.alignment_line(AlignmentLine::LastBaseline),
        Some(41)
    );
}

#[test]
fn padding_after_fixed_size_measures_fixed_child() {
    let avatar = FakeMeasurable::new(0, 0);
    let probe = avatar.probe();

    let placeable = avatar
        .then(SizeModifier::size(50, 50))
        .then(Padding::uniform(16))
        .measure(Constraints::loose(400, 400))
        .unwrap();
    placeable.place(4, 4);

    assert_eq!(placeable.size(), IntSize::new(82, 82));
    assert_eq!(probe.measure_constraints(), vec![Constraints::fixed(50, 50)]);
    assert_eq!(probe.position(), Some(IntOffset::new(20, 20)));
}

#[test]
fn modified_children_inside_a_grid() {
    let chips: Vec<Box<dyn Measurable>> = (0..4)
        .map(|i| {
            Box::new(FakeMeasurable::new(20 + i * 10, 16).then(Padding::uniform(8)))
                as Box<dyn Measurable>
        })
        .collect();
    let policy = StaggeredGridMeasurePolicy::default();

    let result = ravel_ui_layout::MeasurePolicy::measure(&policy, &chips, Constraints::unbounded())
        .unwrap();

    // Row 0: chips 0 and 3 (36 + 66), rows 1 and 2 one chip each, all 32 tall.
    assert_eq!(result.size, IntSize::new(102, 96));
}

#[test]
fn rule_runs_policies_over_modifier_free_children() {
    let rule = LayoutTestRule::with_sizes([(5, 5), (5, 5)]);

    let result = rule
        .run(&StaggeredGridMeasurePolicy::default(), Constraints::unbounded())
        .unwrap();

    assert_eq!(result.size, IntSize::new(5, 10));
    rule.child(1).assert_placed_at(0, 5);
}
