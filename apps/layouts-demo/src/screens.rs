//! The codelab screens, built from fake text and image children.
//!
//! Text shaping is out of scope here, so text is a [`FakeMeasurable`] with
//! rough metrics: 8px per character, 20px line height, baseline at 15px.

use std::rc::Rc;

use anyhow::Result;
use ravel_testing::{FakeMeasurable, FakeProbe};
use ravel_ui_layout::{
    row_for, ColumnMeasurePolicy, ColumnSpec, Constraints, EdgeInsets, FirstBaselineToTop,
    LayoutNode, LinearArrangement, Measurable, MeasurableExt, Padding, RowMeasurePolicy, RowSpec,
    SizeModifier, StaggeredGridMeasurePolicy, StaggeredGridSpec, VerticalAlignment,
};

const SCREEN_WIDTH: i32 = 360;
const SCREEN_HEIGHT: i32 = 640;

const TOPICS: [&str; 20] = [
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
    "Travel",
];

fn text(label: &str) -> FakeMeasurable {
    let width = i32::try_from(label.chars().count()).unwrap_or(i32::MAX / 8) * 8;
    FakeMeasurable::text_line(label, width, 20, 15)
}

fn boxed<M: Measurable + 'static>(measurable: M) -> Box<dyn Measurable> {
    Box::new(measurable)
}

fn screen() -> Constraints {
    Constraints::loose(SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Topic chips dealt into `rows` rows. The grid scrolls horizontally, so its
/// width is unbounded.
pub fn topic_chips(rows: usize) -> Result<()> {
    let chips: Vec<Rc<LayoutNode>> = TOPICS
        .iter()
        .map(|topic| {
            Rc::new(LayoutNode::new(
                RowMeasurePolicy::new(
                    RowSpec::new().horizontal_arrangement(LinearArrangement::SpacedBy(4)),
                ),
                vec![
                    boxed(FakeMeasurable::new(0, 0).then(SizeModifier::size(16, 16))),
                    boxed(text(topic)),
                ],
            ))
        })
        .collect();

    let grid = LayoutNode::new(
        StaggeredGridMeasurePolicy::new(StaggeredGridSpec::new().rows(rows)),
        chips
            .iter()
            .map(|chip| {
                boxed(
                    Rc::clone(chip)
                        .then(Padding::new(EdgeInsets::symmetric(8, 4)))
                        .then(Padding::uniform(8)),
                )
            })
            .collect(),
    );

    let constraints = Constraints {
        max_width: Constraints::INFINITY,
        ..screen()
    };
    let size = grid.layout_root(constraints)?;
    log::info!("topic chips in {} rows: {}x{}", rows, size.width, size.height);
    for (index, (chip, topic)) in chips.iter().zip(TOPICS).enumerate() {
        if let (Some(position), Some(chip_size)) = (chip.position(), chip.size()) {
            log::info!(
                "  row {} {:<16} at ({:>4}, {:>3}) {}x{}",
                row_for(index, rows),
                topic,
                position.x,
                position.y,
                chip_size.width,
                chip_size.height
            );
        }
    }
    Ok(())
}

/// Avatar next to a name and a timestamp, centered vertically.
pub fn photographer_card() -> Result<()> {
    let name = text("Alfred Sisley");
    let time = text("3 minutes ago");
    let (name_probe, time_probe) = (name.probe(), time.probe());

    let details = Rc::new(LayoutNode::new(
        ColumnMeasurePolicy::new(ColumnSpec::new()),
        vec![boxed(name), boxed(time)],
    ));
    let card = LayoutNode::new(
        RowMeasurePolicy::new(
            RowSpec::new().vertical_alignment(VerticalAlignment::CenterVertically),
        ),
        vec![
            boxed(FakeMeasurable::new(0, 0).then(SizeModifier::size(50, 50))),
            boxed(
                Rc::clone(&details)
                    .then(Padding::new(EdgeInsets::from_components(8, 0, 0, 0))),
            ),
        ],
    );
    let root = card.then(Padding::uniform(16)).then(Padding::uniform(8));

    let placeable = root.measure(screen())?;
    placeable.place(0, 0);
    log::info!(
        "photographer card: {}x{}",
        placeable.width(),
        placeable.height()
    );
    if let Some(position) = details.position() {
        log::info!("  details column at ({}, {})", position.x, position.y);
    }
    log_text("  name", &name_probe);
    log_text("  time", &time_probe);
    Ok(())
}

/// Greeting whose first baseline sits 32px below the top, above a second line.
pub fn body_content() -> Result<()> {
    let greeting = text("Hi there!");
    let thanks = text("Thanks for going through the Layouts codelab");
    let (greeting_probe, thanks_probe) = (greeting.probe(), thanks.probe());

    let body = LayoutNode::new(
        ColumnMeasurePolicy::default(),
        vec![
            boxed(greeting.then(FirstBaselineToTop::new(32))),
            boxed(thanks),
        ],
    );
    let root = body
        .then(Padding::new(EdgeInsets::horizontal(8)))
        .then(Padding::new(EdgeInsets::vertical(8)));

    let placeable = root.measure(screen())?;
    placeable.place(0, 0);
    log::info!("body content: {}x{}", placeable.width(), placeable.height());
    log_text("  greeting", &greeting_probe);
    log_text("  thanks", &thanks_probe);
    Ok(())
}

/// First `count` items of the image list: image, spacer, label.
pub fn image_list(count: usize) -> Result<()> {
    let items: Vec<Rc<LayoutNode>> = (0..count)
        .map(|index| {
            Rc::new(LayoutNode::new(
                RowMeasurePolicy::new(
                    RowSpec::new().vertical_alignment(VerticalAlignment::CenterVertically),
                ),
                vec![
                    boxed(FakeMeasurable::new(0, 0).then(SizeModifier::size(50, 50))),
                    boxed(FakeMeasurable::new(0, 0).then(SizeModifier::width(10))),
                    boxed(text(&format!("Item #{index}"))),
                ],
            ))
        })
        .collect();
    let list = LayoutNode::new(
        ColumnMeasurePolicy::default(),
        items.iter().map(|item| boxed(Rc::clone(item))).collect(),
    );

    let size = list.layout_root(screen())?;
    log::info!("image list ({} items): {}x{}", count, size.width, size.height);
    for (index, item) in items.iter().enumerate() {
        if let Some(position) = item.position() {
            log::info!("  item #{} at ({}, {})", index, position.x, position.y);
        }
    }
    Ok(())
}

fn log_text(label: &str, probe: &FakeProbe) {
    match (probe.position(), probe.measured_size()) {
        (Some(position), Some(size)) => log::info!(
            "{} at ({}, {}) {}x{} (relative to parent)",
            label,
            position.x,
            position.y,
            size.width,
            size.height
        ),
        _ => log::warn!("{} was never placed", label),
    }
}
