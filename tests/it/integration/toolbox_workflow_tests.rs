//! End-to-end toolbox workflows.

use crate::helpers::{MockChart, MockChartBuilder, click_at, finish_counter, move_to, new_tool, pt, t};
use chart_drawings::{DrawingTool, DrawingVariant, Point, ToolSettings};

#[test]
fn test_horizontal_line_one_click_at_price() {
    let mut tool = new_tool();
    tool.begin_drawing(DrawingVariant::HorizontalLine);

    click_at(&mut tool, 7, 100.0);

    assert!(!tool.is_drawing());
    assert_eq!(tool.drawings().len(), 1);
    let points = tool.drawings()[0].points();
    assert!(points.iter().all(|p| p.is_some_and(|p| p.price == 100.0)));
}

#[test]
fn test_trend_line_click_move_click() {
    let mut tool = new_tool();
    let finished = finish_counter(&mut tool);
    tool.begin_drawing(DrawingVariant::TrendLine);

    click_at(&mut tool, 10, 100.0);
    move_to(&mut tool, 15, 120.0);
    move_to(&mut tool, 25, 140.0);
    assert_eq!(
        tool.preview().unwrap().borrow().last_point(),
        Some(pt(25, 140.0))
    );
    click_at(&mut tool, 25, 140.0);

    assert_eq!(tool.drawings().len(), 1);
    assert_eq!(
        tool.drawings()[0].points(),
        vec![Some(pt(10, 100.0)), Some(pt(25, 140.0))]
    );
    assert!(!tool.is_drawing());
    assert_eq!(finished.get(), 1);
}

#[test]
fn test_measure_click_click() {
    let mut tool = new_tool();
    let finished = finish_counter(&mut tool);
    tool.add_new_drawing(chart_drawings::Drawing::at(DrawingVariant::HorizontalLine, pt(1, 50.0)).into());

    tool.begin_drawing(DrawingVariant::Measure);
    click_at(&mut tool, 3, 90.0);
    assert_eq!(tool.drawings().len(), 1);
    move_to(&mut tool, 6, 110.0);
    click_at(&mut tool, 6, 110.0);

    assert_eq!(tool.drawings().len(), 1);
    assert_eq!(finished.get(), 1);
    assert_eq!(tool.host().visible.len(), 1);
    assert_eq!(tool.pending_variant(), Some(DrawingVariant::Measure));
}

#[test]
fn test_toolbar_session_with_deletes_and_reindex() {
    let mut tool = DrawingTool::with_settings(
        MockChartBuilder::new().with_bars(200).with_bar_width(5.0).build(),
        ToolSettings::default(),
    );
    let finished = finish_counter(&mut tool);

    for (name, clicks) in [
        ("trend-line", vec![(10, 100.0), (20, 110.0)]),
        ("ray-line", vec![(30, 90.0)]),
        ("box", vec![(40, 60.0), (60, 80.0)]),
        ("vertical-line", vec![(70, 10.0)]),
    ] {
        let variant: DrawingVariant = name.parse().unwrap();
        tool.begin_drawing(variant);
        for (logical, price) in clicks {
            click_at(&mut tool, logical, price);
        }
        assert!(!tool.is_drawing(), "{name} should be committed");
    }
    assert_eq!(finished.get(), 4);
    assert_eq!(tool.drawings().len(), 4);

    let ray = tool.drawings()[1].clone();
    tool.delete(Some(&ray));
    tool.delete(Some(&ray));
    assert_eq!(
        tool.drawings()
            .iter()
            .map(|d| d.variant())
            .collect::<Vec<_>>(),
        vec![DrawingVariant::TrendLine, DrawingVariant::Box, DrawingVariant::VerticalLine]
    );

    tool.host_mut().drop_leading_bars(40);
    assert_eq!(tool.reposition_on_time(), 3);
    let vertical = tool.drawings()[2].points()[0].unwrap();
    assert_eq!(vertical, Point::new(Some(t(70)), Some(30), 10.0));
    // Trend line anchors dropped off the scale and fell back to slot 0
    assert_eq!(tool.drawings()[0].points()[0].unwrap().logical, Some(0));

    tool.clear_drawings();
    assert!(tool.drawings().is_empty());
    assert!(tool.host().visible.is_empty());
}

#[test]
fn test_finish_callback_can_be_replaced_and_cleared() {
    let mut tool = new_tool();
    let first = finish_counter(&mut tool);
    tool.begin_drawing(DrawingVariant::HorizontalLine);
    click_at(&mut tool, 1, 10.0);

    let second = finish_counter(&mut tool);
    tool.begin_drawing(DrawingVariant::HorizontalLine);
    click_at(&mut tool, 2, 20.0);

    tool.clear_finish_callback();
    tool.begin_drawing(DrawingVariant::HorizontalLine);
    click_at(&mut tool, 3, 30.0);

    assert_eq!((first.get(), second.get()), (1, 1));
    assert_eq!(tool.drawings().len(), 3);
}

#[test]
fn test_host_survives_tool() {
    let mut tool: DrawingTool<MockChart> = new_tool();
    tool.begin_drawing(DrawingVariant::HorizontalLine);
    click_at(&mut tool, 1, 10.0);

    let host = tool.into_host();
    assert_eq!(host.visible.len(), 1);
    assert_eq!(host.attach_count(), 1);
}
