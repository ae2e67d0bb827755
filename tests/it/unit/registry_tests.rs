//! Unit tests for drawing removal and clearing through the tool.

use crate::helpers::{click_at, new_tool, pt};
use chart_drawings::{Drawing, DrawingHandle, DrawingVariant};

fn hline(price: f64) -> DrawingHandle {
    Drawing::at(DrawingVariant::HorizontalLine, pt(0, price)).into()
}

#[test]
fn test_add_new_drawing_attaches_in_order() {
    let mut tool = new_tool();
    let (a, b) = (hline(10.0), hline(20.0));

    tool.add_new_drawing(a.clone());
    tool.add_new_drawing(b.clone());

    assert_eq!(tool.drawings(), &[a.clone(), b.clone()]);
    assert!(a.is_attached() && b.is_attached());
    assert_eq!(tool.host().attach_count(), 2);
}

#[test]
fn test_add_same_drawing_twice_is_ignored() {
    let mut tool = new_tool();
    let a = hline(10.0);
    tool.add_new_drawing(a.clone());
    tool.add_new_drawing(a.clone());
    assert_eq!(tool.drawings().len(), 1);
    assert_eq!(tool.host().attach_count(), 1);
}

#[test]
fn test_delete_removes_exactly_one_by_reference() {
    let mut tool = new_tool();
    // Equal contents, distinct identity
    let (a, b) = (hline(10.0), hline(10.0));
    tool.add_new_drawing(a.clone());
    tool.add_new_drawing(b.clone());

    assert!(tool.delete(Some(&b)));

    assert_eq!(tool.drawings(), &[a.clone()]);
    assert!(!b.is_attached());
    assert!(a.is_attached());
    assert_eq!(tool.host().detach_count(), 1);
}

#[test]
fn test_delete_absent_or_none_is_noop() {
    let mut tool = new_tool();
    tool.add_new_drawing(hline(10.0));

    assert!(!tool.delete(None));
    assert!(!tool.delete(Some(&hline(10.0))));

    assert_eq!(tool.drawings().len(), 1);
    assert_eq!(tool.host().detach_count(), 0);
}

#[test]
fn test_delete_preview_abandons_placement() {
    let mut tool = new_tool();
    tool.begin_drawing(DrawingVariant::TrendLine);
    click_at(&mut tool, 1, 100.0);
    let preview = tool.preview().cloned().unwrap();

    assert!(tool.delete(Some(&preview)));

    assert!(!tool.is_drawing());
    assert!(!preview.is_attached());
    assert!(tool.drawings().is_empty());
}

#[test]
fn test_clear_drawings_detaches_everything() {
    let mut tool = new_tool();
    let members: Vec<_> = (0..4).map(|i| hline(10.0 * i as f64)).collect();
    for d in &members {
        tool.add_new_drawing(d.clone());
    }

    tool.clear_drawings();

    assert!(tool.drawings().is_empty());
    assert!(members.iter().all(|d| !d.is_attached()));
    assert!(tool.host().visible.is_empty());
    assert_eq!(tool.host().detach_count(), 4);
}

#[test]
fn test_clear_drawings_is_idempotent() {
    let mut tool = new_tool();
    tool.clear_drawings();
    tool.add_new_drawing(hline(1.0));
    tool.clear_drawings();
    tool.clear_drawings();
    assert!(tool.drawings().is_empty());
    assert_eq!(tool.host().detach_count(), 1);
}

#[test]
fn test_clear_drawings_keeps_placement_in_progress() {
    let mut tool = new_tool();
    tool.add_new_drawing(hline(1.0));
    tool.begin_drawing(DrawingVariant::TrendLine);
    click_at(&mut tool, 1, 100.0);

    tool.clear_drawings();

    assert!(tool.is_drawing());
    assert!(tool.preview().unwrap().is_attached());
    click_at(&mut tool, 2, 110.0);
    assert_eq!(tool.drawings().len(), 1);
}
