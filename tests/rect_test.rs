use scene_ex::{Rect, Vector2};

fn p(x: f32, y: f32) -> Vector2<f32> {
    Vector2::new(x, y)
}

#[test]
fn empty_rect_is_empty_until_extended() {
    let empty = Rect::empty();
    assert!(empty.is_empty());
    assert!(Rect::default().is_empty());

    let point = empty.extend(p(-4.5, 7.25));
    assert!(!point.is_empty());
    assert_eq!(point, Rect::new(-4.5, 7.25, 0.0, 0.0));
    assert!(point.is_zero());
}

#[test]
fn extend_grows_to_the_bounding_box() {
    let rect = Rect::empty().extend(p(2.0, 3.0));
    assert_eq!(rect, Rect::new(2.0, 3.0, 0.0, 0.0));

    let rect = rect.extend(p(5.0, 1.0));
    assert_eq!(rect, Rect::new(2.0, 1.0, 3.0, 2.0));
    assert_eq!(rect.min(), p(2.0, 1.0));
    assert_eq!(rect.max(), p(5.0, 3.0));
}

#[test]
fn extend_keeps_rect_when_point_is_inside() {
    let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
    assert_eq!(rect.extend(p(1.0, 3.5)), rect);
    assert_eq!(rect.extend(p(0.0, 0.0)), rect);
    // the max edge is outside the half-open rect but growing to it changes nothing
    assert_eq!(rect.extend(p(4.0, 4.0)), rect);
}

#[test]
fn extend_result_contains_the_point() {
    let points = [p(1.0, 1.0), p(-3.0, 2.0), p(0.5, -8.0), p(10.0, 4.0), p(2.0, 2.0)];
    let mut rect = Rect::empty();
    for point in points {
        rect = rect.extend(point);
        assert!(point.x >= rect.x_min && point.x <= rect.x_max());
        assert!(point.y >= rect.y_min && point.y <= rect.y_max());
    }
    assert_eq!(rect, Rect::from_min_max(p(-3.0, -8.0), p(10.0, 4.0)));
}

#[test]
fn bounding_box_does_not_depend_on_point_order() {
    let points = vec![p(1.0, 1.0), p(-3.0, 2.0), p(0.5, -8.0), p(10.0, 4.0), p(2.0, 2.0)];
    let forward = Rect::bounding(points.iter().copied());
    let backward = Rect::bounding(points.iter().rev().copied());
    let mut shuffled = points.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 4);
    let shuffled = Rect::bounding(shuffled);

    assert_eq!(forward, backward);
    assert_eq!(forward, shuffled);
    assert!(Rect::bounding(Vec::new()).is_empty());
}

#[test]
fn is_zero_flags_either_degenerate_axis() {
    assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_zero());
    assert!(Rect::new(0.0, 0.0, 5.0, 0.0).is_zero());
    assert!(!Rect::new(0.0, 0.0, 5.0, 5.0).is_zero());
    assert!(!Rect::new(0.0, 0.0, -1.0, 2.0).is_zero());
}

#[test]
fn normalize_maps_corners_to_unit_square() {
    let rect = Rect::new(2.0, 1.0, 3.0, 2.0);
    assert_eq!(rect.normalize(rect.min()), p(0.0, 0.0));
    assert_eq!(rect.normalize(rect.max()), p(1.0, 1.0));
    assert_eq!(rect.normalize(p(3.5, 2.0)), p(0.5, 0.5));
    // outside points are extrapolated
    assert_eq!(rect.normalize(p(8.0, 0.0)), p(2.0, -0.5));
}

#[test]
fn normalize_on_zero_extent_is_not_finite() {
    let rect = Rect::empty().extend(p(1.0, 1.0));
    assert!(rect.is_zero());
    let normalized = rect.normalize(p(1.0, 1.0));
    assert!(normalized.x.is_nan() && normalized.y.is_nan());
    let normalized = rect.normalize(p(2.0, 1.0));
    assert!(normalized.x.is_infinite());
}
