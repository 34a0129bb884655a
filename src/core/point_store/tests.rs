use super::*;

const HALF: f32 = 10.0;

fn store_400x200() -> PointStore {
    let mut store = PointStore::new(7);
    store.initialize(Vec2::new(400.0, 200.0));
    store
}

fn xs(store: &PointStore) -> Vec<f32> {
    store.points().iter().map(|p| p.position.x).collect()
}

#[test]
fn test_initialize_places_anchors_at_vertical_center() {
    let store = store_400x200();
    assert_eq!(
        store.positions(),
        vec![Vec2::new(0.0, 100.0), Vec2::new(400.0, 100.0)]
    );
    assert!(store.points().iter().all(|p| !p.draggable && !p.selected));
    assert!(store.interior().is_empty());
}

#[test]
fn test_uninitialized_store_ignores_mutations() {
    let mut store = PointStore::new(7);
    assert!(!store.is_initialized());
    assert_eq!(store.insert(Vec2::new(10.0, 10.0), true), None);
    assert_eq!(store.hit_test(Vec2::new(10.0, 10.0), HALF), None);
    store.replace_interior([Vec2::new(1.0, 1.0)]);
    assert!(store.is_empty());
}

#[test]
fn test_insert_keeps_ascending_x_order() {
    let mut store = store_400x200();
    store.insert(Vec2::new(300.0, 60.0), true);
    store.insert(Vec2::new(100.0, 50.0), true);
    store.insert(Vec2::new(200.0, 150.0), true);
    store.insert(Vec2::new(50.0, 20.0), true);

    assert_eq!(xs(&store), vec![0.0, 50.0, 100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn test_insert_rightmost_point_goes_before_trailing_anchor() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), true);
    let index = store.insert(Vec2::new(390.0, 80.0), true);

    assert_eq!(index, Some(2));
    assert_eq!(xs(&store), vec![0.0, 100.0, 390.0, 400.0]);
}

#[test]
fn test_insert_beyond_canvas_never_displaces_anchors() {
    let mut store = store_400x200();
    store.insert(Vec2::new(450.0, 80.0), true);
    store.insert(Vec2::new(-20.0, 80.0), true);

    let points = store.points();
    assert_eq!(points[0].position, Vec2::new(0.0, 100.0));
    assert_eq!(points[points.len() - 1].position, Vec2::new(400.0, 100.0));
    assert_eq!(store.interior_len(), 2);
}

#[test]
fn test_insert_equal_x_goes_after_existing_point() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), true);
    let index = store.insert(Vec2::new(100.0, 150.0), true);

    assert_eq!(index, Some(2));
    assert_eq!(store.points()[2].position, Vec2::new(100.0, 150.0));
}

#[test]
fn test_insert_respects_capacity() {
    let mut store = store_400x200();
    for i in 1..=10 {
        store.insert(Vec2::new(i as f32 * 30.0, 40.0), true);
    }
    assert_eq!(store.len(), 7);
    assert_eq!(store.interior_len(), 5);
    assert!(store.is_full());
    assert_eq!(store.insert(Vec2::new(5.0, 5.0), true), None);
}

#[test]
fn test_hit_test_grabs_and_snaps_point() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), false);

    let hit = store.hit_test(Vec2::new(106.0, 44.0), HALF);

    assert_eq!(hit, Some(1));
    let point = store.points()[1];
    assert!(point.selected);
    assert!(point.draggable);
    assert_eq!(point.position, Vec2::new(106.0, 44.0));
}

#[test]
fn test_hit_box_is_open_square() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), false);

    assert_eq!(store.find_hit(Vec2::new(110.0, 50.0), HALF), None);
    assert_eq!(store.find_hit(Vec2::new(109.9, 59.9), HALF), Some(1));
    assert_eq!(store.find_hit(Vec2::new(100.0, 61.0), HALF), None);
}

#[test]
fn test_anchors_are_never_hit() {
    let mut store = store_400x200();
    assert_eq!(store.hit_test(Vec2::new(1.0, 100.0), HALF), None);
    assert_eq!(store.hit_test(Vec2::new(399.0, 100.0), HALF), None);
    assert!(!store.any_draggable());
}

#[test]
fn test_grab_moves_selection_to_hit_point() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), false);
    store.insert(Vec2::new(300.0, 60.0), false);

    store.hit_test(Vec2::new(100.0, 50.0), HALF);
    store.release_all(Vec2::new(100.0, 50.0));
    store.hit_test(Vec2::new(300.0, 60.0), HALF);

    assert!(!store.points()[1].selected);
    assert!(store.points()[2].selected);
}

#[test]
fn test_update_drag_position_requires_draggable() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), false);

    assert!(!store.update_drag_position(1, Vec2::new(120.0, 70.0)));
    assert_eq!(store.points()[1].position, Vec2::new(100.0, 50.0));

    store.hit_test(Vec2::new(100.0, 50.0), HALF);
    assert!(store.update_drag_position(1, Vec2::new(120.0, 70.0)));
    assert_eq!(store.points()[1].position, Vec2::new(120.0, 70.0));
}

#[test]
fn test_drag_past_neighbor_is_not_resorted() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), false);
    store.insert(Vec2::new(200.0, 50.0), false);

    store.hit_test(Vec2::new(100.0, 50.0), HALF);
    store.drag_all_to(Vec2::new(250.0, 50.0));
    store.release_all(Vec2::new(250.0, 50.0));

    assert_eq!(xs(&store), vec![0.0, 250.0, 200.0, 400.0]);
}

#[test]
fn test_end_drag_clears_flag_and_finalizes_position() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), true);

    assert!(store.end_drag(1, Vec2::new(110.0, 55.0)));
    let point = store.points()[1];
    assert!(!point.draggable);
    assert_eq!(point.position, Vec2::new(110.0, 55.0));

    assert!(!store.end_drag(1, Vec2::new(0.0, 0.0)));
    assert!(!store.release_all(Vec2::new(0.0, 0.0)));
}

#[test]
fn test_replace_interior_sorts_and_keeps_anchors() {
    let mut store = store_400x200();
    store.insert(Vec2::new(100.0, 50.0), true);

    store.replace_interior([Vec2::new(300.0, 60.0), Vec2::new(150.0, 20.0)]);

    assert_eq!(xs(&store), vec![0.0, 150.0, 300.0, 400.0]);
    assert!(store.interior().iter().all(|p| !p.draggable && !p.selected));
}
