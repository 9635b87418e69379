use glam::{Mat4, Vec3};
use crate::camera::{CameraPose, ClipPlanes, Frustum};
use super::*;

// ============================================================================
// AABB
// ============================================================================

#[test]
fn test_aabb_from_center_size() {
    let aabb = AABB::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(aabb.min, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_aabb_corners_are_distinct_extremes() {
    let aabb = AABB { min: Vec3::ZERO, max: Vec3::ONE };
    let corners = aabb.corners();
    assert_eq!(corners[0], Vec3::ZERO);
    assert_eq!(corners[7], Vec3::ONE);
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_aabb_intersects() {
    let a = AABB { min: Vec3::ZERO, max: Vec3::ONE };
    let b = AABB { min: Vec3::splat(0.5), max: Vec3::splat(2.0) };
    let c = AABB { min: Vec3::splat(3.0), max: Vec3::splat(4.0) };
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

// ============================================================================
// Scene::room
// ============================================================================

#[test]
fn test_room_has_walls_and_columns() {
    let scene = Scene::room(20, 7);
    assert_eq!(scene.boxes.len(), 23);
    assert_eq!(scene.ground.size.x, 32.0);
    assert_eq!(scene.boxes[0].color, Color::BLUE);
    assert_eq!(scene.boxes[1].color, Color::LIME);
    assert_eq!(scene.boxes[2].color, Color::GOLD);
}

#[test]
fn test_room_columns_stand_on_the_ground_inside_the_room() {
    let scene = Scene::room(50, 99);
    for column in &scene.boxes[3..] {
        let aabb = column.aabb();
        assert!((aabb.min.y).abs() < 1e-6, "column should start at y = 0");
        assert!(column.size.y >= 1.0 && column.size.y <= 12.0);
        assert!(column.center.x.abs() <= 15.0 && column.center.z.abs() <= 15.0);
        assert_eq!(column.wire_color, Some(Color::MAROON));
    }
}

#[test]
fn test_room_is_deterministic_per_seed() {
    assert_eq!(Scene::room(20, 1234), Scene::room(20, 1234));
    assert_ne!(Scene::room(20, 1234), Scene::room(20, 4321));
}

#[test]
fn test_visible_boxes_culls_against_frustum() {
    let scene = Scene::room(0, 0);
    let pose = CameraPose::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, 10.0), Vec3::Y, 30.0);
    let clip = ClipPlanes::new(0.1, 100.0);
    let vp = pose.default_projection(1.0, clip) * pose.view_matrix();
    let frustum = Frustum::from_view_projection(&vp);

    let visible: Vec<_> = scene.visible_boxes(&frustum).collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].color, Color::GOLD);

    let everything = Frustum::from_view_projection(&Mat4::orthographic_rh_gl(-50.0, 50.0, -50.0, 50.0, -50.0, 50.0));
    assert_eq!(scene.visible_boxes(&everything).count(), 3);
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn test_color_packing_and_blending() {
    assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_rgb_u32(), 0x0012_3456);
    assert_eq!(Color::BLUE.over(Color::BLACK), Color::BLUE);
    assert_eq!(Color::BLUE.fade(0.0).over(Color::OFF_WHITE), Color::OFF_WHITE);
    let half = Color::rgb(200, 0, 0).fade(0.5).over(Color::BLACK);
    assert!(half.r > 90 && half.r < 110);
}
