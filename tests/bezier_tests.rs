// Host-side tests for curve evaluation.

use glam::Vec2;
use wobble_core::bezier::{position, sample_polyline, tangent, tangent_direction};

fn control_sets() -> Vec<[Vec2; 4]> {
    vec![
        [
            Vec2::new(160.0, 300.0),
            Vec2::new(340.0, 240.0),
            Vec2::new(460.0, 360.0),
            Vec2::new(640.0, 300.0),
        ],
        [
            Vec2::new(-3.5, 12.25),
            Vec2::new(1e3, -7.0),
            Vec2::new(0.1, 0.2),
            Vec2::new(88.8, -41.0),
        ],
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
        ],
    ]
}

fn assert_parallel_same_direction(a: Vec2, b: Vec2) {
    let cross = a.perp_dot(b);
    let scale = a.length() * b.length();
    assert!(cross.abs() <= scale * 1e-5, "not parallel: {a:?} vs {b:?}");
    assert!(a.dot(b) > 0.0, "opposite directions: {a:?} vs {b:?}");
}

#[test]
fn endpoints_are_exact() {
    for pts in control_sets() {
        assert_eq!(position(0.0, &pts), pts[0]);
        assert_eq!(position(1.0, &pts), pts[3]);
    }
}

#[test]
fn end_tangents_follow_control_legs() {
    for pts in control_sets() {
        assert_parallel_same_direction(tangent(0.0, &pts), pts[1] - pts[0]);
        assert_parallel_same_direction(tangent(1.0, &pts), pts[3] - pts[2]);
    }
}

#[test]
fn end_tangents_are_three_times_the_legs() {
    let pts = control_sets()[0];
    assert_eq!(tangent(0.0, &pts), (pts[1] - pts[0]) * 3.0);
    assert_eq!(tangent(1.0, &pts), (pts[3] - pts[2]) * 3.0);
}

#[test]
fn evaluation_is_repeatable() {
    for pts in control_sets() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert_eq!(position(t, &pts).to_array(), position(t, &pts).to_array());
            assert_eq!(tangent(t, &pts).to_array(), tangent(t, &pts).to_array());
        }
    }
}

#[test]
fn parameter_is_not_clamped() {
    let pts = control_sets()[2];
    let beyond = position(1.5, &pts);
    assert!(beyond.y < 0.0, "extrapolated point should dip below the anchors");
}

#[test]
fn straight_line_midpoint_and_tangent() {
    let pts = [
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 0.0),
    ];
    assert_eq!(position(0.5, &pts), Vec2::new(50.0, 0.0));
    // 3/4 * (P1 - P0) + 3/2 * (P2 - P1) + 3/4 * (P3 - P2)
    assert_eq!(tangent(0.5, &pts), Vec2::new(75.0, 0.0));
    assert_eq!(tangent_direction(0.5, &pts), Some(Vec2::X));
}

#[test]
fn zero_tangent_has_no_direction() {
    // P0 == P1 makes the derivative vanish at t = 0.
    let pts = [
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(60.0, 40.0),
        Vec2::new(90.0, 10.0),
    ];
    assert_eq!(tangent(0.0, &pts), Vec2::ZERO);
    assert_eq!(tangent_direction(0.0, &pts), None);

    let p = Vec2::new(50.0, 0.0);
    for i in 0..=20 {
        assert_eq!(tangent_direction(i as f32 / 20.0, &[p, p, p, p]), None);
    }
}

#[test]
fn polyline_is_evenly_parameterised() {
    let pts = control_sets()[0];
    let line = sample_polyline(&pts, 100);
    assert_eq!(line.len(), 101);
    for (i, p) in line.iter().enumerate() {
        assert_eq!(*p, position(i as f32 / 100.0, &pts));
    }
}
