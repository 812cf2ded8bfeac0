// ABOUTME: Integration tests for the angle engine and geometry helpers
// ABOUTME: Covers three-point angles, reflex folding, visibility floor, and line distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{joint_at, legs, lm, occlude};
use form_coach::intelligence::algorithms::angles::{
    angle_at, angle_of, distance, elbow_angle, hip_angle, is_point_near_line, joint_angle,
    knee_angle, line_y_at, point_to_segment_distance, shoulder_angle, slope,
};
use form_coach::models::{Joint, JointKind, Landmark, LandmarkName, Point2, Side, Skeleton};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

// === Three-point angle ===

#[test]
fn test_right_angle() {
    let angle = angle_at(
        Point2::new(0.0, 1.0),
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
    );
    assert_close(angle, 90.0, EPS);
}

#[test]
fn test_angle_is_symmetric_in_outer_points() {
    let a = Point2::new(0.3, 0.1);
    let b = Point2::new(0.5, 0.5);
    let c = Point2::new(0.9, 0.4);
    assert_close(angle_at(a, b, c), angle_at(c, b, a), EPS);
}

#[test]
fn test_angles_stay_within_half_turn() {
    let b = Point2::new(0.0, 0.0);
    for i in 0..36 {
        for j in 0..36 {
            if i == j {
                continue;
            }
            let (sa, ca) = f64::from(i * 10).to_radians().sin_cos();
            let (sc, cc) = f64::from(j * 10).to_radians().sin_cos();
            let angle = angle_at(Point2::new(ca, sa), b, Point2::new(cc, sc));
            assert!((0.0..=180.0).contains(&angle), "{i} {j} -> {angle}");
        }
    }
}

#[test]
fn test_reflex_difference_is_folded() {
    // Polar angles of -170 and +170 differ by 340 raw; the real angle is 20
    let (s1, c1) = (-170.0_f64).to_radians().sin_cos();
    let (s2, c2) = 170.0_f64.to_radians().sin_cos();
    let angle = angle_at(Point2::new(c1, s1), Point2::new(0.0, 0.0), Point2::new(c2, s2));
    assert_close(angle, 20.0, 1e-6);
}

#[test]
fn test_synthetic_joint_matches_requested_angle() {
    for requested in [30.0, 75.0, 90.0, 135.0, 179.0] {
        let [a, b, c] = joint_at(
            LandmarkName::LeftHip,
            LandmarkName::LeftKnee,
            LandmarkName::LeftAnkle,
            (0.5, 0.5),
            requested,
        );
        assert_close(angle_at(a.point(), b.point(), c.point()), requested, 1e-6);
    }
}

// === Named joints ===

#[test]
fn test_knee_angles_per_side() {
    let skeleton = Skeleton::from_landmarks(&legs(100.0, 150.0));
    assert_close(knee_angle(&skeleton, Side::Left).unwrap(), 100.0, 1e-6);
    assert_close(knee_angle(&skeleton, Side::Right).unwrap(), 150.0, 1e-6);
}

#[test]
fn test_joint_triples() {
    let landmarks = [
        lm(LandmarkName::RightShoulder, 0.5, 0.3),
        lm(LandmarkName::RightElbow, 0.5, 0.5),
        lm(LandmarkName::RightWrist, 0.7, 0.5),
        lm(LandmarkName::RightHip, 0.5, 0.1),
        lm(LandmarkName::RightKnee, 0.5, 0.7),
    ];
    let skeleton = Skeleton::from_landmarks(&landmarks);

    // shoulder-elbow-wrist
    assert_close(elbow_angle(&skeleton, Side::Right).unwrap(), 90.0, 1e-6);
    // hip-shoulder-elbow: hip above shoulder, elbow below
    assert_close(shoulder_angle(&skeleton, Side::Right).unwrap(), 180.0, 1e-6);
    // shoulder-hip-knee: shoulder and knee both below the hip
    assert_close(hip_angle(&skeleton, Side::Right).unwrap(), 0.0, 1e-6);
    // nothing on the left
    assert!(elbow_angle(&skeleton, Side::Left).is_none());
}

#[test]
fn test_angle_of_uses_joint_triple() {
    let skeleton = Skeleton::from_landmarks(&legs(120.0, 120.0));
    let joint = Joint::new(Side::Left, JointKind::Knee);
    assert_eq!(angle_of(&skeleton, joint), knee_angle(&skeleton, Side::Left));
}

// === Visibility floor ===

#[test]
fn test_low_visibility_landmark_is_missing() {
    let frame = occlude(&legs(120.0, 120.0), LandmarkName::LeftAnkle);
    let skeleton = Skeleton::from_landmarks(&frame);
    assert!(knee_angle(&skeleton, Side::Left).is_none());
    assert!(knee_angle(&skeleton, Side::Right).is_some());
}

#[test]
fn test_visibility_floor_is_inclusive() {
    let frame = [
        Landmark::new(LandmarkName::LeftHip, 0.5, 0.3, 0.5),
        Landmark::new(LandmarkName::LeftKnee, 0.5, 0.5, 0.5),
        Landmark::new(LandmarkName::LeftAnkle, 0.5, 0.7, 0.5),
    ];
    let skeleton = Skeleton::from_landmarks(&frame);
    assert!(joint_angle(
        &skeleton,
        LandmarkName::LeftHip,
        LandmarkName::LeftKnee,
        LandmarkName::LeftAnkle
    )
    .is_some());

    let below = [
        Landmark::new(LandmarkName::LeftHip, 0.5, 0.3, 0.49),
        frame[1],
        frame[2],
    ];
    assert!(knee_angle(&Skeleton::from_landmarks(&below), Side::Left).is_none());
}

#[test]
fn test_absent_landmark_is_missing() {
    let skeleton = Skeleton::from_landmarks(&[
        lm(LandmarkName::LeftHip, 0.5, 0.3),
        lm(LandmarkName::LeftKnee, 0.5, 0.5),
    ]);
    assert!(knee_angle(&skeleton, Side::Left).is_none());
}

// === Line helpers ===

#[test]
fn test_distance_and_slope() {
    assert_close(
        distance(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)),
        5.0,
        EPS,
    );
    assert_close(slope(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)), 0.5, EPS);
    assert!(slope(Point2::new(0.3, 0.0), Point2::new(0.3, 1.0)).is_infinite());
}

#[test]
fn test_point_to_segment_distance_clamps_projection() {
    let start = Point2::new(0.0, 0.0);
    let end = Point2::new(1.0, 0.0);

    // projects inside the segment
    assert_close(
        point_to_segment_distance(Point2::new(0.5, 0.2), start, end),
        0.2,
        EPS,
    );
    // projects past the end: distance to the end point
    assert_close(
        point_to_segment_distance(Point2::new(2.0, 0.0), start, end),
        1.0,
        EPS,
    );
    // degenerate segment
    assert_close(
        point_to_segment_distance(Point2::new(0.0, 0.5), start, start),
        0.5,
        EPS,
    );
}

#[test]
fn test_is_point_near_line_inclusive() {
    let start = Point2::new(0.0, 0.0);
    let end = Point2::new(1.0, 0.0);
    assert!(is_point_near_line(Point2::new(0.5, 0.25), start, end, 0.25));
    assert!(!is_point_near_line(Point2::new(0.5, 0.3), start, end, 0.25));
}

#[test]
fn test_line_y_at() {
    let a = Point2::new(0.2, 0.4);
    let b = Point2::new(0.8, 0.4);
    assert_close(line_y_at(a, b, 0.5), 0.4, EPS);

    let sloped = Point2::new(1.0, 1.0);
    assert_close(line_y_at(Point2::new(0.0, 0.0), sloped, 0.25), 0.25, EPS);
}
