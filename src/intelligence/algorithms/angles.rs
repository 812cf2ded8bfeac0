// ABOUTME: Planar joint-angle geometry shared by the phase detector and the form analyzer
// ABOUTME: Three-point vertex angles, named joint lookups with a visibility floor, and line helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Angle Engine
//!
//! Pure geometry over normalized image coordinates. Both the repetition
//! counter and the form analyzer read joint angles through this module, so
//! they never disagree about what "the knee angle" means.
//!
//! Formula: `θ = |atan2(c - b) - atan2(a - b)|`, folded to `360° - θ` when the
//! difference wraps past 180°.

use form_coach_core::models::{Joint, JointKind, LandmarkName, Point2, Side, Skeleton};

/// Angle at vertex `b` formed by rays `b→a` and `b→c`, in degrees within `[0, 180]`
#[must_use]
pub fn angle_at(a: Point2, b: Point2, c: Point2) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Angle at `vertex` between `first` and `last`, or `None` when any of the
/// three landmarks is absent or below the visibility floor
#[must_use]
pub fn joint_angle(
    skeleton: &Skeleton,
    first: LandmarkName,
    vertex: LandmarkName,
    last: LandmarkName,
) -> Option<f64> {
    let a = skeleton.visible(first)?;
    let b = skeleton.visible(vertex)?;
    let c = skeleton.visible(last)?;

    Some(angle_at(a.point(), b.point(), c.point()))
}

/// Angle of a configured joint (e.g. `left_knee`)
#[must_use]
pub fn angle_of(skeleton: &Skeleton, joint: Joint) -> Option<f64> {
    let (first, vertex, last) = joint.landmarks();
    joint_angle(skeleton, first, vertex, last)
}

/// Hip-knee-ankle angle
#[must_use]
pub fn knee_angle(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_of(skeleton, Joint::new(side, JointKind::Knee))
}

/// Shoulder-elbow-wrist angle
#[must_use]
pub fn elbow_angle(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_of(skeleton, Joint::new(side, JointKind::Elbow))
}

/// Shoulder-hip-knee angle
#[must_use]
pub fn hip_angle(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_of(skeleton, Joint::new(side, JointKind::Hip))
}

/// Hip-shoulder-elbow angle
#[must_use]
pub fn shoulder_angle(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_of(skeleton, Joint::new(side, JointKind::Shoulder))
}

/// Euclidean distance between two points
#[must_use]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Slope of the line through two points; `f64::INFINITY` for vertical lines
#[must_use]
pub fn slope(a: Point2, b: Point2) -> f64 {
    if (b.x - a.x).abs() < f64::EPSILON {
        return f64::INFINITY;
    }
    (b.y - a.y) / (b.x - a.x)
}

/// Shortest distance from `point` to the segment `start`-`end`
///
/// The projection is clamped to the segment; a zero-length segment collapses
/// to the distance from its start point.
#[must_use]
pub fn point_to_segment_distance(point: Point2, start: Point2, end: Point2) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_squared = dx.mul_add(dx, dy * dy);

    if length_squared <= f64::EPSILON {
        return distance(point, start);
    }

    let t = (point.x - start.x)
        .mul_add(dx, (point.y - start.y) * dy)
        / length_squared;
    let t = t.clamp(0.0, 1.0);
    let projection = Point2::new(t.mul_add(dx, start.x), t.mul_add(dy, start.y));

    distance(point, projection)
}

/// Whether `point` lies within `threshold` of the segment `start`-`end` (inclusive)
#[must_use]
pub fn is_point_near_line(point: Point2, start: Point2, end: Point2, threshold: f64) -> bool {
    point_to_segment_distance(point, start, end) <= threshold
}

/// Vertical position of the line through `a` and `b` at horizontal position `x`
///
/// Falls back to the midpoint height when the line is vertical.
#[must_use]
pub fn line_y_at(a: Point2, b: Point2, x: f64) -> f64 {
    let dx = b.x - a.x;
    if dx.abs() < f64::EPSILON {
        return (a.y + b.y) / 2.0;
    }
    let t = (x - a.x) / dx;
    t.mul_add(b.y - a.y, a.y)
}
