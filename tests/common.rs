// ABOUTME: Shared test utilities for building synthetic landmark frames
// ABOUTME: Provides fixed clocks and skeletons posed to exact joint angles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `form_coach`
//!
//! Poses are built so that a named three-point joint angle is exact: the
//! first point sits straight above the vertex and the last point is the first
//! ray rotated by the requested angle.

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use form_coach::models::{Landmark, LandmarkName, Skeleton};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed session start
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// `t0` plus `ms` milliseconds
pub fn at_ms(ms: i64) -> DateTime<Utc> {
    t0() + Duration::milliseconds(ms)
}

/// Fully visible landmark
pub fn lm(name: LandmarkName, x: f64, y: f64) -> Landmark {
    Landmark::new(name, x, y, 0.99)
}

/// Three landmarks whose angle at `vertex` is exactly `angle` degrees
pub fn joint_at(
    first: LandmarkName,
    vertex: LandmarkName,
    last: LandmarkName,
    origin: (f64, f64),
    angle: f64,
) -> [Landmark; 3] {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (x, y) = origin;
    [
        lm(first, x, y - 0.2),
        lm(vertex, x, y),
        lm(last, x + 0.2 * sin, y - 0.2 * cos),
    ]
}

/// Both legs with the given knee angles
pub fn legs(left_knee: f64, right_knee: f64) -> Vec<Landmark> {
    let mut frame = Vec::with_capacity(6);
    frame.extend(joint_at(
        LandmarkName::LeftHip,
        LandmarkName::LeftKnee,
        LandmarkName::LeftAnkle,
        (0.45, 0.7),
        left_knee,
    ));
    frame.extend(joint_at(
        LandmarkName::RightHip,
        LandmarkName::RightKnee,
        LandmarkName::RightAnkle,
        (0.55, 0.7),
        right_knee,
    ));
    frame
}

/// Both arms with the given elbow angle
pub fn arms(elbow: f64) -> Vec<Landmark> {
    let mut frame = Vec::with_capacity(6);
    frame.extend(joint_at(
        LandmarkName::LeftShoulder,
        LandmarkName::LeftElbow,
        LandmarkName::LeftWrist,
        (0.4, 0.5),
        elbow,
    ));
    frame.extend(joint_at(
        LandmarkName::RightShoulder,
        LandmarkName::RightElbow,
        LandmarkName::RightWrist,
        (0.6, 0.5),
        elbow,
    ));
    frame
}

/// Both hips (shoulder-hip-knee) with the given hip angle
pub fn hips(hip: f64) -> Vec<Landmark> {
    let mut frame = Vec::with_capacity(6);
    frame.extend(joint_at(
        LandmarkName::LeftShoulder,
        LandmarkName::LeftHip,
        LandmarkName::LeftKnee,
        (0.45, 0.5),
        hip,
    ));
    frame.extend(joint_at(
        LandmarkName::RightShoulder,
        LandmarkName::RightHip,
        LandmarkName::RightKnee,
        (0.55, 0.5),
        hip,
    ));
    frame
}

/// Skeleton with both knees at `angle`
pub fn squat_pose(angle: f64) -> Skeleton {
    Skeleton::from_landmarks(&legs(angle, angle))
}

/// Skeleton with the given left and right knee angles
pub fn lunge_pose(left_knee: f64, right_knee: f64) -> Skeleton {
    Skeleton::from_landmarks(&legs(left_knee, right_knee))
}

/// Skeleton with both elbows at `angle`
pub fn push_up_pose(angle: f64) -> Skeleton {
    Skeleton::from_landmarks(&arms(angle))
}

/// Skeleton with both hips at `angle`
pub fn plank_pose(angle: f64) -> Skeleton {
    Skeleton::from_landmarks(&hips(angle))
}

/// Copy of `landmarks` with `name` dropped below the visibility floor
pub fn occlude(landmarks: &[Landmark], name: LandmarkName) -> Vec<Landmark> {
    landmarks
        .iter()
        .map(|l| {
            if l.name == name {
                Landmark { visibility: 0.2, ..*l }
            } else {
                *l
            }
        })
        .collect()
}
