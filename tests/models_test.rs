// ABOUTME: Integration tests for core vocabularies and data records
// ABOUTME: Covers landmark, joint, and exercise name parsing plus skeleton and profile invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use form_coach::constants::landmarks::LANDMARK_COUNT;
use form_coach::errors::ErrorCode;
use form_coach::models::{
    AngleRange, Difficulty, ExercisePhase, ExerciseProfile, ExerciseType, Joint, JointKind,
    KeyAngles, Landmark, LandmarkName, RepetitionState, Side, Skeleton,
};
use serde_json::json;

// === Landmarks ===

#[test]
fn test_landmark_vocabulary_is_indexed() {
    assert_eq!(LandmarkName::ALL.len(), LANDMARK_COUNT);
    for (i, name) in LandmarkName::ALL.iter().enumerate() {
        assert_eq!(name.index(), i);
        assert_eq!(name.as_str().parse::<LandmarkName>().unwrap(), *name);
    }
    assert_eq!(LandmarkName::Nose.index(), 0);
    assert_eq!(LandmarkName::RightFootIndex.index(), 32);
}

#[test]
fn test_unknown_landmark_name() {
    let err = "left_tail".parse::<LandmarkName>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_landmark_json_shape() {
    let landmark: Landmark = serde_json::from_value(json!({
        "name": "left_knee",
        "x": 0.4,
        "y": 0.7,
        "visibility": 0.8
    }))
    .unwrap();
    assert_eq!(landmark.name, LandmarkName::LeftKnee);
    assert!(landmark.z.is_none());
    assert!(landmark.is_visible());

    let value = serde_json::to_value(landmark).unwrap();
    assert!(value.get("z").is_none());
}

#[test]
fn test_skeleton_later_duplicates_win() {
    let skeleton = Skeleton::from_landmarks(&[
        Landmark::new(LandmarkName::LeftHip, 0.1, 0.1, 0.9),
        Landmark::new(LandmarkName::LeftHip, 0.2, 0.2, 0.9),
    ]);
    assert_eq!(skeleton.len(), 1);
    assert!((skeleton.get(LandmarkName::LeftHip).unwrap().x - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_skeleton_visible_filters_confidence() {
    let skeleton = Skeleton::from_landmarks(&[Landmark::new(LandmarkName::Nose, 0.5, 0.5, 0.3)]);
    assert!(skeleton.get(LandmarkName::Nose).is_some());
    assert!(skeleton.visible(LandmarkName::Nose).is_none());
    assert!(!skeleton.is_empty());
    assert!(Skeleton::default().is_empty());
}

#[test]
fn test_skeleton_serializes_as_landmark_list() {
    let skeleton = Skeleton::from_landmarks(&[
        Landmark::new(LandmarkName::RightWrist, 0.7, 0.4, 0.9),
        Landmark::new(LandmarkName::Nose, 0.5, 0.1, 0.9),
    ]);
    let value = serde_json::to_value(&skeleton).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    // Index order, not insertion order
    assert_eq!(names, vec!["nose", "right_wrist"]);

    let back: Skeleton = serde_json::from_value(value).unwrap();
    assert_eq!(back, skeleton);
}

// === Joints ===

#[test]
fn test_joint_names() {
    let joint: Joint = "right_elbow".parse().unwrap();
    assert_eq!(joint, Joint::new(Side::Right, JointKind::Elbow));
    assert_eq!(joint.to_string(), "right_elbow");

    for bad in ["elbow", "middle_knee", "left_wrist", "left-knee"] {
        let err = bad.parse::<Joint>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "{bad}");
    }
}

#[test]
fn test_joint_landmark_triples() {
    use LandmarkName as L;
    assert_eq!(
        Joint::new(Side::Left, JointKind::Knee).landmarks(),
        (L::LeftHip, L::LeftKnee, L::LeftAnkle)
    );
    assert_eq!(
        Joint::new(Side::Right, JointKind::Elbow).landmarks(),
        (L::RightShoulder, L::RightElbow, L::RightWrist)
    );
    assert_eq!(
        Joint::new(Side::Left, JointKind::Hip).landmarks(),
        (L::LeftShoulder, L::LeftHip, L::LeftKnee)
    );
    assert_eq!(
        Joint::new(Side::Right, JointKind::Shoulder).landmarks(),
        (L::RightHip, L::RightShoulder, L::RightElbow)
    );
}

// === Exercises ===

#[test]
fn test_exercise_type_parsing_is_lenient() {
    assert_eq!("push-ups".parse::<ExerciseType>().unwrap(), ExerciseType::PushUps);
    assert_eq!("Jumping_Jacks".parse::<ExerciseType>().unwrap(), ExerciseType::JumpingJacks);
    let err = "yoga".parse::<ExerciseType>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("push_ups"));
}

#[test]
fn test_angle_range_is_open_interval() {
    let range = AngleRange::new(70.0, 170.0, 90.0);
    assert!(!range.contains(70.0));
    assert!(range.contains(70.5));
    assert!(!range.contains(170.0));
    assert!((range.deviation(80.0) - 10.0).abs() < f64::EPSILON);
    assert!(range.deviation(90.0).abs() < f64::EPSILON);
}

fn sample_profile() -> ExerciseProfile {
    let mut key_angles = KeyAngles::new();
    key_angles.insert(
        Joint::new(Side::Left, JointKind::Knee),
        AngleRange::new(70.0, 170.0, 90.0),
    );
    ExerciseProfile {
        id: "squats".to_owned(),
        exercise_type: ExerciseType::Squats,
        name: "Squats".to_owned(),
        description: String::new(),
        difficulty: Difficulty::Beginner,
        target_muscles: Vec::new(),
        instructions: Vec::new(),
        key_angles,
        phases: vec![ExercisePhase::Starting, ExercisePhase::Bottom],
    }
}

#[test]
fn test_profile_validation() {
    assert!(sample_profile().validate().is_ok());

    let mut no_phases = sample_profile();
    no_phases.phases.clear();
    assert_eq!(no_phases.validate().unwrap_err().code, ErrorCode::InvalidInput);
    assert_eq!(no_phases.anchor_phase(), ExercisePhase::Starting);

    let mut not_finite = sample_profile();
    not_finite
        .key_angles
        .insert(Joint::new(Side::Right, JointKind::Knee), AngleRange::new(70.0, f64::NAN, 90.0));
    assert!(not_finite.validate().is_err());

    // The range is open, so an ideal on a bound could never be in range
    let mut ideal_on_edge = sample_profile();
    ideal_on_edge.key_angles.insert(
        Joint::new(Side::Right, JointKind::Knee),
        AngleRange::new(0.0, 180.0, 180.0),
    );
    assert!(!AngleRange::new(0.0, 180.0, 180.0).contains(180.0));
    assert_eq!(
        ideal_on_edge.validate().unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let mut ideal_inside = sample_profile();
    ideal_inside.key_angles.insert(
        Joint::new(Side::Right, JointKind::Knee),
        AngleRange::new(0.0, 190.0, 180.0),
    );
    assert!(ideal_inside.validate().is_ok());
}

// === Key angles ===

#[test]
fn test_key_angles_keep_document_order() {
    let angles: KeyAngles = serde_json::from_value(json!({
        "right_knee": {"min": 70.0, "max": 170.0, "ideal": 90.0},
        "left_knee": {"min": 70.0, "max": 170.0, "ideal": 90.0},
        "left_hip": {"min": 60.0, "max": 180.0, "ideal": 90.0}
    }))
    .unwrap();

    let joints: Vec<String> = angles.joints().map(|j| j.to_string()).collect();
    assert_eq!(joints, vec!["right_knee", "left_knee", "left_hip"]);

    let text = serde_json::to_string(&angles).unwrap();
    assert!(text.find("right_knee").unwrap() < text.find("left_knee").unwrap());
    assert!(text.find("left_knee").unwrap() < text.find("left_hip").unwrap());
}

#[test]
fn test_key_angles_insert_replaces_in_place() {
    let knee = Joint::new(Side::Left, JointKind::Knee);
    let hip = Joint::new(Side::Left, JointKind::Hip);
    let mut angles = KeyAngles::new();
    angles.insert(knee, AngleRange::new(70.0, 170.0, 90.0));
    angles.insert(hip, AngleRange::new(60.0, 180.0, 90.0));
    angles.insert(knee, AngleRange::new(80.0, 160.0, 100.0));

    assert_eq!(angles.len(), 2);
    assert_eq!(angles.joints().collect::<Vec<_>>(), vec![knee, hip]);
    assert_eq!(angles.get(knee), Some(&AngleRange::new(80.0, 160.0, 100.0)));
    assert_eq!(angles.get(Joint::new(Side::Right, JointKind::Hip)), None);
}

#[test]
fn test_key_angles_reject_duplicate_joint() {
    let json = r#"{
        "left_knee": {"min": 70.0, "max": 170.0, "ideal": 90.0},
        "left_knee": {"min": 80.0, "max": 160.0, "ideal": 100.0}
    }"#;
    let err = serde_json::from_str::<KeyAngles>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate joint 'left_knee'"));
}

#[test]
fn test_repetition_state_initial() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let state = RepetitionState::initial(ExercisePhase::Top, now);
    assert_eq!(state.current_phase, ExercisePhase::Top);
    assert_eq!(state.previous_phase, None);
    assert_eq!(state.rep_count, 0);
    assert_eq!(state.set_count, 1);
    assert!(state.is_valid_rep);
    assert!(!state.rep_completed);
    assert_eq!(state.valid_rep_count, 0);
    assert_eq!(state.phase_start_time, now);
}
