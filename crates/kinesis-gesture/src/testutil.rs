//! Synthetic landmark fixtures shared across the strategy and
//! recognizer tests.

use kinesis_core::{
    hand, pose, Hand, HandFrame, Handedness, NormalizedLandmark, PoseFrame,
    HAND_LANDMARK_COUNT,
};
use nalgebra::Vector3;

/// Builds a fully-open hand whose palm direction projects onto the
/// image plane at `angle_deg` (measured from +x) and points toward the
/// camera. All five fingers pass the extension test with the default
/// ratio: tips sit at twice the base-joint distance from the wrist.
pub fn open_hand(handedness: Handedness, wrist_x: f32, wrist_y: f32, angle_deg: f32) -> Hand {
    let wrist = Vector3::new(wrist_x, wrist_y, 0.0);
    let dir = Vector3::new(
        angle_deg.to_radians().cos(),
        angle_deg.to_radians().sin(),
        -1.0,
    );

    let mut landmarks = Vec::with_capacity(HAND_LANDMARK_COUNT);
    for _ in 0..HAND_LANDMARK_COUNT {
        let filler = wrist + dir * 0.03;
        landmarks.push(NormalizedLandmark::new(filler.x, filler.y, filler.z));
    }
    landmarks[hand::WRIST] = NormalizedLandmark::new(wrist.x, wrist.y, wrist.z);
    for (&tip, &base) in hand::FINGER_TIPS.iter().zip(hand::FINGER_BASES.iter()) {
        let base_point = wrist + dir * 0.06;
        let tip_point = wrist + dir * 0.12;
        landmarks[base] = NormalizedLandmark::new(base_point.x, base_point.y, base_point.z);
        landmarks[tip] = NormalizedLandmark::new(tip_point.x, tip_point.y, tip_point.z);
    }

    Hand::new(handedness, landmarks)
}

/// Two open hands facing the camera, palm directions `angle_deg` apart
/// in the image plane, wrists exactly `wrist_distance` apart.
pub fn wind_hand_frame(angle_deg: f32, wrist_distance: f32) -> HandFrame {
    let half = angle_deg / 2.0;
    HandFrame::new(vec![
        open_hand(Handedness::Left, 0.5, 0.5, 90.0 - half),
        open_hand(Handedness::Right, 0.5 + wrist_distance, 0.5, 90.0 + half),
    ])
}

/// A 33-point pose with both wrists at the given heights.
pub fn pose_frame(left_wrist_y: f32, right_wrist_y: f32) -> PoseFrame {
    let mut landmarks: Vec<NormalizedLandmark> = (0..33)
        .map(|_| NormalizedLandmark::new(0.5, 0.3, 0.0))
        .collect();
    landmarks[pose::LEFT_WRIST] = NormalizedLandmark::new(0.4, left_wrist_y, 0.0);
    landmarks[pose::RIGHT_WRIST] = NormalizedLandmark::new(0.6, right_wrist_y, 0.0);
    PoseFrame::new(landmarks)
}
