//! Wind gesture: a symmetric push-apart with both palms toward the
//! camera.
//!
//! Qualifying frame, all four conditions required:
//!
//! 1. Both palm directions (wrist to middle fingertip) point at the
//!    camera (`z < forward_threshold`).
//! 2. The 2D angle between the two palm directions lies in the
//!    opposing band `[min_hands_angle, max_hands_angle]` (inclusive).
//! 3. The wrists are close together (`distance < max_wrist_distance`,
//!    strict: a pair exactly at the boundary does not qualify).
//! 4. At least `min_fingers` fingers are extended on each hand, where
//!    extended means `tip_to_wrist > base_to_wrist * finger_ratio`.

use kinesis_core::{geometry, hand, Hand, HandFrame, PoseFrame};
use nalgebra::Vector3;

use crate::strategy::RawDetection;
use crate::thresholds::ThresholdProfile;

/// Canonical direction reported on detection: straight ahead, away
/// from the camera in consumer space.
const FORWARD: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

#[derive(Debug, Clone)]
pub struct WindStrategy {
    forward_threshold: f32,
    min_hands_angle: f32,
    max_hands_angle: f32,
    max_wrist_distance: f32,
    finger_ratio: f32,
    min_fingers: usize,
}

impl WindStrategy {
    pub fn new(profile: &ThresholdProfile) -> Self {
        let mut strategy = Self {
            forward_threshold: 0.0,
            min_hands_angle: 0.0,
            max_hands_angle: 0.0,
            max_wrist_distance: 0.0,
            finger_ratio: 0.0,
            min_fingers: 0,
        };
        strategy.initialize(profile);
        strategy
    }

    /// Stores thresholds. The Wind test keeps no cross-frame history,
    /// so re-initialization is trivially idempotent.
    pub fn initialize(&mut self, profile: &ThresholdProfile) {
        self.forward_threshold = profile.forward_threshold;
        self.min_hands_angle = profile.min_hands_angle;
        self.max_hands_angle = profile.max_hands_angle;
        self.max_wrist_distance = profile.max_wrist_distance;
        self.finger_ratio = profile.finger_ratio;
        self.min_fingers = profile.min_fingers;
    }

    pub fn recognize(&mut self, hands: &HandFrame, _pose: &PoseFrame) -> RawDetection {
        let Some((first, second)) = hands.usable_pair() else {
            return RawDetection::miss();
        };

        let wrist1 = first.landmark(hand::WRIST);
        let wrist2 = second.landmark(hand::WRIST);
        let dir1 = geometry::direction(&wrist1, &first.landmark(hand::MIDDLE_TIP));
        let dir2 = geometry::direction(&wrist2, &second.landmark(hand::MIDDLE_TIP));

        let both_forward =
            dir1.z < self.forward_threshold && dir2.z < self.forward_threshold;

        let angle = geometry::angle_between_2d(&dir1, &dir2);
        let opposing = angle >= self.min_hands_angle && angle <= self.max_hands_angle;

        let wrists_close = geometry::distance(&wrist1, &wrist2) < self.max_wrist_distance;

        let fingers_spread =
            self.fingers_extended(first) && self.fingers_extended(second);

        if both_forward && opposing && wrists_close && fingers_spread {
            RawDetection::hit(FORWARD)
        } else {
            RawDetection::miss()
        }
    }

    /// Counts fingers whose tip sits further from the wrist than the
    /// base joint scaled by `finger_ratio`.
    fn fingers_extended(&self, hand_obs: &Hand) -> bool {
        let wrist = hand_obs.landmark(hand::WRIST);
        let extended = hand::FINGER_TIPS
            .iter()
            .zip(hand::FINGER_BASES.iter())
            .filter(|(&tip, &base)| {
                let tip_to_wrist = geometry::distance(&hand_obs.landmark(tip), &wrist);
                let base_to_wrist = geometry::distance(&hand_obs.landmark(base), &wrist);
                tip_to_wrist > base_to_wrist * self.finger_ratio
            })
            .count();

        extended >= self.min_fingers
    }
}
