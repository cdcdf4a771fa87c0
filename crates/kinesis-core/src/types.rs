//! Fundamental types for the Kinesis gesture engine.
//!
//! Landmark frames mirror the output of an upstream hand/pose landmark
//! detector: every point is a normalized, camera-relative coordinate
//! with `x`/`y` roughly in `[0, 1]` and `z` a relative depth where more
//! negative means closer to the camera. The vertical axis increases
//! downward (image-space convention).

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand observation.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Minimum number of pose landmarks required for upper-body analysis
/// (indices 0..=16 cover face, shoulders, elbows and wrists).
pub const MIN_POSE_LANDMARKS: usize = 17;

/// Hand landmark indices (wrist-rooted ordering).
pub mod hand {
    /// Wrist, the root of the hand landmark tree.
    pub const WRIST: usize = 0;
    /// Middle fingertip, used as the palm direction reference.
    pub const MIDDLE_TIP: usize = 12;
    /// Fingertips: thumb, index, middle, ring, pinky.
    pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];
    /// Base joints paired with [`FINGER_TIPS`] for extension tests.
    pub const FINGER_BASES: [usize; 5] = [2, 5, 9, 13, 17];
}

/// Pose landmark indices (upper body subset).
pub mod pose {
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_ELBOW: usize = 13;
    pub const RIGHT_ELBOW: usize = 14;
    pub const LEFT_WRIST: usize = 15;
    pub const RIGHT_WRIST: usize = 16;
}

/// A single normalized 3D landmark from the vision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Handedness label as reported by the upstream detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// One observed hand: a handedness label plus its landmark sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub handedness: Handedness,
    pub landmarks: Vec<NormalizedLandmark>,
}

impl Hand {
    pub fn new(handedness: Handedness, landmarks: Vec<NormalizedLandmark>) -> Self {
        Self {
            handedness,
            landmarks,
        }
    }

    /// A hand is usable only when the detector delivered the complete
    /// 21-point landmark set; partial hands are treated as absent.
    pub fn is_usable(&self) -> bool {
        self.landmarks.len() == HAND_LANDMARK_COUNT
    }

    pub fn landmark(&self, index: usize) -> Vector3<f32> {
        self.landmarks[index].to_vector()
    }
}

/// Per-frame hand observations: zero, one, or two hands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandFrame {
    pub hands: Vec<Hand>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn usable_hands(&self) -> impl Iterator<Item = &Hand> {
        self.hands.iter().filter(|h| h.is_usable())
    }

    /// Both hands, when two usable hands were observed this frame.
    pub fn usable_pair(&self) -> Option<(&Hand, &Hand)> {
        let mut usable = self.usable_hands();
        let first = usable.next()?;
        let second = usable.next()?;
        Some((first, second))
    }
}

/// Per-frame body pose observation: zero or one pose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoseFrame {
    pub landmarks: Vec<NormalizedLandmark>,
}

impl PoseFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(landmarks: Vec<NormalizedLandmark>) -> Self {
        Self { landmarks }
    }

    /// The pose landmark set, or `None` when the observation is absent
    /// or too short for upper-body analysis.
    pub fn usable(&self) -> Option<&[NormalizedLandmark]> {
        (self.landmarks.len() >= MIN_POSE_LANDMARKS).then_some(self.landmarks.as_slice())
    }
}

/// Closed set of gestures the engine can classify.
///
/// `None` means "no gesture" and is never a valid *active* gesture;
/// selecting it is rejected by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureType {
    None,
    /// Symmetric push-apart with both palms facing the camera.
    Wind,
    /// Both arms raised in a sustained upward motion.
    Lift,
}

impl GestureType {
    /// Gestures a strategy can be bound to, in slot order.
    pub const ACTIVE: [GestureType; 2] = [GestureType::Wind, GestureType::Lift];

    /// Counter-array slot for this gesture; `None` has no slot.
    pub fn slot(self) -> Option<usize> {
        match self {
            GestureType::None => None,
            GestureType::Wind => Some(0),
            GestureType::Lift => Some(1),
        }
    }
}

impl std::fmt::Display for GestureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GestureType::None => "None",
            GestureType::Wind => "Wind",
            GestureType::Lift => "Lift",
        };
        f.write_str(name)
    }
}

/// Final, debounced classification result for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub gesture: GestureType,
    /// Confirmation confidence in `[0, 1]`; non-zero only when detected.
    pub confidence: f32,
    pub detected: bool,
    /// Canonical gesture direction (unit vector) when detected.
    pub direction: Vector3<f32>,
}

impl GestureResult {
    pub fn new(
        gesture: GestureType,
        confidence: f32,
        detected: bool,
        direction: Vector3<f32>,
    ) -> Self {
        Self {
            gesture,
            confidence,
            detected,
            direction,
        }
    }

    /// The canonical "no gesture" result.
    pub fn none() -> Self {
        Self {
            gesture: GestureType::None,
            confidence: 0.0,
            detected: false,
            direction: Vector3::zeros(),
        }
    }
}

impl Default for GestureResult {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmarks(n: usize) -> Vec<NormalizedLandmark> {
        (0..n)
            .map(|i| NormalizedLandmark::new(i as f32 * 0.01, 0.5, 0.0))
            .collect()
    }

    #[test]
    fn test_partial_hand_is_unusable() {
        let complete = Hand::new(Handedness::Left, landmarks(HAND_LANDMARK_COUNT));
        let partial = Hand::new(Handedness::Right, landmarks(HAND_LANDMARK_COUNT - 1));

        assert!(complete.is_usable());
        assert!(!partial.is_usable());

        let frame = HandFrame::new(vec![complete, partial]);
        assert_eq!(frame.usable_hands().count(), 1);
        assert!(frame.usable_pair().is_none());
    }

    #[test]
    fn test_usable_pair() {
        let frame = HandFrame::new(vec![
            Hand::new(Handedness::Left, landmarks(HAND_LANDMARK_COUNT)),
            Hand::new(Handedness::Right, landmarks(HAND_LANDMARK_COUNT)),
        ]);
        assert!(frame.usable_pair().is_some());
    }

    #[test]
    fn test_short_pose_is_absent() {
        assert!(PoseFrame::empty().usable().is_none());
        assert!(PoseFrame::new(landmarks(16)).usable().is_none());
        assert!(PoseFrame::new(landmarks(17)).usable().is_some());
        assert!(PoseFrame::new(landmarks(33)).usable().is_some());
    }

    #[test]
    fn test_gesture_slots() {
        assert_eq!(GestureType::None.slot(), None);
        for (expected, gesture) in GestureType::ACTIVE.iter().enumerate() {
            assert_eq!(gesture.slot(), Some(expected));
        }
    }

    #[test]
    fn test_canonical_none_result() {
        let none = GestureResult::none();
        assert_eq!(none.gesture, GestureType::None);
        assert!(!none.detected);
        assert_eq!(none.confidence, 0.0);
    }

    #[test]
    fn test_result_serde_roundtrip() {
        let result = GestureResult::new(
            GestureType::Wind,
            1.0,
            true,
            Vector3::new(0.0, 0.0, 1.0),
        );
        let json = serde_json::to_string(&result).unwrap();
        let back: GestureResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
