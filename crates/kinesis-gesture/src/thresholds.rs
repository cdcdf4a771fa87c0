//! Per-gesture threshold configuration.
//!
//! One profile exists per gesture type; the default values are the
//! tuned production constants. Profiles are plain serde values so they
//! can be loaded from configuration or adjusted at runtime via
//! [`crate::GestureRecognizer::update_thresholds`].

use kinesis_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Numeric constants consumed by the gesture strategies and the
/// recognizer's hysteresis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdProfile {
    // Wind gesture.
    /// Maximum z-component of a palm direction for it to count as
    /// facing the camera (landmark z grows away from the camera).
    pub forward_threshold: f32,
    /// Minimum 2D angle in degrees between the two hand directions.
    pub min_hands_angle: f32,
    /// Maximum 2D angle in degrees between the two hand directions.
    pub max_hands_angle: f32,
    /// Maximum wrist-to-wrist distance in normalized units.
    pub max_wrist_distance: f32,
    /// A finger counts as extended when its tip-to-wrist distance
    /// exceeds base-to-wrist distance times this ratio.
    pub finger_ratio: f32,
    /// Minimum extended fingers required per hand.
    pub min_fingers: usize,

    // Lift gesture.
    /// Minimum per-frame upward wrist delta to count as rising motion.
    pub rising_threshold: f32,
    /// Frames a rising observation stays "active" without further
    /// upward motion, smoothing over single-frame dropouts.
    pub rising_memory: u32,

    // Recognizer hysteresis.
    /// Consecutive qualifying frames required before confirmation.
    pub hold_frames: u32,
    /// Consecutive non-qualifying frames tolerated before the
    /// confirmation progress is discarded.
    pub max_lost_frames: u32,
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self {
            forward_threshold: 0.0,
            min_hands_angle: 100.0,
            max_hands_angle: 180.0,
            max_wrist_distance: 0.1,
            finger_ratio: 1.2,
            min_fingers: 5,
            rising_threshold: 0.01,
            rising_memory: 10,
            hold_frames: 5,
            max_lost_frames: 3,
        }
    }
}

impl ThresholdProfile {
    /// Profile tuned for the Wind gesture.
    pub fn for_wind() -> Self {
        Self {
            forward_threshold: 0.0,
            min_hands_angle: 100.0,
            max_hands_angle: 180.0,
            max_wrist_distance: 0.1,
            finger_ratio: 1.2,
            min_fingers: 5,
            hold_frames: 5,
            max_lost_frames: 3,
            ..Self::default()
        }
    }

    /// Profile tuned for the Lift gesture.
    pub fn for_lift() -> Self {
        Self {
            rising_threshold: 0.01,
            rising_memory: 10,
            hold_frames: 5,
            max_lost_frames: 3,
            ..Self::default()
        }
    }

    /// Checks structural sanity of the profile.
    pub fn validate(&self) -> Result<()> {
        if self.hold_frames == 0 {
            return Err(Error::InvalidThresholds(
                "hold_frames must be at least 1".into(),
            ));
        }
        if self.min_hands_angle > self.max_hands_angle {
            return Err(Error::InvalidThresholds(format!(
                "hand angle band is inverted: {} > {}",
                self.min_hands_angle, self.max_hands_angle
            )));
        }
        if self.max_wrist_distance <= 0.0 {
            return Err(Error::InvalidThresholds(
                "max_wrist_distance must be positive".into(),
            ));
        }
        if self.finger_ratio <= 0.0 {
            return Err(Error::InvalidThresholds(
                "finger_ratio must be positive".into(),
            ));
        }
        if self.min_fingers > 5 {
            return Err(Error::InvalidThresholds(format!(
                "min_fingers cannot exceed 5, got {}",
                self.min_fingers
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ThresholdProfile::default();
        assert_eq!(profile.min_hands_angle, 100.0);
        assert_eq!(profile.max_hands_angle, 180.0);
        assert_eq!(profile.max_wrist_distance, 0.1);
        assert_eq!(profile.hold_frames, 5);
        assert_eq!(profile.max_lost_frames, 3);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_per_gesture_profiles_validate() {
        assert!(ThresholdProfile::for_wind().validate().is_ok());
        assert!(ThresholdProfile::for_lift().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_hold_frames() {
        let profile = ThresholdProfile {
            hold_frames: 0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_angle_band() {
        let profile = ThresholdProfile {
            min_hands_angle: 170.0,
            max_hands_angle: 100.0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let profile: ThresholdProfile =
            serde_json::from_str(r#"{"max_wrist_distance": 0.2}"#).unwrap();
        assert_eq!(profile.max_wrist_distance, 0.2);
        assert_eq!(profile.hold_frames, 5);
    }
}
