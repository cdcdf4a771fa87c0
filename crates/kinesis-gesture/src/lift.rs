//! Lift gesture: both arms raised in a sustained upward motion.
//!
//! The test is differential: each frame's wrist heights are compared
//! against the previous frame's. Landmark y grows downward, so an
//! upward move is `previous.y - current.y > 0`. A rising observation
//! stays "active" for `rising_memory` further frames, smoothing over
//! single-frame motion dropouts.

use kinesis_core::{pose, HandFrame, NormalizedLandmark, PoseFrame};
use nalgebra::Vector3;

use crate::strategy::RawDetection;
use crate::thresholds::ThresholdProfile;

/// Canonical direction reported on detection.
const UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

#[derive(Debug, Clone)]
pub struct LiftStrategy {
    rising_threshold: f32,
    rising_memory: u32,

    // Cross-frame motion history.
    previous_pose: Option<Vec<NormalizedLandmark>>,
    rising_frames_remaining: u32,
}

impl LiftStrategy {
    pub fn new(profile: &ThresholdProfile) -> Self {
        Self {
            rising_threshold: profile.rising_threshold,
            rising_memory: profile.rising_memory,
            previous_pose: None,
            rising_frames_remaining: 0,
        }
    }

    /// Stores thresholds and clears the motion history, so a
    /// re-initialized strategy never compares against stale frames.
    pub fn initialize(&mut self, profile: &ThresholdProfile) {
        self.rising_threshold = profile.rising_threshold;
        self.rising_memory = profile.rising_memory;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.previous_pose = None;
        self.rising_frames_remaining = 0;
    }

    pub fn recognize(&mut self, _hands: &HandFrame, pose_frame: &PoseFrame) -> RawDetection {
        let Some(landmarks) = pose_frame.usable() else {
            // A gap in pose tracking invalidates the delta baseline.
            self.reset();
            return RawDetection::miss();
        };

        let left_wrist = landmarks[pose::LEFT_WRIST];
        let right_wrist = landmarks[pose::RIGHT_WRIST];

        let rising = match &self.previous_pose {
            Some(previous) => {
                let left_delta = previous[pose::LEFT_WRIST].y - left_wrist.y;
                let right_delta = previous[pose::RIGHT_WRIST].y - right_wrist.y;
                left_delta > self.rising_threshold && right_delta > self.rising_threshold
            }
            None => false,
        };

        // Cache unconditionally: the next frame's delta is always taken
        // against this one, rising or not.
        self.previous_pose = Some(landmarks.to_vec());

        if rising {
            self.rising_frames_remaining = self.rising_memory;
        } else {
            self.rising_frames_remaining = self.rising_frames_remaining.saturating_sub(1);
        }

        if self.rising_frames_remaining > 0 {
            RawDetection::hit(UP)
        } else {
            RawDetection::miss()
        }
    }
}
