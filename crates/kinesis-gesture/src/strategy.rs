//! Per-gesture classification strategies behind a closed sum type.
//!
//! The set of gestures is fixed at compile time, so dispatch is a
//! `match` over [`Strategy`] variants rather than a trait object; an
//! unknown gesture type cannot exist past the type system.

use kinesis_core::{Error, GestureType, HandFrame, PoseFrame, Result};
use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::lift::LiftStrategy;
use crate::thresholds::ThresholdProfile;
use crate::wind::WindStrategy;

/// Raw, undebounced per-frame classification from a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub detected: bool,
    /// Canonical gesture direction; zero when not detected.
    pub direction: Vector3<f32>,
}

impl RawDetection {
    pub fn hit(direction: Vector3<f32>) -> Self {
        Self {
            detected: true,
            direction,
        }
    }

    pub fn miss() -> Self {
        Self {
            detected: false,
            direction: Vector3::zeros(),
        }
    }
}

/// A classification strategy bound to one gesture type.
#[derive(Debug, Clone)]
pub enum Strategy {
    Wind(WindStrategy),
    Lift(LiftStrategy),
}

impl Strategy {
    /// Builds a freshly initialized strategy for `gesture`.
    ///
    /// `GestureType::None` has no strategy and is an error. A missing
    /// profile is substituted with the gesture's tuned default.
    pub fn for_gesture(gesture: GestureType, profile: Option<&ThresholdProfile>) -> Result<Self> {
        if profile.is_none() {
            warn!(%gesture, "no threshold profile supplied, using per-gesture default");
        }

        let strategy = match gesture {
            GestureType::None => return Err(Error::NoneGesture),
            GestureType::Wind => {
                let defaults = ThresholdProfile::for_wind();
                Strategy::Wind(WindStrategy::new(profile.unwrap_or(&defaults)))
            }
            GestureType::Lift => {
                let defaults = ThresholdProfile::for_lift();
                Strategy::Lift(LiftStrategy::new(profile.unwrap_or(&defaults)))
            }
        };

        debug!(%gesture, "strategy created");
        Ok(strategy)
    }

    /// The gesture this strategy classifies.
    pub fn gesture(&self) -> GestureType {
        match self {
            Strategy::Wind(_) => GestureType::Wind,
            Strategy::Lift(_) => GestureType::Lift,
        }
    }

    /// Re-stores thresholds and resets any cross-frame history.
    /// Idempotent; safe to call repeatedly.
    pub fn initialize(&mut self, profile: &ThresholdProfile) {
        match self {
            Strategy::Wind(wind) => wind.initialize(profile),
            Strategy::Lift(lift) => lift.initialize(profile),
        }
    }

    /// Runs the geometric test for one frame. Never fails: absent or
    /// partial inputs simply yield a miss.
    pub fn recognize(&mut self, hands: &HandFrame, pose_frame: &PoseFrame) -> RawDetection {
        match self {
            Strategy::Wind(wind) => wind.recognize(hands, pose_frame),
            Strategy::Lift(lift) => lift.recognize(hands, pose_frame),
        }
    }
}
