//! # Kinesis-Gesture
//!
//! Real-time gesture classification over per-frame hand and body
//! landmark streams.
//!
//! ## Pipeline
//!
//! One frame at a time:
//!
//! 1. The bound [`Strategy`] runs the geometric test for the active
//!    gesture and reports a raw, undebounced detection.
//! 2. The [`GestureRecognizer`] applies hold/lost-frame hysteresis:
//!    a gesture must qualify for `hold_frames` consecutive frames
//!    before it is confirmed, and brief dropouts within the
//!    `max_lost_frames` grace window do not erase progress.
//! 3. The caller receives a debounced [`GestureResult`] plus a stream
//!    of structured [`GestureEvent`]s for observability.
//!
//! The engine is single-threaded and frame-synchronous; frames must be
//! delivered in temporal order.

pub mod lift;
pub mod recognizer;
pub mod strategy;
pub mod thresholds;
pub mod wind;

#[cfg(test)]
pub(crate) mod testutil;

pub use kinesis_core::{
    Error, GestureResult, GestureType, Hand, HandFrame, Handedness, NormalizedLandmark,
    PoseFrame, Result,
};

pub use lift::LiftStrategy;
pub use recognizer::{GestureEvent, GestureRecognizer};
pub use strategy::{RawDetection, Strategy};
pub use thresholds::ThresholdProfile;
pub use wind::WindStrategy;
