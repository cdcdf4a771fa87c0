//! Hold/lost-frame hysteresis over the raw per-frame classifications.
//!
//! A raw detection stream flickers: a single spurious frame must not
//! trigger a gesture, and a single dropped frame must not cancel one
//! that is building. The recognizer therefore requires `hold_frames`
//! consecutive qualifying frames before confirming, and tolerates up
//! to `max_lost_frames` consecutive misses before discarding the
//! accumulated progress. Progress is all-or-nothing: it never decays
//! partially, only resets once the grace window is exceeded.

use kinesis_core::{GestureResult, GestureType, HandFrame, PoseFrame, Result};
use tracing::{debug, warn};

use crate::strategy::Strategy;
use crate::thresholds::ThresholdProfile;

/// Structured observability events emitted by the recognizer.
///
/// Decisions and logging stay separate: the recognizer records what
/// happened, the caller drains the buffer and decides how (or whether)
/// to surface it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A gesture entered the confirmed state.
    Confirmed {
        gesture: GestureType,
        confidence: f32,
    },
    /// The grace window was exceeded and confirmation progress was
    /// discarded.
    ProgressReset { gesture: GestureType },
    /// The active gesture changed.
    Switched {
        from: GestureType,
        to: GestureType,
    },
    /// Thresholds were replaced at runtime.
    ThresholdsUpdated { gesture: GestureType },
}

/// Per-gesture hysteresis counters.
#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    /// Consecutive qualifying frames.
    frame_count: u32,
    /// Consecutive non-qualifying frames since the last qualifying one.
    lost_count: u32,
}

impl Counters {
    fn reset(&mut self) {
        self.frame_count = 0;
        self.lost_count = 0;
    }
}

/// Debounced gesture recognizer.
///
/// Holds at most one active gesture; [`recognize`](Self::recognize) is
/// called once per incoming landmark frame, strictly in order.
pub struct GestureRecognizer {
    strategy: Option<Strategy>,
    thresholds: ThresholdProfile,
    counters: [Counters; GestureType::ACTIVE.len()],
    /// True while the active gesture is in the confirmed state; used
    /// to emit [`GestureEvent::Confirmed`] only on entry.
    confirmed: bool,
    events: Vec<GestureEvent>,
}

impl GestureRecognizer {
    /// Creates a recognizer with no active gesture. A missing profile
    /// falls back to the defaults.
    pub fn new(thresholds: Option<ThresholdProfile>) -> Self {
        let thresholds = thresholds.unwrap_or_default();
        debug!(
            hold_frames = thresholds.hold_frames,
            max_lost_frames = thresholds.max_lost_frames,
            "recognizer initialized"
        );
        Self {
            strategy: None,
            thresholds,
            counters: Default::default(),
            confirmed: false,
            events: Vec::new(),
        }
    }

    /// The currently active gesture, `GestureType::None` when unbound.
    pub fn active_gesture(&self) -> GestureType {
        self.strategy
            .as_ref()
            .map_or(GestureType::None, Strategy::gesture)
    }

    /// Switches the active gesture.
    ///
    /// `None` is rejected without mutating state. Re-selecting the
    /// already-active gesture is a no-op. Otherwise both the previous
    /// and the new gesture's counters are zeroed and a fresh strategy
    /// is built, dropping any cross-frame history of the old one.
    pub fn set_active_gesture(&mut self, gesture: GestureType) -> Result<()> {
        if gesture == GestureType::None {
            warn!("cannot set GestureType::None as the active gesture");
            return Err(kinesis_core::Error::NoneGesture);
        }

        let previous = self.active_gesture();
        if previous == gesture {
            debug!(%gesture, "gesture already active");
            return Ok(());
        }

        if let Some(slot) = previous.slot() {
            self.counters[slot].reset();
        }

        self.strategy = Some(Strategy::for_gesture(gesture, Some(&self.thresholds))?);
        // Strategy construction starts clean, but zero the counters
        // here as well so a stale entry can never leak through.
        if let Some(slot) = gesture.slot() {
            self.counters[slot].reset();
        }
        self.confirmed = false;

        self.events.push(GestureEvent::Switched {
            from: previous,
            to: gesture,
        });
        debug!(from = %previous, to = %gesture, "active gesture changed");
        Ok(())
    }

    /// Classifies one frame and applies the hysteresis.
    ///
    /// Returns the canonical `None` result while no gesture is active,
    /// while a gesture is still building toward `hold_frames`, and on
    /// every non-qualifying frame.
    pub fn recognize(&mut self, hands: &HandFrame, pose_frame: &PoseFrame) -> GestureResult {
        let Some(strategy) = self.strategy.as_mut() else {
            return GestureResult::none();
        };

        let gesture = strategy.gesture();
        let raw = strategy.recognize(hands, pose_frame);
        let slot = gesture
            .slot()
            .expect("active gesture always has a counter slot");
        let counters = &mut self.counters[slot];

        if raw.detected {
            counters.frame_count += 1;
            counters.lost_count = 0;

            if counters.frame_count >= self.thresholds.hold_frames {
                let confidence =
                    (counters.frame_count as f32 / self.thresholds.hold_frames as f32).min(1.0);
                if !self.confirmed {
                    self.confirmed = true;
                    self.events.push(GestureEvent::Confirmed {
                        gesture,
                        confidence,
                    });
                    debug!(%gesture, confidence, "gesture confirmed");
                }
                return GestureResult::new(gesture, confidence, true, raw.direction);
            }
        } else {
            counters.lost_count += 1;
            if counters.lost_count > self.thresholds.max_lost_frames {
                if counters.frame_count > 0 {
                    self.events.push(GestureEvent::ProgressReset { gesture });
                    debug!(%gesture, "grace window exceeded, progress reset");
                }
                counters.frame_count = 0;
            }
            self.confirmed = false;
        }

        GestureResult::none()
    }

    /// Replaces the thresholds and re-initializes the active strategy
    /// in place, preserving which gesture is active but clearing its
    /// motion history.
    pub fn update_thresholds(&mut self, thresholds: ThresholdProfile) {
        self.thresholds = thresholds;
        if let Some(strategy) = self.strategy.as_mut() {
            strategy.initialize(&self.thresholds);
            let gesture = strategy.gesture();
            self.events.push(GestureEvent::ThresholdsUpdated { gesture });
            debug!(%gesture, "thresholds updated");
        }
    }

    /// Zeroes every gesture's hysteresis counters.
    pub fn reset_counters(&mut self) {
        for counters in &mut self.counters {
            counters.reset();
        }
        self.confirmed = false;
        debug!("all counters reset");
    }

    /// Drains the pending observability events.
    pub fn take_events(&mut self) -> Vec<GestureEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(None)
    }
}
