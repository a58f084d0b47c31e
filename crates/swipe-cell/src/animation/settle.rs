//! Settle animation controller.

use std::time::{Duration, Instant};

use super::easing::{Easing, lerp_eased};

/// Animates the cell offset from a start value to a target resting value.
///
/// The controller is driven externally: the host calls
/// [`update`](SettleAnimation::update) once per frame with the current time
/// and applies the returned offset. A new touch may interrupt the animation
/// at any point via [`stop`](SettleAnimation::stop), freezing the offset at
/// its current interpolated value so the drag can re-anchor there.
#[derive(Debug, Clone)]
pub struct SettleAnimation {
    /// Offset the animation started from.
    from: f32,
    /// Target resting offset.
    to: f32,
    /// Easing curve applied to progress.
    easing: Easing,
    /// Total animation duration.
    duration: Duration,
    /// When the animation started (if running).
    start_time: Option<Instant>,
    /// Last interpolated offset.
    current: f32,
    /// Whether the animation is currently running.
    running: bool,
}

impl SettleAnimation {
    /// Create an idle controller with the given curve and duration.
    pub fn new(easing: Easing, duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            easing,
            duration,
            start_time: None,
            current: 0.0,
            running: false,
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing function. Takes effect on the next [`start`](Self::start).
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Get the animation duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the animation duration. Takes effect on the next [`start`](Self::start).
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Check if the animation is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Target resting offset of the current (or last) animation.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Last interpolated offset.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Start animating from `from` to `to` at time `now`.
    ///
    /// Returns `false` when no animation is needed because the offsets
    /// already coincide; the caller should then commit the target directly.
    pub fn start(&mut self, from: f32, to: f32, now: Instant) -> bool {
        if from == to {
            self.current = to;
            self.running = false;
            self.start_time = None;
            return false;
        }

        self.from = from;
        self.to = to;
        self.current = from;
        self.start_time = Some(now);
        self.running = true;
        true
    }

    /// Stop immediately, freezing the offset at its current value.
    pub fn stop(&mut self) {
        self.running = false;
        self.start_time = None;
    }

    /// Advance the animation to `now` and return the interpolated offset.
    ///
    /// When the animation reaches its target it stops and the returned
    /// offset is exactly `to`; callers detect completion by checking
    /// [`is_running`](Self::is_running) afterwards.
    pub fn update(&mut self, now: Instant) -> f32 {
        if !self.running {
            return self.current;
        }

        let Some(start_time) = self.start_time else {
            return self.current;
        };

        let elapsed = now.saturating_duration_since(start_time);
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            self.running = false;
            self.start_time = None;
            self.current = self.to;
            return self.current;
        }

        self.current = lerp_eased(self.easing, self.from, self.to, raw_progress);
        self.current
    }
}
