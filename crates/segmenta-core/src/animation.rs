//! Easing curves and eased tweens for UI transitions.

use serde::{Deserialize, Serialize};

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// An easing-based animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// A value already at rest.
    #[must_use]
    pub const fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0)
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Restart towards `to` from wherever the value currently is.
    pub fn retarget(&mut self, to: f64, duration: f64) {
        self.from = self.value();
        self.to = to;
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_eased_value_progress() {
        let mut v = EasedValue::new(0.0, 100.0, 1.0).with_easing(Easing::Linear);
        assert_eq!(v.value(), 0.0);
        v.update(0.25);
        assert!((v.value() - 25.0).abs() < 1e-9);
        assert!(!v.is_complete());
        v.update(10.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 100.0);
    }

    #[test]
    fn test_eased_value_zero_duration() {
        let v = EasedValue::new(0.0, 10.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_settled() {
        let v = EasedValue::settled(42.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 42.0);
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut v = EasedValue::new(0.0, 100.0, 1.0).with_easing(Easing::Linear);
        v.update(0.5);
        v.retarget(0.0, 1.0);
        assert!((v.from - 50.0).abs() < 1e-9);
        assert_eq!(v.to, 0.0);
        assert!(!v.is_complete());
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut v = EasedValue::new(0.0, 1.0, 1.0);
        v.update(-5.0);
        assert_eq!(v.elapsed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_linear_stays_between_endpoints(from in -500.0f64..500.0, to in -500.0f64..500.0, dt in 0.0f64..2.0) {
            let mut v = EasedValue::new(from, to, 1.0).with_easing(Easing::Linear);
            v.update(dt);
            let (lo, hi) = if from < to { (from, to) } else { (to, from) };
            prop_assert!(v.value() >= lo - 1e-9 && v.value() <= hi + 1e-9);
        }
    }
}
