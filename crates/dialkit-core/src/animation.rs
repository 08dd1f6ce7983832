//! Easing curves and eased values for pointer transitions.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
///
/// Serialized under the names used by d3-ease (`easeCubicInOut`,
/// `easeElastic`, ...), so options written for the browser widget load
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[serde(rename = "easeLinear", alias = "linear")]
    Linear,
    /// Quadratic ease in and out
    #[serde(rename = "easeQuadInOut", alias = "easeQuad")]
    QuadInOut,
    /// Cubic ease out
    #[serde(rename = "easeCubicOut")]
    CubicOut,
    /// Cubic ease in and out
    #[default]
    #[serde(rename = "easeCubicInOut", alias = "easeCubic")]
    CubicInOut,
    /// Elastic bounce at end
    #[serde(rename = "easeElastic", alias = "easeElasticOut")]
    ElasticOut,
    /// Bounce at end
    #[serde(rename = "easeBounce", alias = "easeBounceOut")]
    BounceOut,
    /// Back ease out (overshoots then returns)
    #[serde(rename = "easeBackOut")]
    BackOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => Self::ease_in_out_quad(t),
            Self::CubicOut => Self::ease_out_cubic(t),
            Self::CubicInOut => Self::ease_in_out_cubic(t),
            Self::ElasticOut => Self::elastic_out(t),
            Self::BounceOut => Self::bounce_out(t),
            Self::BackOut => Self::back_out(t),
        }
    }

    fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
        }
    }

    fn ease_out_cubic(t: f64) -> f64 {
        1.0 - (1.0 - t).powi(3)
    }

    fn ease_in_out_cubic(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
        }
    }

    fn elastic_out(t: f64) -> f64 {
        if t == 0.0 || (t - 1.0).abs() < f64::EPSILON {
            t
        } else {
            let c4 = (2.0 * PI) / 3.0;
            (-10.0 * t).exp2().mul_add((t.mul_add(10.0, -0.75) * c4).sin(), 1.0)
        }
    }

    fn bounce_out(t: f64) -> f64 {
        const N1: f64 = 7.5625;
        const D1: f64 = 2.75;

        if t < 1.0 / D1 {
            N1 * t * t
        } else if t < 2.0 / D1 {
            let t = t - 1.5 / D1;
            (N1 * t).mul_add(t, 0.75)
        } else if t < 2.5 / D1 {
            let t = t - 2.25 / D1;
            (N1 * t).mul_add(t, 0.9375)
        } else {
            let t = t - 2.625 / D1;
            (N1 * t).mul_add(t, 0.984_375)
        }
    }

    fn back_out(t: f64) -> f64 {
        const C1: f64 = 1.70158;
        const C3: f64 = C1 + 1.0;
        C1.mul_add((t - 1.0).powi(2), C3.mul_add((t - 1.0).powi(3), 1.0))
    }
}

// =============================================================================
// EasedValue - Time-based Tween
// =============================================================================

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
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::CubicInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadInOut,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::ElasticOut,
        Easing::BounceOut,
        Easing::BackOut,
    ];

    // =========================================================================
    // Easing Tests
    // =========================================================================

    #[test]
    fn test_easing_endpoints() {
        for easing in ALL {
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
    fn test_cubic_in_out_midpoint() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert!(Easing::CubicInOut.apply(0.25) < 0.25);
        assert!(Easing::CubicInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn test_back_out_overshoots() {
        let max = (1..100)
            .map(|i| Easing::BackOut.apply(f64::from(i) / 100.0))
            .fold(0.0, f64::max);
        assert!(max > 1.0);
    }

    #[test]
    fn test_easing_serde_names() {
        let e: Easing = serde_json::from_str("\"easeCubicInOut\"").unwrap();
        assert_eq!(e, Easing::CubicInOut);
        let e: Easing = serde_json::from_str("\"easeElastic\"").unwrap();
        assert_eq!(e, Easing::ElasticOut);
        let e: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(e, Easing::Linear);
        assert_eq!(
            serde_json::to_string(&Easing::BackOut).unwrap(),
            "\"easeBackOut\""
        );
        assert!(serde_json::from_str::<Easing>("\"easeWobble\"").is_err());
    }

    // =========================================================================
    // EasedValue Tests
    // =========================================================================

    #[test]
    fn test_eased_value_progression() {
        let mut v = EasedValue::new(0.0, 100.0, 0.8).with_easing(Easing::Linear);
        assert_eq!(v.value(), 0.0);
        v.update(0.4);
        assert!((v.value() - 50.0).abs() < 1e-9);
        assert!(!v.is_complete());
        v.update(1.0);
        assert_eq!(v.value(), 100.0);
        assert!(v.is_complete());
    }

    #[test]
    fn test_eased_value_zero_duration() {
        let v = EasedValue::new(1.0, 2.0, 0.0);
        assert!(v.is_complete());
        assert_eq!(v.value(), 2.0);
        assert_eq!(v.progress(), 1.0);
    }

    #[test]
    fn test_eased_value_ignores_negative_dt() {
        let mut v = EasedValue::new(0.0, 1.0, 1.0);
        v.update(-5.0);
        assert_eq!(v.elapsed, 0.0);
    }
}
