//! Pointer animation.
//!
//! The pointer keeps its rendered rotation in [`PointerState`]. A move
//! starts an eased tween from that stored angle; frames advance the tween
//! and write the interpolated angle back, so a retarget mid-flight always
//! starts from where the pointer visibly is.

use dialkit_config::AnimationConfig;
use dialkit_core::{EasedValue, Easing};
use tracing::trace;

/// Timing of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f64,
    /// Easing curve
    pub easing: Easing,
}

impl Transition {
    /// A transition that applies its end state at once.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Whether the end state is applied without intermediate frames.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.duration <= 0.0
    }
}

/// Rotation of the single pointer, in degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    current_angle: f64,
    tween: Option<EasedValue>,
}

impl PointerState {
    /// Pointer resting at `angle` degrees.
    #[must_use]
    pub const fn new(angle: f64) -> Self {
        Self {
            current_angle: angle,
            tween: None,
        }
    }

    /// Angle as currently rendered.
    #[must_use]
    pub const fn current_angle(&self) -> f64 {
        self.current_angle
    }

    #[cfg(test)]
    fn target_angle(&self) -> f64 {
        self.tween.as_ref().map_or(self.current_angle, |t| t.to)
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jump to `angle`, dropping any tween.
    pub fn set_immediately(&mut self, angle: f64) {
        self.current_angle = angle;
        self.tween = None;
    }
}

/// Builds transitions from the animation settings and drives pointer tweens.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    config: AnimationConfig,
}

impl Animator {
    /// Animator for the given settings.
    #[must_use]
    pub const fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// Replace the settings. Tweens in flight keep their timing.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Transition for the next move: immediate when animation is disabled.
    #[must_use]
    pub fn transition(&self) -> Transition {
        if !self.config.enable {
            return Transition::immediate();
        }
        Transition {
            duration: self.config.duration_secs(),
            easing: self.config.easing,
        }
    }

    /// Start moving the pointer from its current angle to `new_angle`.
    ///
    /// Replaces any tween in flight. Returns whether frames are needed.
    pub fn animate_pointer(&self, state: &mut PointerState, new_angle: f64) -> bool {
        let transition = self.transition();
        if transition.is_immediate() {
            state.set_immediately(new_angle);
            return false;
        }
        trace!(from = state.current_angle, to = new_angle, "pointer tween");
        state.tween = Some(
            EasedValue::new(state.current_angle, new_angle, transition.duration)
                .with_easing(transition.easing),
        );
        true
    }

    /// Advance the tween by `dt` seconds. Returns whether it is still running.
    pub fn advance(&self, state: &mut PointerState, dt: f64) -> bool {
        let Some(tween) = state.tween.as_mut() else {
            return false;
        };
        tween.update(dt);
        if tween.is_complete() {
            state.current_angle = tween.to;
            state.tween = None;
            false
        } else {
            state.current_angle = tween.value();
            true
        }
    }
}
