//! Timing and easing for the page's decorative motion: the cursor follower
//! spring, the background blob drift loops, and reveal stagger delays.

use crate::constants::{
    FOLLOWER_DAMPING, FOLLOWER_MASS, FOLLOWER_PRESSED_SCALE, FOLLOWER_SCALE_TAU_SEC,
    FOLLOWER_STIFFNESS, FRAME_DT_MAX_SEC, SPRING_SUBSTEP_SEC, STAGGER_STEP_SEC,
};
use glam::Vec2;

/// Damped spring that trails the pointer.
///
/// Integrated with semi-implicit Euler; `dt` is clamped so a long gap
/// between frames (tab switch) cannot blow the spring up. The first sample
/// snaps to the target instead of flying in from the origin.
#[derive(Clone, Copy, Debug)]
pub struct FollowerSpring {
    pos: Vec2,
    vel: Vec2,
    scale: f32,
    initialized: bool,
}

impl Default for FollowerSpring {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            scale: 1.0,
            initialized: false,
        }
    }
}

impl FollowerSpring {
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn step(&mut self, target: Vec2, pressed: bool, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, FRAME_DT_MAX_SEC);
        if !self.initialized {
            self.pos = target;
            self.vel = Vec2::ZERO;
            self.initialized = true;
        } else {
            // The spring is too stiff for one Euler step per display frame,
            // so consume the delta in fixed substeps.
            let mut remaining = dt;
            while remaining > 0.0 {
                let h = remaining.min(SPRING_SUBSTEP_SEC);
                let accel = (FOLLOWER_STIFFNESS * (target - self.pos)
                    - FOLLOWER_DAMPING * self.vel)
                    / FOLLOWER_MASS;
                self.vel += accel * h;
                self.pos += self.vel * h;
                remaining -= h;
            }
        }

        let target_scale = if pressed { FOLLOWER_PRESSED_SCALE } else { 1.0 };
        let alpha = 1.0 - (-dt / FOLLOWER_SCALE_TAU_SEC).exp();
        self.scale += (target_scale - self.scale) * alpha;
    }
}

/// Closed drift loop for one background blob: origin to `amplitude` and
/// back over `period_secs`, linear ease, repeating forever.
#[derive(Clone, Copy, Debug)]
pub struct BlobDrift {
    pub amplitude: Vec2,
    pub period_secs: f32,
}

impl BlobDrift {
    pub fn offset_at(&self, elapsed_secs: f32) -> Vec2 {
        let period = self.period_secs.max(f32::EPSILON);
        let phase = (elapsed_secs / period).rem_euclid(1.0);
        let tri = if phase < 0.5 {
            2.0 * phase
        } else {
            2.0 - 2.0 * phase
        };
        self.amplitude * tri
    }
}

/// Transition delay for the `index`-th item of a staggered reveal group.
#[inline]
pub fn stagger_delay(index: usize) -> f32 {
    index as f32 * STAGGER_STEP_SEC
}
