//! Animation driver for the fill width.
//!
//! Two families of animation are supported, both moving a single value from
//! a start to a target over a fixed duration:
//!
//! - **Curve** animations follow a [`TimingCurve`] (ease-in-out by default).
//! - **Spring** animations follow a damped harmonic oscillator described by a
//!   damping ratio and an initial velocity. A damping ratio of `1.0` is a
//!   critically damped spring, which settles without overshooting.
//!
//! Time only moves when [`Animation::advance`] is called, which keeps the
//! driver deterministic; the percent bar calls it once per frame message.
//!
//! ```rust
//! use bubbletea_percentbar::animation::{Animation, AnimationKind, AnimationOptions, TimingCurve};
//! use std::time::Duration;
//!
//! let options = AnimationOptions::new(Duration::from_millis(300));
//! let mut animation = Animation::new(0.0, 100.0, AnimationKind::Curve(TimingCurve::Linear), &options, None);
//!
//! assert_eq!(animation.advance(Duration::from_millis(150)), 50.0);
//! assert_eq!(animation.advance(Duration::from_millis(150)), 100.0);
//! assert!(animation.is_finished());
//! ```

use std::fmt;
use std::time::Duration;

/// Default animation duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Default damping ratio of spring animations.
pub const DEFAULT_SPRING_DAMPING: f64 = 0.7;

/// Damping ratio that turns a spring into a plain ease to the target.
pub const CRITICAL_DAMPING: f64 = 1.0;

// Natural frequency is chosen so that a critically damped spring is within
// about 0.05% of its target when the duration runs out.
const SETTLE_FACTOR: f64 = 10.0;

/// Callback invoked once an animation stops.
///
/// The argument is `true` when the animation ran to completion and `false`
/// when it was interrupted by another animation or a snap.
pub type Completion = Box<dyn FnOnce(bool) + Send + 'static>;

/// Timing curves for curve-based animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingCurve {
    /// Slow start and slow end.
    #[default]
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant speed.
    Linear,
}

impl TimingCurve {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn value(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            TimingCurve::EaseIn => t * t,
            TimingCurve::EaseOut => 1.0 - (1.0 - t).powi(2),
            TimingCurve::Linear => t,
        }
    }
}

/// A damped spring, solved in closed form.
///
/// The spring starts at rest-offset 0 and is pulled towards 1. Its natural
/// frequency is derived from the animation duration, and the value is pinned
/// to exactly 1 once the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    damping: f64,
    initial_velocity: f64,
    frequency: f64,
    duration: f64,
}

impl Spring {
    /// Creates a spring that settles within `duration`.
    ///
    /// `initial_velocity` is expressed as a fraction of the total distance per
    /// second, so `1.0` means the value starts out covering the whole distance
    /// in one second.
    pub fn new(duration: Duration, damping: f64, initial_velocity: f64) -> Self {
        let duration = duration.as_secs_f64();
        let frequency = if duration > 0.0 {
            SETTLE_FACTOR / duration
        } else {
            0.0
        };
        Self {
            damping: damping.max(0.0),
            initial_velocity,
            frequency,
            duration,
        }
    }

    /// Damping ratio.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Initial velocity as a fraction of the distance per second.
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Progress at `t` seconds after the spring was released.
    pub fn value(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= self.duration || self.frequency == 0.0 {
            return 1.0;
        }

        let w0 = self.frequency;
        let zeta = self.damping;
        let v0 = self.initial_velocity;
        // Displacement from the target; starts at -1.
        let x = if (zeta - 1.0).abs() < 1e-6 {
            let b = v0 - w0;
            (-1.0 + b * t) * (-w0 * t).exp()
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 - zeta * w0) / wd;
            (-zeta * w0 * t).exp() * (-(wd * t).cos() + b * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (v0 + r1) / (r2 - r1);
            let c1 = -1.0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        };
        1.0 + x
    }
}

/// How an animation interpolates between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Follow a timing curve.
    Curve(TimingCurve),
    /// Follow a damped spring.
    Spring(Spring),
}

/// Duration, delay and timing curve of an animation.
///
/// Spring animations keep the curve for reference but move along their own
/// physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationOptions {
    /// Length of the animation.
    pub duration: Duration,
    /// Time to wait before the value starts moving.
    pub delay: Duration,
    /// Timing curve of curve-based animations.
    pub curve: TimingCurve,
}

impl AnimationOptions {
    /// Options with the given duration, no delay and the default curve.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            curve: TimingCurve::default(),
        }
    }

    /// Sets the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the timing curve.
    pub fn with_curve(mut self, curve: TimingCurve) -> Self {
        self.curve = curve;
        self
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

/// An in-flight animation of a single value.
pub struct Animation {
    from: f64,
    to: f64,
    kind: AnimationKind,
    duration: Duration,
    delay: Duration,
    elapsed: Duration,
    completion: Option<Completion>,
}

impl Animation {
    /// Creates an animation from `from` to `to`.
    pub fn new(
        from: f64,
        to: f64,
        kind: AnimationKind,
        options: &AnimationOptions,
        completion: Option<Completion>,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            duration: options.duration,
            delay: options.delay,
            elapsed: Duration::ZERO,
            completion,
        }
    }

    /// Value the animation is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Interpolation used by the animation.
    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Moves time forward by `dt` and returns the new value.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.value()
    }

    /// Value at the current point in time.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let Some(active) = self.elapsed.checked_sub(self.delay) else {
            return self.from;
        };

        let progress = match &self.kind {
            AnimationKind::Curve(curve) => {
                curve.value(active.as_secs_f64() / self.duration.as_secs_f64())
            }
            AnimationKind::Spring(spring) => spring.value(active.as_secs_f64()),
        };
        self.from + (self.to - self.from) * progress
    }

    /// Whether the delay and the duration have both elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay.saturating_add(self.duration)
    }

    /// Stops the animation, invoking its completion with `finished`.
    pub fn complete(mut self, finished: bool) {
        if let Some(completion) = self.completion.take() {
            completion(finished);
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}
