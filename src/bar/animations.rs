//! Snap and animate operations of the percent bar, and the frame loop that
//! drives them.
//!
//! Every animate operation returns a [`Cmd`] that schedules the next frame.
//! Forward messages to [`Model::update`] to keep the animation running:
//!
//! ```rust
//! use bubbletea_percentbar::bar::{self, with_size};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     bar: bar::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut bar = bar::new(&[with_size(40.0, 1.0)]);
//!         let cmd = bar.animate_to_percent(0.75);
//!         (Self { bar }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.bar.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.bar.view()
//!     }
//! }
//! ```

use super::model::{FrameMsg, Model, FPS};
use crate::animation::{
    Animation, AnimationKind, AnimationOptions, Completion, Spring, CRITICAL_DAMPING,
    DEFAULT_SPRING_DAMPING,
};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;

fn frame_interval() -> Duration {
    Duration::from_nanos(1_000_000_000 / FPS as u64)
}

impl Model {
    /// Instantly sets the fill to the width of the current percent.
    pub fn snap_to_full_width(&mut self) {
        let target = self.target_fill_width();
        self.snap_fill(target);
    }

    /// Sets the percent and instantly displays it.
    pub fn snap_to(&mut self, new_percent: f64) {
        self.set_percent(new_percent);
        self.snap_to_full_width();
    }

    /// Animates the fill to the width of the current percent over 0.3
    /// seconds, without delay or completion.
    pub fn animate_to_full_width(&mut self) -> Cmd {
        self.animate_to_full_width_with(AnimationOptions::default(), None)
    }

    /// Animates the fill to the width of the current percent.
    ///
    /// This is a critically damped spring with no initial velocity, so it
    /// eases to the target without overshooting.
    pub fn animate_to_full_width_with(
        &mut self,
        options: AnimationOptions,
        completion: Option<Completion>,
    ) -> Cmd {
        self.spring_animate_to_full_width_with(options, CRITICAL_DAMPING, 0.0, completion)
    }

    /// Animates the fill to the width of the current percent with a spring:
    /// 0.3 seconds, damping 0.7, no initial velocity.
    pub fn spring_animate_to_full_width(&mut self) -> Cmd {
        self.spring_animate_to_full_width_with(
            AnimationOptions::default(),
            DEFAULT_SPRING_DAMPING,
            0.0,
            None,
        )
    }

    /// Animates the fill to the width of the current percent with a spring.
    ///
    /// `damping` is the damping ratio (1.0 settles without overshoot, lower
    /// values bounce). `initial_velocity` is a fraction of the distance per
    /// second.
    pub fn spring_animate_to_full_width_with(
        &mut self,
        options: AnimationOptions,
        damping: f64,
        initial_velocity: f64,
        completion: Option<Completion>,
    ) -> Cmd {
        let spring = Spring::new(options.duration, damping, initial_velocity);
        let target = self.target_fill_width();
        self.begin(target, AnimationKind::Spring(spring), &options, completion)
    }

    /// Sets the percent and animates to it with the default options.
    pub fn animate_to_percent(&mut self, new_percent: f64) -> Cmd {
        self.set_percent(new_percent);
        self.animate_to_full_width()
    }

    /// Sets the percent and animates to it.
    pub fn animate_to_percent_with(
        &mut self,
        new_percent: f64,
        options: AnimationOptions,
        completion: Option<Completion>,
    ) -> Cmd {
        self.set_percent(new_percent);
        self.animate_to_full_width_with(options, completion)
    }

    /// Sets the percent and springs to it with the default spring.
    pub fn spring_animate_to_percent(&mut self, new_percent: f64) -> Cmd {
        self.set_percent(new_percent);
        self.spring_animate_to_full_width()
    }

    /// Sets the percent and springs to it.
    pub fn spring_animate_to_percent_with(
        &mut self,
        new_percent: f64,
        options: AnimationOptions,
        damping: f64,
        initial_velocity: f64,
        completion: Option<Completion>,
    ) -> Cmd {
        self.set_percent(new_percent);
        self.spring_animate_to_full_width_with(options, damping, initial_velocity, completion)
    }
}

impl Model {
    /// Instantly collapses the fill.
    pub fn snap_to_zero_width(&mut self) {
        self.snap_fill(0.0);
    }

    /// Collapses the fill with an ease in ease out over 0.3 seconds.
    pub fn animate_to_zero_width(&mut self) -> Cmd {
        self.animate_to_zero_width_with(AnimationOptions::default(), None)
    }

    /// Collapses the fill along the options' timing curve.
    pub fn animate_to_zero_width_with(
        &mut self,
        options: AnimationOptions,
        completion: Option<Completion>,
    ) -> Cmd {
        self.begin(0.0, AnimationKind::Curve(options.curve), &options, completion)
    }
}

impl Model {
    /// Processes frame messages of a running animation.
    ///
    /// Returns the command for the next frame while the animation runs, and
    /// `None` once it has completed or when the message is not a frame for
    /// this bar's current animation.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        let frame_msg = msg.downcast_ref::<FrameMsg>()?;
        if frame_msg.id != self.id || frame_msg.tag != self.tag {
            return std::option::Option::None;
        }

        let animation = self.animation.as_mut()?;
        self.fill_width = animation.advance(frame_interval());
        if !animation.is_finished() {
            return std::option::Option::Some(self.next_frame());
        }

        if let Some(animation) = self.animation.take() {
            tracing::debug!(id = self.id, fill_width = self.fill_width, "animation finished");
            animation.complete(true);
        }
        std::option::Option::None
    }

    fn begin(
        &mut self,
        target: f64,
        kind: AnimationKind,
        options: &AnimationOptions,
        completion: Option<Completion>,
    ) -> Cmd {
        self.interrupt();
        self.tag += 1;
        tracing::debug!(
            id = self.id,
            from = self.fill_width,
            to = target,
            duration_ms = options.duration.as_millis() as u64,
            "animation started"
        );
        self.animation = Some(Animation::new(
            self.fill_width,
            target,
            kind,
            options,
            completion,
        ));
        self.next_frame()
    }

    fn snap_fill(&mut self, width: f64) {
        self.interrupt();
        // Drop frames that are still in flight.
        self.tag += 1;
        self.fill_width = width;
    }

    fn interrupt(&mut self) {
        if let Some(animation) = self.animation.take() {
            tracing::debug!(id = self.id, fill_width = self.fill_width, "animation interrupted");
            animation.complete(false);
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(frame_interval(), move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }
}
