//! Percent bar component for Bubble Tea applications.
//!
//! A percent bar is a rectangular view whose fill grows proportionally to a
//! percent. It carries optional left, right and center labels that change
//! color where the fill covers them, a [`Style`](crate::style::Style) preset
//! and a list of [`StyleAttribute`](crate::style::StyleAttribute)s.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_percentbar::bar::{new, with_color, with_left_label, with_right_label, with_size};
//!
//! let mut bar = new(&[
//!     with_size(20.0, 1.0),
//!     with_color("#7571F9"),
//!     with_left_label("0%"),
//!     with_right_label("100%"),
//! ]);
//!
//! bar.set_percent(0.5);
//! bar.snap_to_full_width();
//! assert_eq!(bar.fill_width(), 10.0);
//! ```
//!
//! # Animation
//!
//! Changing the percent does not move the fill. Snap operations move it
//! instantly; animate operations return a command that drives frames through
//! [`Model::update`]. Starting a new animation or snapping while one is in
//! flight stops the old one and reports `false` to its completion.
//!
//! ```rust
//! use bubbletea_percentbar::animation::AnimationOptions;
//! use bubbletea_percentbar::bar::new;
//! use std::time::Duration;
//!
//! let mut bar = new(&[]);
//! let _cmd = bar.animate_to_percent_with(
//!     0.75,
//!     AnimationOptions::new(Duration::from_millis(500)),
//!     Some(Box::new(|finished| println!("done: {finished}"))),
//! );
//! assert!(bar.is_animating());
//! ```

mod animations;
pub mod model;
mod view;

#[cfg(test)]
mod tests;

pub use model::{
    new, with_center_label, with_color, with_label_offset, with_left_label, with_percent,
    with_right_label, with_size, with_style, with_style_attributes, with_width_hint, FrameMsg,
    Layout, Model, PercentBarOption, DEFAULT_HEIGHT, DEFAULT_LABEL_OFFSET, DEFAULT_WIDTH, FPS,
};
