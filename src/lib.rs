#![warn(missing_docs)]

//! # bubbletea-percentbar
//!
//! An animated percent bar for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The bar fills proportionally to a percent in `[0, 1]`, shows optional
//! left, right and center labels whose color flips at the fill boundary, and
//! supports a small set of style presets and attributes:
//!
//! | Style | Corner radius | Insets | Border |
//! |-------|---------------|--------|--------|
//! | `Rectangle` | 0 | 0 | yes |
//! | `RoundedRectangle` | 8 | 0 | yes |
//! | `Round` | height / 2 | 0 | yes |
//! | `InsetWithBorder` | height / 2 | 4 | yes, width 2 |
//!
//! Attributes (`Border`, `NoBorder`, `ColorLabels`, `BlackLabels`) are always
//! applied after the style.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_percentbar::prelude::*;
//!
//! let mut bar = percentbar_new(&[
//!     with_size(42.0, 3.0),
//!     with_color("#7571F9"),
//!     with_style(Style::Round),
//!     with_style_attributes(&[StyleAttribute::BlackLabels]),
//!     with_center_label("Loading"),
//! ]);
//!
//! // The border takes one cell on each side, leaving 40 for the fill.
//! bar.snap_to(0.25);
//! assert_eq!(bar.fill_width(), 10.0);
//! println!("{}", bar.view());
//! ```
//!
//! ## Modules
//!
//! - [`bar`]: the widget, its options, snap/animate operations and rendering
//! - [`style`]: style presets and attributes
//! - [`geometry`]: fill-region arithmetic
//! - [`label`]: the label overlay
//! - [`animation`]: timing curves, springs and the animation driver

pub mod animation;
pub mod bar;
pub mod error;
pub mod geometry;
pub mod label;
pub mod style;

#[cfg(test)]
mod test_support;

pub use animation::{AnimationOptions, Completion, TimingCurve};
pub use bar::Model as PercentBar;
pub use error::Error;
pub use geometry::{Rect, Size};
pub use label::LabelPosition;
pub use style::{Style, StyleAttribute};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_percentbar::prelude::*;
///
/// let bar: PercentBar = percentbar_new(&[with_size(10.0, 1.0)]);
/// assert_eq!(bar.percent(), 0.0);
/// ```
pub mod prelude {
    pub use crate::animation::{AnimationOptions, Completion, TimingCurve};
    pub use crate::bar::{
        new as percentbar_new, with_center_label, with_color, with_label_offset, with_left_label,
        with_percent, with_right_label, with_size, with_style, with_style_attributes,
        with_width_hint, Model as PercentBar, PercentBarOption,
    };
    pub use crate::geometry::{Rect, Size};
    pub use crate::label::LabelPosition;
    pub use crate::style::{Style, StyleAttribute};
}
