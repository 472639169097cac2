//! Style presets and attribute toggles for the percent bar.
//!
//! A [`Style`] is a named bundle of geometry constants (corner radius, border
//! width, insets). A [`StyleAttribute`] is an independent visual toggle that
//! is always applied *after* the style, so attributes win wherever the two
//! touch the same property.
//!
//! ```rust
//! use bubbletea_percentbar::style::{Appearance, Style, StyleAttribute};
//!
//! // Rectangle implies a border, the explicit NoBorder removes it again.
//! let appearance = Appearance::resolve(Some(Style::Rectangle), &[StyleAttribute::NoBorder]);
//! assert!(!appearance.border_visible);
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Border width used when no style says otherwise.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Corner radius of the [`Style::RoundedRectangle`] preset.
pub const ROUNDED_RECTANGLE_RADIUS: f64 = 8.0;

/// Border width of the [`Style::InsetWithBorder`] preset.
pub const INSET_BORDER_WIDTH: f64 = 2.0;

/// Insets of the [`Style::InsetWithBorder`] preset.
pub const INSET_AMOUNT: f64 = 4.0;

/// The different styles of percent bars available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// A simple square-cornered rectangle.
    Rectangle,
    /// A simple rounded rectangle.
    RoundedRectangle,
    /// A rounded rectangle with both ends rounded all the way.
    Round,
    /// A fully rounded bar whose fill sits inset inside a thicker border.
    InsetWithBorder,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 4] = [
        Style::Rectangle,
        Style::RoundedRectangle,
        Style::Round,
        Style::InsetWithBorder,
    ];

    /// Returns the display name of the style.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Rectangle => "Rectangle",
            Style::RoundedRectangle => "Rounded Rectangle",
            Style::Round => "Round",
            Style::InsetWithBorder => "InsetWithBorder",
        }
    }

    /// Returns the geometry constants this style sets.
    pub const fn preset(&self) -> StylePreset {
        match self {
            Style::Rectangle => StylePreset {
                corner_radius: CornerRadius::Fixed(0.0),
                border_width: DEFAULT_BORDER_WIDTH,
                insets: 0.0,
                implied: StyleAttribute::Border,
            },
            Style::RoundedRectangle => StylePreset {
                corner_radius: CornerRadius::Fixed(ROUNDED_RECTANGLE_RADIUS),
                border_width: DEFAULT_BORDER_WIDTH,
                insets: 0.0,
                implied: StyleAttribute::Border,
            },
            Style::Round => StylePreset {
                corner_radius: CornerRadius::HalfHeight,
                border_width: DEFAULT_BORDER_WIDTH,
                insets: 0.0,
                implied: StyleAttribute::Border,
            },
            Style::InsetWithBorder => StylePreset {
                corner_radius: CornerRadius::HalfHeight,
                border_width: INSET_BORDER_WIDTH,
                insets: INSET_AMOUNT,
                implied: StyleAttribute::Border,
            },
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangle" => Ok(Style::Rectangle),
            "Rounded Rectangle" | "RoundedRectangle" => Ok(Style::RoundedRectangle),
            "Round" => Ok(Style::Round),
            "InsetWithBorder" => Ok(Style::InsetWithBorder),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Visual attributes applied on top of a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    /// Draw a border around the bar using the configured width.
    Border,
    /// Do not draw a border. Overrides any border set by the style.
    NoBorder,
    /// Labels outside of the fill use the bar's accent color.
    ColorLabels,
    /// Labels outside of the fill are black.
    BlackLabels,
}

impl StyleAttribute {
    /// Returns the name of the attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StyleAttribute::Border => "Border",
            StyleAttribute::NoBorder => "NoBorder",
            StyleAttribute::ColorLabels => "ColorLabels",
            StyleAttribute::BlackLabels => "BlackLabels",
        }
    }

    /// Applies this attribute to `appearance`.
    ///
    /// Each attribute touches exactly one concern and can be applied any
    /// number of times with the same result.
    pub fn apply(&self, appearance: &mut Appearance) {
        match self {
            StyleAttribute::Border => appearance.border_visible = true,
            StyleAttribute::NoBorder => appearance.border_visible = false,
            StyleAttribute::ColorLabels => appearance.label_tint = LabelTint::Accent,
            StyleAttribute::BlackLabels => appearance.label_tint = LabelTint::Black,
        }
    }
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Border" => Ok(StyleAttribute::Border),
            "NoBorder" => Ok(StyleAttribute::NoBorder),
            "ColorLabels" => Ok(StyleAttribute::ColorLabels),
            "BlackLabels" => Ok(StyleAttribute::BlackLabels),
            other => Err(Error::UnknownAttribute(other.to_string())),
        }
    }
}

/// Parses attribute names, skipping (and logging) the ones that are unknown.
pub fn parse_attributes<S: AsRef<str>>(names: &[S]) -> Vec<StyleAttribute> {
    names
        .iter()
        .filter_map(|name| match name.as_ref().parse::<StyleAttribute>() {
            Ok(attribute) => Some(attribute),
            Err(err) => {
                tracing::warn!("ignoring style attribute: {err}");
                None
            }
        })
        .collect()
}

/// Parses a style name, logging it when it is unknown.
pub fn parse_style(name: &str) -> Option<Style> {
    match name.parse::<Style>() {
        Ok(style) => Some(style),
        Err(err) => {
            tracing::warn!("ignoring style: {err}");
            None
        }
    }
}

/// A corner radius that is either a constant or follows the bar's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerRadius {
    /// A constant radius in layout units.
    Fixed(f64),
    /// Half of the bar's height, giving fully rounded ends.
    HalfHeight,
}

impl CornerRadius {
    /// Resolves the radius for a bar of the given height.
    pub fn resolve(&self, height: f64) -> f64 {
        match *self {
            CornerRadius::Fixed(radius) => radius.max(0.0),
            CornerRadius::HalfHeight => (height / 2.0).max(0.0),
        }
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        CornerRadius::Fixed(0.0)
    }
}

/// Geometry constants set by a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    /// Radius of the outer container.
    pub corner_radius: CornerRadius,
    /// Border width used once a border is shown.
    pub border_width: f64,
    /// Distance between the container edge and the fill region.
    pub insets: f64,
    /// Attribute the style applies before any explicit attributes.
    pub implied: StyleAttribute,
}

/// Color used for the labels that sit outside of the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelTint {
    /// The bar's accent color.
    #[default]
    Accent,
    /// Plain black.
    Black,
}

/// Appearance derived from a style and its attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Configured radius of the outer container.
    pub corner_radius: CornerRadius,
    /// Configured border width.
    pub border_width: f64,
    /// Whether the border is drawn.
    pub border_visible: bool,
    /// Distance between the container edge and the fill region.
    pub insets: f64,
    /// Color of the labels outside of the fill.
    pub label_tint: LabelTint,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            corner_radius: CornerRadius::default(),
            border_width: DEFAULT_BORDER_WIDTH,
            border_visible: false,
            insets: 0.0,
            label_tint: LabelTint::default(),
        }
    }
}

impl Appearance {
    /// Computes the appearance for a style followed by a list of attributes.
    ///
    /// The result depends only on the arguments: the style preset is applied
    /// first, then its implied attribute, then `attributes` in order.
    pub fn resolve(style: Option<Style>, attributes: &[StyleAttribute]) -> Self {
        let mut appearance = Appearance::default();
        if let Some(style) = style {
            appearance.apply_preset(&style.preset());
        }
        for attribute in attributes {
            attribute.apply(&mut appearance);
        }
        appearance
    }

    fn apply_preset(&mut self, preset: &StylePreset) {
        self.corner_radius = preset.corner_radius;
        self.border_width = preset.border_width;
        self.insets = preset.insets;
        preset.implied.apply(self);
    }

    /// Border width actually drawn, zero when the border is hidden.
    pub fn rendered_border_width(&self) -> f64 {
        if self.border_visible {
            self.border_width.max(0.0)
        } else {
            0.0
        }
    }
}
