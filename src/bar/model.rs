//! Percent bar model: configuration, derived state and layout.

use crate::animation::Animation;
use crate::geometry::{self, Rect, Size};
use crate::label::{LabelOverlay, LabelPosition, BLACK};
use crate::style::{parse_attributes, parse_style, Appearance, LabelTint, Style, StyleAttribute};
use std::sync::atomic::{AtomicI64, Ordering};

// Internal ID management for percent bar instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Frames per second at which animations are advanced.
pub const FPS: u32 = 60;

/// Default width of a bar, in cells.
pub const DEFAULT_WIDTH: f64 = 40.0;

/// Default height of a bar, in cells.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default distance between the labels and the sides of the bar.
pub const DEFAULT_LABEL_OFFSET: f64 = 1.0;

/// Configuration options for a percent bar.
///
/// Options are applied in order by [`new`] and [`Model::configure`]; the
/// derived appearance is recomputed once all of them have been applied, with
/// the style always applied before the style attributes.
///
/// ```rust
/// use bubbletea_percentbar::bar::{new, with_color, with_size, with_style};
/// use bubbletea_percentbar::style::Style;
///
/// let bar = new(&[
///     with_size(30.0, 3.0),
///     with_color("#7571F9"),
///     with_style(Style::Round),
/// ]);
/// assert_eq!(bar.corner_radius(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PercentBarOption {
    /// Width and height of the bar.
    WithSize(f64, f64),
    /// Percent in `[0, 1]`. Does not move the fill by itself.
    WithPercent(f64),
    /// Accent color of the fill, border and colored labels.
    WithColor(String),
    /// Text of the left label.
    WithLeftLabel(String),
    /// Text of the right label.
    WithRightLabel(String),
    /// Text of the center label.
    WithCenterLabel(String),
    /// Fixed full width, replacing the measured width.
    WithWidthHint(f64),
    /// Style preset.
    WithStyle(Style),
    /// Style attributes, applied after the style.
    WithStyleAttributes(Vec<StyleAttribute>),
    /// Distance between the labels and the sides of the bar.
    WithLabelOffset(f64),
}

impl PercentBarOption {
    fn apply(&self, m: &mut Model) {
        match self {
            PercentBarOption::WithSize(width, height) => {
                m.bounds = Size::new(*width, *height);
            }
            PercentBarOption::WithPercent(percent) => {
                m.percent = Some(*percent);
            }
            PercentBarOption::WithColor(color) => {
                m.color = Some(color.clone());
            }
            PercentBarOption::WithLeftLabel(text) => {
                m.labels.left.set_text(Some(text));
            }
            PercentBarOption::WithRightLabel(text) => {
                m.labels.right.set_text(Some(text));
            }
            PercentBarOption::WithCenterLabel(text) => {
                m.labels.center.set_text(Some(text));
            }
            PercentBarOption::WithWidthHint(hint) => {
                m.width_hint = Some(*hint);
            }
            PercentBarOption::WithStyle(style) => {
                m.style = Some(*style);
            }
            PercentBarOption::WithStyleAttributes(attributes) => {
                m.style_attributes = Some(attributes.clone());
            }
            PercentBarOption::WithLabelOffset(offset) => {
                m.label_offset = *offset;
            }
        }
    }
}

/// Sets the size of the bar.
pub fn with_size(width: f64, height: f64) -> PercentBarOption {
    PercentBarOption::WithSize(width, height)
}

/// Sets the percent, in `[0, 1]`.
pub fn with_percent(percent: f64) -> PercentBarOption {
    PercentBarOption::WithPercent(percent)
}

/// Sets the accent color (hex code or named color).
pub fn with_color(color: impl Into<String>) -> PercentBarOption {
    PercentBarOption::WithColor(color.into())
}

/// Sets the left label text.
pub fn with_left_label(text: impl Into<String>) -> PercentBarOption {
    PercentBarOption::WithLeftLabel(text.into())
}

/// Sets the right label text.
pub fn with_right_label(text: impl Into<String>) -> PercentBarOption {
    PercentBarOption::WithRightLabel(text.into())
}

/// Sets the center label text.
pub fn with_center_label(text: impl Into<String>) -> PercentBarOption {
    PercentBarOption::WithCenterLabel(text.into())
}

/// Fixes the full width of the fill instead of measuring the bar.
pub fn with_width_hint(width: f64) -> PercentBarOption {
    PercentBarOption::WithWidthHint(width)
}

/// Sets the style preset.
pub fn with_style(style: Style) -> PercentBarOption {
    PercentBarOption::WithStyle(style)
}

/// Sets the style attributes.
pub fn with_style_attributes(attributes: &[StyleAttribute]) -> PercentBarOption {
    PercentBarOption::WithStyleAttributes(attributes.to_vec())
}

/// Sets the label offset.
pub fn with_label_offset(offset: f64) -> PercentBarOption {
    PercentBarOption::WithLabelOffset(offset)
}

/// Message advancing a running animation by one frame.
///
/// Frame messages carry the bar's id and the tag of the animation that
/// scheduled them. Messages for another bar, or for an animation that has
/// since been replaced, are ignored.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(crate) id: i64,
    pub(crate) tag: i64,
}

/// Computed geometry of a bar at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Bounds of the bar.
    pub bounds: Size,
    /// The fill region.
    pub fill: Rect,
    /// Corner radius of the outer container.
    pub corner_radius: f64,
    /// Corner radius of the fill, capped at half its height.
    pub fill_corner_radius: f64,
    /// Drawn border width, zero without a border or when the bar is too
    /// small to frame.
    pub border_width: f64,
    /// Frame of the left label pair.
    pub left_label: Rect,
    /// Frame of the right label pair.
    pub right_label: Rect,
    /// Frame of the center label pair.
    pub center_label: Rect,
}

/// A bar that fills proportionally to a percent, with optional labels whose
/// color flips where the fill covers them.
///
/// Setting properties never moves the fill. Call one of the snap or animate
/// operations to display a new percent.
///
/// ```rust
/// use bubbletea_percentbar::bar::{new, with_size};
///
/// let mut bar = new(&[with_size(200.0, 1.0)]);
/// bar.set_percent(0.5);
/// assert_eq!(bar.fill_width(), 0.0);
///
/// bar.snap_to_full_width();
/// assert_eq!(bar.fill_width(), 100.0);
/// ```
#[derive(Debug)]
pub struct Model {
    pub(crate) id: i64,
    pub(crate) tag: i64,

    percent: Option<f64>,
    color: Option<String>,
    width_hint: Option<f64>,
    style: Option<Style>,
    style_attributes: Option<Vec<StyleAttribute>>,
    pub(crate) bounds: Size,
    label_offset: f64,

    pub(crate) appearance: Appearance,
    pub(crate) labels: LabelOverlay,

    /// Width the fill is currently presented at.
    pub(crate) fill_width: f64,
    pub(crate) animation: Option<Animation>,
}

/// Creates a new percent bar with the given options.
///
/// Defaults: 40×1 cells, no percent, no color, no labels, no style, label
/// offset 1.
pub fn new(opts: &[PercentBarOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        percent: None,
        color: None,
        width_hint: None,
        style: None,
        style_attributes: None,
        bounds: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        label_offset: DEFAULT_LABEL_OFFSET,
        appearance: Appearance::default(),
        labels: LabelOverlay::new(BLACK),
        fill_width: 0.0,
        animation: None,
    };

    for opt in opts {
        opt.apply(&mut m);
    }
    m.refresh();

    m
}

impl Model {
    /// Applies options after construction and recomputes the derived state.
    pub fn configure(&mut self, opts: &[PercentBarOption]) {
        for opt in opts {
            opt.apply(self);
        }
        self.refresh();
    }

    /// Recomputes appearance and label layout from the stored configuration.
    fn refresh(&mut self) {
        self.appearance = Appearance::resolve(
            self.style,
            self.style_attributes.as_deref().unwrap_or_default(),
        );
        let colored = self.colored_label_color().to_string();
        self.labels.set_colored_color(&colored);
        let inset = self.border_inset();
        self.labels.layout(self.bounds, self.label_offset, inset);
    }

    /// Unique id of this bar.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Sets the percent, in `[0, 1]`. The fill does not move until a snap
    /// or animate operation is called.
    pub fn set_percent(&mut self, percent: f64) {
        self.percent = Some(percent);
    }

    /// Removes the percent; the bar then behaves as if it were 0.
    pub fn clear_percent(&mut self) {
        self.percent = None;
    }

    /// Percent used for rendering, clamped into `[0, 1]`.
    pub fn percent(&self) -> f64 {
        geometry::normalize_percent(self.percent)
    }

    /// Sets the accent color used by the fill, the border and the colored
    /// labels.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
        self.refresh();
    }

    /// Removes the accent color.
    pub fn clear_color(&mut self) {
        self.color = None;
        self.refresh();
    }

    /// The accent color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Sets the text of the left label.
    pub fn set_left_label_text(&mut self, text: Option<&str>) {
        self.set_label_text(LabelPosition::Left, text);
    }

    /// Sets the text of the right label.
    pub fn set_right_label_text(&mut self, text: Option<&str>) {
        self.set_label_text(LabelPosition::Right, text);
    }

    /// Sets the text of the center label.
    pub fn set_center_label_text(&mut self, text: Option<&str>) {
        self.set_label_text(LabelPosition::Center, text);
    }

    fn set_label_text(&mut self, position: LabelPosition, text: Option<&str>) {
        self.labels.pair_mut(position).set_text(text);
        self.refresh();
    }

    /// Text of the label at a position.
    pub fn label_text(&self, position: LabelPosition) -> Option<&str> {
        self.labels.pair(position).text()
    }

    /// Fixes the full width of the fill, replacing the measured width.
    pub fn set_width_hint(&mut self, width: Option<f64>) {
        self.width_hint = width;
    }

    /// The width hint, if any.
    pub fn width_hint(&self) -> Option<f64> {
        self.width_hint
    }

    /// Sets or clears the style preset.
    pub fn set_style(&mut self, style: impl Into<Option<Style>>) {
        self.style = style.into();
        self.refresh();
    }

    /// Sets the style preset by name. An unknown name is logged and the
    /// current style is kept.
    pub fn set_style_name(&mut self, name: &str) {
        if let Some(style) = parse_style(name) {
            self.set_style(style);
        }
    }

    /// The style preset, if any.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    /// Sets the style attributes. They are always applied after the style.
    pub fn set_style_attributes(&mut self, attributes: &[StyleAttribute]) {
        self.style_attributes = Some(attributes.to_vec());
        self.refresh();
    }

    /// Sets the style attributes by name. Unknown names are logged and
    /// skipped.
    pub fn set_style_attribute_names<S: AsRef<str>>(&mut self, names: &[S]) {
        let attributes = parse_attributes(names);
        self.set_style_attributes(&attributes);
    }

    /// Removes all style attributes.
    pub fn clear_style_attributes(&mut self) {
        self.style_attributes = None;
        self.refresh();
    }

    /// The style attributes, if any.
    pub fn style_attributes(&self) -> Option<&[StyleAttribute]> {
        self.style_attributes.as_deref()
    }

    /// Resizes the bar and lays it out again. The presented fill width is
    /// kept as is.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.refresh();
    }

    /// Size of the bar.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Sets the distance between the labels and the sides of the bar.
    pub fn set_label_offset(&mut self, offset: f64) {
        self.label_offset = offset;
        self.refresh();
    }

    /// Width the fill is currently presented at.
    pub fn fill_width(&self) -> f64 {
        self.fill_width
    }

    /// Width of the fill at 100%.
    pub fn full_width(&self) -> f64 {
        geometry::full_width(self.bounds, self.width_hint, self.content_inset())
    }

    /// Width the fill has for the current percent.
    pub fn target_fill_width(&self) -> f64 {
        geometry::fill_width(self.full_width(), self.percent())
    }

    /// Corner radius of the outer container.
    pub fn corner_radius(&self) -> f64 {
        self.appearance.corner_radius.resolve(self.bounds.height)
    }

    /// Corner radius of the fill region.
    pub fn fill_corner_radius(&self) -> f64 {
        geometry::fill_corner_radius(
            self.corner_radius(),
            geometry::full_height(self.bounds, self.content_inset()),
        )
    }

    /// Drawn border width, zero without a border.
    pub fn border_width(&self) -> f64 {
        self.appearance.rendered_border_width()
    }

    /// Insets set by the style.
    pub fn insets(&self) -> f64 {
        self.appearance.insets
    }

    /// Space the drawn border takes from each side.
    fn border_inset(&self) -> f64 {
        geometry::border_inset(self.bounds, self.border_width())
    }

    /// Distance between the edge of the bar and the fill region.
    fn content_inset(&self) -> f64 {
        geometry::content_inset(self.appearance.insets, self.border_inset())
    }

    /// Color of the labels outside of the fill.
    pub fn colored_label_color(&self) -> &str {
        match self.appearance.label_tint {
            LabelTint::Accent => self.color.as_deref().unwrap_or(BLACK),
            LabelTint::Black => BLACK,
        }
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Computes the geometry for the presented fill width.
    pub fn layout(&self) -> Layout {
        self.layout_with_fill(self.fill_width)
    }

    pub(crate) fn layout_with_fill(&self, fill_width: f64) -> Layout {
        let fill = geometry::fill_rect(self.bounds, self.content_inset(), fill_width);
        let corner_radius = self.corner_radius();
        let border_width = if self.border_inset() > 0.0 {
            self.border_width()
        } else {
            0.0
        };
        Layout {
            bounds: self.bounds,
            fill,
            corner_radius,
            fill_corner_radius: geometry::fill_corner_radius(corner_radius, fill.height),
            border_width,
            left_label: self.labels.left.colored.frame,
            right_label: self.labels.right.colored.frame,
            center_label: self.labels.center.colored.frame,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
