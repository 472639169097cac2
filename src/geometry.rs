//! Geometry of the fill region.
//!
//! All values are layout units. The terminal renderer maps one unit to one
//! character cell, but nothing in here depends on that.

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true when the point lies inside the rectangle. The right and
    /// bottom edges are exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
    }
}

/// Thickness of a drawn border. Box-drawing glyphs take exactly one cell,
/// whatever width the style configures.
pub const BORDER_CELLS: f64 = 1.0;

/// Smallest extent, in both directions, at which a border is drawn. Below it
/// the border would leave no room for the fill or the labels.
pub const MIN_FRAMED_EXTENT: f64 = 3.0;

/// Space a drawn border takes from each side of the bar; zero when there is
/// no border or the bar is too small to frame.
pub fn border_inset(bounds: Size, border_width: f64) -> f64 {
    if border_width > 0.0
        && bounds.width >= MIN_FRAMED_EXTENT
        && bounds.height >= MIN_FRAMED_EXTENT
    {
        BORDER_CELLS
    } else {
        0.0
    }
}

/// Distance between the container edge and the fill region: the style's
/// insets, but never less than the border drawn around it.
pub fn content_inset(insets: f64, border_inset: f64) -> f64 {
    insets.max(border_inset).max(0.0)
}

/// Width available to the fill at 100%.
///
/// A width hint replaces the measured width outright; otherwise the insets
/// are taken off both sides.
pub fn full_width(bounds: Size, width_hint: Option<f64>, insets: f64) -> f64 {
    let width = match width_hint {
        Some(hint) => hint,
        None => bounds.width - insets * 2.0,
    };
    width.max(0.0)
}

/// Insets applied above and below the fill. They shrink so that a bar at
/// least one unit tall keeps at least one unit of fill.
pub fn vertical_inset(bounds: Size, insets: f64) -> f64 {
    insets
        .min(((bounds.height - 1.0) / 2.0).floor())
        .max(0.0)
}

/// Height of the fill region.
pub fn full_height(bounds: Size, insets: f64) -> f64 {
    (bounds.height - vertical_inset(bounds, insets) * 2.0).max(0.0)
}

/// Width of the fill for a percent in `[0, 1]`.
pub fn fill_width(full_width: f64, percent: f64) -> f64 {
    full_width * percent
}

/// Corner radius of the fill region: the configured radius, capped so the
/// fill never becomes more than a pill.
pub fn fill_corner_radius(configured: f64, fill_height: f64) -> f64 {
    if configured * 2.0 > fill_height {
        (fill_height / 2.0).max(0.0)
    } else {
        configured
    }
}

/// The fill rectangle, anchored at the inset origin.
pub fn fill_rect(bounds: Size, insets: f64, fill_width: f64) -> Rect {
    Rect::new(
        insets,
        vertical_inset(bounds, insets),
        fill_width.max(0.0),
        full_height(bounds, insets),
    )
}

/// Brings a stored percent into `[0, 1]`. Absent and NaN values count as 0.
pub fn normalize_percent(percent: Option<f64>) -> f64 {
    match percent {
        Some(p) if p.is_nan() => 0.0,
        Some(p) => p.clamp(0.0, 1.0),
        None => 0.0,
    }
}

/// Converts a percent on the `[0, 100]` scale into the `[0, 1]` scale the
/// bar works in.
pub fn percent_from_hundred(value: f64) -> f64 {
    value / 100.0
}
