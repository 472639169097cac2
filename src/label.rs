//! Label overlay.
//!
//! Each label position holds a pair of labels at the same frame: a "white"
//! one that is only visible where the fill covers it and a "colored" one that
//! is only visible where it does not. Together they make the text appear to
//! change color at the fill boundary.

use crate::geometry::{Rect, Size};
use unicode_width::UnicodeWidthStr;

/// Text color of the labels drawn on top of the fill.
pub const WHITE: &str = "#FFFFFF";

/// Text color used by the `BlackLabels` attribute.
pub const BLACK: &str = "#000000";

const TAB_REPLACEMENT: &str = "    ";

/// Makes label text fit on a single row: newlines become spaces, tabs become
/// four spaces and every other control character is dropped.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | '\r' => out.push(' '),
            '\t' => out.push_str(TAB_REPLACEMENT),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Where a label pair sits inside the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// Flush to the left edge, offset by the label offset.
    Left,
    /// Flush to the right edge, offset by the label offset.
    Right,
    /// Spanning the whole bar with the text centered.
    Center,
}

/// A single line of text with a color and a frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    /// The text, or `None` when the label shows nothing.
    pub text: Option<String>,
    /// Text color (hex or named color string).
    pub text_color: String,
    /// Frame in bar coordinates.
    pub frame: Rect,
}

impl Label {
    fn new(text_color: &str) -> Self {
        Self {
            text: None,
            text_color: text_color.to_string(),
            frame: Rect::default(),
        }
    }

    /// Display width of the text in cells.
    pub fn intrinsic_width(&self) -> f64 {
        self.text.as_deref().map_or(0, |text| text.width()) as f64
    }

    /// Shrinks or grows the frame to exactly fit the text.
    pub fn size_to_fit(&mut self) {
        self.frame.width = self.intrinsic_width();
        self.frame.height = 1.0;
    }
}

/// A white label and a colored label stacked at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPair {
    /// Where the pair sits.
    pub position: LabelPosition,
    /// Visible only inside the fill region.
    pub white: Label,
    /// Visible only outside the fill region.
    pub colored: Label,
}

impl LabelPair {
    /// Creates an empty pair.
    pub fn new(position: LabelPosition, colored_color: &str) -> Self {
        Self {
            position,
            white: Label::new(WHITE),
            colored: Label::new(colored_color),
        }
    }

    /// Sets the text of both labels, sanitized to a single row.
    pub fn set_text(&mut self, text: Option<&str>) {
        let text = text.map(sanitize);
        self.white.text = text.clone();
        self.colored.text = text;
    }

    /// Text shared by both labels.
    pub fn text(&self) -> Option<&str> {
        self.colored.text.as_deref()
    }

    /// Sets the color of the label shown outside the fill.
    pub fn set_colored_color(&mut self, color: &str) {
        self.colored.text_color = color.to_string();
    }

    /// Text color at a cell, depending on whether the fill covers it.
    pub fn color_for(&self, covered: bool) -> &str {
        if covered {
            &self.white.text_color
        } else {
            &self.colored.text_color
        }
    }

    /// Positions both labels inside a bar of the given size.
    ///
    /// `inset` is the space a drawn border takes from each side; labels never
    /// sit closer to the edge than that.
    pub fn layout(&mut self, bounds: Size, offset: f64, inset: f64) {
        self.colored.size_to_fit();
        let width = self.colored.frame.width;
        let y = ((bounds.height - 1.0) / 2.0).floor().max(0.0);
        let offset = offset.max(inset);

        let frame = match self.position {
            LabelPosition::Left => Rect::new(offset, y, width, 1.0),
            LabelPosition::Right => Rect::new(bounds.width - offset - width, y, width, 1.0),
            LabelPosition::Center => {
                Rect::new(inset, y, (bounds.width - inset * 2.0).max(0.0), 1.0)
            }
        };
        self.white.frame = frame;
        self.colored.frame = frame;
    }

    /// Left edge of the text itself; differs from the frame for centered text.
    pub fn text_x(&self) -> f64 {
        match self.position {
            LabelPosition::Center => {
                let frame = &self.colored.frame;
                frame.x + ((frame.width - self.colored.intrinsic_width()) / 2.0).floor()
            }
            _ => self.colored.frame.x,
        }
    }
}

/// The three label pairs of a bar, created once and then only mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOverlay {
    /// Left label pair.
    pub left: LabelPair,
    /// Right label pair.
    pub right: LabelPair,
    /// Center label pair.
    pub center: LabelPair,
}

impl LabelOverlay {
    /// Creates the overlay with empty labels.
    pub fn new(colored_color: &str) -> Self {
        Self {
            left: LabelPair::new(LabelPosition::Left, colored_color),
            right: LabelPair::new(LabelPosition::Right, colored_color),
            center: LabelPair::new(LabelPosition::Center, colored_color),
        }
    }

    /// Returns the pair at a position.
    pub fn pair(&self, position: LabelPosition) -> &LabelPair {
        match position {
            LabelPosition::Left => &self.left,
            LabelPosition::Right => &self.right,
            LabelPosition::Center => &self.center,
        }
    }

    /// Returns the pair at a position, mutably.
    pub fn pair_mut(&mut self, position: LabelPosition) -> &mut LabelPair {
        match position {
            LabelPosition::Left => &mut self.left,
            LabelPosition::Right => &mut self.right,
            LabelPosition::Center => &mut self.center,
        }
    }

    /// Pairs in drawing order; later pairs draw over earlier ones.
    pub fn pairs(&self) -> [&LabelPair; 3] {
        [&self.left, &self.right, &self.center]
    }

    /// Sets the color of every label shown outside the fill.
    pub fn set_colored_color(&mut self, color: &str) {
        self.left.set_colored_color(color);
        self.right.set_colored_color(color);
        self.center.set_colored_color(color);
    }

    /// Positions every pair.
    pub fn layout(&mut self, bounds: Size, offset: f64, inset: f64) {
        self.left.layout(bounds, offset, inset);
        self.right.layout(bounds, offset, inset);
        self.center.layout(bounds, offset, inset);
    }
}
