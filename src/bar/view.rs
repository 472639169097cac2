//! Terminal rendering of the percent bar.
//!
//! The bar is rasterised into a grid of cells, one per layout unit. Cells
//! whose center lies inside the fill region take the accent color as their
//! background. Label text is drawn on top, white where the fill covers it and
//! in the colored-label color elsewhere, and a visible border is drawn last.
//! The fill and the labels sit inside the border, so it never hides them.

use super::model::{Layout, Model};
use crate::geometry;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss::{self, Border, Color, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Cell {
    // Empty for the trailing half of a wide grapheme.
    pub(super) symbol: String,
    pub(super) fg: Option<String>,
    pub(super) bg: Option<String>,
}

impl Cell {
    fn blank() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: None,
            bg: None,
        }
    }
}

/// Largest number of rows or columns a bar renders.
pub(super) const MAX_CELLS: usize = 4096;

impl Model {
    /// Renders the bar at its presented fill width.
    pub fn view(&self) -> String {
        self.render(&self.layout())
    }

    /// Renders the bar as if it displayed `percent`, without touching the
    /// presented fill width or any running animation.
    pub fn view_as(&self, percent: f64) -> String {
        let width = geometry::fill_width(
            self.full_width(),
            geometry::normalize_percent(Some(percent)),
        );
        self.render(&self.layout_with_fill(width))
    }

    fn render(&self, layout: &Layout) -> String {
        self.rasterize(layout)
            .iter()
            .map(|row| render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn rasterize(&self, layout: &Layout) -> Vec<Vec<Cell>> {
        let cols = cell_count(layout.bounds.width);
        let rows = cell_count(layout.bounds.height);
        if cols == 0 || rows == 0 {
            return Vec::new();
        }

        let accent = self.color();
        let mut grid = vec![vec![Cell::blank(); cols]; rows];

        for (y, row) in grid.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if covers(layout, x, y) {
                    cell.bg = accent.map(str::to_string);
                }
            }
        }

        self.draw_labels(layout, &mut grid, cols, rows);

        if layout.border_width > 0.0 && cols >= 2 && rows >= 2 {
            let border = if layout.corner_radius > 0.0 {
                lipgloss::rounded_border()
            } else {
                lipgloss::normal_border()
            };
            draw_border(&mut grid, &border, accent);
        }

        grid
    }

    fn draw_labels(&self, layout: &Layout, grid: &mut [Vec<Cell>], cols: usize, rows: usize) {
        for pair in self.labels.pairs() {
            let Some(text) = pair.text() else {
                continue;
            };
            let y = pair.colored.frame.y.floor();
            if y < 0.0 || y as usize >= rows {
                continue;
            }
            let y = y as usize;

            let mut x = pair.text_x().floor() as i64;
            for grapheme in text.graphemes(true) {
                let width = grapheme.width() as i64;
                if width == 0 {
                    continue;
                }
                if x < 0 {
                    x += width;
                    continue;
                }
                if x.saturating_add(width) as usize > cols {
                    break;
                }

                let start = x as usize;
                let covered = covers(layout, start, y);
                let fg = Some(pair.color_for(covered).to_string());
                for offset in 0..width as usize {
                    let cell = &mut grid[y][start + offset];
                    cell.symbol = if offset == 0 {
                        grapheme.to_string()
                    } else {
                        String::new()
                    };
                    cell.fg = fg.clone();
                }
                x += width;
            }
        }
    }
}

/// Number of cells a length covers; non-finite lengths cover none.
fn cell_count(length: f64) -> usize {
    if !length.is_finite() || length <= 0.0 {
        return 0;
    }
    (length.round() as usize).min(MAX_CELLS)
}

fn covers(layout: &Layout, x: usize, y: usize) -> bool {
    layout.fill.contains(x as f64 + 0.5, y as f64 + 0.5)
}

fn draw_border(grid: &mut [Vec<Cell>], border: &Border, color: Option<&str>) {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut put = |x: usize, y: usize, symbol: &str| {
        grid[y][x] = Cell {
            symbol: symbol.to_string(),
            fg: color.map(str::to_string),
            bg: None,
        };
    };

    for x in 1..cols - 1 {
        put(x, 0, border.top);
        put(x, rows - 1, border.bottom);
    }
    for y in 1..rows - 1 {
        put(0, y, border.left);
        put(cols - 1, y, border.right);
    }
    put(0, 0, border.top_left);
    put(cols - 1, 0, border.top_right);
    put(0, rows - 1, border.bottom_left);
    put(cols - 1, rows - 1, border.bottom_right);
}

fn render_row(row: &[Cell]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_colors: (Option<&str>, Option<&str>) = (None, None);

    for cell in row {
        let colors = (cell.fg.as_deref(), cell.bg.as_deref());
        if colors != run_colors && !run.is_empty() {
            out.push_str(&paint(&run, run_colors));
            run.clear();
        }
        run_colors = colors;
        run.push_str(&cell.symbol);
    }
    if !run.is_empty() {
        out.push_str(&paint(&run, run_colors));
    }
    out
}

fn paint(text: &str, (fg, bg): (Option<&str>, Option<&str>)) -> String {
    if fg.is_none() && bg.is_none() {
        return text.to_string();
    }
    let mut style = Style::new();
    if let Some(fg) = fg {
        style = style.foreground(Color::from(fg));
    }
    if let Some(bg) = bg {
        style = style.background(Color::from(bg));
    }
    style.render(text)
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let model = super::model::new(&[]);
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
