//! Tests for the percent bar component.

use super::*;
use crate::animation::{AnimationOptions, TimingCurve};
use crate::geometry::{Rect, Size};
use crate::label::{LabelPosition, BLACK, WHITE};
use crate::style::{Style, StyleAttribute};
use bubbletea_rs::Msg;
use lipgloss_extras::lipgloss;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn frame(bar: &Model) -> Msg {
    Box::new(FrameMsg {
        id: bar.id,
        tag: bar.tag,
    }) as Msg
}

/// Feeds frames until the bar stops asking for more; returns the frame count.
fn run_frames(bar: &mut Model) -> usize {
    let mut frames = 0;
    loop {
        let msg = frame(bar);
        if bar.update(msg).is_none() {
            return frames;
        }
        frames += 1;
        assert!(frames < 10_000, "animation never settled");
    }
}

fn recorder() -> (Arc<Mutex<Vec<bool>>>, crate::animation::Completion) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (
        calls,
        Box::new(move |finished| sink.lock().unwrap().push(finished)),
    )
}

#[test]
fn test_new_with_no_options() {
    let bar = new(&[]);
    assert_eq!(bar.bounds(), Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
    assert_eq!(bar.percent(), 0.0);
    assert_eq!(bar.fill_width(), 0.0);
    assert!(bar.color().is_none());
    assert!(bar.style().is_none());
    assert!(bar.style_attributes().is_none());
    assert_eq!(bar.border_width(), 0.0);
    assert_eq!(bar.corner_radius(), 0.0);
    assert!(!bar.is_animating());
}

#[test]
fn test_new_with_options() {
    let bar = new(&[
        with_size(60.0, 3.0),
        with_percent(0.4),
        with_color("#00ff00"),
        with_left_label("0%"),
        with_right_label("100%"),
        with_center_label("40%"),
        with_width_hint(50.0),
        with_label_offset(2.0),
    ]);

    assert_eq!(bar.bounds(), Size::new(60.0, 3.0));
    assert_eq!(bar.percent(), 0.4);
    assert_eq!(bar.color(), Some("#00ff00"));
    assert_eq!(bar.label_text(LabelPosition::Left), Some("0%"));
    assert_eq!(bar.label_text(LabelPosition::Right), Some("100%"));
    assert_eq!(bar.label_text(LabelPosition::Center), Some("40%"));
    assert_eq!(bar.width_hint(), Some(50.0));
    assert_eq!(bar.full_width(), 50.0);
    assert_eq!(bar.layout().left_label.x, 2.0);
}

#[test]
fn test_unique_ids() {
    let first = new(&[]);
    let second = new(&[]);
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_default_implementation() {
    let bar = Model::default();
    assert_eq!(bar.bounds().width, DEFAULT_WIDTH);
    assert_eq!(bar.percent(), 0.0);
}

#[test]
fn test_setting_percent_does_not_move_fill() {
    let mut bar = new(&[with_size(200.0, 1.0)]);
    bar.set_percent(0.5);
    assert_eq!(bar.fill_width(), 0.0);
    assert_eq!(bar.target_fill_width(), 100.0);
    assert!(!bar.is_animating());
}

#[test]
fn test_missing_percent_renders_as_zero() {
    let mut bar = new(&[with_size(200.0, 1.0), with_percent(0.5)]);
    bar.clear_percent();
    bar.snap_to_full_width();
    assert_eq!(bar.fill_width(), 0.0);
}

#[test]
fn test_percent_is_clamped() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    bar.snap_to(1.5);
    assert_eq!(bar.fill_width(), 100.0);
    bar.snap_to(-0.2);
    assert_eq!(bar.fill_width(), 0.0);
}

#[test]
fn test_snap_to_full_width() {
    let mut bar = new(&[with_size(200.0, 1.0)]);
    bar.set_percent(0.5);
    bar.snap_to_full_width();
    assert_eq!(bar.fill_width(), 100.0);
}

#[test]
fn test_snap_to_full_width_is_idempotent() {
    let mut bar = new(&[with_size(200.0, 4.0), with_style(Style::InsetWithBorder)]);
    bar.set_percent(0.3);
    bar.snap_to_full_width();
    let first = bar.layout();
    bar.snap_to_full_width();
    assert_eq!(bar.layout(), first);
}

#[test]
fn test_fill_width_is_proportional() {
    let mut bar = new(&[with_size(240.0, 1.0)]);
    for step in 0..=10 {
        let p = step as f64 / 10.0;
        bar.snap_to(p);
        assert!(approx(bar.fill_width(), p * 240.0));
    }
}

#[test]
fn test_width_hint_overrides_measured_width() {
    let mut bar = new(&[with_size(200.0, 1.0), with_width_hint(80.0)]);
    bar.snap_to(0.5);
    assert_eq!(bar.fill_width(), 40.0);

    bar.set_width_hint(None);
    bar.snap_to_full_width();
    assert_eq!(bar.fill_width(), 100.0);
}

#[test]
fn test_snap_to_zero_width() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    bar.snap_to(0.8);
    bar.snap_to_zero_width();
    assert_eq!(bar.fill_width(), 0.0);
    // The percent itself is untouched.
    assert_eq!(bar.percent(), 0.8);
}

#[test]
fn test_resize_keeps_fill_width() {
    let mut bar = new(&[with_size(100.0, 1.0), with_right_label("100%")]);
    bar.snap_to(0.5);
    bar.set_bounds(Size::new(200.0, 1.0));
    assert_eq!(bar.fill_width(), 50.0);
    assert_eq!(bar.target_fill_width(), 100.0);
    assert_eq!(bar.layout().right_label.x, 195.0);
}

#[test]
fn test_round_style_on_height_40() {
    let mut bar = new(&[with_size(200.0, 40.0)]);
    bar.set_style(Style::Round);
    assert_eq!(bar.corner_radius(), 20.0);
    assert_eq!(bar.border_width(), 1.0);
}

#[test]
fn test_round_radius_follows_height() {
    let mut bar = new(&[with_size(200.0, 40.0), with_style(Style::Round)]);
    bar.set_bounds(Size::new(200.0, 10.0));
    assert_eq!(bar.corner_radius(), 5.0);
}

#[test]
fn test_fill_corner_radius_is_clamped() {
    let bar = new(&[with_size(100.0, 10.0), with_style(Style::RoundedRectangle)]);
    assert_eq!(bar.corner_radius(), 8.0);
    // The border leaves 8 rows of fill.
    assert_eq!(bar.fill_corner_radius(), 4.0);

    let bare = new(&[
        with_size(100.0, 10.0),
        with_style(Style::RoundedRectangle),
        with_style_attributes(&[StyleAttribute::NoBorder]),
    ]);
    assert_eq!(bare.fill_corner_radius(), 5.0);

    let tall = new(&[with_size(100.0, 40.0), with_style(Style::RoundedRectangle)]);
    assert_eq!(tall.fill_corner_radius(), 8.0);
}

#[test]
fn test_inset_with_border_style() {
    let mut bar = new(&[with_size(108.0, 20.0), with_style(Style::InsetWithBorder)]);
    assert_eq!(bar.insets(), 4.0);
    assert_eq!(bar.border_width(), 2.0);
    assert_eq!(bar.corner_radius(), 10.0);
    assert_eq!(bar.full_width(), 100.0);

    bar.snap_to(0.5);
    let layout = bar.layout();
    assert_eq!(layout.fill, Rect::new(4.0, 4.0, 50.0, 12.0));
    assert_eq!(layout.fill_corner_radius, 6.0);
}

#[test]
fn test_style_then_attributes() {
    let mut bar = new(&[with_size(100.0, 3.0)]);
    bar.set_style(Style::Rectangle);
    bar.set_style_attributes(&[StyleAttribute::NoBorder]);
    assert_eq!(bar.border_width(), 0.0);
}

#[test]
fn test_attributes_win_regardless_of_call_order() {
    let mut bar = new(&[with_size(100.0, 3.0)]);
    bar.set_style_attributes(&[StyleAttribute::NoBorder]);
    bar.set_style(Style::Rectangle);
    assert_eq!(bar.border_width(), 0.0);

    let configured = new(&[
        with_style_attributes(&[StyleAttribute::NoBorder]),
        with_style(Style::Round),
    ]);
    assert_eq!(configured.border_width(), 0.0);
}

#[test]
fn test_no_border_keeps_corner_radius() {
    let bar = new(&[
        with_size(100.0, 20.0),
        with_style(Style::RoundedRectangle),
        with_style_attributes(&[StyleAttribute::NoBorder]),
    ]);
    assert_eq!(bar.corner_radius(), 8.0);
    assert_eq!(bar.border_width(), 0.0);
}

#[test]
fn test_border_attribute_without_style() {
    let bar = new(&[with_style_attributes(&[StyleAttribute::Border])]);
    assert_eq!(bar.border_width(), 1.0);
    assert_eq!(bar.corner_radius(), 0.0);
}

#[test]
fn test_clearing_style_and_attributes() {
    let mut bar = new(&[
        with_style(Style::InsetWithBorder),
        with_style_attributes(&[StyleAttribute::BlackLabels]),
    ]);
    bar.set_style(None);
    bar.clear_style_attributes();
    assert_eq!(bar.insets(), 0.0);
    assert_eq!(bar.border_width(), 0.0);
}

#[test]
fn test_colored_label_color() {
    let mut bar = new(&[]);
    assert_eq!(bar.colored_label_color(), BLACK);

    bar.set_color("#ff0000");
    assert_eq!(bar.colored_label_color(), "#ff0000");

    bar.set_style_attributes(&[StyleAttribute::BlackLabels]);
    assert_eq!(bar.colored_label_color(), BLACK);

    // A later color change does not undo the attribute.
    bar.set_color("#00ff00");
    assert_eq!(bar.colored_label_color(), BLACK);

    bar.set_style_attributes(&[StyleAttribute::BlackLabels, StyleAttribute::ColorLabels]);
    assert_eq!(bar.colored_label_color(), "#00ff00");

    bar.clear_color();
    assert_eq!(bar.colored_label_color(), BLACK);
}

#[test]
fn test_style_attribute_names_skip_unknown() {
    let mut bar = new(&[with_style(Style::Rectangle)]);
    bar.set_style_attribute_names(&["Sparkle", "NoBorder"]);
    assert_eq!(bar.style_attributes(), Some(&[StyleAttribute::NoBorder][..]));
    assert_eq!(bar.border_width(), 0.0);
}

#[test]
fn test_set_style_name() {
    let mut bar = new(&[with_size(100.0, 10.0)]);
    bar.set_style_name("Round");
    assert_eq!(bar.style(), Some(Style::Round));

    let logs = crate::test_support::capture_warnings(|| bar.set_style_name("Hexagon"));
    assert_eq!(bar.style(), Some(Style::Round));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("Hexagon"));
}

#[test]
fn test_unknown_attribute_names_are_logged() {
    let mut bar = new(&[]);
    let logs =
        crate::test_support::capture_warnings(|| bar.set_style_attribute_names(&["Sparkle"]));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("Sparkle"));
    assert_eq!(bar.style_attributes(), Some(&[][..]));
}

#[test]
fn test_configure_recomputes_appearance() {
    let mut bar = new(&[with_size(100.0, 10.0)]);
    bar.configure(&[with_style(Style::Round), with_color("#123456")]);
    assert_eq!(bar.corner_radius(), 5.0);
    assert_eq!(bar.colored_label_color(), "#123456");
    // Configuration alone does not move the fill.
    bar.configure(&[with_percent(1.0)]);
    assert_eq!(bar.fill_width(), 0.0);
}

#[test]
fn test_animate_to_new_percent_end_to_end() {
    let mut bar = new(&[with_size(200.0, 1.0)]);
    bar.set_percent(0.5);
    bar.snap_to_full_width();
    assert_eq!(bar.fill_width(), 100.0);

    let (calls, completion) = recorder();
    std::mem::drop(bar.animate_to_percent_with(
        0.75,
        AnimationOptions::new(Duration::from_millis(300)),
        Some(completion),
    ));
    assert!(bar.is_animating());

    let frames = run_frames(&mut bar);
    assert!(frames > 0);
    assert_eq!(bar.fill_width(), 150.0);
    assert!(!bar.is_animating());
    assert_eq!(*calls.lock().unwrap(), vec![true]);

    // Further frames do nothing and never fire the completion again.
    let msg = frame(&bar);
    assert!(bar.update(msg).is_none());
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_animation_moves_monotonically_without_overshoot() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    std::mem::drop(bar.animate_to_percent(1.0));

    let mut last = bar.fill_width();
    loop {
        let msg = frame(&bar);
        let next = bar.update(msg);
        assert!(bar.fill_width() >= last);
        assert!(bar.fill_width() <= 100.0);
        last = bar.fill_width();
        if next.is_none() {
            break;
        }
    }
    assert_eq!(bar.fill_width(), 100.0);
}

#[test]
fn test_new_animation_interrupts_previous() {
    let mut bar = new(&[with_size(200.0, 1.0)]);
    let (calls_a, completion_a) = recorder();
    let (calls_b, completion_b) = recorder();

    std::mem::drop(bar.animate_to_percent_with(
        1.0,
        AnimationOptions::default(),
        Some(completion_a),
    ));
    let msg = frame(&bar);
    assert!(bar.update(msg).is_some());
    let old_tag = bar.tag;

    std::mem::drop(bar.animate_to_percent_with(
        0.25,
        AnimationOptions::default(),
        Some(completion_b),
    ));
    assert_eq!(*calls_a.lock().unwrap(), vec![false]);
    assert!(calls_b.lock().unwrap().is_empty());

    // A frame scheduled by the first animation is stale now.
    let stale = Box::new(FrameMsg {
        id: bar.id,
        tag: old_tag,
    }) as Msg;
    assert!(bar.update(stale).is_none());
    assert!(bar.is_animating());

    run_frames(&mut bar);
    assert_eq!(bar.fill_width(), 50.0);
    assert_eq!(*calls_a.lock().unwrap(), vec![false]);
    assert_eq!(*calls_b.lock().unwrap(), vec![true]);
}

#[test]
fn test_snap_interrupts_animation() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    let (calls, completion) = recorder();
    std::mem::drop(bar.spring_animate_to_percent_with(
        1.0,
        AnimationOptions::default(),
        0.5,
        0.0,
        Some(completion),
    ));

    bar.snap_to_zero_width();
    assert_eq!(*calls.lock().unwrap(), vec![false]);
    assert!(!bar.is_animating());
    assert_eq!(bar.fill_width(), 0.0);

    let msg = frame(&bar);
    assert!(bar.update(msg).is_none());
    assert_eq!(bar.fill_width(), 0.0);
}

#[test]
fn test_animation_starts_from_presented_width() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    bar.snap_to(0.2);
    std::mem::drop(bar.animate_to_percent_with(
        0.6,
        AnimationOptions::new(Duration::from_millis(100)).with_delay(Duration::from_millis(50)),
        None,
    ));

    // Still inside the delay.
    let msg = frame(&bar);
    std::mem::drop(bar.update(msg));
    assert_eq!(bar.fill_width(), 20.0);

    run_frames(&mut bar);
    assert_eq!(bar.fill_width(), 60.0);
}

#[test]
fn test_spring_animation_settles_on_target() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    std::mem::drop(bar.spring_animate_to_percent(0.5));

    let mut peak: f64 = 0.0;
    loop {
        let msg = frame(&bar);
        let next = bar.update(msg);
        peak = peak.max(bar.fill_width());
        if next.is_none() {
            break;
        }
    }
    assert_eq!(bar.fill_width(), 50.0);
    assert!(peak >= 50.0);
}

#[test]
fn test_spring_animate_to_full_width_uses_current_percent() {
    let mut bar = new(&[with_size(100.0, 1.0), with_percent(0.9)]);
    std::mem::drop(bar.spring_animate_to_full_width());
    run_frames(&mut bar);
    assert!(approx(bar.fill_width(), 90.0));
}

#[test]
fn test_animate_to_zero_width() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    bar.snap_to(0.6);

    let (calls, completion) = recorder();
    std::mem::drop(bar.animate_to_zero_width_with(
        AnimationOptions::new(Duration::from_millis(200)).with_curve(TimingCurve::Linear),
        Some(completion),
    ));
    run_frames(&mut bar);
    assert_eq!(bar.fill_width(), 0.0);
    assert_eq!(*calls.lock().unwrap(), vec![true]);

    std::mem::drop(bar.animate_to_full_width());
    run_frames(&mut bar);
    assert!(approx(bar.fill_width(), 60.0));

    std::mem::drop(bar.animate_to_zero_width());
    run_frames(&mut bar);
    assert_eq!(bar.fill_width(), 0.0);
}

#[test]
fn test_update_ignores_foreign_messages() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    std::mem::drop(bar.animate_to_percent(1.0));

    let wrong_id = Box::new(FrameMsg {
        id: bar.id + 999,
        tag: bar.tag,
    }) as Msg;
    assert!(bar.update(wrong_id).is_none());

    let not_a_frame = Box::new("hello") as Msg;
    assert!(bar.update(not_a_frame).is_none());

    assert_eq!(bar.fill_width(), 0.0);
    assert!(bar.is_animating());
}

#[test]
fn test_frame_without_animation_is_ignored() {
    let mut bar = new(&[]);
    let msg = frame(&bar);
    assert!(bar.update(msg).is_none());
}

#[tokio::test]
async fn test_animate_command_yields_frame_msg() {
    let mut bar = new(&[with_size(100.0, 1.0)]);
    let cmd = bar.animate_to_percent(0.5);

    let msg = cmd.await.expect("frame command should produce a message");
    let frame_msg = msg
        .downcast_ref::<FrameMsg>()
        .expect("message should be a frame");
    assert_eq!(frame_msg.id, bar.id);
    assert_eq!(frame_msg.tag, bar.tag);

    assert!(bar.update(msg).is_some());
    assert!(bar.fill_width() > 0.0);
}

#[test]
fn test_view_dimensions() {
    let mut bar = new(&[with_size(10.0, 3.0), with_color("#ff0000")]);
    bar.snap_to(0.5);
    let plain = lipgloss::strip_ansi(&bar.view());
    let lines: Vec<&str> = plain.split('\n').collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(lipgloss::width_visible(line), 10);
    }
}

#[test]
fn test_view_places_labels() {
    let bar = new(&[
        with_size(10.0, 1.0),
        with_left_label("0%"),
        with_right_label("100%"),
    ]);
    assert_eq!(lipgloss::strip_ansi(&bar.view()), " 0%  100% ");
}

#[test]
fn test_view_centers_label() {
    let bar = new(&[with_size(11.0, 1.0), with_center_label("abc")]);
    assert_eq!(lipgloss::strip_ansi(&bar.view()), "    abc    ");
}

#[test]
fn test_fill_cells_use_accent_background() {
    let mut bar = new(&[with_size(10.0, 1.0), with_color("#ff0000")]);
    bar.snap_to(0.5);
    let grid = bar.rasterize(&bar.layout());
    for (x, cell) in grid[0].iter().enumerate() {
        if x < 5 {
            assert_eq!(cell.bg.as_deref(), Some("#ff0000"));
        } else {
            assert!(cell.bg.is_none());
        }
    }
}

#[test]
fn test_label_color_flips_at_fill_boundary() {
    let mut bar = new(&[
        with_size(10.0, 1.0),
        with_color("#ff0000"),
        with_left_label("0%"),
        with_right_label("100%"),
    ]);
    bar.snap_to(0.5);
    let grid = bar.rasterize(&bar.layout());
    let row = &grid[0];

    // "0%" sits under the fill.
    assert_eq!(row[1].symbol, "0");
    assert_eq!(row[1].fg.as_deref(), Some(WHITE));
    assert_eq!(row[1].bg.as_deref(), Some("#ff0000"));

    // "100%" sits outside of it.
    assert_eq!(row[5].symbol, "1");
    assert_eq!(row[5].fg.as_deref(), Some("#ff0000"));
    assert!(row[5].bg.is_none());

    bar.set_style_attributes(&[StyleAttribute::BlackLabels]);
    let grid = bar.rasterize(&bar.layout());
    assert_eq!(grid[0][5].fg.as_deref(), Some(BLACK));
    assert_eq!(grid[0][1].fg.as_deref(), Some(WHITE));
}

#[test]
fn test_wide_label_graphemes_take_two_cells() {
    let bar = new(&[with_size(10.0, 1.0), with_left_label("進捗")]);
    let grid = bar.rasterize(&bar.layout());
    assert_eq!(grid[0][1].symbol, "進");
    assert_eq!(grid[0][2].symbol, "");
    assert_eq!(grid[0][3].symbol, "捗");
    assert_eq!(lipgloss::width_visible(&bar.view()), 10);
}

#[test]
fn test_border_glyphs_follow_corner_radius() {
    let square = new(&[with_size(6.0, 3.0), with_style(Style::Rectangle)]);
    let grid = square.rasterize(&square.layout());
    assert_eq!(grid[0][0].symbol, "┌");
    assert_eq!(grid[2][5].symbol, "┘");
    assert_eq!(grid[1][0].symbol, "│");

    let round = new(&[with_size(6.0, 3.0), with_style(Style::Round)]);
    let grid = round.rasterize(&round.layout());
    assert_eq!(grid[0][0].symbol, "╭");
    assert_eq!(grid[2][5].symbol, "╯");

    let hidden = new(&[
        with_size(6.0, 3.0),
        with_style(Style::Round),
        with_style_attributes(&[StyleAttribute::NoBorder]),
    ]);
    let grid = hidden.rasterize(&hidden.layout());
    assert_eq!(grid[0][0].symbol, " ");
}

#[test]
fn test_view_as_does_not_change_state() {
    let mut bar = new(&[with_size(10.0, 1.0), with_color("#ff0000")]);
    bar.snap_to(0.2);
    let full = bar.view_as(1.0);
    assert_eq!(bar.fill_width(), 2.0);
    assert_ne!(full, bar.view());
    assert_eq!(bar.view_as(0.2), bar.view());
}

#[test]
fn test_empty_bounds_render_nothing() {
    let bar = new(&[with_size(0.0, 0.0), with_left_label("0%")]);
    assert_eq!(bar.view(), "");
}

#[test]
fn test_border_glyphs_come_from_lipgloss() {
    let square = new(&[with_size(6.0, 3.0), with_style(Style::Rectangle)]);
    let grid = square.rasterize(&square.layout());
    let border = lipgloss::normal_border();
    assert_eq!(grid[0][0].symbol, border.top_left);
    assert_eq!(grid[0][3].symbol, border.top);
    assert_eq!(grid[2][3].symbol, border.bottom);
    assert_eq!(grid[1][5].symbol, border.right);

    let round = new(&[with_size(6.0, 3.0), with_style(Style::RoundedRectangle)]);
    let grid = round.rasterize(&round.layout());
    assert_eq!(grid[2][0].symbol, lipgloss::rounded_border().bottom_left);
}

#[test]
fn test_control_characters_keep_one_line_per_row() {
    let bar = new(&[
        with_size(12.0, 1.0),
        with_left_label("a\nb"),
        with_right_label("c\td"),
    ]);
    let plain = lipgloss::strip_ansi(&bar.view());
    assert_eq!(plain.split('\n').count(), 1);
    assert_eq!(lipgloss::width_visible(&plain), 12);
    assert_eq!(bar.label_text(LabelPosition::Left), Some("a b"));

    let mut tall = new(&[with_size(12.0, 3.0), with_style(Style::Rectangle)]);
    tall.set_center_label_text(Some("x\r\ny"));
    let plain = lipgloss::strip_ansi(&tall.view());
    assert_eq!(plain.split('\n').count(), 3);
}

#[test]
fn test_inset_style_fills_short_bars() {
    let mut bar = new(&[
        with_size(20.0, 3.0),
        with_color("#ff0000"),
        with_style(Style::InsetWithBorder),
    ]);
    bar.snap_to(1.0);
    assert_eq!(bar.fill_width(), 12.0);

    let grid = bar.rasterize(&bar.layout());
    let filled: Vec<(usize, usize)> = grid
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.bg.is_some())
                .map(move |(x, _)| (x, y))
        })
        .collect();
    assert_eq!(filled.len(), 12);
    assert!(filled.iter().all(|&(x, y)| y == 1 && (4..16).contains(&x)));
}

#[test]
fn test_fill_sits_inside_border() {
    let mut bar = new(&[
        with_size(10.0, 3.0),
        with_color("#ff0000"),
        with_style(Style::Round),
    ]);
    bar.snap_to(1.0);
    assert_eq!(bar.full_width(), 8.0);
    assert_eq!(bar.fill_width(), 8.0);

    let grid = bar.rasterize(&bar.layout());
    for x in 1..9 {
        assert_eq!(grid[1][x].bg.as_deref(), Some("#ff0000"));
    }
    assert!(grid[0].iter().all(|cell| cell.bg.is_none()));
    assert!(grid[2].iter().all(|cell| cell.bg.is_none()));
}

#[test]
fn test_border_skipped_when_bar_too_short() {
    let bar = new(&[
        with_size(10.0, 2.0),
        with_style(Style::Rectangle),
        with_left_label("ab"),
    ]);
    assert_eq!(bar.border_width(), 1.0);
    assert_eq!(bar.layout().border_width, 0.0);
    assert_eq!(
        lipgloss::strip_ansi(&bar.view()),
        " ab       \n          "
    );
}

#[test]
fn test_labels_stay_inside_border() {
    let bar = new(&[
        with_size(10.0, 3.0),
        with_style(Style::Rectangle),
        with_label_offset(0.0),
        with_left_label("ab"),
        with_right_label("cd"),
    ]);
    let plain = lipgloss::strip_ansi(&bar.view());
    let lines: Vec<&str> = plain.split('\n').collect();
    assert_eq!(lines, vec!["┌────────┐", "│ab    cd│", "└────────┘"]);
}

#[test]
fn test_huge_or_non_finite_bounds() {
    let infinite = new(&[with_size(f64::INFINITY, 1.0), with_left_label("0%")]);
    assert_eq!(infinite.view(), "");

    let nan = new(&[with_size(10.0, f64::NAN)]);
    assert_eq!(nan.view(), "");

    let huge = new(&[with_size(1e12, 2.0), with_right_label("100%")]);
    let plain = lipgloss::strip_ansi(&huge.view());
    let lines: Vec<&str> = plain.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lipgloss::width_visible(lines[0]), super::view::MAX_CELLS);
}
