//! Direct buffer painting: gradients and opacity fades.
//!
//! ratatui has no alpha channel, so opacity is emulated by blending a cell's
//! colors toward whatever sits underneath it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::theme::{self, Gradient};

/// Fill `area` with a 135° gradient, clearing any symbols.
pub fn paint_gradient(buf: &mut Buffer, area: Rect, gradient: &Gradient) {
    for pos in area.intersection(buf.area).positions() {
        let color = theme::sample(
            gradient,
            theme::diagonal_position(pos.x - area.x, pos.y - area.y, area.width, area.height),
        );
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_symbol(" ").set_bg(color);
        }
    }
}

/// Fade foreground colors toward their own cell background.
///
/// `alpha` 0 makes glyphs invisible, 1 leaves them untouched.
pub fn fade_foreground(buf: &mut Buffer, area: Rect, alpha: f32) {
    if alpha >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for pos in area.positions() {
        if let Some(cell) = buf.cell_mut(pos) {
            let fg = theme::blend(cell.bg, cell.fg, alpha);
            cell.set_fg(fg);
        }
    }
}

/// Fade a whole region (glyphs and background) in over an underlying gradient.
///
/// `backdrop` is the area the underlay gradient spans, so positions line up
/// with what [`paint_gradient`] drew there.
pub fn fade_in_over(buf: &mut Buffer, area: Rect, alpha: f32, underlay: &Gradient, backdrop: Rect) {
    if alpha >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area).intersection(backdrop);
    for pos in area.positions() {
        let under = theme::sample(
            underlay,
            theme::diagonal_position(
                pos.x - backdrop.x,
                pos.y - backdrop.y,
                backdrop.width,
                backdrop.height,
            ),
        );
        if let Some(cell) = buf.cell_mut(pos) {
            let fg = theme::blend(under, cell.fg, alpha);
            let bg = theme::blend(under, cell.bg, alpha);
            cell.set_fg(fg).set_bg(bg);
        }
    }
}
