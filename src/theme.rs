//! Colors and gradient math shared by the card components.
//!
//! All colors are 24-bit so they can be blended; named terminal colors are
//! passed through untouched by [`blend`].

use ratatui::style::Color;

/// A three-stop diagonal gradient (0%, 50%, 100%).
pub type Gradient = [Color; 3];

// Page backdrop (blue-50 → gray-100)
pub const PAGE_GRADIENT: Gradient = [
    Color::Rgb(239, 246, 255),
    Color::Rgb(241, 245, 250),
    Color::Rgb(243, 244, 246),
];

pub const SUNNY_GRADIENT: Gradient = [
    Color::Rgb(254, 243, 199), // #fef3c7
    Color::Rgb(253, 230, 138), // #fde68a
    Color::Rgb(252, 211, 77),  // #fcd34d
];

pub const RAINY_GRADIENT: Gradient = [
    Color::Rgb(229, 231, 235), // #e5e7eb
    Color::Rgb(209, 213, 219), // #d1d5db
    Color::Rgb(156, 163, 175), // #9ca3af
];

pub const TEXT_STRONG: Color = Color::Rgb(31, 41, 55); // gray-800
pub const TEXT: Color = Color::Rgb(55, 65, 81); // gray-700
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128); // gray-500
pub const ICON_MUTED: Color = Color::Rgb(75, 85, 99); // gray-600

pub const SUN: Color = Color::Rgb(234, 179, 8); // yellow-500
pub const RAY: Color = Color::Rgb(254, 240, 138); // yellow-200
pub const DROP: Color = Color::Rgb(147, 197, 253); // blue-300
pub const DROPLET: Color = Color::Rgb(96, 165, 250); // blue-400

pub const SURFACE: Color = Color::Rgb(255, 255, 255);

pub const BORDER: Color = Color::Rgb(209, 213, 219);
pub const BORDER_HOVER: Color = Color::Rgb(156, 163, 175);

/// Linear interpolation between two RGB colors, `t` clamped to `0..=1`.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 1.0 => to,
        _ => from,
    }
}

/// Sample a gradient at `position` in `0..=1`.
pub fn sample(gradient: &Gradient, position: f32) -> Color {
    let pos = position.clamp(0.0, 1.0);
    if pos <= 0.5 {
        blend(gradient[0], gradient[1], pos * 2.0)
    } else {
        blend(gradient[1], gradient[2], (pos - 0.5) * 2.0)
    }
}

/// Cross-fade two gradients stop by stop.
pub fn mix_gradients(from: &Gradient, to: &Gradient, t: f32) -> Gradient {
    [
        blend(from[0], to[0], t),
        blend(from[1], to[1], t),
        blend(from[2], to[2], t),
    ]
}

/// Position of a cell along a 135° gradient (top-left → bottom-right).
///
/// Terminal cells are roughly twice as tall as wide, so rows count double.
pub fn diagonal_position(col: u16, row: u16, width: u16, height: u16) -> f32 {
    let w = width.saturating_sub(1).max(1) as f32;
    let h = (height.saturating_sub(1).max(1) as f32) * 2.0;
    (col as f32 + row as f32 * 2.0) / (w + h)
}
