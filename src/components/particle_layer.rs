use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

use super::Component;
use crate::action::Action;
use crate::particles::{self, RainDrop, SunRay};
use crate::state::{Mode, ParticleKind};
use crate::theme;

/// Rays span roughly a quarter of the card width from their origin.
const RAY_LENGTH: f32 = 8.0;
/// Rays start this far out so the origin itself stays clear.
const RAY_INNER_RADIUS: f32 = 2.0;
/// Rays radiate from 30% down the card.
const RAY_ORIGIN_Y: f32 = 0.3;
const DROP_GLYPH: &str = "│";

/// Background decoration: twinkling sun rays or falling rain.
pub struct ParticleLayer;

pub struct ParticleLayerProps {
    pub mode: Mode,
    pub drop_seed: u64,
    pub tick_count: u32,
}

impl Component<Action> for ParticleLayer {
    type Props<'a> = ParticleLayerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();
        match props.mode.profile().particles {
            ParticleKind::Rays => {
                for ray in particles::sun_rays() {
                    paint_ray(buf, area, &ray, props.tick_count);
                }
            }
            ParticleKind::Drops => {
                for drop in particles::rain_drops(props.drop_seed) {
                    paint_drop(buf, area, &drop, props.tick_count);
                }
            }
        }
    }
}

fn paint_ray(buf: &mut Buffer, area: Rect, ray: &SunRay, tick: u32) {
    let origin_x = area.x as f32 + area.width as f32 / 2.0;
    let origin_y = area.y as f32 + area.height as f32 * RAY_ORIGIN_Y;
    let (sin, cos) = ray.angle_deg.to_radians().sin_cos();
    let glyph = ray_glyph(ray.angle_deg);
    let opacity = ray.opacity(tick);

    let mut radius = RAY_INNER_RADIUS;
    while radius <= RAY_LENGTH {
        // Cells are about twice as tall as wide
        let x = (origin_x + radius * cos).round();
        let y = (origin_y + radius * sin * 0.5).round();
        radius += 1.0;

        if x < 0.0 || y < 0.0 {
            continue;
        }
        let pos = Position::new(x as u16, y as u16);
        if !area.contains(pos) {
            continue;
        }
        tint(buf, pos, glyph, theme::RAY, opacity);
    }
}

fn paint_drop(buf: &mut Buffer, area: Rect, drop: &RainDrop, tick: u32) {
    let Some(frame) = drop.frame(tick) else {
        return;
    };
    if !(0.0..1.0).contains(&frame.y) {
        return;
    }
    let x = area.x + (drop.x * area.width as f32) as u16;
    let y = area.y + (frame.y * area.height as f32) as u16;
    let pos = Position::new(x, y);
    if area.contains(pos) {
        tint(buf, pos, DROP_GLYPH, theme::DROP, frame.opacity);
    }
}

fn tint(buf: &mut Buffer, pos: Position, glyph: &str, color: Color, opacity: f32) {
    if let Some(cell) = buf.cell_mut(pos) {
        let fg = theme::blend(cell.bg, color, opacity);
        cell.set_symbol(glyph).set_fg(fg);
    }
}

/// Line glyph closest to a direction, screen coordinates (y grows down).
pub fn ray_glyph(angle_deg: f32) -> &'static str {
    const GLYPHS: [&str; 4] = ["─", "╲", "│", "╱"];
    let step = (angle_deg.rem_euclid(180.0) / 45.0).round() as usize % GLYPHS.len();
    GLYPHS[step]
}
