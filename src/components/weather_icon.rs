use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::Component;
use super::backdrop::fade_foreground;
use super::particle_layer::ray_glyph;
use crate::action::Action;
use crate::particles::{bob_offset, halo_angle};
use crate::sprites::{self, DROPLET_ROWS, ICON_SPRITE_ROWS};
use crate::state::WeatherIcon;
use crate::theme;

/// Halo spokes around the sun.
const HALO_SPOKES: usize = 8;
const HALO_RADIUS_X: f32 = 7.0;
const HALO_RADIUS_Y: f32 = 3.5;
const HALO_OPACITY: f32 = 0.35;

pub struct WeatherIconView;

pub struct WeatherIconProps {
    pub icon: WeatherIcon,
    pub tick_count: u32,
    pub opacity: f32,
    /// Vertical shift from the resting position, clamped to the area
    pub offset_rows: i16,
}

impl Component<Action> for WeatherIconView {
    type Props<'a> = WeatherIconProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.is_empty() {
            return;
        }

        match sprites::icon_for_height(props.icon, area.height) {
            Some(art) => match props.icon {
                WeatherIcon::Sun => {
                    render_sun(frame, area, art, props.tick_count, props.offset_rows)
                }
                WeatherIcon::CloudRain => {
                    render_rain_cloud(frame, area, art, props.tick_count, props.offset_rows)
                }
            },
            None => {
                let emoji = Line::from(sprites::icon_emoji(props.icon)).centered();
                frame.render_widget(Paragraph::new(emoji), area);
            }
        }

        fade_foreground(frame.buffer_mut(), area, props.opacity);
    }
}

/// Top row of a `rows`-tall sprite moved `offset` rows from `rest`, kept inside `area`.
fn shifted_top(area: Rect, rest: u16, rows: u16, offset: i16) -> u16 {
    let lowest = area.bottom().saturating_sub(rows).max(area.y);
    (i32::from(rest) + i32::from(offset)).clamp(i32::from(area.y), i32::from(lowest)) as u16
}

fn render_sun(
    frame: &mut Frame,
    area: Rect,
    art: ratatui::text::Text<'static>,
    tick: u32,
    offset: i16,
) {
    let rest = area.y + area.height.saturating_sub(ICON_SPRITE_ROWS) / 2;
    let top = shifted_top(area, rest, ICON_SPRITE_ROWS, offset);
    let sprite_area = Rect::new(area.x, top, area.width, ICON_SPRITE_ROWS);

    paint_halo(frame.buffer_mut(), area, sprite_area, tick);
    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), sprite_area);
}

/// Faint spokes circling the sun, one turn every 20 seconds.
fn paint_halo(buf: &mut Buffer, area: Rect, sprite_area: Rect, tick: u32) {
    let center_x = sprite_area.x as f32 + sprite_area.width as f32 / 2.0;
    let center_y = sprite_area.y as f32 + (ICON_SPRITE_ROWS as f32 - 1.0) / 2.0;
    let base = halo_angle(tick);

    for spoke in 0..HALO_SPOKES {
        let angle = base + spoke as f32 * (360.0 / HALO_SPOKES as f32);
        let (sin, cos) = angle.to_radians().sin_cos();
        let x = (center_x + HALO_RADIUS_X * cos).round();
        let y = (center_y + HALO_RADIUS_Y * sin).round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let pos = Position::new(x as u16, y as u16);
        if !area.contains(pos) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            let fg = theme::blend(cell.bg, theme::SUN, HALO_OPACITY);
            cell.set_symbol(ray_glyph(angle)).set_fg(fg);
        }
    }
}

fn render_rain_cloud(
    frame: &mut Frame,
    area: Rect,
    art: ratatui::text::Text<'static>,
    tick: u32,
    offset: i16,
) {
    let sprite_h = ICON_SPRITE_ROWS.min(area.height);
    let top = shifted_top(area, area.y, sprite_h, offset);
    let sprite_area = Rect::new(area.x, top, area.width, sprite_h);
    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), sprite_area);

    // Droplet hangs under the cloud and bobs one row
    let bob = bob_offset(tick).round() as u16;
    let droplet_top = sprite_area.bottom() + bob;
    if droplet_top >= area.bottom() {
        return;
    }
    let droplet_h = DROPLET_ROWS.min(area.bottom() - droplet_top);
    let droplet_area = Rect::new(area.x, droplet_top, area.width, droplet_h);
    frame.render_widget(
        Paragraph::new(sprites::droplet_sprite()).alignment(Alignment::Center),
        droplet_area,
    );
}
