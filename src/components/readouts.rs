use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use super::backdrop::fade_foreground;
use crate::action::Action;
use crate::state::{Mode, ModeProfile};
use crate::theme;

/// FIGlet temperature needs at least this many rows; below it we print plain text.
pub const FIGLET_MIN_ROWS: u16 = 4;
pub const UNIT_LABEL: &str = "Celsius";
pub const WIND_GLYPH: &str = "\u{224b}";
pub const HUMIDITY_GLYPH: &str = "\u{25cd}";

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

// ============================================================================
// Temperature
// ============================================================================

pub struct TemperatureReadout;

pub struct TemperatureReadoutProps {
    pub profile: &'static ModeProfile,
    /// Pop-in after a toggle, 0 → 1
    pub pop_progress: f32,
    /// Pill background
    pub surface: Color,
}

impl Component<Action> for TemperatureReadout {
    type Props<'a> = TemperatureReadoutProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Temperature
            Constraint::Length(1), // Unit pill
        ])
        .split(area);

        let temp_area = chunks[0];
        if temp_area.height >= FIGLET_MIN_ROWS {
            let renderer = Renderer::new(font_stack())
                .with_plain_fallback()
                .with_alignment(ArtAlignment::Center)
                .with_fill(temperature_fill(props.profile.mode));
            frame.render_widget(ArtBox::new(&renderer, props.profile.temperature), temp_area);
        } else {
            let temp = Line::from(Span::styled(
                props.profile.temperature,
                Style::default().fg(theme::TEXT_STRONG).bold(),
            ))
            .centered();
            frame.render_widget(Paragraph::new(temp), temp_area);
        }
        fade_foreground(frame.buffer_mut(), temp_area, props.pop_progress);

        let pill = Line::from(Span::styled(
            format!(" {UNIT_LABEL} "),
            Style::default().fg(theme::TEXT_MUTED).bg(props.surface),
        ))
        .centered();
        frame.render_widget(Paragraph::new(pill), chunks[1]);
    }
}

fn temperature_fill(mode: Mode) -> Fill {
    let (start, end) = match mode {
        Mode::Sunny => (ArtColor::rgb(245, 158, 11), ArtColor::rgb(234, 88, 12)),
        Mode::Rainy => (ArtColor::rgb(71, 85, 105), ArtColor::rgb(37, 99, 235)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

// ============================================================================
// Wind / humidity tiles
// ============================================================================

pub struct DetailTiles;

pub struct DetailTilesProps {
    pub profile: &'static ModeProfile,
    pub is_hovered: bool,
}

/// Rows a bordered tile takes.
pub const TILE_ROWS: u16 = 3;

impl Component<Action> for DetailTiles {
    type Props<'a> = DetailTilesProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let border = if props.is_hovered {
            theme::BORDER_HOVER
        } else {
            theme::BORDER
        };
        render_tile(frame, chunks[0], WIND_GLYPH, props.profile.wind, border);
        render_tile(frame, chunks[2], HUMIDITY_GLYPH, props.profile.humidity, border);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, glyph: &str, value: &str, border: Color) {
    let line = Line::from(vec![
        Span::styled(glyph.to_string(), Style::default().fg(theme::ICON_MUTED)),
        Span::raw(" "),
        Span::styled(value.to_string(), Style::default().fg(theme::TEXT).bold()),
    ])
    .centered();

    if area.height >= TILE_ROWS {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(line), inner);
    } else {
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_plain_temperature_when_short() {
        let mut render = RenderHarness::new(26, 2);
        let mut readout = TemperatureReadout;

        let output = render.render_to_string_plain(|frame| {
            readout.render(
                frame,
                frame.area(),
                TemperatureReadoutProps {
                    profile: Mode::Rainy.profile(),
                    pop_progress: 1.0,
                    surface: Color::Rgb(255, 255, 255),
                },
            );
        });

        assert!(output.contains("18°"));
        assert!(output.contains("Celsius"));
    }

    #[test]
    fn test_tall_temperature_renders() {
        let mut render = RenderHarness::new(26, 8);
        let mut readout = TemperatureReadout;

        let output = render.render_to_string_plain(|frame| {
            readout.render(
                frame,
                frame.area(),
                TemperatureReadoutProps {
                    profile: Mode::Sunny.profile(),
                    pop_progress: 1.0,
                    surface: Color::Rgb(255, 255, 255),
                },
            );
        });

        // FIGlet glyphs are not the literal text, but the pill always is
        assert!(output.contains("Celsius"));
    }

    #[test]
    fn test_tiles_show_both_values() {
        let mut render = RenderHarness::new(26, 3);
        let mut tiles = DetailTiles;

        let output = render.render_to_string_plain(|frame| {
            tiles.render(
                frame,
                frame.area(),
                DetailTilesProps {
                    profile: Mode::Sunny.profile(),
                    is_hovered: false,
                },
            );
        });

        assert!(output.contains("12 km/h"));
        assert!(output.contains("45%"));
    }

    #[test]
    fn test_tiles_flat_when_one_row() {
        let mut render = RenderHarness::new(26, 1);
        let mut tiles = DetailTiles;

        let output = render.render_to_string_plain(|frame| {
            tiles.render(
                frame,
                frame.area(),
                DetailTilesProps {
                    profile: Mode::Rainy.profile(),
                    is_hovered: true,
                },
            );
        });

        assert!(output.contains("24 km/h"));
        assert!(output.contains("82%"));
    }
}
