use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::{Block, BorderType, Padding},
};
use tui_dispatch::EventKind;

use super::backdrop::paint_gradient;
use super::card_header::HEADER_ROWS;
use super::readouts::{FIGLET_MIN_ROWS, TILE_ROWS};
use super::{
    CardHeader, CardHeaderProps, Component, DetailTiles, DetailTilesProps, ParticleLayer,
    ParticleLayerProps, TemperatureReadout, TemperatureReadoutProps, WeatherIconProps,
    WeatherIconView,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme;

/// Rows reserved for the icon (sprite plus halo or droplet).
pub const ICON_ROWS: u16 = 8;

/// Props for WeatherCard - read-only view of state
pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The clickable card. Remembers where it was last drawn for hit-testing.
#[derive(Default)]
pub struct WeatherCard {
    area: Rect,
}

impl WeatherCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Hover tracking for pointer moves anywhere on screen.
    ///
    /// Only emits on an edge so motion inside the card stays quiet.
    pub fn hover_action(&self, event: &EventKind, state: &AppState) -> Option<Action> {
        let EventKind::Mouse(mouse) = event else {
            return None;
        };
        if !matches!(mouse.kind, MouseEventKind::Moved) {
            return None;
        }
        let inside = self.contains(mouse.column, mouse.row);
        (inside != state.hovered).then_some(Action::UiCardHover(inside))
    }
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) if self.contains(mouse.column, mouse.row) => {
                    Some(Action::WeatherToggle)
                }
                _ => None,
            },
            EventKind::Key(key) => match key.code {
                KeyCode::Char('t') | KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(Action::WeatherToggle)
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherCardProps<'_>) {
        self.area = area;
        if area.is_empty() {
            return;
        }
        let state = props.state;
        let profile = state.profile();
        let background = state.background();

        paint_gradient(frame.buffer_mut(), area, &background);

        let border = if state.hovered {
            theme::BORDER_HOVER
        } else {
            theme::BORDER
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut particles = ParticleLayer;
        particles.render(
            frame,
            inner,
            ParticleLayerProps {
                mode: state.mode,
                drop_seed: state.drop_seed,
                tick_count: state.tick_count,
            },
        );

        let temp_rows = temperature_rows(inner.height);
        let chunks = Layout::vertical([
            Constraint::Length(ICON_ROWS),
            Constraint::Length(HEADER_ROWS),
            Constraint::Length(1), // Spacer
            Constraint::Length(temp_rows + 1),
            Constraint::Fill(1), // Pushes the tiles to the bottom
            Constraint::Length(TILE_ROWS),
        ])
        .split(inner);

        let icon_frame = state.icon_frame();
        let mut icon = WeatherIconView;
        icon.render(
            frame,
            chunks[0],
            WeatherIconProps {
                icon: icon_frame.icon,
                tick_count: state.tick_count,
                opacity: icon_frame.opacity,
                offset_rows: icon_frame.offset_rows,
            },
        );

        let mut header = CardHeader;
        header.render(
            frame,
            chunks[1],
            CardHeaderProps {
                location: &state.location,
                country: &state.country,
                date: &state.current_date,
            },
        );

        let mut temperature = TemperatureReadout;
        temperature.render(
            frame,
            chunks[3],
            TemperatureReadoutProps {
                profile,
                pop_progress: state.readout_progress(),
                surface: theme::blend(background[1], theme::SURFACE, 0.5),
            },
        );

        let mut tiles = DetailTiles;
        tiles.render(
            frame,
            chunks[5],
            DetailTilesProps {
                profile,
                is_hovered: state.hovered,
            },
        );
    }
}

/// FIGlet temperature only when everything else still fits.
fn temperature_rows(inner_height: u16) -> u16 {
    let fixed = ICON_ROWS + HEADER_ROWS + 1 + 1 + TILE_ROWS;
    if inner_height >= fixed + FIGLET_MIN_ROWS {
        FIGLET_MIN_ROWS
    } else {
        1
    }
}
