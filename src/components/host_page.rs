use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::backdrop::{fade_in_over, paint_gradient};
use super::{Component, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::AppState;
use crate::theme;

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 24;
/// Extra columns on each side while hovered; the same amount is taken away while pressed.
const HOVER_GROW: u16 = 1;
/// Entrance slide distance in rows.
const INTRO_SLIDE_ROWS: f32 = 2.0;

/// Props for HostPage - read-only view of state
pub struct HostPageProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Full-screen page holding exactly one centered weather card.
#[derive(Default)]
pub struct HostPage {
    card: WeatherCard,
}

impl HostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the card was drawn on the last frame.
    pub fn card_area(&self) -> Rect {
        self.card.area()
    }

    pub fn hover_action(&self, event: &EventKind, state: &AppState) -> Option<Action> {
        self.card.hover_action(event, state)
    }
}

impl Component<Action> for HostPage {
    type Props<'a> = HostPageProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.card.handle_event(
            event,
            WeatherCardProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: HostPageProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Help bar
        ])
        .split(area);
        let page = chunks[0];

        paint_gradient(frame.buffer_mut(), page, &theme::PAGE_GRADIENT);

        let card_area = card_area(page, props.state);
        self.card.render(
            frame,
            card_area,
            WeatherCardProps {
                state: props.state,
                is_focused: props.is_focused,
            },
        );
        fade_in_over(
            frame.buffer_mut(),
            card_area,
            props.state.intro_progress(),
            &theme::PAGE_GRADIENT,
            page,
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("click", "toggle weather"),
                    StatusBarHint::new("t", "toggle"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

/// Card rectangle centered in `page`, with hover/press sizing and the entrance slide.
pub fn card_area(page: Rect, state: &AppState) -> Rect {
    let mut width = CARD_WIDTH;
    if state.is_pressed() {
        width -= 2 * HOVER_GROW;
    } else if state.hovered {
        width += 2 * HOVER_GROW;
    }
    let width = width.min(page.width);
    let height = CARD_HEIGHT.min(page.height);

    let rows = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(page);
    let cols = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(rows[0]);
    let card = cols[0];

    let slide = ((1.0 - state.intro_progress()) * INTRO_SLIDE_ROWS).round() as u16;
    let slide = slide.min(page.bottom().saturating_sub(card.bottom()));
    Rect {
        y: card.y + slide,
        ..card
    }
}
