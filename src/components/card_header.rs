use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::theme;

/// Location name over "country • date".
pub struct CardHeader;

pub struct CardHeaderProps<'a> {
    pub location: &'a str,
    pub country: &'a str,
    pub date: &'a str,
}

/// Rows the header needs.
pub const HEADER_ROWS: u16 = 2;

impl Component<Action> for CardHeader {
    type Props<'a> = CardHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Location
            Constraint::Length(1), // Country • date
        ])
        .split(area);

        let location = Line::from(Span::styled(
            props.location.to_string(),
            Style::default().fg(theme::TEXT).bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(location), chunks[0]);

        let subtitle = Line::from(Span::styled(
            subtitle(props.country, props.date),
            Style::default().fg(theme::TEXT_MUTED),
        ))
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}

pub fn subtitle(country: &str, date: &str) -> String {
    format!("{country} \u{2022} {date}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_subtitle_format() {
        assert_eq!(subtitle("Japan", "May 4"), "Japan • May 4");
        assert_eq!(subtitle("", "May 4"), " • May 4");
    }

    #[test]
    fn test_render_header() {
        let mut render = RenderHarness::new(30, 2);
        let mut header = CardHeader;

        let output = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                CardHeaderProps {
                    location: "Tokyo",
                    country: "Japan",
                    date: "May 4",
                },
            );
        });

        assert!(output.contains("Tokyo"));
        assert!(output.contains("Japan • May 4"));
    }

    #[test]
    fn test_render_odd_strings() {
        let mut render = RenderHarness::new(12, 2);
        let mut header = CardHeader;

        let output = render.render_to_string_plain(|frame| {
            header.render(
                frame,
                frame.area(),
                CardHeaderProps {
                    location: "",
                    country: "Ünïcødé 🌧 land with a very long name",
                    date: "",
                },
            );
        });

        assert!(!output.is_empty());
    }
}
