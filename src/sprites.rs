//! Weather icon sprites with multi-color layer support
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! Multi-layer sprites (like the rain cloud) composite several colored layers.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::state::WeatherIcon;
use crate::theme;

// ============================================================================
// Sprite data - embedded at compile time
// File naming: {part}_{color}.txt
// ============================================================================

mod sprite_data {
    pub mod sun {
        pub const CORE_YELLOW: &str = include_str!("../sprites/sun/core_yellow.txt");
    }
    pub mod cloud_rain {
        // Cloud layer (background)
        pub const CLOUD_GRAY: &str = include_str!("../sprites/cloud_rain/cloud_gray.txt");
        // Rain streaks (foreground)
        pub const RAIN_BLUE: &str = include_str!("../sprites/cloud_rain/rain_blue.txt");
    }
    pub mod droplet {
        pub const BLUE: &str = include_str!("../sprites/droplet/blue.txt");
    }
}

/// Tallest icon sprite, in rows.
pub const ICON_SPRITE_ROWS: u16 = 5;
/// Droplet sprite height, in rows.
pub const DROPLET_ROWS: u16 = 2;

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            // Topmost non-space character wins; last layer is the foreground
            let mut found = None;
            for (layer_idx, layer) in layers.iter().enumerate().rev() {
                let ch = layer_lines[layer_idx]
                    .get(line_idx)
                    .and_then(|line| line.get(col_idx))
                    .copied();
                if let Some(ch) = ch.filter(|ch| *ch != ' ') {
                    found = Some((ch, layer.color));
                    break;
                }
            }

            // Transparent cells keep whatever background sits underneath
            spans.push(match found {
                Some((ch, color)) => Span::styled(ch.to_string(), Style::default().fg(color)),
                None => Span::raw(" "),
            });
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Public API
// ============================================================================

/// Composited art for an icon.
pub fn icon_sprite(icon: WeatherIcon) -> Text<'static> {
    let layers = match icon {
        WeatherIcon::Sun => vec![SpriteLayer {
            content: sprite_data::sun::CORE_YELLOW,
            color: theme::SUN,
        }],
        WeatherIcon::CloudRain => vec![
            SpriteLayer {
                content: sprite_data::cloud_rain::CLOUD_GRAY,
                color: theme::ICON_MUTED,
            },
            SpriteLayer {
                content: sprite_data::cloud_rain::RAIN_BLUE,
                color: theme::DROPLET,
            },
        ],
    };
    composite_layers(&layers)
}

/// The small droplet that bobs under the rain cloud.
pub fn droplet_sprite() -> Text<'static> {
    composite_layers(&[SpriteLayer {
        content: sprite_data::droplet::BLUE,
        color: theme::DROPLET,
    }])
}

/// Emoji representation for when sprites don't fit
pub fn icon_emoji(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Sun => "\u{2600}\u{fe0f}",
        WeatherIcon::CloudRain => "\u{1f327}\u{fe0f}",
    }
}

/// Sprite if `available_height` rows can hold it, `None` otherwise.
pub fn icon_for_height(icon: WeatherIcon, available_height: u16) -> Option<Text<'static>> {
    (available_height >= ICON_SPRITE_ROWS).then(|| icon_sprite(icon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_icons_load() {
        for icon in [WeatherIcon::Sun, WeatherIcon::CloudRain] {
            let text = icon_sprite(icon);
            assert!(!text.lines.is_empty(), "Sprite {:?} should not be empty", icon);
            assert!(text.lines.len() as u16 <= ICON_SPRITE_ROWS);
        }
        assert_eq!(droplet_sprite().lines.len() as u16, DROPLET_ROWS);
    }

    #[test]
    fn test_rain_layer_drawn_over_cloud() {
        let text = icon_sprite(WeatherIcon::CloudRain);
        assert_eq!(text.lines.len(), 5);
        let streak = text.lines[3]
            .spans
            .iter()
            .find(|span| span.content == "'")
            .expect("rain streak");
        assert_eq!(streak.style.fg, Some(theme::DROPLET));
    }

    #[test]
    fn test_icon_for_height() {
        assert!(icon_for_height(WeatherIcon::Sun, 4).is_none());
        assert!(icon_for_height(WeatherIcon::Sun, 5).is_some());
    }

    #[test]
    fn test_emoji_fallback() {
        assert!(!icon_emoji(WeatherIcon::Sun).is_empty());
        assert_ne!(icon_emoji(WeatherIcon::Sun), icon_emoji(WeatherIcon::CloudRain));
    }
}
