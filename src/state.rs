//! Application state - single source of truth

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::theme::{self, Gradient};

/// The two weather moods the card can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Mode {
    #[default]
    Sunny,
    Rainy,
}

impl Mode {
    pub fn toggle(&self) -> Self {
        match self {
            Mode::Sunny => Mode::Rainy,
            Mode::Rainy => Mode::Sunny,
        }
    }

    /// Everything the card displays for this mode.
    pub fn profile(self) -> &'static ModeProfile {
        &MODE_PROFILES[self as usize]
    }
}

/// Icon shown at the top of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    /// Sun with a slowly rotating halo
    Sun,
    /// Rain cloud with a bobbing droplet
    CloudRain,
}

/// Decorative layer painted behind the card content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Rays,
    Drops,
}

/// Per-mode display values. Looked up as a whole so readouts never mix.
#[derive(Debug, PartialEq)]
pub struct ModeProfile {
    pub mode: Mode,
    pub temperature: &'static str,
    pub wind: &'static str,
    pub humidity: &'static str,
    pub gradient: Gradient,
    pub icon: WeatherIcon,
    pub particles: ParticleKind,
}

/// Indexed by `Mode as usize`.
pub const MODE_PROFILES: [ModeProfile; 2] = [
    ModeProfile {
        mode: Mode::Sunny,
        temperature: "23°",
        wind: "12 km/h",
        humidity: "45%",
        gradient: theme::SUNNY_GRADIENT,
        icon: WeatherIcon::Sun,
        particles: ParticleKind::Rays,
    },
    ModeProfile {
        mode: Mode::Rainy,
        temperature: "18°",
        wind: "24 km/h",
        humidity: "82%",
        gradient: theme::RAINY_GRADIENT,
        icon: WeatherIcon::CloudRain,
        particles: ParticleKind::Drops,
    },
];

pub const DEFAULT_LOCATION: &str = "Buenos Aires";
pub const DEFAULT_COUNTRY: &str = "Argentina";

/// Caller-supplied display parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardConfig {
    pub location: String,
    pub country: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.into(),
            country: DEFAULT_COUNTRY.into(),
        }
    }
}

/// Animation frame length. Every duration below is expressed in ticks of this.
pub const ANIM_TICK_MS: u64 = 50;
pub const TICKS_PER_SECOND: u32 = (1000 / ANIM_TICK_MS) as u32;

/// Entrance fade + slide (0.6s)
pub const INTRO_TICKS: u32 = 12;
/// Background gradient cross-fade (0.5s)
pub const GRADIENT_FADE_TICKS: u32 = 10;
/// Icon swap (0.5s): the old icon leaves for the first half, the new one arrives in the second
pub const ICON_SWAP_TICKS: u32 = 10;
pub const ICON_EXIT_TICKS: u32 = ICON_SWAP_TICKS / 2;
/// Rows an icon travels while leaving (up) or arriving (from below)
const ICON_TRAVEL_ROWS: f32 = 1.0;
/// Temperature readout pop-in (0.3s)
pub const READOUT_POP_TICKS: u32 = 6;
/// Click press feedback (0.15s)
pub const PRESS_TICKS: u32 = 3;

/// Elapsed-tick counters stop here; every transition has finished by then.
pub const TRANSITIONS_SETTLED: u32 = 12;

/// Format a date the way the card header shows it, e.g. "October 16".
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// Today's date in the local timezone, formatted for the header.
pub fn today() -> String {
    format_card_date(chrono::Local::now().date_naive())
}

/// The icon as drawn on one frame of the swap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconFrame {
    pub icon: WeatherIcon,
    pub opacity: f32,
    /// Rows from the resting position; negative is up
    pub offset_rows: i16,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Sunny or rainy
    #[debug(section = "Weather", label = "Mode", debug_fmt)]
    pub mode: Mode,

    #[debug(section = "Card", label = "Location")]
    pub location: String,

    #[debug(section = "Card", label = "Country")]
    pub country: String,

    /// Captured once at start-up
    #[debug(section = "Card", label = "Date")]
    pub current_date: String,

    /// Seed the rain drop layout is generated from
    #[debug(section = "Weather", label = "Drop seed")]
    pub drop_seed: u64,

    #[debug(section = "Card", label = "Hovered")]
    pub hovered: bool,

    // --- Animation internals (skipped) ---
    /// Ambient animation frame counter
    #[debug(skip)]
    pub tick_count: u32,

    /// Ticks since the card was mounted, saturating at `TRANSITIONS_SETTLED`
    #[debug(skip)]
    pub ticks_since_mount: u32,

    /// Ticks since the last toggle, saturating at `TRANSITIONS_SETTLED`
    #[debug(skip)]
    pub ticks_since_toggle: u32,
}

impl AppState {
    pub fn new(config: CardConfig, current_date: impl Into<String>, drop_seed: u64) -> Self {
        Self {
            mode: Mode::default(),
            location: config.location,
            country: config.country,
            current_date: current_date.into(),
            drop_seed,
            hovered: false,
            tick_count: 0,
            ticks_since_mount: 0,
            ticks_since_toggle: TRANSITIONS_SETTLED,
        }
    }

    pub fn profile(&self) -> &'static ModeProfile {
        self.mode.profile()
    }

    /// Gradient currently painted, mid cross-fade right after a toggle.
    pub fn background(&self) -> Gradient {
        let from = self.mode.toggle().profile().gradient;
        let to = self.profile().gradient;
        theme::mix_gradients(&from, &to, progress(self.ticks_since_toggle, GRADIENT_FADE_TICKS))
    }

    pub fn intro_progress(&self) -> f32 {
        progress(self.ticks_since_mount, INTRO_TICKS)
    }

    /// Previous icon fading out upwards, then the current one fading in from below.
    pub fn icon_frame(&self) -> IconFrame {
        let elapsed = self.ticks_since_toggle;
        if elapsed < ICON_EXIT_TICKS {
            let t = progress(elapsed, ICON_EXIT_TICKS);
            IconFrame {
                icon: self.mode.toggle().profile().icon,
                opacity: 1.0 - t,
                offset_rows: -(t * ICON_TRAVEL_ROWS).round() as i16,
            }
        } else {
            let t = progress(elapsed - ICON_EXIT_TICKS, ICON_SWAP_TICKS - ICON_EXIT_TICKS);
            IconFrame {
                icon: self.profile().icon,
                opacity: t,
                offset_rows: ((1.0 - t) * ICON_TRAVEL_ROWS).round() as i16,
            }
        }
    }

    pub fn readout_progress(&self) -> f32 {
        progress(self.ticks_since_toggle, READOUT_POP_TICKS)
    }

    pub fn is_pressed(&self) -> bool {
        self.ticks_since_toggle < PRESS_TICKS
    }

    pub fn transitions_active(&self) -> bool {
        self.ticks_since_mount < TRANSITIONS_SETTLED || self.ticks_since_toggle < TRANSITIONS_SETTLED
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CardConfig::default(), today(), 0)
    }
}

/// Fraction of `total` ticks elapsed, clamped to `0..=1`.
pub fn progress(elapsed: u32, total: u32) -> f32 {
    if total == 0 {
        return 1.0;
    }
    (elapsed as f32 / total as f32).min(1.0)
}
