//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Mode, TRANSITIONS_SETTLED};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherToggle => {
            state.mode = state.mode.toggle();
            if state.mode == Mode::Rainy {
                state.drop_seed = next_seed(state.drop_seed);
            }
            state.ticks_since_toggle = 0;
            DispatchResult::changed()
        }

        // ===== Hover =====
        Action::UiCardHover(hovered) => {
            if state.hovered == hovered {
                DispatchResult::unchanged()
            } else {
                state.hovered = hovered;
                DispatchResult::changed()
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        // Ambient loops never stop, so every tick redraws.
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.ticks_since_mount < TRANSITIONS_SETTLED {
                state.ticks_since_mount += 1;
            }
            if state.ticks_since_toggle < TRANSITIONS_SETTLED {
                state.ticks_since_toggle += 1;
            }
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407)
}
