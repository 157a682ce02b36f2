//! Actions - everything that can happen to the card

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Flip between sunny and rainy (card click)
    WeatherToggle,

    // ===== Uncategorized (global) =====
    /// Pointer entered (`true`) or left (`false`) the card.
    /// "Hover" is not an inferred verb, so this stays uncategorized.
    UiCardHover(bool),

    /// Force a re-render
    Render,

    /// Periodic tick driving the ambient animations
    Tick,

    /// Exit the application
    Quit,
}
