//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user events
//! - Drain and assert emitted actions
//! - Use fluent assertions for readable tests

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weather_card::{
    action::Action,
    components::{Component, HostPage, HostPageProps},
    reducer::reducer,
    state::{AppState, CardConfig, Mode},
};

#[test]
fn test_reducer_toggle() {
    // PATTERN: Create store with reducer, dispatch actions, verify state
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().mode, Mode::Sunny);

    let result = store.dispatch(Action::WeatherToggle);
    assert!(result.changed, "State should change");
    assert!(result.effects.is_empty(), "Toggling never declares effects");
    assert_eq!(store.state().mode, Mode::Rainy);
}

#[test]
fn test_parity_of_toggles() {
    for count in 0..9 {
        let mut store = EffectStore::new(AppState::default(), reducer);
        for _ in 0..count {
            store.dispatch(Action::WeatherToggle);
        }
        let expected = if count % 2 == 0 { Mode::Sunny } else { Mode::Rainy };
        assert_eq!(store.state().mode, expected, "after {count} toggles");
    }
}

#[test]
fn test_readouts_never_mix() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let sunny = ("23°", "12 km/h", "45%");
    let rainy = ("18°", "24 km/h", "82%");

    for step in 0..20 {
        let profile = store.state().profile();
        let readout = (profile.temperature, profile.wind, profile.humidity);
        match store.state().mode {
            Mode::Sunny => assert_eq!(readout, sunny, "step {step}"),
            Mode::Rainy => assert_eq!(readout, rainy, "step {step}"),
        }
        store.dispatch(Action::WeatherToggle);
        if step % 3 == 0 {
            store.dispatch(Action::Tick);
        }
    }
}

#[test]
fn test_component_keyboard_events() {
    // PATTERN: TestHarness for component testing
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut page = HostPage::new();

    // NumericComponentId is a simple built-in ComponentId type
    let actions = harness.send_keys::<NumericComponentId, _, _>("t", |state, event| {
        let props = HostPageProps {
            state,
            is_focused: true,
        };
        page.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // PATTERN: Fluent assertions
    actions.assert_count(1);
    actions.assert_first(Action::WeatherToggle);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut page = HostPage::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("t q", |state, event| {
        let props = HostPageProps {
            state,
            is_focused: false,
        };
        page.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    // PATTERN: Category is accessible via the ActionCategory trait
    let toggle = Action::WeatherToggle;
    let hover = Action::UiCardHover(true);
    let tick = Action::Tick;

    // Categories are inferred from naming convention
    assert_eq!(toggle.category(), Some("weather"));
    assert_eq!(hover.category(), None); // No inferred verb after the prefix
    assert_eq!(tick.category(), None); // Uncategorized

    // Generated predicates for categorized actions
    assert!(toggle.is_weather());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::WeatherToggle);
    harness.emit(Action::UiCardHover(true));
    harness.emit(Action::Tick);

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![Action::WeatherToggle, Action::UiCardHover(false)];

    // PATTERN: assert_emitted! macro for pattern matching
    assert_emitted!(actions, Action::WeatherToggle);
    assert_emitted!(actions, Action::UiCardHover(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::Tick);
}

#[test]
fn test_default_config() {
    let state = AppState::default();

    assert_eq!(state.location, "Buenos Aires");
    assert_eq!(state.country, "Argentina");
    assert_eq!(state.mode, Mode::Sunny);
}

#[test]
fn test_custom_config() {
    let config = CardConfig {
        location: "Tokyo".into(),
        country: "Japan".into(),
    };

    let state = AppState::new(config, "May 4", 11);

    assert_eq!(state.location, "Tokyo");
    assert_eq!(state.country, "Japan");
    assert_eq!(state.current_date, "May 4");
    assert_eq!(state.drop_seed, 11);
}

#[test]
fn test_date_survives_toggles() {
    let mut store = EffectStore::new(
        AppState::new(CardConfig::default(), "May 4", 0),
        reducer,
    );

    for _ in 0..5 {
        store.dispatch(Action::WeatherToggle);
        store.dispatch(Action::Tick);
    }

    assert_eq!(store.state().current_date, "May 4");
}
