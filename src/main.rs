//! Weather card TUI - sunny/rainy toggle card

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_card::action::Action;
use weather_card::components::{Component, HostPage, HostPageProps};
use weather_card::effect::Effect;
use weather_card::reducer::reducer;
use weather_card::state::{
    ANIM_TICK_MS, AppState, CardConfig, DEFAULT_COUNTRY, DEFAULT_LOCATION, today,
};

/// Weather card TUI - click the card to switch between sunny and rainy
#[derive(Parser, Debug)]
#[command(name = "weather-card")]
#[command(about = "A decorative sunny/rainy weather card for the terminal")]
struct Args {
    /// Location shown in the card header
    #[arg(long, short, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Country shown next to the date
    #[arg(long, short, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Seed for the rain drop layout (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum CardComponentId {
    Card,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum CardContext {
    Main,
}

impl EventRoutingState<CardComponentId, CardContext> for AppState {
    fn focused(&self) -> Option<CardComponentId> {
        Some(CardComponentId::Card)
    }

    fn modal(&self) -> Option<CardComponentId> {
        None
    }

    fn binding_context(&self, id: CardComponentId) -> CardContext {
        match id {
            CardComponentId::Card => CardContext::Main,
        }
    }

    fn default_context(&self) -> CardContext {
        CardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        location,
        country,
        seed,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let config = CardConfig { location, country };
            let seed = seed.unwrap_or_else(rand::random);
            Ok::<AppState, io::Error>(AppState::new(config, today(), seed))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct CardUi {
    page: HostPage,
}

impl CardUi {
    fn new() -> Self {
        Self {
            page: HostPage::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<CardComponentId>,
    ) {
        let props = HostPageProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.page.render(frame, area, props);
        event_ctx.set_component_area(CardComponentId::Card, self.page.card_area());
    }

    fn handle_card_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = HostPageProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.page.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_pointer_move(&self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        match self.page.hover_action(event, state) {
            Some(action) => HandlerResponse {
                actions: vec![action],
                consumed: false,
                needs_render: false,
            },
            None => HandlerResponse::ignored(),
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(CardUi::new()));
    let mut bus: EventBus<AppState, Action, CardComponentId, CardContext> = EventBus::new();
    let keybindings: Keybindings<CardContext> = Keybindings::new();

    let ui_card = Rc::clone(&ui);
    bus.register(CardComponentId::Card, move |event, state| {
        ui_card.borrow_mut().handle_card_event(&event.kind, state)
    });

    // Hover needs to see moves that leave the card, so it listens globally.
    // Re-render on terminal resize (no action needed, just redraw)
    let ui_pointer = Rc::clone(&ui);
    bus.register_global(move |event, state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        EventKind::Mouse(_) => ui_pointer.borrow().handle_pointer_move(&event.kind, state),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Render),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                // Animation durations are tick counts at this fixed interval
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// The card declares no effects.
fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>) {
    match effect {}
}
