//! Day/night weather board - tui-dispatch app

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use daynight::action::Action;
use daynight::components::{Component, WeatherScreen, WeatherScreenProps};
use daynight::effect::Effect;
use daynight::error::{AppError, Result};
use daynight::logging;
use daynight::provider::SampleWeather;
use daynight::reducer::reducer;
use daynight::state::{DEFAULT_CITY, DisplayState};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Day/night weather board
#[derive(Parser, Debug)]
#[command(name = "daynight")]
#[command(about = "A single-screen weather board with a day/night toggle")]
struct Args {
    /// City name shown in the header
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,

    /// Start with the night theme
    #[arg(long)]
    night: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum BoardComponentId {
    Screen,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum BoardContext {
    Main,
}

impl EventRoutingState<BoardComponentId, BoardContext> for DisplayState {
    fn focused(&self) -> Option<BoardComponentId> {
        Some(BoardComponentId::Screen)
    }

    fn modal(&self) -> Option<BoardComponentId> {
        None
    }

    fn binding_context(&self, id: BoardComponentId) -> BoardContext {
        match id {
            BoardComponentId::Screen => BoardContext::Main,
        }
    }

    fn default_context(&self) -> BoardContext {
        BoardContext::Main
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        city,
        night,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }
    tracing::info!(%city, night, "starting weather board");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<DisplayState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<DisplayState, io::Error>(DisplayState::new(city).with_night(night))
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

    tracing::info!("weather board closed");
    Ok(())
}

struct BoardUi {
    screen: WeatherScreen,
}

impl BoardUi {
    fn new() -> Self {
        Self {
            screen: WeatherScreen::new(&SampleWeather),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &DisplayState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<BoardComponentId>,
    ) {
        event_ctx.set_component_area(BoardComponentId::Screen, area);

        let props = WeatherScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_screen_event(
        &mut self,
        event: &EventKind,
        state: &DisplayState,
    ) -> HandlerResponse<Action> {
        let props = WeatherScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .screen
            .handle_event(event, props)
            .into_iter()
            .collect();
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
}

fn debug_error(error: DebugSessionError) -> AppError {
    AppError::Debug(error.to_string())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<DisplayState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<DisplayState>> {
    let ui = Rc::new(RefCell::new(BoardUi::new()));
    let mut bus: EventBus<DisplayState, Action, BoardComponentId, BoardContext> = EventBus::new();
    let keybindings: Keybindings<BoardContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(BoardComponentId::Screen, move |event, state| {
        ui_screen
            .borrow_mut()
            .handle_screen_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |_runtime| {},
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

/// The board declares no effects
fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>) {
    match effect {}
}
