//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Input is polled on the main thread. Lookups run as tokio tasks and report
//! back through a std `mpsc` channel as `Action::FetchCompleted`, so the
//! core `update()` is only ever called from this loop.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
pub mod passage;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::menu::menu;
use crate::core::state::{App, Direction, Level, NavState};
use crate::lookup::{BibleApiClient, VerseSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, PassageViewState, SelectionListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    /// List for the current level; `None` while reading.
    pub selection: Option<SelectionListState>,
    pub passage: PassageViewState,
    /// Translation code shown in the title bar.
    pub translation: String,
    /// Level the list was last built for.
    shown_level: Option<Level>,
}

impl TuiState {
    pub fn new(translation: String) -> Self {
        Self {
            selection: None,
            passage: PassageViewState::new(),
            translation,
            shown_level: None,
        }
    }

    /// Rebuild the list when the core has moved to a different level.
    ///
    /// The cursor lands on `app.focus`, so going back re-highlights the
    /// entry that was chosen on the way in.
    pub fn sync(&mut self, app: &App) {
        if self.shown_level == Some(app.level) {
            return;
        }
        debug!("Level changed to {}", app.state().label());
        self.selection = menu(&app.level).map(|m| SelectionListState::new(m, app.focus));
        self.shown_level = Some(app.level);
    }

    /// Translate a terminal event into a core action, handling purely
    /// presentational events (cursor movement, scrolling, filtering) locally.
    pub fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        match event {
            TuiEvent::ForceQuit | TuiEvent::InputChar('q') => return Some(Action::Quit),
            // Reflow happens on the next draw
            TuiEvent::Resize(..) => return None,
            _ => {}
        }

        if app.is_loading() {
            return None;
        }

        if app.state() == NavState::Reading {
            return match event {
                TuiEvent::InputChar('n') => Some(Action::Step(Direction::Next)),
                TuiEvent::InputChar('p') => Some(Action::Step(Direction::Previous)),
                TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
                _ => {
                    self.passage.handle_event(event);
                    None
                }
            };
        }

        match self.selection.as_mut()?.handle_event(event)? {
            ListEvent::Select(choice) => Some(Action::Select(choice)),
            ListEvent::Back => Some(Action::Back),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Mouse capture gives us wheel events for the list and reading pane
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the verse source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn VerseSource> {
    Arc::new(BibleApiClient::new(
        config.base_url.clone(),
        config.translation.clone(),
    ))
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source = build_source(&config);
    info!(
        "Starting with source {} at {} ({})",
        source.name(),
        config.base_url,
        config.translation
    );

    let mut terminal = ratatui::try_init()?;
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable mouse capture: {}", e);
    }

    let result = event_loop(&mut terminal, source, config.translation);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    source: Arc<dyn VerseSource>,
    translation: String,
) -> io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(translation);
    tui.sync(&app);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the lookup in flight, if any
    let mut in_flight: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut pending_event = poll_event_timeout(timeout)?;
        let mut should_quit = false;
        while let Some(event) = pending_event {
            needs_redraw = true;
            if let Some(action) = tui.handle_event(&event, &app) {
                should_quit = dispatch(&mut app, &mut tui, action, &source, &tx, &mut in_flight);
                if should_quit {
                    break;
                }
            }
            pending_event = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Handle background task actions (lookup completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, action, &source, &tx, &mut in_flight) {
                should_quit = true;
                break;
            }
            if !app.is_loading() {
                in_flight = None;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = in_flight.take() {
        info!("Abandoning lookup in flight");
        handle.abort();
    }
    Ok(())
}

/// Run one action through `update()` and carry out its effect.
/// Returns true when the program should exit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    source: &Arc<dyn VerseSource>,
    tx: &mpsc::Sender<Action>,
    in_flight: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    debug!("Dispatching {:?}", action);
    let (next, effect) = update(std::mem::take(app), action);
    *app = next;
    tui.sync(app);
    match effect {
        Effect::Quit => true,
        Effect::Fetch(reference) => {
            let handle = spawn_fetch(source.clone(), reference, tx.clone());
            *in_flight = Some(handle.abort_handle());
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch(
    source: Arc<dyn VerseSource>,
    reference: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning lookup for {} via {}", reference, source.name());
    tokio::spawn(async move {
        let result = source.fetch(&reference).await;
        if let Err(e) = &result {
            debug!("Lookup for {} failed: {}", reference, e);
        }
        if tx
            .send(Action::FetchCompleted { reference, result })
            .is_err()
        {
            warn!("Failed to send lookup result: receiver dropped");
        }
    })
}
