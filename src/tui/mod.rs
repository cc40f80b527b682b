// TUI module - terminal setup, event loop and input dispatch
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, timer ticks)
// - Layered input dispatch: Modal → Global → Navigation

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod modal;
pub mod scroll;
pub mod starfield;
pub mod theme;
pub mod ui;

use anyhow::{Context, Result};
pub use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::{Gesture, NavDirection};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error, so a failing draw never leaves the
/// shell in raw mode.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on two sources with tokio::select!: terminal input and a timer
/// tick. The tick drives the slide animation, starfield drift and toast
/// expiry; input is dispatched immediately and the next iteration redraws.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // ~20 FPS: enough for a smooth slide without busy-drawing
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        let now = Instant::now();
        terminal
            .draw(|f| ui::draw(f, app, now))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for animation and expiry
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input.
/// Layered dispatch: Modal → Global → Navigation.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let now = Instant::now();

    if key_event.kind == KeyEventKind::Release {
        app.input.handle_key_release(key_event.code);
        return;
    }

    // Layer 1: an open modal captures all input
    if handle_modal_input(app, &key_event, now) {
        return;
    }

    // Layer 2: global keys
    if handle_global_keys(app, &key_event, now) {
        return;
    }

    // Layer 3: navigation keys, debounced/repeated by the InputHandler
    let key = key_event.code;
    if !app.input.handle_key_press(key, now) {
        return;
    }
    match key {
        KeyCode::Right | KeyCode::Down => app.navigate_next(now),
        KeyCode::Left | KeyCode::Up => app.navigate_previous(now),
        KeyCode::Home => app.navigate_to(0, now),
        KeyCode::End => app.navigate_to(app.nav.len().saturating_sub(1), now),
        KeyCode::Char('[') | KeyCode::Backspace => app.navigate_back(now),
        KeyCode::Char(']') => app.navigate_forward(now),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if idx < app.nav.len() {
                app.navigate_to(idx, now);
            }
        }
        _ => {}
    }
}

/// Modal input layer. Returns true if a modal consumed the key.
fn handle_modal_input(app: &mut App, key_event: &KeyEvent, now: Instant) -> bool {
    if app.modal.is_none() {
        return false;
    }
    match modal::handle_modal_key(key_event) {
        ModalAction::Close => app.close_modal(now),
        ModalAction::ScrollUp => app.modal_scroll.scroll_up(),
        ModalAction::ScrollDown => app.modal_scroll.scroll_down(),
        ModalAction::PageUp => app.modal_scroll.page_up(),
        ModalAction::PageDown => app.modal_scroll.page_down(),
        ModalAction::ScrollTop => app.modal_scroll.scroll_to_top(),
        ModalAction::ScrollBottom => app.modal_scroll.scroll_to_bottom(),
        ModalAction::None => {}
    }
    true
}

/// Global keys that work regardless of navigation state.
/// Returns true if the key was handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent, now: Instant) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            true
        }
        KeyCode::Char('?') => {
            app.open_modal(Modal::Help, now);
            true
        }
        KeyCode::Char('l') => {
            app.open_modal(Modal::Logs, now);
            true
        }
        KeyCode::Enter => {
            app.open_current_section(now);
            true
        }
        KeyCode::Char(' ') => {
            app.discover(now);
            true
        }
        KeyCode::Char('t') => {
            app.cycle_theme(now);
            true
        }
        KeyCode::Char('T') => {
            app.cycle_theme_back(now);
            true
        }
        KeyCode::Char('y') => {
            app.share(false, now);
            true
        }
        KeyCode::Char('Y') => {
            app.share(true, now);
            true
        }
        _ => false,
    }
}

/// Handle mouse input: clicks and drags feed the swipe tracker, wheel
/// events the throttle. With a modal open the wheel scrolls the modal
/// instead of navigating.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let now = Instant::now();

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.swipe.press(mouse_event.column, mouse_event.row, now);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            match app.swipe.release(mouse_event.column, mouse_event.row, now) {
                Gesture::Swipe(NavDirection::Next) => app.navigate_next(now),
                Gesture::Swipe(NavDirection::Previous) => app.navigate_previous(now),
                Gesture::Click { column, row } => {
                    if app.modal.is_none() {
                        app.click(column, row, now);
                    }
                }
                Gesture::None => {}
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if app.modal.is_some() {
                app.modal_scroll.scroll_down();
            } else if app.wheel.accept(now) {
                app.navigate_next(now);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if app.modal.is_some() {
                app.modal_scroll.scroll_up();
            } else if app.wheel.accept(now) {
                app.navigate_previous(now);
            }
        }
        _ => {}
    }
}
