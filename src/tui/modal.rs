// Modal system - overlay surfaces drawn on top of the deck
//
// While a modal is open it owns the keyboard: keys map to ModalActions
// and nothing reaches the navigation layer underneath. A reopen guard
// absorbs the double-trigger burst some terminals produce for a single
// keypress, so a modal that just closed does not immediately reopen.

use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Which overlay is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Key map and usage help
    Help,
    /// Full body text of one section, scrollable
    Section(usize),
    /// Captured log entries
    Logs,
}

impl Modal {
    /// Title shown in the modal border
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Help ",
            Modal::Section(_) => " Section ",
            Modal::Logs => " Logs ",
        }
    }

    /// Whether the logs modal should auto-follow new content
    pub fn follows(&self) -> bool {
        matches!(self, Modal::Logs)
    }
}

/// What a key press does while a modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
}

/// Map a key event to a modal action. Every modal shares the same scroll
/// surface; unknown keys are swallowed so they never fall through to
/// navigation.
pub fn handle_modal_key(key: &KeyEvent) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
        KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
        KeyCode::PageUp => ModalAction::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => ModalAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => ModalAction::ScrollTop,
        KeyCode::End | KeyCode::Char('G') => ModalAction::ScrollBottom,
        _ => ModalAction::None,
    }
}

/// Guard against a modal reopening instantly after it closed.
///
/// The close keypress can arrive again as a repeat (or the same physical
/// press can be reported twice); any open request within the guard window
/// of the last close is dropped.
#[derive(Debug)]
pub struct ModalGuard {
    window: Duration,
    last_closed: Option<Instant>,
}

impl ModalGuard {
    pub fn new() -> Self {
        Self {
            window: Duration::from_millis(300),
            last_closed: None,
        }
    }

    /// Record that a modal just closed.
    pub fn closed(&mut self, now: Instant) {
        self.last_closed = Some(now);
    }

    /// Returns true if a modal may open at `now`.
    pub fn try_open(&self, now: Instant) -> bool {
        match self.last_closed {
            Some(closed) => now.duration_since(closed) >= self.window,
            None => true,
        }
    }
}

impl Default for ModalGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_and_enter_close() {
        assert_eq!(handle_modal_key(&key(KeyCode::Esc)), ModalAction::Close);
        assert_eq!(handle_modal_key(&key(KeyCode::Enter)), ModalAction::Close);
        assert_eq!(
            handle_modal_key(&key(KeyCode::Char('q'))),
            ModalAction::Close
        );
    }

    #[test]
    fn test_navigation_keys_are_swallowed() {
        // Left/Right must not leak through to section navigation
        assert_eq!(handle_modal_key(&key(KeyCode::Left)), ModalAction::None);
        assert_eq!(handle_modal_key(&key(KeyCode::Right)), ModalAction::None);
        assert_eq!(
            handle_modal_key(&key(KeyCode::Char('1'))),
            ModalAction::None
        );
    }

    #[test]
    fn test_reopen_guard_window() {
        let mut guard = ModalGuard::new();
        let t0 = Instant::now();

        assert!(guard.try_open(t0));
        guard.closed(t0);
        assert!(!guard.try_open(t0 + Duration::from_millis(100)));
        assert!(guard.try_open(t0 + Duration::from_millis(300)));
    }
}
