// Application state for the TUI
//
// App owns everything the render loop reads: the deck, the navigator,
// theme, starfield, modal state and input adapters. The event loop calls
// the handle_* and tick methods; ui::draw reads the fields back. Hit
// rectangles for nav links and dot indicators are written during render
// and consumed by mouse click routing on the next event.

use crate::config::{Config, TimingConfig};
use crate::deck::Deck;
use crate::logging::LogBuffer;
use crate::nav::{NavTiming, SectionNavigator};
use crate::tui::clipboard::copy_to_clipboard;
use crate::tui::input::{InputHandler, SwipeTracker, WheelThrottle};
use crate::tui::modal::{Modal, ModalGuard};
use crate::tui::scroll::ScrollState;
use crate::tui::starfield::Starfield;
use crate::tui::theme::{Theme, ThemeKind};
use anyhow::Result;
use rand::seq::SliceRandom;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long a toast stays visible
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    /// Deck content being presented
    pub deck: Deck,
    /// Section navigation state machine
    pub nav: SectionNavigator,

    /// Current theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub use_theme_background: bool,

    /// Animated background
    pub starfield: Starfield,

    /// Open modal, if any
    pub modal: Option<Modal>,
    pub modal_guard: ModalGuard,
    pub modal_scroll: ScrollState,

    /// Transient notification: message and when it was shown
    toast: Option<(String, Instant)>,

    /// Captured log entries for the logs modal
    pub log_buffer: LogBuffer,

    /// Input adapters
    pub input: InputHandler,
    pub wheel: WheelThrottle,
    pub swipe: SwipeTracker,

    /// Timing knobs, kept for the status bar and share payload
    pub timing: TimingConfig,

    /// Hit rectangles written during render, read by click routing
    pub link_hits: Vec<(Rect, usize)>,
    pub dot_hits: Vec<(Rect, usize)>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        deck: Deck,
        config: &Config,
        start_section: Option<&str>,
        log_buffer: LogBuffer,
    ) -> Result<Self> {
        let nav = SectionNavigator::new(
            deck.section_ids(),
            NavTiming {
                transition: config.timing.transition(),
            },
        )?
        .with_fragment(start_section);

        let theme_kind = ThemeKind::from_name(&config.theme);

        Ok(Self {
            deck,
            nav,
            theme_kind,
            theme: theme_kind.theme(),
            use_theme_background: config.use_theme_background,
            starfield: Starfield::new(config.starfield.density, config.starfield.enabled),
            modal: None,
            modal_guard: ModalGuard::new(),
            modal_scroll: ScrollState::new(),
            toast: None,
            log_buffer,
            input: InputHandler::with_default_config(),
            wheel: WheelThrottle::new(config.timing.wheel_throttle()),
            swipe: SwipeTracker::new(config.timing.swipe_min_cells, config.timing.swipe_max()),
            timing: config.timing,
            link_hits: Vec::new(),
            dot_hits: Vec::new(),
            should_quit: false,
        })
    }

    /// Advance animations and expire transient state. Called every tick.
    pub fn tick(&mut self, now: Instant) {
        if self.nav.tick(now) {
            tracing::debug!("section '{}' settled", self.nav.current_id());
        }
        self.starfield.tick();
        if let Some((_, shown)) = self.toast {
            if now.duration_since(shown) >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────

    pub fn navigate_next(&mut self, now: Instant) {
        self.nav.next(now);
    }

    pub fn navigate_previous(&mut self, now: Instant) {
        self.nav.previous(now);
    }

    pub fn navigate_to(&mut self, index: usize, now: Instant) {
        self.nav.go_to(index, now);
    }

    pub fn navigate_back(&mut self, now: Instant) {
        if !self.nav.back(now) && !self.nav.is_transitioning() {
            self.show_toast("Nothing earlier on the trail", now);
        }
    }

    pub fn navigate_forward(&mut self, now: Instant) {
        if !self.nav.forward(now) && !self.nav.is_transitioning() {
            self.show_toast("Nothing later on the trail", now);
        }
    }

    /// Route a mouse click through the hit rectangles from the last frame.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let hit = |rects: &[(Rect, usize)]| {
            rects.iter().find_map(|(rect, idx)| {
                let inside = column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height;
                inside.then_some(*idx)
            })
        };

        if let Some(idx) = hit(&self.link_hits).or_else(|| hit(&self.dot_hits)) {
            self.navigate_to(idx, now);
        }
    }

    // ── Theme ────────────────────────────────────────────────────────────

    pub fn cycle_theme(&mut self, now: Instant) {
        self.set_theme(self.theme_kind.next(), now);
    }

    pub fn cycle_theme_back(&mut self, now: Instant) {
        self.set_theme(self.theme_kind.prev(), now);
    }

    fn set_theme(&mut self, kind: ThemeKind, now: Instant) {
        self.theme_kind = kind;
        self.theme = kind.theme();
        self.show_toast(format!("Theme: {}", kind.name()), now);
        tracing::info!("theme switched to {}", kind.name());
    }

    // ── Modals ───────────────────────────────────────────────────────────

    /// Open a modal unless the reopen guard is still active.
    pub fn open_modal(&mut self, modal: Modal, now: Instant) {
        if self.modal.is_some() || !self.modal_guard.try_open(now) {
            return;
        }
        // Fresh scroll state per modal: logs follow the tail, the rest
        // anchor at the top
        self.modal_scroll = if modal.follows() {
            ScrollState::following()
        } else {
            ScrollState::new()
        };
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self, now: Instant) {
        if self.modal.take().is_some() {
            self.modal_guard.closed(now);
        }
    }

    /// Open the detail view for the current section.
    pub fn open_current_section(&mut self, now: Instant) {
        self.open_modal(Modal::Section(self.nav.current()), now);
    }

    // ── Toasts ───────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some((message.into(), now));
    }

    /// The toast to display, if one is still live.
    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|(m, _)| m.as_str())
    }

    /// Surface a random discovery message from the current section.
    pub fn discover(&mut self, now: Instant) {
        let messages = match self.deck.section(self.nav.current()) {
            Some(section) if !section.messages.is_empty() => section.messages.clone(),
            _ => return,
        };
        if let Some(message) = messages.choose(&mut rand::thread_rng()) {
            tracing::info!("discovery: {}", message);
            self.show_toast(message.clone(), now);
        }
    }

    // ── Share ────────────────────────────────────────────────────────────

    /// Human-readable share payload for the current position.
    pub fn share_line(&self) -> String {
        format!(
            "{} - section \"{}\" ({}/{})",
            self.deck.title,
            self.nav.current_id(),
            self.nav.current() + 1,
            self.nav.len()
        )
    }

    /// JSON share payload for the current position.
    pub fn share_json(&self) -> String {
        serde_json::json!({
            "deck": self.deck.title,
            "section": self.nav.current_id(),
            "index": self.nav.current(),
            "total": self.nav.len(),
            "shared_at": chrono::Utc::now().to_rfc3339(),
        })
        .to_string()
    }

    /// Copy the current position to the clipboard, reporting via toast.
    pub fn share(&mut self, as_json: bool, now: Instant) {
        let payload = if as_json {
            self.share_json()
        } else {
            self.share_line()
        };
        match copy_to_clipboard(&payload) {
            Ok(()) => {
                let what = if as_json { "JSON" } else { "link" };
                self.show_toast(format!("Copied {} to clipboard", what), now);
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {:#}", e);
                self.show_toast("Clipboard unavailable", now);
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::demo_deck;

    fn app() -> App {
        App::new(
            demo_deck(),
            &Config::default(),
            None,
            LogBuffer::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let mut app = app();
        let t0 = Instant::now();

        app.show_toast("hello", t0);
        assert_eq!(app.toast(), Some("hello"));

        app.tick(t0 + Duration::from_secs(2));
        assert_eq!(app.toast(), Some("hello"));

        app.tick(t0 + Duration::from_secs(3));
        assert_eq!(app.toast(), None);
    }

    #[test]
    fn test_start_section_seeds_navigator() {
        let app = App::new(
            demo_deck(),
            &Config::default(),
            Some("about"),
            LogBuffer::new(),
        )
        .unwrap();
        assert_eq!(app.nav.current_id(), "about");
    }

    #[test]
    fn test_share_line_shows_position() {
        let app = app();
        let line = app.share_line();
        assert!(line.contains("World Explorer"));
        assert!(line.contains("\"home\""));
        assert!(line.contains("(1/4)"));
    }

    #[test]
    fn test_share_json_is_valid() {
        let app = app();
        let value: serde_json::Value = serde_json::from_str(&app.share_json()).unwrap();
        assert_eq!(value["section"], "home");
        assert_eq!(value["total"], 4);
    }

    #[test]
    fn test_modal_reopen_guard_blocks_immediate_reopen() {
        let mut app = app();
        let t0 = Instant::now();

        app.open_modal(Modal::Help, t0);
        assert_eq!(app.modal, Some(Modal::Help));

        app.close_modal(t0 + Duration::from_millis(50));
        assert_eq!(app.modal, None);

        // Burst re-trigger of the same keypress
        app.open_modal(Modal::Help, t0 + Duration::from_millis(100));
        assert_eq!(app.modal, None);

        app.open_modal(Modal::Help, t0 + Duration::from_millis(400));
        assert_eq!(app.modal, Some(Modal::Help));
    }

    #[test]
    fn test_modal_scroll_mode_matches_modal() {
        let mut app = app();
        let t0 = Instant::now();

        app.open_modal(Modal::Logs, t0);
        assert!(app.modal_scroll.auto_follow);

        app.close_modal(t0);
        app.open_modal(Modal::Help, t0 + Duration::from_millis(400));
        assert_eq!(app.modal, Some(Modal::Help));
        assert!(!app.modal_scroll.auto_follow);
    }

    #[test]
    fn test_click_routes_through_hit_rects() {
        let mut app = app();
        let t0 = Instant::now();
        app.link_hits = vec![
            (Rect::new(2, 0, 6, 1), 0),
            (Rect::new(10, 0, 8, 1), 2),
        ];

        app.click(12, 0, t0);
        assert_eq!(app.nav.current(), 2);

        // Miss: nothing happens
        let settled = t0 + Duration::from_millis(900);
        app.tick(settled);
        app.click(50, 5, settled);
        assert_eq!(app.nav.current(), 2);
    }

    #[test]
    fn test_discover_surfaces_a_section_message() {
        let mut app = app();
        let t0 = Instant::now();
        app.discover(t0);
        let toast = app.toast().unwrap();
        assert!(app.deck.sections[0].messages.iter().any(|m| m == toast));
    }
}
