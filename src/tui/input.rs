// Input adapters
//
// Three independent front-ends that turn raw terminal input into
// navigation intents:
// - InputHandler: per-key press/release tracking with configurable
//   behaviors (trigger once per press vs. hold-to-repeat)
// - WheelThrottle: rate limiter absorbing high-frequency wheel events so
//   one physical flick produces at most one navigation step
// - SwipeTracker: classifies a mouse press/release pair as a swipe, a
//   click, or neither, using distance and duration thresholds
//
// All time comparisons take injected Instants so the thresholds are
// testable without sleeping.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press; re-triggers only after a debounce window
    /// (covers terminals that never send Release events)
    StateChange,

    /// Trigger on press, then repeat while held
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }
}

/// Debounce window for StateChange keys on terminals without Release events
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Tracks pressed keys and decides when their action fires
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press; returns true if the action should fire now.
    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        match behavior {
            KeyBehavior::StateChange => match state.last_triggered {
                Some(last) if now.duration_since(last) >= STATE_CHANGE_DEBOUNCE => {
                    state.last_triggered = Some(now);
                    true
                }
                _ => false,
            },
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => match (state.press_started, state.last_triggered) {
                (Some(start), Some(last))
                    if now.duration_since(start) >= initial_delay
                        && now.duration_since(last) >= repeat_interval =>
                {
                    state.last_triggered = Some(now);
                    true
                }
                _ => false,
            },
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Default configuration for the stardeck key surface
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Section navigation - repeatable so holding an arrow walks the deck
        handler.configure_keys(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyBehavior::navigation(),
        );

        // Everything else fires once per press
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Char(' '),
                KeyCode::Home,
                KeyCode::End,
                KeyCode::Backspace,
                // Trail movement
                KeyCode::Char('['),
                KeyCode::Char(']'),
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Theme cycling
                KeyCode::Char('t'),
                KeyCode::Char('T'),
                // Share copy
                KeyCode::Char('y'),
                KeyCode::Char('Y'),
                // Logs
                KeyCode::Char('l'),
                // Help
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Rate limiter for wheel-driven navigation.
///
/// A physical scroll gesture arrives as a burst of wheel events; without a
/// limiter each event would try to navigate and the deck would skip
/// sections. Only the first event inside each interval is accepted.
#[derive(Debug)]
pub struct WheelThrottle {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl WheelThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Returns true if a wheel event at `now` may navigate.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

/// Direction a gesture or wheel event navigates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

/// Outcome of a completed mouse press/release pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Fast, long-enough drag along one axis
    Swipe(NavDirection),
    /// Press and release on (nearly) the same cell
    Click { column: u16, row: u16 },
    /// Neither - slow or short drag, ignored
    None,
}

/// Classifies mouse press/release pairs as swipes or clicks.
///
/// A drag is a swipe only when it covers at least `min_cells` along its
/// dominant axis AND completes within `max_duration`. Dragging left or up
/// means pushing the content away: next section. Dragging right or down:
/// previous. A movement of at most one cell is a click; everything in
/// between is ignored.
#[derive(Debug)]
pub struct SwipeTracker {
    min_cells: u16,
    max_duration: Duration,
    start: Option<(i32, i32, Instant)>,
}

impl SwipeTracker {
    pub fn new(min_cells: u16, max_duration: Duration) -> Self {
        Self {
            min_cells,
            max_duration,
            start: None,
        }
    }

    /// Record a mouse button press.
    pub fn press(&mut self, column: u16, row: u16, now: Instant) {
        self.start = Some((column as i32, row as i32, now));
    }

    /// Classify the release that ends the gesture.
    pub fn release(&mut self, column: u16, row: u16, now: Instant) -> Gesture {
        let Some((sx, sy, started)) = self.start.take() else {
            return Gesture::None;
        };

        let dx = column as i32 - sx;
        let dy = row as i32 - sy;

        if dx.abs() <= 1 && dy.abs() <= 1 {
            return Gesture::Click { column, row };
        }

        if now.duration_since(started) >= self.max_duration {
            return Gesture::None;
        }

        // Dominant axis picks the direction; ties go to horizontal
        let (dominant, min) = if dx.abs() >= dy.abs() {
            (dx, self.min_cells as i32)
        } else {
            (dy, self.min_cells as i32)
        };

        if dominant.abs() < min {
            return Gesture::None;
        }

        if dominant < 0 {
            Gesture::Swipe(NavDirection::Next)
        } else {
            Gesture::Swipe(NavDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Enter, t0));
        assert!(!handler.handle_key_press(KeyCode::Enter, t0 + Duration::from_millis(10)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter, t0 + Duration::from_millis(20)));
    }

    #[test]
    fn test_repeatable_fires_after_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Right],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Right, t0));
        // Held but still within the initial delay
        assert!(!handler.handle_key_press(KeyCode::Right, t0 + Duration::from_millis(60)));
        // Past the delay - repeats
        assert!(handler.handle_key_press(KeyCode::Right, t0 + Duration::from_millis(110)));
        // Within the repeat interval
        assert!(!handler.handle_key_press(KeyCode::Right, t0 + Duration::from_millis(130)));
        assert!(handler.handle_key_press(KeyCode::Right, t0 + Duration::from_millis(170)));
    }

    #[test]
    fn test_wheel_burst_collapses_to_one() {
        let mut throttle = WheelThrottle::new(Duration::from_millis(100));
        let t0 = Instant::now();

        // Ten events within 50ms - only the first passes
        let mut accepted = 0;
        for i in 0..10 {
            if throttle.accept(t0 + Duration::from_millis(i * 5)) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);

        // A later, separate flick passes again
        assert!(throttle.accept(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_swipe_left_is_next_right_is_previous() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        let t0 = Instant::now();

        tracker.press(40, 10, t0);
        assert_eq!(
            tracker.release(32, 10, t0 + Duration::from_millis(200)),
            Gesture::Swipe(NavDirection::Next)
        );

        tracker.press(40, 10, t0);
        assert_eq!(
            tracker.release(48, 10, t0 + Duration::from_millis(200)),
            Gesture::Swipe(NavDirection::Previous)
        );
    }

    #[test]
    fn test_vertical_swipe_uses_dominant_axis() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        let t0 = Instant::now();

        // Mostly vertical, upward: next
        tracker.press(40, 20, t0);
        assert_eq!(
            tracker.release(42, 12, t0 + Duration::from_millis(150)),
            Gesture::Swipe(NavDirection::Next)
        );

        // Mostly vertical, downward: previous
        tracker.press(40, 10, t0);
        assert_eq!(
            tracker.release(38, 18, t0 + Duration::from_millis(150)),
            Gesture::Swipe(NavDirection::Previous)
        );
    }

    #[test]
    fn test_slow_drag_is_ignored() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        let t0 = Instant::now();

        tracker.press(40, 10, t0);
        assert_eq!(
            tracker.release(20, 10, t0 + Duration::from_millis(800)),
            Gesture::None
        );
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        let t0 = Instant::now();

        tracker.press(40, 10, t0);
        assert_eq!(
            tracker.release(37, 10, t0 + Duration::from_millis(100)),
            Gesture::None
        );
    }

    #[test]
    fn test_stationary_release_is_click() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        let t0 = Instant::now();

        tracker.press(12, 3, t0);
        assert_eq!(
            tracker.release(12, 3, t0 + Duration::from_millis(80)),
            Gesture::Click { column: 12, row: 3 }
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new(5, Duration::from_millis(500));
        assert_eq!(tracker.release(10, 10, Instant::now()), Gesture::None);
    }
}
