// Section navigation state machine
//
// The single owner of "which section is on screen". All input sources
// (nav links, keyboard, wheel, drag gestures, trail movement) funnel into
// go_to/next/previous; the render layer reads back current index and slide
// offset each frame. The state machine itself knows nothing about the
// terminal - it is plain data driven by injected Instants, so every guard
// is testable without a UI or sleeps.
//
// States: Idle and Transitioning. A valid go_to enters Transitioning and
// records the departure index; the configured settle duration later the
// phase drops back to Idle. Requests that arrive mid-transition are
// dropped, not queued. The settle timeout is unconditional: expiry is
// checked on every tick AND on every navigation attempt, so the lock
// releases even if rendering stalled or ticks stopped.

use crate::history::Trail;
use anyhow::{bail, Result};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Timing knobs for the navigator, sourced from config.
#[derive(Debug, Clone, Copy)]
pub struct NavTiming {
    /// How long a slide transition takes; also the transition-lock timeout.
    pub transition: Duration,
}

impl Default for NavTiming {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(800),
        }
    }
}

/// Current phase of the navigator.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transitioning { from: usize, started: Instant },
}

/// Owns the current section index and the transition lock.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    /// Section identifiers in navigation order. Fixed at construction.
    sections: Vec<String>,
    /// Always in [0, sections.len()). Mutated only by navigation.
    current: usize,
    phase: Phase,
    timing: NavTiming,
    /// Visited-section history for back/forward movement.
    trail: Trail,
}

impl SectionNavigator {
    /// Build a navigator over an ordered, duplicate-free section list.
    pub fn new(sections: Vec<String>, timing: NavTiming) -> Result<Self> {
        if sections.is_empty() {
            bail!("section list is empty");
        }
        let mut seen = HashSet::new();
        for id in &sections {
            if id.is_empty() {
                bail!("section identifier is empty");
            }
            if !seen.insert(id.as_str()) {
                bail!("duplicate section identifier: {}", id);
            }
        }
        let trail = Trail::new(sections[0].clone());
        Ok(Self {
            sections,
            current: 0,
            phase: Phase::Idle,
            timing,
            trail,
        })
    }

    /// Seed the starting position from a location fragment.
    ///
    /// A fragment matching a known identifier selects that section without
    /// animating; anything else leaves the navigator at index 0.
    pub fn with_fragment(mut self, fragment: Option<&str>) -> Self {
        if let Some(idx) = fragment.and_then(|f| self.resolve(f)) {
            if idx != self.current {
                self.current = idx;
                self.trail = Trail::new(self.sections[idx].clone());
            }
        }
        self
    }

    /// Map a section identifier to its index, if known.
    pub fn resolve(&self, fragment: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == fragment)
    }

    /// Navigate to an absolute index.
    ///
    /// Silently ignored (returns false) when the index is out of range,
    /// already current, or a transition is in flight. On success the new
    /// identifier is pushed onto the trail.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        self.go_to_inner(index, now, true)
    }

    /// Step to the following section. No-op at the last index.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.sections.len() {
            return false;
        }
        self.go_to(self.current + 1, now)
    }

    /// Step to the preceding section. No-op at index 0.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.go_to(self.current - 1, now)
    }

    /// Move back along the trail (history navigation).
    ///
    /// Resolves the previous fragment to an index and navigates there
    /// WITHOUT pushing the trail again - re-pushing would turn every
    /// back-step into a new forward entry and loop forever.
    pub fn back(&mut self, now: Instant) -> bool {
        self.expire(now);
        if self.phase != Phase::Idle || !self.trail.can_back() {
            return false;
        }
        let fragment = match self.trail.back() {
            Some(f) => f.to_string(),
            None => return false,
        };
        let Some(idx) = self.resolve(&fragment) else {
            return false;
        };
        self.go_to_inner(idx, now, false)
    }

    /// Move forward along the trail. Mirror of [`back`](Self::back).
    pub fn forward(&mut self, now: Instant) -> bool {
        self.expire(now);
        if self.phase != Phase::Idle || !self.trail.can_forward() {
            return false;
        }
        let fragment = match self.trail.forward() {
            Some(f) => f.to_string(),
            None => return false,
        };
        let Some(idx) = self.resolve(&fragment) else {
            return false;
        };
        self.go_to_inner(idx, now, false)
    }

    fn go_to_inner(&mut self, index: usize, now: Instant, push_trail: bool) -> bool {
        // A stalled transition must not hold the lock past its timeout
        self.expire(now);

        if index >= self.sections.len() || index == self.current {
            return false;
        }
        if self.phase != Phase::Idle {
            return false;
        }

        self.phase = Phase::Transitioning {
            from: self.current,
            started: now,
        };
        self.current = index;
        if push_trail {
            self.trail.push(self.sections[index].clone());
        }
        tracing::debug!("navigating to section '{}'", self.sections[index]);
        true
    }

    /// Advance the clock. Returns true exactly once per transition, at the
    /// moment the settle duration elapses and the lock releases.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Transitioning { started, .. }
                if now.duration_since(started) >= self.timing.transition =>
            {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop an expired transition without reporting it (guard path).
    fn expire(&mut self, now: Instant) {
        if let Phase::Transitioning { started, .. } = self.phase {
            if now.duration_since(started) >= self.timing.transition {
                self.phase = Phase::Idle;
            }
        }
    }

    /// Whether a transition is currently in flight.
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Horizontal position in section-widths, for the render layer.
    ///
    /// Idle: exactly the current index. Transitioning: an eased
    /// interpolation from the departure index toward the current one.
    pub fn offset(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Idle => self.current as f64,
            Phase::Transitioning { from, started } => {
                let elapsed = now.duration_since(started).as_secs_f64();
                let total = self.timing.transition.as_secs_f64();
                let t = if total > 0.0 {
                    (elapsed / total).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let eased = ease_in_out(t);
                from as f64 + (self.current as f64 - from as f64) * eased
            }
        }
    }

    /// Index of the section currently navigated to.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Identifier of the current section.
    pub fn current_id(&self) -> &str {
        &self.sections[self.current]
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Section identifiers in order.
    pub fn section_ids(&self) -> &[String] {
        &self.sections
    }

    /// Read access to the trail, for the status bar.
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

/// Cubic ease-in-out, the terminal stand-in for a CSS ease transition.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(ids: &[&str]) -> SectionNavigator {
        SectionNavigator::new(
            ids.iter().map(|s| s.to_string()).collect(),
            NavTiming {
                transition: Duration::from_millis(800),
            },
        )
        .unwrap()
    }

    fn settle(n: &mut SectionNavigator, at: Instant) -> Instant {
        let after = at + Duration::from_millis(801);
        assert!(n.tick(after));
        after
    }

    #[test]
    fn test_go_to_updates_index_and_settles() {
        let mut n = nav(&["home", "worlds", "about"]);
        let t0 = Instant::now();

        assert!(n.go_to(2, t0));
        assert_eq!(n.current(), 2);
        assert!(n.is_transitioning());

        let t1 = settle(&mut n, t0);
        assert!(!n.is_transitioning());
        assert_eq!(n.current(), 2);
        // Settle event fires exactly once
        assert!(!n.tick(t1 + Duration::from_millis(100)));
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let mut n = nav(&["a", "b"]);
        let t0 = Instant::now();
        assert!(!n.go_to(0, t0));
        assert!(!n.is_transitioning());
        assert_eq!(n.trail().len(), 1); // no history push
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut n = nav(&["a", "b", "c"]);
        let t0 = Instant::now();
        assert!(!n.go_to(3, t0));
        assert!(!n.go_to(usize::MAX, t0));
        assert_eq!(n.current(), 0);
        assert!(!n.is_transitioning());
    }

    #[test]
    fn test_reentrant_go_to_is_dropped() {
        let mut n = nav(&["a", "b", "c"]);
        let t0 = Instant::now();

        assert!(n.go_to(1, t0));
        // Still inside the settle window
        assert!(!n.go_to(2, t0 + Duration::from_millis(400)));
        assert_eq!(n.current(), 1);

        // After the window the lock is released even without a tick
        assert!(n.go_to(2, t0 + Duration::from_millis(900)));
        assert_eq!(n.current(), 2);
    }

    #[test]
    fn test_next_and_previous_clamp_at_ends() {
        let mut n = nav(&["a", "b"]);
        let mut t = Instant::now();

        assert!(!n.previous(t));
        assert_eq!(n.current(), 0);

        assert!(n.next(t));
        t = settle(&mut n, t);
        assert_eq!(n.current(), 1);

        assert!(!n.next(t));
        assert_eq!(n.current(), 1);
    }

    #[test]
    fn test_fragment_seeds_initial_index() {
        let n = nav(&["a", "b", "c"]).with_fragment(Some("c"));
        assert_eq!(n.current(), 2);
        assert_eq!(n.current_id(), "c");

        let n = nav(&["a", "b", "c"]).with_fragment(Some("nope"));
        assert_eq!(n.current(), 0);

        let n = nav(&["a", "b", "c"]).with_fragment(None);
        assert_eq!(n.current(), 0);
    }

    #[test]
    fn test_construction_rejects_bad_section_lists() {
        assert!(SectionNavigator::new(vec![], NavTiming::default()).is_err());
        assert!(SectionNavigator::new(
            vec!["a".into(), "a".into()],
            NavTiming::default()
        )
        .is_err());
        assert!(SectionNavigator::new(
            vec!["a".into(), "".into()],
            NavTiming::default()
        )
        .is_err());
    }

    #[test]
    fn test_back_and_forward_follow_trail_without_repush() {
        let mut n = nav(&["a", "b", "c"]);
        let mut t = Instant::now();

        n.go_to(1, t);
        t = settle(&mut n, t);
        n.go_to(2, t);
        t = settle(&mut n, t);
        assert_eq!(n.trail().len(), 3);

        assert!(n.back(t));
        t = settle(&mut n, t);
        assert_eq!(n.current_id(), "b");
        assert_eq!(n.trail().len(), 3); // no re-push

        assert!(n.forward(t));
        t = settle(&mut n, t);
        assert_eq!(n.current_id(), "c");
        assert_eq!(n.trail().len(), 3);

        assert!(!n.forward(t));
    }

    #[test]
    fn test_back_is_dropped_mid_transition() {
        let mut n = nav(&["a", "b"]);
        let t0 = Instant::now();

        n.go_to(1, t0);
        assert!(!n.back(t0 + Duration::from_millis(100)));
        // Cursor untouched - forward replay still impossible
        assert_eq!(n.current_id(), "b");
    }

    #[test]
    fn test_offset_interpolates_between_sections() {
        let mut n = nav(&["a", "b"]);
        let t0 = Instant::now();

        assert_eq!(n.offset(t0), 0.0);
        n.go_to(1, t0);

        let mid = n.offset(t0 + Duration::from_millis(400));
        assert!(mid > 0.0 && mid < 1.0, "mid-slide offset was {}", mid);

        assert_eq!(n.offset(t0 + Duration::from_millis(800)), 1.0);
    }

    #[test]
    fn test_offset_is_monotonic_during_forward_slide() {
        let mut n = nav(&["a", "b"]);
        let t0 = Instant::now();
        n.go_to(1, t0);

        let mut last = 0.0;
        for ms in (0..=800).step_by(100) {
            let v = n.offset(t0 + Duration::from_millis(ms));
            assert!(v >= last, "offset regressed at {}ms", ms);
            last = v;
        }
    }
}
