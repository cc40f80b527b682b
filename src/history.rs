// Navigation trail - visited-section history with back/forward movement
//
// Works like a browser's session history: a list of visited section
// identifiers plus a cursor. Pushing a new entry while the cursor sits
// somewhere in the middle drops everything after it, so "forward" always
// replays the path that was actually abandoned, never a stale branch.

/// Ordered record of visited section identifiers with a movable cursor.
#[derive(Debug, Clone)]
pub struct Trail {
    entries: Vec<String>,
    cursor: usize,
}

impl Trail {
    /// Start a trail at the initially displayed section.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Record a newly visited section.
    ///
    /// Entries ahead of the cursor (abandoned by earlier back-movement)
    /// are discarded first, matching browser pushState semantics.
    pub fn push(&mut self, id: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(id.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one step and return the identifier now under it.
    /// Returns None at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Move the cursor forward one step and return the identifier now under it.
    /// Returns None at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Identifier under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Whether back movement is possible.
    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether forward movement is possible.
    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut trail = Trail::new("a");
        trail.push("b");
        trail.push("c");

        assert_eq!(trail.back(), Some("b"));
        assert_eq!(trail.back(), Some("a"));
        assert_eq!(trail.back(), None);

        assert_eq!(trail.forward(), Some("b"));
        assert_eq!(trail.forward(), Some("c"));
        assert_eq!(trail.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut trail = Trail::new("a");
        trail.push("b");
        trail.push("c");

        trail.back();
        trail.back();
        assert_eq!(trail.current(), "a");

        // Branching off discards b and c
        trail.push("d");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.current(), "d");
        assert_eq!(trail.forward(), None);
        assert_eq!(trail.back(), Some("a"));
    }

    #[test]
    fn test_single_entry_has_no_movement() {
        let mut trail = Trail::new("home");
        assert!(!trail.can_back());
        assert!(!trail.can_forward());
        assert_eq!(trail.back(), None);
        assert_eq!(trail.forward(), None);
        assert_eq!(trail.current(), "home");
    }
}
