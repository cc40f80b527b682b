// Scroll state for modal content
//
// Owns offset, content size and viewport size. The logs modal runs with
// auto-follow so new entries keep the view pinned to the bottom; scrolling
// up takes manual control, scrolling back to the bottom re-enables it.

/// Scroll state for a single scrollable surface
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,
    /// Total number of content lines
    total: usize,
    /// Lines visible in the viewport
    viewport: usize,
    /// Keep the view pinned to the newest content
    pub auto_follow: bool,
}

impl ScrollState {
    /// Manual scrolling, anchored at the top (help, section detail)
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: false,
        }
    }

    /// Auto-following scrolling, anchored at the bottom (logs)
    pub fn following() -> Self {
        Self {
            auto_follow: true,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions; call every render frame.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        if self.total > 0 && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_pins_to_bottom_as_content_grows() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);
        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_takes_manual_control() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(20, 5);
        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);

        // New content no longer moves the view
        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_scrolling_back_down_resumes_following() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(10, 5);
        scroll.scroll_up();
        for _ in 0..10 {
            scroll.scroll_down();
        }
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_manual_state_stays_at_top() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(30, 10);
        assert_eq!(scroll.offset(), 0);
        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset(), 0);
    }
}
