// Dot indicators - one per section, centered under the content
//
// The filled dot always matches the navigator's current index, so it
// flips at the start of a transition, not at the end. Dots are clickable;
// their rects are recorded for mouse routing.

use crate::tui::app::App;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const ACTIVE: &str = "●";
const INACTIVE: &str = "○";
const DOT_GAP: u16 = 2;

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    app.dot_hits.clear();
    if area.height == 0 {
        return;
    }

    let count = app.nav.len() as u16;
    let total_width = count + (count.saturating_sub(1)) * DOT_GAP;
    let start_x = area.x + area.width.saturating_sub(total_width) / 2;

    let active = app.nav.current();
    let mut spans = Vec::with_capacity(count as usize * 2);
    for idx in 0..count as usize {
        if idx > 0 {
            spans.push(Span::raw(" ".repeat(DOT_GAP as usize)));
        }
        let (glyph, color) = if idx == active {
            (ACTIVE, app.theme.dot_active)
        } else {
            (INACTIVE, app.theme.dot_inactive)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));

        let x = start_x + idx as u16 * (1 + DOT_GAP);
        if x < area.x + area.width {
            app.dot_hits.push((Rect::new(x, area.y, 1, 1), idx));
        }
    }

    let row = Rect::new(start_x, area.y, total_width.min(area.width), 1);
    f.render_widget(Paragraph::new(Line::from(spans)), row);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_row_width() {
        // 4 dots with 2-cell gaps occupy 10 cells
        let count: u16 = 4;
        let total = count + (count - 1) * DOT_GAP;
        assert_eq!(total, 10);
    }
}
