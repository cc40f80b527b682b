// Nav bar - deck title and one link per section
//
// Exactly one link renders in the active style at any time; the active
// link is the navigator's current index even mid-transition. Each link's
// screen rectangle is recorded for mouse click routing.

use crate::tui::app::App;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const LINK_GAP: u16 = 2;

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    app.link_hits.clear();
    if area.height == 0 {
        return;
    }

    let title = format!(" {} ", app.deck.title);
    let title_width = title.width() as u16;

    let mut spans = vec![Span::styled(title, app.theme.deck_title_style())];
    let mut x = area.x + title_width;
    let active = app.nav.current();

    for (idx, section) in app.deck.sections.iter().enumerate() {
        spans.push(Span::styled(
            " ".repeat(LINK_GAP as usize),
            Style::default(),
        ));
        x += LINK_GAP;

        let label = &section.title;
        let width = label.width() as u16;
        let style = if idx == active {
            app.theme.nav_active_style()
        } else {
            app.theme.nav_inactive_style()
        };
        spans.push(Span::styled(label.clone(), style));

        // Clip the hit rect to the bar; off-screen links are unclickable
        if x < area.x + area.width {
            let visible = width.min(area.x + area.width - x);
            app.link_hits.push((Rect::new(x, area.y, visible, 1), idx));
        }
        x += width;
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::deck::demo_deck;
    use crate::logging::LogBuffer;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_exactly_one_link_renders_active() {
        let mut app = App::new(
            demo_deck(),
            &Config::default(),
            Some("worlds"),
            LogBuffer::new(),
        )
        .unwrap();

        let backend = TestBackend::new(120, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, &mut app, f.area()))
            .unwrap();

        assert_eq!(app.link_hits.len(), app.deck.len());

        let buffer = terminal.backend().buffer();
        let active = app
            .link_hits
            .iter()
            .filter(|(rect, _)| buffer[(rect.x, rect.y)].fg == app.theme.nav_active)
            .count();
        assert_eq!(active, 1);

        // The active link is the navigator's current section
        let (rect, idx) = app.link_hits[app.nav.current()];
        assert_eq!(idx, 1);
        assert_eq!(buffer[(rect.x, rect.y)].fg, app.theme.nav_active);
    }
}
