// Status bar - position, trail, theme and the key hint line

use crate::tui::app::App;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }

    let position = format!(
        " {}/{} {} ",
        app.nav.current() + 1,
        app.nav.len(),
        app.nav.current_id()
    );
    let sliding = if app.nav.is_transitioning() {
        "~ "
    } else {
        ""
    };
    let trail = {
        let t = app.nav.trail();
        let back = if t.can_back() { "[" } else { " " };
        let fwd = if t.can_forward() { "]" } else { " " };
        format!("{}{} ", back, fwd)
    };

    let hint = "←→ move | Enter detail | Space discover | y share | t theme | ? help | q quit";

    let left = format!("{}{}{}", position, sliding, trail);
    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + hint.chars().count() + 1);

    let line = Line::from(vec![
        Span::styled(left, app.theme.status_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(hint, Style::default().fg(app.theme.nav_inactive)),
        Span::styled(
            format!(" {}", app.theme_kind.name()),
            Style::default().fg(app.theme.highlight),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
