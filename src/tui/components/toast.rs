// Toast - transient notification box, top center

use crate::tui::app::App;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.toast() else {
        return;
    };
    if area.height < 4 || area.width < 6 {
        return;
    }

    let width = (message.width() as u16 + 4).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let rect = Rect::new(x, area.y + 1, width, 3);

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(format!(" {} ", message))
            .style(Style::default().fg(app.theme.highlight))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(app.theme.border_style()),
            ),
        rect,
    );
}
