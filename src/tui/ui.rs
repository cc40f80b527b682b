// Frame rendering
//
// draw() renders one full frame: background and starfield first, then the
// nav bar / sliding content / dots / status bar stack, then whichever
// overlay is active (modal, toast). Hit rectangles for mouse routing are
// rewritten on every frame by the components that own them.

use crate::tui::app::App;
use crate::tui::modal::Modal;
use crate::tui::{components, theme::Theme};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();

    if app.use_theme_background {
        f.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg)),
            area,
        );
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // nav bar
            Constraint::Min(3),    // section content
            Constraint::Length(1), // dot indicators
            Constraint::Length(1), // status bar
        ])
        .split(area);

    // Stars render into the buffer before content so text draws over them
    app.starfield.resize(chunks[1].width, chunks[1].height);
    let theme = app.theme.clone();
    app.starfield.render(chunks[1], f.buffer_mut(), &theme);

    components::nav_bar::render(f, app, chunks[0]);
    components::section::render(f, app, chunks[1], now);
    components::dots::render(f, app, chunks[2]);
    components::status_bar::render(f, app, chunks[3]);

    if let Some(modal) = app.modal {
        draw_modal(f, app, modal, area);
    }

    components::toast::render(f, app, area);
}

fn draw_modal(f: &mut Frame, app: &mut App, modal: Modal, area: Rect) {
    let rect = centered_rect(70, 70, area);
    let inner_height = rect.height.saturating_sub(2) as usize;

    let lines = modal_lines(app, modal);
    app.modal_scroll.update_dimensions(lines.len(), inner_height);
    let offset = app.modal_scroll.offset();

    let visible: Vec<Line> = lines.into_iter().skip(offset).take(inner_height).collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(visible)
            .style(app.theme.base_style())
            .block(
                Block::default()
                    .title(modal.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.highlight)),
            ),
        rect,
    );
}

fn modal_lines(app: &App, modal: Modal) -> Vec<Line<'static>> {
    match modal {
        Modal::Help => help_lines(&app.theme),
        Modal::Section(idx) => section_lines(app, idx),
        Modal::Logs => app
            .log_buffer
            .get_all()
            .iter()
            .map(|entry| {
                Line::styled(entry.display_line(), app.theme.log_style(entry.level))
            })
            .collect(),
    }
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme.section_title)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::styled("Navigation", heading),
        Line::raw("  ←/↑        previous section"),
        Line::raw("  →/↓        next section"),
        Line::raw("  1-9        jump to section"),
        Line::raw("  Home/End   first / last section"),
        Line::raw("  wheel      next / previous (rate limited)"),
        Line::raw("  drag       quick drag left/up = next, right/down = previous"),
        Line::raw("  click      nav links and dots jump directly"),
        Line::raw(""),
        Line::styled("Trail", heading),
        Line::raw("  [ / Backspace  back along the visited trail"),
        Line::raw("  ]              forward along the trail"),
        Line::raw(""),
        Line::styled("Actions", heading),
        Line::raw("  Enter  open section detail"),
        Line::raw("  Space  surface a discovery message"),
        Line::raw("  y / Y  copy position (readable / JSON)"),
        Line::raw("  t / T  next / previous theme"),
        Line::raw("  l      logs"),
        Line::raw("  ?      this help"),
        Line::raw("  q      quit"),
        Line::raw(""),
        Line::styled("In a modal", heading),
        Line::raw("  j/k ↑/↓ PgUp/PgDn g/G scroll, Esc/Enter/q close"),
    ]
}

fn section_lines(app: &App, idx: usize) -> Vec<Line<'static>> {
    let Some(section) = app.deck.section(idx) else {
        return vec![Line::raw("(section out of range)")];
    };

    let mut lines = vec![Line::styled(
        section.title.clone(),
        Style::default()
            .fg(app.theme.section_title)
            .add_modifier(Modifier::BOLD),
    )];
    if !section.tagline.is_empty() {
        lines.push(Line::styled(
            section.tagline.clone(),
            Style::default().fg(app.theme.tagline),
        ));
    }
    lines.push(Line::raw(""));
    for body_line in section.body.lines() {
        lines.push(Line::raw(body_line.to_string()));
    }
    if !section.messages.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Discoveries",
            Style::default()
                .fg(app.theme.section_title)
                .add_modifier(Modifier::BOLD),
        ));
        for message in &section.messages {
            lines.push(Line::raw(format!("  - {}", message)));
        }
    }
    lines
}

/// Center a rect of the given percentage size inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_lines_cover_every_binding_group() {
        let lines = help_lines(&Theme::dark());
        assert!(lines.len() > 10);
        for heading in ["Navigation", "Trail", "Actions", "In a modal"] {
            assert!(
                lines.iter().any(|l| flatten(l).contains(heading)),
                "missing heading {}",
                heading
            );
        }
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(70, 70, area);
        assert!(rect.x >= area.x && rect.y >= area.y);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }
}
