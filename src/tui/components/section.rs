// Section content - the sliding panels
//
// Each section is one panel exactly as wide as the content area. The
// navigator's fractional offset (in panel widths) positions the strip of
// panels horizontally; at most two are ever visible, the one under
// floor(offset) and its right neighbor. Panels are drawn directly into
// the frame buffer so a partially visible panel clips cleanly at the
// area edges.

use crate::deck::Section;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use std::time::Instant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let offset = app.nav.offset(now);
    let first = offset.floor() as usize;

    for idx in [first, first + 1] {
        let Some(section) = app.deck.section(idx) else {
            continue;
        };
        let shift = ((idx as f64 - offset) * area.width as f64).round() as i32;
        if shift.unsigned_abs() >= area.width as u32 {
            continue;
        }
        draw_panel(f.buffer_mut(), area, shift, section, &app.theme);
    }
}

/// Draw one section panel shifted `shift` cells from the area origin.
fn draw_panel(buf: &mut Buffer, area: Rect, shift: i32, section: &Section, theme: &Theme) {
    let mut lines: Vec<(String, Style)> = Vec::new();

    lines.push((
        section.title.clone(),
        Style::default()
            .fg(theme.section_title)
            .add_modifier(Modifier::BOLD),
    ));
    if !section.tagline.is_empty() {
        lines.push((
            section.tagline.clone(),
            Style::default()
                .fg(theme.tagline)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    if !section.body.is_empty() {
        lines.push((String::new(), Style::default()));
        for body_line in section.body.lines() {
            lines.push((body_line.to_string(), Style::default().fg(theme.body)));
        }
    }

    // Vertically centered block of lines
    let top = area.height.saturating_sub(lines.len() as u16) / 2;

    for (row, (text, style)) in lines.iter().enumerate() {
        let y = top + row as u16;
        if y >= area.height {
            break;
        }
        let centered = (area.width as i32 - text.width() as i32) / 2;
        draw_line_clipped(buf, area, shift + centered, area.y + y, text, *style);
    }
}

/// Draw a line of text at a possibly negative x relative to the area,
/// clipping at both edges.
fn draw_line_clipped(buf: &mut Buffer, area: Rect, x: i32, y: u16, text: &str, style: Style) {
    let mut col = x;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if col >= area.width as i32 {
            break;
        }
        if col >= 0 && col + w <= area.width as i32 {
            let cell = &mut buf[(area.x + col as u16, y)];
            cell.set_char(ch);
            cell.set_style(style);
        }
        col += w;
    }
}
