use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::task::checkbox_char;
use crate::ops::cards::Card;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Preferred card cell width in terminal cells; the grid packs as many
/// columns of at least this width as fit.
const CARD_CELL_WIDTH: u16 = 30;
/// Cap on task rows shown inside a card before a "+N more" marker.
const MAX_TASK_ROWS: usize = 8;

/// Render the card grid
pub fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.cards.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            " Empty board (press r to reload, q to quit)",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = (area.width / CARD_CELL_WIDTH).max(1) as usize;
    let cell_width = area.width / columns as u16;

    let task_rows = app
        .cards
        .iter()
        .map(|c| c.tasks.len().max(1))
        .max()
        .unwrap_or(1)
        .min(MAX_TASK_ROWS);
    let card_height = (task_rows as u16 + 2).min(area.height.max(3));

    // Keep the selected card's row on screen
    let visible_rows = (area.height / card_height).max(1) as usize;
    let cursor_row = app.cursor_card / columns;
    let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    for (i, card) in app.cards.iter().enumerate() {
        let row = i / columns;
        let col = i % columns;
        if row < first_row || row - first_row >= visible_rows {
            continue;
        }

        let cell = Rect {
            x: area.x + col as u16 * cell_width,
            y: area.y + (row - first_row) as u16 * card_height,
            width: cell_width.min(area.width - col as u16 * cell_width),
            height: card_height.min(area.height - (row - first_row) as u16 * card_height),
        };
        render_card(frame, app, card, i == app.cursor_card, cell);
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &Card, selected: bool, area: Rect) {
    let bg = app.theme.background;
    let accent = app.theme.accent(card.accent);

    let border_style = if selected {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", card.title),
            Style::default()
                .fg(bg)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", card.badge()), Style::default().fg(accent).bg(bg)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 6 || inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    if card.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " No tasks",
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        let visible = inner.height as usize;
        // Scroll within the card so the task cursor stays visible, and
        // never lands on the "+N more" marker row
        let mut first = if selected {
            app.cursor_task.saturating_sub(visible.saturating_sub(1))
        } else {
            0
        };
        if selected && first + visible < card.tasks.len() && app.cursor_task + 1 >= first + visible
        {
            first += 1;
        }
        let end = (first + visible).min(card.tasks.len());

        for (t, task) in card.tasks.iter().enumerate().take(end).skip(first) {
            let is_cursor = selected && t == app.cursor_task;
            if t + 1 == first + visible && end < card.tasks.len() {
                lines.push(Line::from(Span::styled(
                    format!(" +{} more", card.tasks.len() - t),
                    Style::default().fg(app.theme.dim).bg(bg),
                )));
                break;
            }

            let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
            let mut text_style = Style::default()
                .fg(if is_cursor {
                    app.theme.text_bright
                } else {
                    app.theme.text
                })
                .bg(row_bg);
            if task.done {
                text_style = text_style
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let mark_style = Style::default()
                .fg(if task.done { app.theme.dim } else { accent })
                .bg(row_bg);

            let text_width = inner.width.saturating_sub(5) as usize;
            lines.push(Line::from(vec![
                Span::styled(format!(" [{}] ", checkbox_char(task.done)), mark_style),
                Span::styled(truncate_to_width(&task.text, text_width), text_style),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
