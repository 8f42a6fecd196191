use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::pad_to_width;

/// Render the status row (bottom of screen): a transient message if there
/// is one, otherwise the key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref msg) = app.status {
        Line::from(Span::styled(
            pad_to_width(&format!(" {}", msg), width),
            Style::default().fg(app.theme.highlight).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            pad_to_width(
                " space toggle   w/a view   r reload   ? help   q quit",
                width,
            ),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
