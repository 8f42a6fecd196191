use crate::model::config::BoardConfig;
use crate::ops::cards::{ACCENT_PALETTE, Card};

/// Render cards as a standalone HTML page. The export is a static snapshot:
/// checkboxes show state but are disabled, since there is no document to
/// write back to from a browser.
pub fn to_html(cards: &[Card], config: &BoardConfig, title: &str) -> String {
    let mut body = String::new();
    for card in cards {
        body.push_str(&card_html(card));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="generator" content="cardboard">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<div class="board">
{body}</div>
</body>
</html>
"#,
        title = html_escape(title),
        css = board_css(config),
        body = body,
    )
}

fn card_html(card: &Card) -> String {
    let mut rows = String::new();
    if card.tasks.is_empty() {
        rows.push_str("    <div class=\"empty\">No tasks</div>\n");
    } else {
        for task in &card.tasks {
            rows.push_str(&format!(
                "    <div class=\"task{done}\"><input type=\"checkbox\"{checked} disabled> <span>{text}</span></div>\n",
                done = if task.done { " done" } else { "" },
                checked = if task.done { " checked" } else { "" },
                text = html_escape(&task.text),
            ));
        }
    }

    format!(
        r#"  <div class="card">
    <div class="card-header" style="background-color: {accent}">
      <span class="card-title">{title}</span>
      <span class="card-badge">{badge}</span>
    </div>
    <div class="card-body">
{rows}    </div>
  </div>
"#,
        accent = ACCENT_PALETTE[card.accent % ACCENT_PALETTE.len()],
        title = html_escape(&card.title),
        badge = card.badge(),
        rows = rows,
    )
}

/// Page stylesheet. Card geometry comes from the config; the accent colors
/// are inlined per card header.
fn board_css(config: &BoardConfig) -> String {
    format!(
        r#"body {{
  margin: 24px;
  font-family: -apple-system, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
  font-size: 14px;
  background-color: #FDFBF7;
  color: #333;
}}
.board {{
  display: flex;
  flex-wrap: wrap;
  gap: {gap}px;
}}
.card {{
  width: {width}px;
  border: 1px solid #E5DFD5;
  border-radius: 8px;
  overflow: hidden;
}}
.card-header {{
  display: flex;
  justify-content: space-between;
  padding: 8px 12px;
  font-weight: 600;
}}
.card-badge {{
  font-weight: 400;
  color: #555;
}}
.card-body {{
  padding: 8px 12px;
}}
.task {{
  margin: 4px 0;
}}
.task.done span {{
  text-decoration: line-through;
  color: #999;
}}
.empty {{
  color: #999;
  font-style: italic;
}}
"#,
        gap = config.card_gap,
        width = config.card_width,
    )
}

/// HTML-escape a string.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
