//! Add/edit form pane — right panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::form::{ContactForm, FormField};

/// Render `form` into `area`, highlighting the focused input.
pub fn draw(f: &mut Frame, area: Rect, form: &ContactForm) {
  let title = if form.editing.is_some() { " Edit Contact " } else { " Add Contact " };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  for field in FormField::ALL {
    let focused = field == form.focus;

    let label_style = if focused {
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Cyan)
    };

    let value = match form.text(field) {
      Some(text) if focused => format!("{text}_"),
      Some(text) => text.to_string(),
      None => (if form.fields.favourite { "[x]" } else { "[ ]" }).to_string(),
    };

    lines.push(Line::from(vec![
      Span::styled(format!("{:<12}", field.label()), label_style),
      Span::raw(value),
    ]));
  }

  f.render_widget(Paragraph::new(lines), inner);
}
