//! Contact detail pane — right panel, read-only view of one contact.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Render the selected contact into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(contact) = &app.selected else {
    return;
  };
  let c = &contact.fields;

  let block = Block::default()
    .title(format!(" {} ", c.name))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let favourite = if c.favourite { "✓" } else { "✗" };
  let rows = [
    ("name", c.name.as_str()),
    ("email", c.email.as_str()),
    ("phone", c.phone.as_str()),
    ("street", c.street.as_str()),
    ("city", c.city.as_str()),
    ("favourite", favourite),
  ];

  let lines: Vec<Line> = rows
    .into_iter()
    .map(|(label, value)| {
      Line::from(vec![
        Span::styled(
          format!("{label:<12}"),
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
      ])
    })
    .collect();

  f.render_widget(Paragraph::new(lines), inner);
}
