//! Modal dialogs drawn over the whole frame.

use ratatui::{
  Frame,
  layout::{Constraint, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::Line,
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::Dialog;

pub fn draw(f: &mut Frame, area: Rect, dialog: &Dialog) {
  let (title, body, colour) = match dialog {
    Dialog::ConfirmDelete => (
      "Are you sure?",
      vec![
        Line::from("This will permanently delete the contact."),
        Line::from(""),
        Line::from("[y] Delete    [n] Cancel"),
      ],
      Color::Yellow,
    ),
    Dialog::Error { title, message } => (
      title.as_str(),
      vec![Line::from(message.as_str()), Line::from(""), Line::from("[any key] OK")],
      Color::Red,
    ),
  };

  let popup = centered(area, 50, 7);
  let block = Block::default()
    .title(format!(" {title} "))
    .title_style(Style::default().add_modifier(Modifier::BOLD))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(colour));

  f.render_widget(Clear, popup);
  f.render_widget(Paragraph::new(body).block(block).wrap(Wrap { trim: true }), popup);
}

/// A `width` × `height` rectangle in the middle of `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height)])
    .flex(Flex::Center)
    .areas(area);
  let [cell] = Layout::horizontal([Constraint::Length(width)])
    .flex(Flex::Center)
    .areas(row);
  cell
}
