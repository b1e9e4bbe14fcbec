//! Contact list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Screen};

/// Render the contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let focused = app.screen == Screen::ContactList;

  let block = Block::default()
    .title(format!(" Contacts ({}) ", app.contacts.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

  let items: Vec<ListItem> = app
    .contacts
    .iter()
    .map(|contact| {
      let marker = if contact.favourite {
        Span::styled("* ", Style::default().fg(Color::Yellow))
      } else {
        Span::raw("  ")
      };
      let name = if contact.name.is_empty() { "—" } else { contact.name.as_str() };
      ListItem::new(Line::from(vec![marker, Span::raw(name.to_string())]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(if app.contacts.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  let highlight = if focused {
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().add_modifier(Modifier::BOLD)
  };

  f.render_stateful_widget(List::new(items).block(block).highlight_style(highlight), area, &mut state);
}
