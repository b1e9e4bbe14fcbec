//! TUI rendering — orchestrates all panes.

pub mod contact_detail;
pub mod contact_form;
pub mod contact_list;
pub mod dialog;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Dialog, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  if let Some(d) = &app.dialog {
    dialog::draw(f, area, d);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Address Book",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into left list pane (30%) and right pane (70%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
    .split(area);

  contact_list::draw(f, cols[0], app);

  match app.screen {
    Screen::ContactForm => contact_form::draw(f, cols[1], &app.form),
    Screen::ContactDetail => contact_detail::draw(f, cols[1], app),
    Screen::ContactList => draw_empty_detail(f, cols[1], app.contacts.is_empty()),
  }
}

fn draw_empty_detail(f: &mut Frame, area: Rect, no_contacts: bool) {
  let block = Block::default()
    .title(" Contact ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let hint = if no_contacts {
    "No contacts yet. Press a to add one."
  } else {
    "Select a contact and press Enter."
  };
  f.render_widget(
    Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match (&app.dialog, &app.screen) {
    (Some(Dialog::ConfirmDelete), _) => ("CONFIRM", "y delete  n cancel"),
    (Some(Dialog::Error { .. }), _) => ("ERROR", "any key to dismiss"),
    (None, Screen::ContactList) => ("LIST", "↑↓/jk navigate  Enter view  a add  q quit"),
    (None, Screen::ContactDetail) => ("VIEW", "e edit  d delete  Esc back  q quit"),
    (None, Screen::ContactForm) => (
      "EDIT",
      "Tab/↑↓ move  Space toggle favourite  Enter save  Esc cancel",
    ),
  };

  let status = if app.status_msg.is_empty() || app.dialog.is_some() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::Gray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
