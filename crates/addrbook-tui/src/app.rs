//! Application state machine and event dispatcher.

use addrbook_core::{Contact, ContactId, ContactStore, ContactSummary};
use addrbook_store_sqlite::SqliteStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::ContactForm;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// All contacts; nothing selected.
  ContactList,
  /// Every field of the selected contact.
  ContactDetail,
  /// Adding a new contact or editing the selected one.
  ContactForm,
}

/// A modal box drawn over the current screen. While one is open it receives
/// every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
  /// Asks before permanently deleting the selected contact.
  ConfirmDelete,
  /// Blocking error message; any key dismisses it.
  Error { title: String, message: String },
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Modal dialog, if one is open.
  pub dialog: Option<Dialog>,

  /// List-view rows, in store order. Reloaded whenever the list is shown.
  pub contacts: Vec<ContactSummary>,

  /// Cursor position within `contacts`.
  pub list_cursor: usize,

  /// The contact shown on the detail screen.
  pub selected: Option<Contact>,

  /// Form state; only meaningful on [`Screen::ContactForm`].
  pub form: ContactForm,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pub store: SqliteStore,
}

impl App {
  pub fn new(store: SqliteStore) -> Self {
    Self {
      screen: Screen::ContactList,
      dialog: None,
      contacts: Vec::new(),
      list_cursor: 0,
      selected: None,
      form: ContactForm::add(),
      status_msg: String::new(),
      store,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the contact list and keep the cursor in range.
  pub async fn load_contacts(&mut self) -> addrbook_store_sqlite::Result<()> {
    let contacts = self.store.fetch_all().await?;
    self.contacts = contacts;
    self.list_cursor = self.list_cursor.min(self.contacts.len().saturating_sub(1));
    Ok(())
  }

  /// The contact under the list cursor, if any.
  pub fn cursor_contact(&self) -> Option<&ContactSummary> { self.contacts.get(self.list_cursor) }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if let Some(dialog) = self.dialog.take() {
      self.handle_dialog_key(dialog, key).await;
      return true;
    }

    match self.screen {
      Screen::ContactList => return self.handle_list_key(key).await,
      Screen::ContactDetail => return self.handle_detail_key(key).await,
      Screen::ContactForm => self.handle_form_key(key).await,
    }
    true
  }

  async fn handle_dialog_key(&mut self, dialog: Dialog, key: KeyEvent) {
    match dialog {
      Dialog::Error { .. } => {}
      Dialog::ConfirmDelete => match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.delete_selected().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
        // Anything else leaves the question open.
        _ => self.dialog = Some(Dialog::ConfirmDelete),
      },
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.list_cursor + 1 < self.contacts.len() {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_contact().map(|c| c.id) {
          self.open_detail(id).await;
        }
      }

      KeyCode::Char('a') => {
        self.form = ContactForm::add();
        self.status_msg.clear();
        self.screen = Screen::ContactForm;
      }

      _ => {}
    }
    true
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => self.show_list().await,

      KeyCode::Char('e') => {
        if let Some(contact) = &self.selected {
          self.form = ContactForm::edit(contact);
          self.status_msg.clear();
          self.screen = Screen::ContactForm;
        }
      }

      KeyCode::Char('d') => {
        if self.selected.is_some() {
          self.dialog = Some(Dialog::ConfirmDelete);
        }
      }

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => match self.form.editing {
        Some(id) => self.open_detail(id).await,
        None => self.show_list().await,
      },
      KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
      KeyCode::Enter => self.save_form().await,
      KeyCode::Backspace => self.form.backspace(),
      KeyCode::Char(c) => self.form.input(c),
      _ => {}
    }
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  /// Reload the list and make it the current screen.
  async fn show_list(&mut self) {
    self.selected = None;
    self.screen = Screen::ContactList;
    if let Err(e) = self.load_contacts().await {
      self.report("Could not load contacts", &e);
    }
  }

  /// Load every field of `id` and show it on the detail screen.
  async fn open_detail(&mut self, id: ContactId) {
    match self.store.fetch_one(id).await {
      Ok(contact) => {
        self.selected = Some(contact);
        self.screen = Screen::ContactDetail;
      }
      Err(e) if e.is_not_found() => {
        tracing::warn!(contact_id = %id, "selected contact no longer exists");
        self.show_list().await;
        self.status_msg = "That contact no longer exists.".into();
      }
      Err(e) => self.report("Could not load contact", &e),
    }
  }

  async fn save_form(&mut self) {
    let fields = match self.form.submit() {
      Ok(fields) => fields,
      Err(e) => {
        let message = match e {
          addrbook_core::Error::Validation(v) => capitalise(&v.to_string()),
          other => other.to_string(),
        };
        self.dialog = Some(Dialog::Error { title: "Error".into(), message });
        return;
      }
    };

    let saved = match self.form.editing {
      None => self.store.create(fields).await,
      Some(id) => self.store.update(id, fields).await.map(|()| id),
    };

    match saved {
      Ok(id) => {
        tracing::info!(contact_id = %id, "contact saved");
        if self.form.editing.is_some() {
          self.open_detail(id).await;
        } else {
          self.show_list().await;
        }
        self.status_msg = "Contact saved".into();
      }
      Err(e) => self.report("Could not save contact", &e),
    }
  }

  async fn delete_selected(&mut self) {
    let Some(id) = self.selected.as_ref().map(|c| c.id) else {
      return;
    };
    match self.store.delete(id).await {
      Ok(()) => {
        tracing::info!(contact_id = %id, "contact deleted");
        self.show_list().await;
        self.status_msg = "Contact deleted".into();
      }
      Err(e) => self.report("Could not delete contact", &e),
    }
  }

  /// Show a store failure in a blocking dialog and log it.
  fn report(&mut self, title: &str, err: &addrbook_store_sqlite::Error) {
    tracing::error!(error = %err, "{title}");
    self.dialog = Some(Dialog::Error { title: title.into(), message: err.to_string() });
  }
}

fn capitalise(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
