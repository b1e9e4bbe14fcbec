//! Add/edit form state.

use addrbook_core::{Contact, ContactFields, ContactId};

/// The inputs of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Name,
  Email,
  Phone,
  Street,
  City,
  Favourite,
}

impl FormField {
  pub const ALL: [FormField; 6] = [
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Street,
    FormField::City,
    FormField::Favourite,
  ];

  pub fn label(self) -> &'static str {
    match self {
      FormField::Name => "Name",
      FormField::Email => "Email",
      FormField::Phone => "Phone",
      FormField::Street => "Street",
      FormField::City => "City",
      FormField::Favourite => "Favourite",
    }
  }

  fn index(self) -> usize {
    Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
  }
}

/// Contents of the add/edit form.
#[derive(Debug, Clone)]
pub struct ContactForm {
  /// `None` when adding, the contact being edited otherwise.
  pub editing: Option<ContactId>,
  pub fields:  ContactFields,
  pub focus:   FormField,
}

impl ContactForm {
  /// Blank form for a new contact.
  pub fn add() -> Self {
    Self {
      editing: None,
      fields:  ContactFields::default(),
      focus:   FormField::Name,
    }
  }

  /// Form pre-filled with `contact`.
  pub fn edit(contact: &Contact) -> Self {
    Self {
      editing: Some(contact.id),
      fields:  contact.fields.clone(),
      focus:   FormField::Name,
    }
  }

  /// Text buffer behind `field`; `None` for the favourite checkbox.
  pub fn text(&self, field: FormField) -> Option<&str> {
    let f = &self.fields;
    match field {
      FormField::Name => Some(f.name.as_str()),
      FormField::Email => Some(f.email.as_str()),
      FormField::Phone => Some(f.phone.as_str()),
      FormField::Street => Some(f.street.as_str()),
      FormField::City => Some(f.city.as_str()),
      FormField::Favourite => None,
    }
  }

  fn focused_text_mut(&mut self) -> Option<&mut String> {
    let f = &mut self.fields;
    match self.focus {
      FormField::Name => Some(&mut f.name),
      FormField::Email => Some(&mut f.email),
      FormField::Phone => Some(&mut f.phone),
      FormField::Street => Some(&mut f.street),
      FormField::City => Some(&mut f.city),
      FormField::Favourite => None,
    }
  }

  pub fn focus_next(&mut self) {
    let next = (self.focus.index() + 1) % FormField::ALL.len();
    self.focus = FormField::ALL[next];
  }

  pub fn focus_prev(&mut self) {
    let len = FormField::ALL.len();
    let prev = (self.focus.index() + len - 1) % len;
    self.focus = FormField::ALL[prev];
  }

  /// Typed character: appended to the focused text input, or toggles the
  /// checkbox when it has focus and `c` is a space.
  pub fn input(&mut self, c: char) {
    if self.focus == FormField::Favourite {
      if c == ' ' {
        self.fields.favourite = !self.fields.favourite;
      }
      return;
    }
    if let Some(text) = self.focused_text_mut() {
      text.push(c);
    }
  }

  pub fn backspace(&mut self) {
    if let Some(text) = self.focused_text_mut() {
      text.pop();
    }
  }

  /// Validated fields ready to hand to the store.
  pub fn submit(&self) -> addrbook_core::Result<ContactFields> {
    self.fields.validate()?;
    Ok(self.fields.clone())
  }
}
