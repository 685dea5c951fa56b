use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use phonebook_core::domain::ContactId;
use phonebook_core::dto::ContactListItemDto;
use phonebook_core::rules::{validate_name, validate_phone, CopyFeedback};
use phonebook_store::repo::{ContactNew, ContactUpdate};

use crate::actions::Action;

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    ModalAddContact(ContactForm),
    ModalEditContact(ContactForm),
    Confirm(ConfirmState),
}

#[derive(Debug, Clone)]
pub struct App {
    pub mode: Mode,
    pub show_help: bool,
    pub should_quit: bool,
    pub contacts: Vec<ContactListItemDto>,
    pub selected: usize,
    pub status: Option<String>,
    pub error: Option<String>,
    pub copy_feedback: CopyFeedback,
    actions: VecDeque<Action>,
    pub(crate) pending_select: Option<ContactId>,
}

impl App {
    pub fn new(copy_feedback_window: Duration) -> Self {
        let mut app = Self {
            mode: Mode::List,
            show_help: false,
            should_quit: false,
            contacts: Vec::new(),
            selected: 0,
            status: None,
            error: None,
            copy_feedback: CopyFeedback::new(copy_feedback_window),
            actions: VecDeque::new(),
            pending_select: None,
        };
        app.enqueue(Action::LoadList);
        app
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Drops the footer status and error left by the previous action.
    pub fn clear_messages(&mut self) {
        self.status = None;
        self.error = None;
    }

    pub fn selected_contact(&self) -> Option<&ContactListItemDto> {
        self.contacts.get(self.selected)
    }

    pub fn selected_contact_id(&self) -> Option<ContactId> {
        self.selected_contact().map(|c| c.id)
    }

    pub fn apply_list(&mut self, items: Vec<ContactListItemDto>) {
        self.contacts = items;
        if let Some(target) = self.pending_select.take() {
            if let Some(pos) = self.contacts.iter().position(|item| item.id == target) {
                self.selected = pos;
            }
        }
        if self.selected >= self.contacts.len() {
            self.selected = self.contacts.len().saturating_sub(1);
        }
    }

    /// Called on every loop iteration; clears the copy hint once it expired.
    pub fn tick(&mut self, now: Instant) {
        self.copy_feedback.expire(now);
    }

    pub fn is_copied(&self, id: ContactId) -> bool {
        self.copy_feedback.is_copied(id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        let mut mode = std::mem::replace(&mut self.mode, Mode::List);
        match &mut mode {
            Mode::List => {
                if let Some(next) = self.handle_list_key(key) {
                    mode = next;
                }
            }
            Mode::ModalAddContact(form) | Mode::ModalEditContact(form) => {
                if let Some(next) = self.handle_contact_form_key(form, key) {
                    mode = next;
                }
            }
            Mode::Confirm(state) => {
                if let Some(next) = self.handle_confirm_key(state, key) {
                    mode = next;
                }
            }
        }
        self.mode = mode;
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                if !self.contacts.is_empty() {
                    self.selected = self.contacts.len() - 1;
                }
            }
            KeyCode::Char('a') => {
                return Some(Mode::ModalAddContact(ContactForm::new()));
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(item) = self.selected_contact() {
                    return Some(Mode::ModalEditContact(ContactForm::from_item(item)));
                }
            }
            KeyCode::Char('y') | KeyCode::Char('c') => {
                if let Some(id) = self.selected_contact_id() {
                    self.enqueue(Action::CopyPhone(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.selected_contact() {
                    let message = format!("Удалить {}? (y/n)", item.name);
                    return Some(Mode::Confirm(ConfirmState::new(
                        message,
                        ConfirmAction::DeleteContact(item.id),
                    )));
                }
            }
            KeyCode::Char('r') => self.enqueue(Action::LoadList),
            _ => {}
        }
        None
    }

    fn handle_contact_form_key(&mut self, form: &mut ContactForm, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Esc => {
                return Some(Mode::List);
            }
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_save_focus() {
                    if let Some(action) = form.submit() {
                        self.enqueue(action);
                        return Some(Mode::List);
                    }
                } else if form.is_cancel_focus() {
                    return Some(Mode::List);
                } else {
                    form.focus_next();
                }
            }
            _ => form.apply_input(key),
        }
        None
    }

    fn handle_confirm_key(&mut self, state: &mut ConfirmState, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.enqueue(state.to_action());
                return Some(Mode::List);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                return Some(Mode::List);
            }
            _ => {}
        }
        None
    }

    fn move_selection(&mut self, delta: i32) {
        if self.contacts.is_empty() {
            self.selected = 0;
            return;
        }
        let len = self.contacts.len() as i32;
        let mut next = self.selected as i32 + delta;
        if next < 0 {
            next = 0;
        }
        if next >= len {
            next = len - 1;
        }
        self.selected = next as usize;
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            target.push(ch);
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => return false,
    }
    true
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

/// Draft behind the add/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub(crate) focus: usize,
    pub editing_id: Option<ContactId>,
    pub name: String,
    pub phone: String,
    pub name_error: Option<String>,
    pub phone_error: Option<String>,
}

impl ContactForm {
    const FIELD_COUNT: usize = 2;
    const NAME: usize = 0;
    const PHONE: usize = 1;

    pub fn new() -> Self {
        Self {
            focus: 0,
            editing_id: None,
            name: String::new(),
            phone: String::new(),
            name_error: None,
            phone_error: None,
        }
    }

    pub fn from_item(item: &ContactListItemDto) -> Self {
        Self {
            focus: 0,
            editing_id: Some(item.id),
            name: item.name.clone(),
            phone: item.phone.clone(),
            name_error: None,
            phone_error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn focus_next(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_name_focus(&self) -> bool {
        self.focus == Self::NAME
    }

    pub fn is_phone_focus(&self) -> bool {
        self.focus == Self::PHONE
    }

    pub fn is_save_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT
    }

    pub fn is_cancel_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT + 1
    }

    /// Edits the focused field and re-validates it right away.
    pub fn apply_input(&mut self, key: KeyEvent) {
        match self.focus {
            Self::NAME => {
                if apply_text_input(&mut self.name, key) {
                    self.name_error = validate_name(&self.name).err().map(|e| e.to_string());
                }
            }
            Self::PHONE => {
                if apply_text_input(&mut self.phone, key) {
                    self.phone_error = validate_phone(&self.phone).err().map(|e| e.to_string());
                }
            }
            _ => {}
        }
    }

    /// Whether the submit button is shown as enabled.
    pub fn can_submit(&self) -> bool {
        self.name_error.is_none()
            && self.phone_error.is_none()
            && !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    /// Re-runs both validators. Returns the store action only when both pass;
    /// otherwise the errors stay on the form.
    pub fn submit(&mut self) -> Option<Action> {
        self.name_error = validate_name(&self.name).err().map(|e| e.to_string());
        self.phone_error = validate_phone(&self.phone).err().map(|e| e.to_string());
        if self.name_error.is_some() || self.phone_error.is_some() {
            return None;
        }

        let name = self.name.trim().to_string();
        let phone = self.phone.clone();
        match self.editing_id {
            Some(id) => Some(Action::UpdateContact(
                id,
                ContactUpdate {
                    name: Some(name),
                    phone: Some(phone),
                },
            )),
            None => Some(Action::CreateContact(ContactNew { name, phone })),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteContact(ContactId),
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmState {
    pub fn new(message: String, action: ConfirmAction) -> Self {
        Self { message, action }
    }

    pub fn to_action(&self) -> Action {
        match self.action {
            ConfirmAction::DeleteContact(id) => Action::DeleteContact(id),
        }
    }
}
