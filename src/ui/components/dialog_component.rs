//! Modal dialog component.
//!
//! Hosts the add task form plus the read-only help and logs dialogs. The
//! add task form stays open after a valid submission: it switches to a
//! saving state until the app component reports the task as committed or
//! the user cancels with `Esc`.

use crate::logger::Logger;
use crate::ui::components::dialogs::{system_dialogs, task_dialogs, AddTaskField, ScrollState};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Single line text buffer with a character based cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let byte_pos = self.byte_pos(self.cursor - 1);
            self.buffer.remove(byte_pos);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let byte_pos = self.byte_pos(self.cursor);
            self.buffer.remove(byte_pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(pos, _)| pos)
            .unwrap_or(self.buffer.len())
    }
}

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub title_input: TextInput,
    pub description_input: TextInput,
    pub focus: AddTaskField,
    pub saving: bool,
    pub scroll: ScrollState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            title_input: TextInput::default(),
            description_input: TextInput::default(),
            focus: AddTaskField::Title,
            saving: false,
            scroll: ScrollState::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Lock the add task form while its submission is in flight
    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    pub fn hide(&mut self) {
        self.clear_dialog();
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            AddTaskField::Title => &mut self.title_input,
            AddTaskField::Description => &mut self.description_input,
        }
    }

    fn handle_submit(&mut self) -> Action {
        // Blank titles keep the form open without feedback
        if self.title_input.value().trim().is_empty() {
            return Action::None;
        }

        Action::SubmitTask {
            title: self.title_input.value().to_string(),
            description: self.description_input.value().to_string(),
        }
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.title_input.clear();
        self.description_input.clear();
        self.focus = AddTaskField::Title;
        self.saving = false;
        self.scroll.reset();
    }

    fn handle_add_task_key(&mut self, key: KeyEvent) -> Action {
        if self.saving {
            return match key.code {
                KeyCode::Esc => Action::CancelPendingAdd,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_input().insert(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_input().backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.focused_input().delete();
                Action::None
            }
            KeyCode::Left => {
                self.focused_input().move_left();
                Action::None
            }
            KeyCode::Right => {
                self.focused_input().move_right();
                Action::None
            }
            KeyCode::Home => {
                self.focused_input().move_home();
                Action::None
            }
            KeyCode::End => {
                self.focused_input().move_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if close_keys.contains(&key.code) {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.dialog_type {
            None => Action::None,
            Some(DialogType::AddTask) => self.handle_add_task_key(key),
            Some(DialogType::Help) => {
                self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('?'), KeyCode::Char('h')])
            }
            Some(DialogType::Logs) => {
                self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')])
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                // An add in flight owns the dialog until it commits or is cancelled
                if self.saving {
                    return Action::None;
                }
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            None => {}
            Some(DialogType::AddTask) => task_dialogs::render_add_task_dialog(
                f,
                rect,
                self.title_input.value(),
                self.description_input.value(),
                self.focus,
                self.saving,
            ),
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}
