use crate::constants::{EMPTY_TASK_LIST, TASKS_TITLE};
use crate::entities::{Task, TaskId};
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::HashSet;

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub removing: HashSet<TaskId>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub show_descriptions: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            removing: HashSet::new(),
            selected_index: 0,
            list_state: ListState::default(),
            show_descriptions: true,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, removing: HashSet<TaskId>) {
        self.tasks = tasks;
        self.removing = removing;
        self.update_list_state();
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
            self.update_list_state();
        }
    }

    fn previous_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    fn create_task_list_items(&self) -> Vec<ListItem<'static>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                TaskItem::new(task.clone(), self.removing.contains(&task.id))
                    .render(index == self.selected_index, self.show_descriptions)
            })
            .collect()
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Home => Action::FirstTask,
            KeyCode::End => Action::LastTask,
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => match self.selected_task() {
                Some(task) => Action::ToggleTask {
                    id: task.id,
                    completed: !task.is_completed,
                },
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task() {
                Some(task) => Action::DeleteTask(task.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.next_task();
                Action::None
            }
            Action::PreviousTask => {
                self.previous_task();
                Action::None
            }
            Action::FirstTask => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            Action::LastTask => {
                self.selected_index = self.tasks.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("{}({}) ", TASKS_TITLE, self.tasks.len()))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Gray));

        if self.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_TASK_LIST)
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, rect);
            return;
        }

        let list = List::new(self.create_task_list_items())
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
