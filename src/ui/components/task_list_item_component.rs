use crate::constants::{CHECKBOX_CHECKED, CHECKBOX_UNCHECKED};
use crate::entities::Task;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the task list: checkbox, title and optional description
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    /// A removal was submitted and has not committed yet
    pub removing: bool,
}

impl TaskItem {
    pub fn new(task: Task, removing: bool) -> Self {
        Self { task, removing }
    }

    pub fn render(&self, selected: bool, show_description: bool) -> ListItem<'static> {
        let checkbox = if self.task.is_completed {
            CHECKBOX_CHECKED
        } else {
            CHECKBOX_UNCHECKED
        };

        let base_style = if self.removing {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let checkbox_style = if self.task.is_completed && !self.removing {
            Style::default().fg(Color::Green)
        } else {
            base_style
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", checkbox), checkbox_style),
            Span::styled(self.task.title.clone(), base_style.add_modifier(Modifier::BOLD)),
        ])];

        if show_description && self.task.has_description() {
            for description_line in self.task.description.lines().filter(|line| !line.trim().is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", description_line),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        ListItem::new(lines)
    }
}
