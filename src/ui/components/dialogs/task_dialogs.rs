use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::{DESCRIPTION_MAX_LINES, DIALOG_SAVING, DIALOG_TITLE_NEW_TASK, FIELD_DESCRIPTION, FIELD_TITLE};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Field of the add task dialog holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddTaskField {
    #[default]
    Title,
    Description,
}

impl AddTaskField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

pub fn render_add_task_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    focus: AddTaskField,
    saving: bool,
) {
    let description_height = DESCRIPTION_MAX_LINES + 2;
    let dialog_area = LayoutManager::centered_rect_lines(65, 3 + description_height + 6, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(DIALOG_TITLE_NEW_TASK, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),                  // Title input
            Constraint::Length(description_height), // Description input
            Constraint::Length(1),                  // Spacer
            Constraint::Length(1),                  // Instructions or saving indicator
        ])
        .split(inner_area);

    let editable = !saving;
    let title_paragraph = create_input_paragraph(title, FIELD_TITLE, editable && focus == AddTaskField::Title);
    let description_paragraph =
        create_input_paragraph(description, FIELD_DESCRIPTION, editable && focus == AddTaskField::Description);

    f.render_widget(main_block, dialog_area);
    f.render_widget(title_paragraph, chunks[0]);
    f.render_widget(description_paragraph, chunks[1]);

    if saving {
        let saving_paragraph = Paragraph::new(DIALOG_SAVING)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(saving_paragraph, chunks[3]);
    } else {
        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_ADD,
            shortcuts::SEPARATOR,
            shortcuts::TAB_SWITCH,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[3]);
    }
}
