use super::scroll::ScrollState;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub const HELP_TEXT: &str = "\
TASKS
  j / Down        Next task
  k / Up          Previous task
  Home / End      First / last task
  Space, x, Enter Toggle completed
  d / Delete      Delete task

ADDING
  a / n           New task
  Tab             Switch between title and description
  Enter           Add the task (title required)
  Esc             Cancel, or abort a save in progress

GENERAL
  ?  / h          This help
  G               Logs
  q / Ctrl+C      Quit";

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    render_scrollable_text(f, area, DIALOG_TITLE_HELP, HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollState) {
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &logs_content, scroll);
}

fn render_scrollable_text(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut ScrollState) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let visible_text = scroll.visible_lines(&lines, visible_height).join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar);
    }
}
