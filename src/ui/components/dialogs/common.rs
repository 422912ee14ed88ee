use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a visual cursor when focused
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str, focused: bool) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{}█", input_buffer)
    } else {
        input_buffer.to_string()
    };

    let (title_style, border_style) = if focused {
        (
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (Style::default().fg(Color::White), Style::default().fg(Color::Gray))
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(title_style)
        .style(border_style);

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
}
