use crate::constants::{STAT_COMPLETED, STAT_PENDING, STAT_TOTAL};
use crate::store::TaskStats;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const TOTAL_COLOR: Color = Color::Rgb(0x62, 0x00, 0xEE);
pub const COMPLETED_COLOR: Color = Color::Rgb(0x03, 0xDA, 0xC5);
pub const PENDING_COLOR: Color = Color::Rgb(0xCF, 0x66, 0x79);

/// Card with the running totals shown above the task list
pub struct StatsCard;

impl StatsCard {
    pub fn render(f: &mut Frame, area: Rect, stats: TaskStats) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = LayoutManager::stats_columns(inner);
        let items = [
            (STAT_TOTAL, stats.total, TOTAL_COLOR),
            (STAT_COMPLETED, stats.completed, COMPLETED_COLOR),
            (STAT_PENDING, stats.pending, PENDING_COLOR),
        ];

        for ((label, value, color), column) in items.into_iter().zip(columns) {
            f.render_widget(Self::stat_item(label, value, color), column);
        }
    }

    fn stat_item(label: &'static str, value: usize, color: Color) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
    }
}
