use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

/// Scroll position of a read-only dialog body
#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_LINES));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_LINES));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    /// Clamped to the real bottom on the next render
    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Lines visible in a viewport of `height`, clamping the offset first.
    pub fn visible_lines<'a>(&mut self, lines: &[&'a str], height: usize) -> Vec<&'a str> {
        let max_scroll = lines.len().saturating_sub(height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(lines.len())
            .viewport_content_length(height)
            .position(self.offset);

        lines.iter().skip(self.offset).take(height).copied().collect()
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}
