use crate::ui::app::Demo;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Tabs};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Tab strip with one entry per demo, the active one highlighted.
    pub fn widget(&self, active: Demo) -> Tabs<'static> {
        let titles: Vec<Span<'static>> = Demo::ALL
            .iter()
            .map(|demo| Span::raw(demo.title()))
            .collect();

        Tabs::new(titles)
            .select(active.index())
            .style(Style::default().fg(HEADER_TEXT))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider(Span::styled("│", Style::default().fg(MUTED_TEXT)))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
