// workout-log-tui/src/ui/card.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Static display card: a bordered block with a title, a description, and a
/// styled link line. No state; missing fields simply render empty.
#[derive(Debug, Default, Clone)]
pub struct DisplayCard<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    link: Option<&'a str>,
}

impl<'a> DisplayCard<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn link(mut self, link: &'a str) -> Self {
        self.link = Some(link);
        self
    }
}

impl Widget for DisplayCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.unwrap_or(""));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(self.description.unwrap_or("")),
            Line::from(self.link.unwrap_or("").blue().underlined()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
