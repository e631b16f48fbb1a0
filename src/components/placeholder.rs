use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::Line;

use crate::components::{Component, ComponentContext, ScrollState, render_scrolled_lines};
use crate::ui::{UiFrame, wrap_words};

/// Body of windows that have no dedicated view yet.
#[derive(Debug)]
pub struct PlaceholderComponent {
    title: String,
    scroll: ScrollState,
}

impl PlaceholderComponent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scroll: ScrollState::default(),
        }
    }

    pub fn text(&self) -> String {
        format!("Content for {}", self.title)
    }
}

impl Component for PlaceholderComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        let lines = wrap_words(&self.text(), area.width.max(1) as usize)
            .into_iter()
            .map(|row| Line::styled(row, ctx.style().value))
            .collect();
        render_scrolled_lines(frame, area, lines, &mut self.scroll, ctx.style().content);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        self.scroll.handle_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn shows_window_title() {
        let mut comp = PlaceholderComponent::new("Paint Colors");
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        comp.render(&mut frame, area, &ComponentContext::default());
        let row: String = (0..30)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(row.trim_end(), "Content for Paint Colors");
    }
}
