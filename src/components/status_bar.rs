use ratatui::layout::Rect;

use crate::components::{Component, ComponentContext};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// Bottom row: a message on the left, key hints on the right. The hints
/// give way when both do not fit.
#[derive(Debug, Default)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let style = ctx.style().status_bar;
        frame.fill(Rect { height: 1, ..area }, style);
        let width = area.width as usize;
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }

        let left = truncate_to_width(&self.left, width);
        let left_width = left.chars().count();
        safe_set_string(buffer, bounds, area.x, area.y, &left, style);

        let right_width = self.right.chars().count();
        if !self.right.is_empty() && left_width + 2 + right_width <= width {
            let start_x = area.x.saturating_add((width - right_width) as u16);
            safe_set_string(buffer, bounds, start_x, area.y, &self.right, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn draw(bar: &mut StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        bar.render(&mut frame, area, &ComponentContext::default());
        (0..width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn message_left_hints_right() {
        let mut bar = StatusBar::new();
        bar.set_left("opened Home");
        bar.set_right("q quit");
        assert_eq!(draw(&mut bar, 24), "opened Home       q quit");
    }

    #[test]
    fn hints_yield_to_long_messages() {
        let mut bar = StatusBar::new();
        bar.set_left("Rejected `/tmp/notes.md` is not an image file");
        bar.set_right("q quit");
        let row = draw(&mut bar, 20);
        assert_eq!(row, "Rejected `/tmp/notes");
    }
}
