use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::ui::UiFrame;

const WHEEL_STEP: isize = 3;

/// Vertical scroll position over `total` rows with `view` visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    total: usize,
    view: usize,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.view)
    }

    /// Record new content/viewport sizes and clamp the offset.
    pub fn apply(&mut self, total: usize, view: usize) {
        self.total = total;
        self.view = view;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn bump(&mut self, delta: isize) {
        let next = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.set_offset(next);
    }

    /// Adjust the offset so `row` is inside the viewport.
    pub fn keep_visible(&mut self, row: usize) {
        if self.view == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.view {
            self.offset = row + 1 - self.view;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll for Up/Down/PageUp/PageDown/Home/End and the mouse wheel.
    /// Returns true when the event is a scroll gesture.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let page = self.view.max(1) as isize;
        let delta = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Up => -1,
                KeyCode::Down => 1,
                KeyCode::PageUp => -page,
                KeyCode::PageDown => page,
                KeyCode::Home => {
                    self.offset = 0;
                    return true;
                }
                KeyCode::End => {
                    self.offset = self.max_offset();
                    return true;
                }
                _ => return false,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => -WHEEL_STEP,
                MouseEventKind::ScrollDown => WHEEL_STEP,
                _ => return false,
            },
            _ => return false,
        };
        self.bump(delta);
        true
    }
}

/// Draw the visible slice of `lines` into `area`, with a scrollbar in the
/// last column when the content overflows.
pub fn render_scrolled_lines(
    frame: &mut UiFrame<'_>,
    area: Rect,
    lines: Vec<Line<'static>>,
    state: &mut ScrollState,
    style: Style,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    frame.fill(area, style);
    let total = lines.len();
    let view = area.height as usize;
    state.apply(total, view);
    let overflow = total > view;
    let text_area = Rect {
        width: if overflow {
            area.width.saturating_sub(1)
        } else {
            area.width
        },
        ..area
    };
    let visible: Vec<Line<'static>> = lines.into_iter().skip(state.offset()).take(view).collect();
    frame.render_widget(Paragraph::new(visible).style(style), text_area);
    if overflow {
        let mut sb_state = ScrollbarState::new(state.max_offset())
            .position(state.offset())
            .viewport_content_length(view);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(style),
            area,
            &mut sb_state,
        );
    }
}
