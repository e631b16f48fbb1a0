use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::components::{Component, ComponentContext, ScrollState, render_scrolled_lines};
use crate::layout::rect_contains;
use crate::photos::SharedLibrary;
use crate::theme::ThemeStyle;
use crate::ui::ellipsize;
use crate::ui::UiFrame;

const CARD_WIDTH: u16 = 22;
const CARD_GAP: u16 = 1;
const CARD_HEIGHT: usize = 4;
const HEADER_ROWS: usize = 3;
const DELETE_LABEL: &str = "[x]";

pub const EMPTY_TITLE: &str = "No photos yet";
pub const EMPTY_HINT: &str = "Upload your first photo to get started";

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Where a click on the grid landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub index: usize,
    pub on_delete: bool,
}

#[derive(Debug)]
pub struct PhotoGalleryComponent {
    library: SharedLibrary,
    selected: usize,
    scroll: ScrollState,
    area: Rect,
    columns: usize,
    today: fn() -> NaiveDate,
    notice: Option<String>,
}

impl PhotoGalleryComponent {
    pub fn new(library: SharedLibrary) -> Self {
        Self::with_clock(library, local_today)
    }

    pub fn with_clock(library: SharedLibrary, today: fn() -> NaiveDate) -> Self {
        Self {
            library,
            selected: 0,
            scroll: ScrollState::default(),
            area: Rect::default(),
            columns: 1,
            today,
            notice: None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_photo_id(&self) -> Option<u64> {
        self.library
            .borrow()
            .photos()
            .get(self.selected)
            .map(|p| p.id())
    }

    fn clamp_selection(&mut self) {
        let len = self.library.borrow().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn delete_at(&mut self, index: usize) -> bool {
        let id = self.library.borrow().photos().get(index).map(|p| p.id());
        let removed = id.is_some_and(|id| self.library.borrow_mut().remove(id));
        self.clamp_selection();
        removed
    }

    pub fn delete_selected(&mut self) -> bool {
        self.delete_at(self.selected)
    }

    /// Upload the paths in a pasted or dropped blob and leave a summary in
    /// the notice slot.
    pub fn upload_text(&mut self, text: &str) -> usize {
        let (accepted, rejected) = self
            .library
            .borrow_mut()
            .upload_dropped(text, (self.today)());
        let mut parts = Vec::new();
        if !accepted.is_empty() {
            let noun = if accepted.len() == 1 { "photo" } else { "photos" };
            parts.push(format!("Added {} {noun}", accepted.len()));
        }
        for err in &rejected {
            parts.push(format!("Rejected {err}"));
        }
        if !parts.is_empty() {
            self.notice = Some(parts.join("; "));
        }
        if let Some(last) = self.library.borrow().len().checked_sub(1)
            && !accepted.is_empty()
        {
            self.selected = last;
        }
        accepted.len()
    }

    fn columns_for(width: u16) -> usize {
        (((width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)) as usize).max(1)
    }

    fn card_top_row(&self, index: usize) -> usize {
        HEADER_ROWS + (index / self.columns) * CARD_HEIGHT
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.library.borrow().len();
        if len == 0 {
            return;
        }
        self.selected = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(len - 1)
        };
        let top = self.card_top_row(self.selected);
        self.scroll.keep_visible(top + CARD_HEIGHT - 1);
        self.scroll.keep_visible(top);
    }

    /// Card drawn at a window-local cell, if any.
    pub fn card_at(&self, column: u16, row: u16) -> Option<CardHit> {
        if !rect_contains(self.area, column, row) {
            return None;
        }
        let line = (row - self.area.y) as usize + self.scroll.offset();
        let rel_row = line.checked_sub(HEADER_ROWS)?;
        let x = column - self.area.x;
        let col = (x / (CARD_WIDTH + CARD_GAP)) as usize;
        let within = x % (CARD_WIDTH + CARD_GAP);
        if col >= self.columns || within >= CARD_WIDTH {
            return None;
        }
        let index = (rel_row / CARD_HEIGHT) * self.columns + col;
        if index >= self.library.borrow().len() {
            return None;
        }
        // `[x]` sits before the trailing space and right border
        let delete_x = CARD_WIDTH - 2 - DELETE_LABEL.len() as u16;
        let on_delete =
            rel_row % CARD_HEIGHT == 2 && (delete_x..delete_x + DELETE_LABEL.len() as u16).contains(&within);
        Some(CardHit { index, on_delete })
    }

    pub fn lines(&self, width: u16, pixelated: bool, style: &ThemeStyle) -> Vec<Line<'static>> {
        let columns = Self::columns_for(width);
        let w = width.max(1) as usize;
        let mut lines = vec![
            Line::styled("Property Photos", style.heading),
            Line::styled(
                ellipsize("Paste or drop image files to upload · Del removes", w),
                style.muted,
            ),
            Line::default(),
        ];
        let library = self.library.borrow();
        if library.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(format!("{:^w$}", "+"), style.muted));
            lines.push(Line::styled(format!("{EMPTY_TITLE:^w$}"), style.heading));
            lines.push(Line::styled(format!("{EMPTY_HINT:^w$}"), style.muted));
            return lines;
        }

        let glyph = if pixelated { "▦" } else { "▣" };
        let inner = CARD_WIDTH as usize - 2;
        for (row_idx, row) in library.photos().chunks(columns).enumerate() {
            let mut card_lines: [Vec<Span<'static>>; CARD_HEIGHT] = Default::default();
            for (col_idx, photo) in row.iter().enumerate() {
                let index = row_idx * columns + col_idx;
                let card_style = if index == self.selected {
                    style.selected
                } else {
                    style.badge
                };
                if col_idx > 0 {
                    for line in card_lines.iter_mut() {
                        line.push(Span::styled(" ", style.content));
                    }
                }
                let name = ellipsize(&format!("{glyph} {}", photo.name()), inner);
                let date_room = inner - DELETE_LABEL.len() - 1;
                let date = ellipsize(&photo.date_label(), date_room);
                card_lines[0].push(Span::styled(format!("┌{}┐", "─".repeat(inner)), card_style));
                card_lines[1].push(Span::styled(format!("│{name:<inner$}│"), card_style));
                card_lines[2].push(Span::styled(format!("│{date:<date_room$}"), card_style));
                card_lines[2].push(Span::styled(DELETE_LABEL, style.close_button));
                card_lines[2].push(Span::styled(" │", card_style));
                card_lines[3].push(Span::styled(format!("└{}┘", "─".repeat(inner)), card_style));
            }
            lines.extend(card_lines.into_iter().map(Line::from));
        }
        lines
    }
}

impl Component for PhotoGalleryComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.area = area;
        self.clamp_selection();
        let width = area.width.saturating_sub(1);
        self.columns = Self::columns_for(width);
        let lines = self.lines(width, ctx.theme().pixelated(), ctx.style());
        let bg: Style = ctx.style().content;
        render_scrolled_lines(frame, area, lines, &mut self.scroll, bg);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Paste(text) => {
                self.upload_text(text);
                true
            }
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Up => {
                    self.move_selection(-1);
                    true
                }
                KeyCode::Down => {
                    self.move_selection(1);
                    true
                }
                KeyCode::Delete | KeyCode::Backspace => {
                    self.delete_selected();
                    true
                }
                _ => self.scroll.handle_event(event),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.card_at(mouse.column, mouse.row) {
                    Some(CardHit {
                        index,
                        on_delete: true,
                    }) => {
                        self.delete_at(index);
                        true
                    }
                    Some(CardHit { index, .. }) => {
                        self.selected = index;
                        true
                    }
                    None => false,
                }
            }
            _ => self.scroll.handle_event(event),
        }
    }

    fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
