use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::components::{Component, ComponentContext, ScrollState, render_scrolled_lines};
use crate::layout::rect_contains;
use crate::theme::ThemeStyle;
use crate::ui::{UiFrame, ellipsize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub website: &'static str,
    pub glyph: &'static str,
}

impl BillProvider {
    /// Website as an absolute URL.
    pub fn url(&self) -> String {
        if self.website.starts_with("http") {
            self.website.to_string()
        } else {
            format!("https://{}", self.website)
        }
    }
}

pub const BILL_PROVIDERS: [BillProvider; 7] = [
    BillProvider {
        id: "mortgage",
        name: "United Wholesale Mortgage",
        kind: "Mortgage",
        website: "uwm.com",
        glyph: "⌂",
    },
    BillProvider {
        id: "electricity",
        name: "SLEMCO",
        kind: "Electricity",
        website: "slemco.com",
        glyph: "ϟ",
    },
    BillProvider {
        id: "gas",
        name: "Delta Utilities",
        kind: "Gas",
        website: "deltautilities.com",
        glyph: "♨",
    },
    BillProvider {
        id: "trash",
        name: "Acadiana Waste Service",
        kind: "Trash",
        website: "acadianawaste.com",
        glyph: "♻",
    },
    BillProvider {
        id: "utilities",
        name: "Lafayette Utilities System",
        kind: "Utilities",
        website: "lus.org",
        glyph: "≈",
    },
    BillProvider {
        id: "internet",
        name: "Cox",
        kind: "Internet",
        website: "cox.com",
        glyph: "⌁",
    },
    BillProvider {
        id: "hoa",
        name: "Vantaca Home",
        kind: "HOA",
        website: "vantaca.com",
        glyph: "☖",
    },
];

/// Opens a URL; returns whether a browser accepted it.
pub type OpenUrl = fn(&str) -> bool;

pub fn open_in_browser(url: &str) -> bool {
    webbrowser::open(url).is_ok()
}

// Rows before the first provider: heading and a blank line.
const HEADER_ROWS: usize = 2;
const ROWS_PER_PROVIDER: usize = 3;

#[derive(Debug)]
pub struct BillProvidersComponent {
    selected: usize,
    scroll: ScrollState,
    area: Rect,
    opener: OpenUrl,
    last_opened: Option<String>,
}

impl Default for BillProvidersComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BillProvidersComponent {
    pub fn new() -> Self {
        Self::with_opener(open_in_browser)
    }

    pub fn with_opener(opener: OpenUrl) -> Self {
        Self {
            selected: 0,
            scroll: ScrollState::default(),
            area: Rect::default(),
            opener,
            last_opened: None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn last_opened(&self) -> Option<&str> {
        self.last_opened.as_deref()
    }

    pub fn open(&mut self, index: usize) -> bool {
        let Some(provider) = BILL_PROVIDERS.get(index) else {
            return false;
        };
        let url = provider.url();
        let opened = (self.opener)(&url);
        if opened {
            tracing::info!(provider = provider.id, %url, "opened provider website");
        } else {
            tracing::warn!(provider = provider.id, %url, "could not launch browser");
        }
        self.last_opened = Some(url);
        opened
    }

    fn move_selection(&mut self, delta: isize) {
        let last = BILL_PROVIDERS.len() - 1;
        self.selected = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(last)
        };
        self.scroll
            .keep_visible(HEADER_ROWS + self.selected * ROWS_PER_PROVIDER + 1);
        self.scroll
            .keep_visible(HEADER_ROWS + self.selected * ROWS_PER_PROVIDER);
    }

    /// Provider drawn at a window-local cell, if any.
    pub fn provider_at(&self, column: u16, row: u16) -> Option<usize> {
        if !rect_contains(self.area, column, row) {
            return None;
        }
        let line = (row - self.area.y) as usize + self.scroll.offset();
        let rel = line.checked_sub(HEADER_ROWS)?;
        let index = rel / ROWS_PER_PROVIDER;
        (rel % ROWS_PER_PROVIDER < 2 && index < BILL_PROVIDERS.len()).then_some(index)
    }

    pub fn lines(&self, width: u16, style: &ThemeStyle) -> Vec<Line<'static>> {
        let width = width.max(1) as usize;
        let mut lines = vec![
            Line::styled("Bill Providers", style.heading),
            Line::default(),
        ];
        for (index, provider) in BILL_PROVIDERS.iter().enumerate() {
            let selected = index == self.selected;
            let name_style = if selected { style.selected } else { style.heading };
            let name = ellipsize(&format!("{} {}", provider.glyph, provider.name), width);
            lines.push(Line::styled(name, name_style));
            lines.push(Line::from(vec![
                Span::styled(format!("  {} · ", provider.kind), style.label),
                Span::styled(format!("{} ↗", provider.website), style.accent),
            ]));
            lines.push(Line::default());
        }
        lines
    }
}

impl Component for BillProvidersComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.area = area;
        let lines = self.lines(area.width.saturating_sub(1), ctx.style());
        render_scrolled_lines(frame, area, lines, &mut self.scroll, ctx.style().content);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Up => {
                    self.move_selection(-1);
                    true
                }
                KeyCode::Down => {
                    self.move_selection(1);
                    true
                }
                KeyCode::Char(' ') => {
                    self.open(self.selected);
                    true
                }
                _ => self.scroll.handle_event(event),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.provider_at(mouse.column, mouse.row) {
                    Some(index) => {
                        self.selected = index;
                        self.open(index);
                        true
                    }
                    None => false,
                }
            }
            _ => self.scroll.handle_event(event),
        }
    }
}
