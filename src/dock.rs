//! Bottom dock of launchers.
//!
//! Items are laid out centred inside a framed strip along the bottom of the
//! screen. A single press only selects an item; pressing the same item again
//! within [`DOUBLE_ACTIVATION_MS`] (or pressing Enter) produces a
//! [`DockRequest`] for the window manager.
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::constants::DOUBLE_ACTIVATION_MS;
use crate::layout::rect_contains;
use crate::theme::{Theme, ThemeStyle};
use crate::ui::UiFrame;
use crate::window::IconRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub glyph: &'static str,
}

pub const DOCK_ITEMS: [DockItem; 7] = [
    DockItem {
        title: "Home",
        icon: "house",
        glyph: "⌂",
    },
    DockItem {
        title: "Projects",
        icon: "project",
        glyph: "◧",
    },
    DockItem {
        title: "Documents",
        icon: "document",
        glyph: "▤",
    },
    DockItem {
        title: "Photos",
        icon: "photos",
        glyph: "▣",
    },
    DockItem {
        title: "Contractors",
        icon: "provider",
        glyph: "☎",
    },
    DockItem {
        title: "Paint Colors",
        icon: "paint",
        glyph: "✎",
    },
    DockItem {
        title: "Bills",
        icon: "bills",
        glyph: "$",
    },
];

/// Glyph drawn next to a window title, looked up by icon name.
pub fn glyph_for_icon(icon: &str) -> &'static str {
    DOCK_ITEMS
        .iter()
        .find(|item| item.icon == icon)
        .map(|item| item.glyph)
        .unwrap_or("□")
}

/// Ask for a new window with the theme-resolved icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockRequest {
    pub title: String,
    pub icon: IconRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockOutcome {
    Ignored,
    Selected(usize),
    Open(DockRequest),
}

#[derive(Debug)]
pub struct Dock {
    area: Rect,
    hits: Vec<(usize, Rect)>,
    selected: usize,
    last_press: Option<(usize, Instant)>,
}

impl Default for Dock {
    fn default() -> Self {
        Self::new()
    }
}

impl Dock {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            hits: Vec::new(),
            selected: 0,
            last_press: None,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % DOCK_ITEMS.len();
        self.last_press = None;
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + DOCK_ITEMS.len() - 1) % DOCK_ITEMS.len();
        self.last_press = None;
    }

    pub fn request_for(&self, index: usize, theme: Theme) -> Option<DockRequest> {
        let item = DOCK_ITEMS.get(index)?;
        Some(DockRequest {
            title: item.title.to_string(),
            icon: theme.icon_ref(item.icon),
        })
    }

    /// Request for the item with the given title, if the dock has one.
    pub fn request_for_title(&self, title: &str, theme: Theme) -> Option<DockRequest> {
        let index = DOCK_ITEMS
            .iter()
            .position(|item| item.title.eq_ignore_ascii_case(title))?;
        self.request_for(index, theme)
    }

    pub fn activate_selected(&self, theme: Theme) -> Option<DockRequest> {
        self.request_for(self.selected, theme)
    }

    /// Register a press on `index` at `now`.
    pub fn press_at(&mut self, index: usize, now: Instant, theme: Theme) -> DockOutcome {
        if index >= DOCK_ITEMS.len() {
            return DockOutcome::Ignored;
        }
        self.selected = index;
        let window = Duration::from_millis(DOUBLE_ACTIVATION_MS);
        if let Some((last, at)) = self.last_press
            && last == index
            && now.saturating_duration_since(at) <= window
        {
            self.last_press = None;
            return match self.request_for(index, theme) {
                Some(request) => {
                    tracing::debug!(title = %request.title, icon = request.icon.path(), "dock activation");
                    DockOutcome::Open(request)
                }
                None => DockOutcome::Ignored,
            };
        }
        self.last_press = Some((index, now));
        DockOutcome::Selected(index)
    }

    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(index, _)| *index)
    }

    pub fn handle_event(&mut self, event: &Event, theme: Theme) -> DockOutcome {
        match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.item_at(mouse.column, mouse.row) {
                    Some(index) => self.press_at(index, Instant::now(), theme),
                    None => DockOutcome::Ignored,
                }
            }
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Left => {
                    self.select_prev();
                    DockOutcome::Selected(self.selected)
                }
                KeyCode::Right => {
                    self.select_next();
                    DockOutcome::Selected(self.selected)
                }
                KeyCode::Enter => self
                    .activate_selected(theme)
                    .map(DockOutcome::Open)
                    .unwrap_or(DockOutcome::Ignored),
                _ => DockOutcome::Ignored,
            },
            _ => DockOutcome::Ignored,
        }
    }

    fn chunk(item: &DockItem) -> String {
        format!(" {} {} ", item.glyph, item.title)
    }

    /// Draw the dock centred along the bottom of `screen` and record the hit
    /// rectangles for this frame.
    pub fn render(&mut self, frame: &mut UiFrame<'_>, screen: Rect, style: &ThemeStyle) {
        self.hits.clear();
        let height = Self::HEIGHT.min(screen.height);
        let content: u16 = DOCK_ITEMS
            .iter()
            .map(|item| Self::chunk(item).chars().count() as u16)
            .sum();
        let width = content.saturating_add(2).min(screen.width);
        if width < 3 || height < 3 {
            self.area = Rect::default();
            return;
        }
        let area = Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + screen.height - height,
            width,
            height,
        };
        self.area = area;

        let glyphs = style.border;
        let inner = (width - 2) as usize;
        let right = area.x + width - 1;
        frame.fill(area, style.dock);
        frame.set_string(area.x, area.y, glyphs.top_left, style.dock);
        frame.set_string(area.x + 1, area.y, &glyphs.horizontal.repeat(inner), style.dock);
        frame.set_string(right, area.y, glyphs.top_right, style.dock);
        let row = area.y + 1;
        frame.set_string(area.x, row, glyphs.vertical, style.dock);
        frame.set_string(right, row, glyphs.vertical, style.dock);
        let bottom = area.y + 2;
        frame.set_string(area.x, bottom, glyphs.bottom_left, style.dock);
        frame.set_string(area.x + 1, bottom, &glyphs.horizontal.repeat(inner), style.dock);
        frame.set_string(right, bottom, glyphs.bottom_right, style.dock);

        let mut x = area.x + 1;
        for (index, item) in DOCK_ITEMS.iter().enumerate() {
            let chunk = Self::chunk(item);
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > right {
                break;
            }
            let item_style = if index == self.selected {
                style.dock_selected
            } else {
                style.dock
            };
            frame.set_string(x, row, &chunk, item_style);
            self.hits.push((
                index,
                Rect {
                    x,
                    y: row,
                    width: chunk_width,
                    height: 1,
                },
            ));
            x = x.saturating_add(chunk_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_color::ColorSupport;
    use ratatui::buffer::Buffer;

    fn rendered(width: u16, height: u16) -> (Dock, Buffer) {
        let screen = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(screen);
        let mut dock = Dock::new();
        let mut frame = UiFrame::from_parts(screen, &mut buf);
        dock.render(&mut frame, screen, &Theme::Pixel.style(ColorSupport::TrueColor));
        (dock, buf)
    }

    #[test]
    fn double_press_within_window_opens() {
        let mut dock = Dock::new();
        let t0 = Instant::now();
        assert_eq!(dock.press_at(3, t0, Theme::ThreeD), DockOutcome::Selected(3));
        let outcome = dock.press_at(3, t0 + Duration::from_millis(300), Theme::ThreeD);
        let DockOutcome::Open(request) = outcome else {
            panic!("expected open, got {outcome:?}");
        };
        assert_eq!(request.title, "Photos");
        assert_eq!(request.icon.path(), "/icons/3d-photos.png");
    }

    #[test]
    fn slow_or_different_presses_only_select() {
        let mut dock = Dock::new();
        let t0 = Instant::now();
        dock.press_at(0, t0, Theme::Pixel);
        assert_eq!(
            dock.press_at(0, t0 + Duration::from_millis(900), Theme::Pixel),
            DockOutcome::Selected(0)
        );
        assert_eq!(
            dock.press_at(1, t0 + Duration::from_millis(1000), Theme::Pixel),
            DockOutcome::Selected(1)
        );
        assert_eq!(dock.selected(), 1);
    }

    #[test]
    fn third_press_starts_a_new_pair() {
        let mut dock = Dock::new();
        let t0 = Instant::now();
        dock.press_at(6, t0, Theme::Pixel);
        assert!(matches!(
            dock.press_at(6, t0 + Duration::from_millis(100), Theme::Pixel),
            DockOutcome::Open(_)
        ));
        assert_eq!(
            dock.press_at(6, t0 + Duration::from_millis(200), Theme::Pixel),
            DockOutcome::Selected(6)
        );
    }

    #[test]
    fn render_centres_items_along_bottom() {
        let (dock, buf) = rendered(120, 30);
        let area = dock.area();
        assert_eq!(area.y, 27);
        assert_eq!(area.height, 3);
        let left_gap = area.x;
        let right_gap = 120 - (area.x + area.width);
        assert!(left_gap.abs_diff(right_gap) <= 1);
        let index = dock.item_at(area.x + 2, 28);
        assert_eq!(index, Some(0));
        assert_eq!(buf.cell((area.x + 2, 28)).unwrap().symbol(), "⌂");
        assert_eq!(dock.item_at(area.x + 2, 27), None);
    }

    #[test]
    fn keyboard_selection_wraps_and_enter_opens() {
        let mut dock = Dock::new();
        dock.select_prev();
        assert_eq!(dock.selected(), 6);
        dock.select_next();
        assert_eq!(dock.selected(), 0);
        let request = dock.activate_selected(Theme::ThreeDRounded).unwrap();
        assert_eq!(request.title, "Home");
        assert_eq!(request.icon.path(), "/icons/3d-rounded-house.png");
    }

    #[test]
    fn lookup_by_title_and_icon() {
        let dock = Dock::new();
        assert_eq!(
            dock.request_for_title("bills", Theme::Pixel).unwrap().icon.path(),
            "/icons/bills.png"
        );
        assert!(dock.request_for_title("Garage", Theme::Pixel).is_none());
        assert_eq!(glyph_for_icon("paint"), "✎");
        assert_eq!(glyph_for_icon("unknown"), "□");
    }
}
