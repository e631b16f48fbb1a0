use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::constants::MLS_NUMBER;
use crate::layout::rect_contains;
use crate::theme::{Theme, ThemeStyle};
use crate::ui::{UiFrame, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    Ignored,
    /// The theme dropdown was opened or closed.
    Toggled,
    Selected(Theme),
}

/// Top bar: application label on the left, theme picker on the right.
#[derive(Debug, Default)]
pub struct Panel {
    area: Rect,
    picker_rect: Option<Rect>,
    menu_hits: Vec<(Theme, Rect)>,
    menu_open: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.menu_hits.clear();
    }

    /// Split `area` into the top bar row and the remainder.
    pub fn split_area(&mut self, area: Rect) -> (Rect, Rect) {
        let top_h = 1u16.min(area.height);
        let bar = Rect {
            height: top_h,
            ..area
        };
        let rest = Rect {
            y: area.y.saturating_add(top_h),
            height: area.height.saturating_sub(top_h),
            ..area
        };
        self.area = bar;
        (bar, rest)
    }

    fn picker_label(theme: Theme) -> String {
        format!(" {theme} ▾ ")
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, theme: Theme, style: &ThemeStyle) {
        self.picker_rect = None;
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.fill(area, style.top_bar);

        let label = Self::picker_label(theme);
        let label_width = label.chars().count() as u16;
        let max_x = area.x.saturating_add(area.width);
        let picker_x = max_x.saturating_sub(label_width.saturating_add(1));

        const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
        let heading = format!("≡ {CRATE_NAME} · MLS {MLS_NUMBER}");
        let room = picker_x.saturating_sub(area.x).saturating_sub(1) as usize;
        frame.set_string(area.x, area.y, &truncate_to_width(&heading, room), style.top_bar);

        if picker_x > area.x {
            let picker_style = if self.menu_open {
                style.dropdown_selected
            } else {
                style.dropdown
            };
            frame.set_string(picker_x, area.y, &label, picker_style);
            self.picker_rect = Some(Rect {
                x: picker_x,
                y: area.y,
                width: label_width,
                height: 1,
            });
        }
    }

    /// Dropdown under the picker, right-aligned with it. Drawn after the
    /// windows so it stays on top.
    pub fn render_menu(
        &mut self,
        frame: &mut UiFrame<'_>,
        bounds: Rect,
        theme: Theme,
        style: &ThemeStyle,
    ) {
        self.menu_hits.clear();
        if !self.menu_open {
            return;
        }
        let Some(anchor) = self.picker_rect else {
            return;
        };
        let label_width = Theme::ALL
            .iter()
            .map(|t| t.name().chars().count() as u16)
            .max()
            .unwrap_or(1);
        let width = label_width.saturating_add(4).min(bounds.width);
        let right = anchor.x.saturating_add(anchor.width);
        let x = right.saturating_sub(width).max(bounds.x);
        let mut y = anchor.y.saturating_add(1);
        let max_y = bounds.y.saturating_add(bounds.height);
        for option in Theme::ALL {
            if y >= max_y {
                break;
            }
            let rect = Rect {
                x,
                y,
                width,
                height: 1,
            };
            let item_style = if option == theme {
                style.dropdown_selected
            } else {
                style.dropdown
            };
            frame.fill(rect, item_style);
            let text = format!("  {}", option.name());
            frame.set_string(x, y, &truncate_to_width(&text, width as usize), item_style);
            self.menu_hits.push((option, rect));
            y += 1;
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> PanelOutcome {
        let Event::Mouse(mouse) = event else {
            return PanelOutcome::Ignored;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return PanelOutcome::Ignored;
        }
        if self
            .picker_rect
            .is_some_and(|rect| rect_contains(rect, mouse.column, mouse.row))
        {
            self.menu_open = !self.menu_open;
            if !self.menu_open {
                self.menu_hits.clear();
            }
            return PanelOutcome::Toggled;
        }
        if !self.menu_open {
            return PanelOutcome::Ignored;
        }
        let picked = self
            .menu_hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, mouse.column, mouse.row))
            .map(|(theme, _)| *theme);
        self.close_menu();
        match picked {
            Some(theme) => PanelOutcome::Selected(theme),
            // Clicking elsewhere dismisses the dropdown and lets the click through.
            None => PanelOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_color::ColorSupport;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(panel: &mut Panel, theme: Theme) -> Buffer {
        let screen = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(screen);
        let style = theme.style(ColorSupport::TrueColor);
        let mut frame = UiFrame::from_parts(screen, &mut buf);
        panel.split_area(screen);
        panel.render(&mut frame, theme, &style);
        panel.render_menu(&mut frame, screen, theme, &style);
        buf
    }

    #[test]
    fn picker_sits_in_top_right_and_toggles() {
        let mut panel = Panel::new();
        let buf = draw(&mut panel, Theme::Pixel);
        // " Pixel ▾ " is 9 wide, one column of padding on the right
        assert_eq!(buf.cell((50, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((51, 0)).unwrap().symbol(), "P");
        assert_eq!(buf.cell((59, 0)).unwrap().symbol(), " ");
        assert_eq!(panel.handle_event(&click(53, 0)), PanelOutcome::Toggled);
        assert!(panel.menu_open());
    }

    #[test]
    fn choosing_a_theme_closes_dropdown() {
        let mut panel = Panel::new();
        draw(&mut panel, Theme::Pixel);
        panel.handle_event(&click(53, 0));
        let buf = draw(&mut panel, Theme::Pixel);
        // rows 1..=3 list the themes in order
        let row3: String = (46..60)
            .map(|x| buf.cell((x, 3)).unwrap().symbol().to_string())
            .collect();
        assert!(row3.contains("3D Rounded"), "{row3}");
        assert_eq!(
            panel.handle_event(&click(55, 2)),
            PanelOutcome::Selected(Theme::ThreeD)
        );
        assert!(!panel.menu_open());
    }

    #[test]
    fn outside_click_dismisses_without_consuming() {
        let mut panel = Panel::new();
        draw(&mut panel, Theme::Pixel);
        panel.handle_event(&click(53, 0));
        draw(&mut panel, Theme::Pixel);
        assert_eq!(panel.handle_event(&click(5, 8)), PanelOutcome::Ignored);
        assert!(!panel.menu_open());
    }
}
