use ratatui::prelude::Rect;

use crate::theme::ThemeStyle;
use crate::ui::{UiFrame, ellipsize};

/// What the chrome needs to know about the window it frames.
#[derive(Debug, Clone, Copy)]
pub struct ChromeView<'a> {
    pub title: &'a str,
    pub icon_glyph: &'a str,
    pub focused: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Draw the frame into `area` and return the content rectangle inside it.
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        view: ChromeView<'_>,
        style: &ThemeStyle,
    ) -> Rect;
}

/// Border on the outer ring, title bar on the second row, `[x]` two cells in
/// from the right border.
#[derive(Debug, Default)]
pub struct ThemedDecorator;

pub const CLOSE_LABEL: &str = "[x]";

impl ThemedDecorator {
    /// Column of the close button's first cell, relative to the window.
    pub fn close_column(width: u16) -> Option<u16> {
        width.checked_sub(5).filter(|col| *col >= 1)
    }

    pub fn content_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(2),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(3),
        }
    }
}

impl WindowDecorator for ThemedDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        view: ChromeView<'_>,
        style: &ThemeStyle,
    ) -> Rect {
        if area.width < 2 || area.height < 2 {
            return Rect::default();
        }
        let glyphs = style.border;
        let left = area.x;
        let right = area.x + area.width - 1;
        let top = area.y;
        let bottom = area.y + area.height - 1;
        let inner = area.width - 2;

        let horizontal = glyphs.horizontal.repeat(inner as usize);
        frame.set_string(left, top, glyphs.top_left, style.border_style);
        frame.set_string(left + 1, top, &horizontal, style.border_style);
        frame.set_string(right, top, glyphs.top_right, style.border_style);
        frame.set_string(left, bottom, glyphs.bottom_left, style.border_style);
        frame.set_string(left + 1, bottom, &horizontal, style.border_style);
        frame.set_string(right, bottom, glyphs.bottom_right, style.border_style);
        for y in top + 1..bottom {
            frame.set_string(left, y, glyphs.vertical, style.border_style);
            frame.set_string(right, y, glyphs.vertical, style.border_style);
        }

        let title_row = top + 1;
        if title_row < bottom {
            let bar = style.title_bar_for(view.focused);
            frame.fill(Rect::new(left + 1, title_row, inner, 1), bar);
            let close = Self::close_column(area.width).map(|col| area.x + col);
            let label_end = close.unwrap_or(right);
            let room = label_end.saturating_sub(left + 2) as usize;
            let label = ellipsize(&format!("{} {}", view.icon_glyph, view.title), room);
            frame.set_string(left + 2, title_row, &label, bar);
            if let Some(x) = close {
                frame.set_string(x, title_row, CLOSE_LABEL, style.close_button);
            }
        }

        let content = Self::content_area(area);
        frame.fill(content, style.content);
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_color::ColorSupport;
    use crate::theme::Theme;
    use ratatui::buffer::Buffer;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn draws_border_title_and_close_button() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let style = Theme::ThreeDRounded.style(ColorSupport::TrueColor);
        let content = ThemedDecorator.render_window(
            &mut frame,
            area,
            ChromeView {
                title: "Photos",
                icon_glyph: "▣",
                focused: true,
            },
            &style,
        );
        assert_eq!(content, Rect::new(1, 2, 18, 2));
        assert_eq!(row(&buf, 0), format!("╭{}╮", "─".repeat(18)));
        let title = row(&buf, 1);
        assert!(title.starts_with("│ ▣ Photos"), "{title}");
        assert!(title.ends_with("[x] │"), "{title}");
        assert_eq!(row(&buf, 4), format!("╰{}╯", "─".repeat(18)));
    }

    #[test]
    fn long_titles_stop_before_close_button() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let style = Theme::Pixel.style(ColorSupport::TrueColor);
        ThemedDecorator.render_window(
            &mut frame,
            area,
            ChromeView {
                title: "Paint Colors",
                icon_glyph: "*",
                focused: false,
            },
            &style,
        );
        let title = row(&buf, 1);
        assert_eq!(title, "┃ * Pa…[x] ┃");
    }

    #[test]
    fn close_column_matches_cell_chrome() {
        assert_eq!(ThemedDecorator::close_column(63), Some(58));
        assert_eq!(ThemedDecorator::close_column(5), None);
    }
}
