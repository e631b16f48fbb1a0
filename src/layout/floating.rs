use super::{PixelRect, Point, Size};
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// One of the eight invisible border regions that start a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
        ResizeHandle::Right,
    ];

    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight
        )
    }
}

/// Sizes of the interactive regions of a window's chrome, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub edge_x: i32,
    pub edge_y: i32,
    pub corner_x: i32,
    pub corner_y: i32,
    pub title_top: i32,
    pub title_height: i32,
    pub close_width: i32,
    pub close_inset: i32,
}

impl ChromeMetrics {
    /// Pointer-precise metrics: 12px corners, 4px edges, a 32px title bar.
    pub const fn pointer() -> Self {
        Self {
            edge_x: 4,
            edge_y: 4,
            corner_x: 12,
            corner_y: 12,
            title_top: 0,
            title_height: 32,
            close_width: 20,
            close_inset: 12,
        }
    }

    /// Metrics for a cell grid: every handle is one cell, the border takes the
    /// first row and the title bar the second, and the close button is `[x]`.
    pub const fn cells(cell_width: i32, cell_height: i32) -> Self {
        Self {
            edge_x: cell_width,
            edge_y: cell_height,
            corner_x: cell_width,
            corner_y: cell_height,
            title_top: cell_height,
            title_height: cell_height,
            close_width: cell_width * 3,
            close_inset: cell_width * 2,
        }
    }

    /// Height of the chrome above the content area.
    pub fn title_bar_height(&self) -> i32 {
        self.title_top + self.title_height
    }

    pub fn content_height(&self, size: Size) -> i32 {
        size.height.saturating_sub(self.title_bar_height()).max(0)
    }

    pub fn handle_rect(&self, bounds: PixelRect, handle: ResizeHandle) -> PixelRect {
        let right = bounds.right();
        let bottom = bounds.bottom();
        let inner_w = bounds.width.saturating_sub(self.corner_x * 2).max(0);
        let inner_h = bounds.height.saturating_sub(self.corner_y * 2).max(0);
        match handle {
            ResizeHandle::TopLeft => PixelRect::new(bounds.x, bounds.y, self.corner_x, self.corner_y),
            ResizeHandle::TopRight => {
                PixelRect::new(right - self.corner_x, bounds.y, self.corner_x, self.corner_y)
            }
            ResizeHandle::BottomLeft => {
                PixelRect::new(bounds.x, bottom - self.corner_y, self.corner_x, self.corner_y)
            }
            ResizeHandle::BottomRight => PixelRect::new(
                right - self.corner_x,
                bottom - self.corner_y,
                self.corner_x,
                self.corner_y,
            ),
            ResizeHandle::Top => {
                PixelRect::new(bounds.x + self.corner_x, bounds.y, inner_w, self.edge_y)
            }
            ResizeHandle::Bottom => PixelRect::new(
                bounds.x + self.corner_x,
                bottom - self.edge_y,
                inner_w,
                self.edge_y,
            ),
            ResizeHandle::Left => {
                PixelRect::new(bounds.x, bounds.y + self.corner_y, self.edge_x, inner_h)
            }
            ResizeHandle::Right => PixelRect::new(
                right - self.edge_x,
                bounds.y + self.corner_y,
                self.edge_x,
                inner_h,
            ),
        }
    }

    pub fn title_bar_rect(&self, bounds: PixelRect) -> PixelRect {
        PixelRect::new(
            bounds.x,
            bounds.y + self.title_top,
            bounds.width,
            self.title_height,
        )
    }

    pub fn close_button_rect(&self, bounds: PixelRect) -> PixelRect {
        PixelRect::new(
            bounds.right() - self.close_inset - self.close_width,
            bounds.y + self.title_top,
            self.close_width,
            self.title_height,
        )
    }

    /// Classify a point that lies inside `bounds`.
    ///
    /// Corners win over edges, edges over the close button, and the close
    /// button over the rest of the title bar.
    pub fn hit_test(&self, bounds: PixelRect, point: Point) -> Option<ChromeHit> {
        if !bounds.contains(point) {
            return None;
        }
        if let Some(handle) = ResizeHandle::ALL
            .iter()
            .copied()
            .find(|handle| self.handle_rect(bounds, *handle).contains(point))
        {
            return Some(ChromeHit::Resize(handle));
        }
        if self.close_button_rect(bounds).contains(point) {
            return Some(ChromeHit::Close);
        }
        if self.title_bar_rect(bounds).contains(point) {
            return Some(ChromeHit::TitleBar);
        }
        Some(ChromeHit::Body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Resize(ResizeHandle),
    Close,
    TitleBar,
    Body,
}

/// Position of a dragged window: pointer minus the offset captured at press.
pub fn apply_drag(pointer: Point, grab_offset: Point) -> Point {
    pointer.offset_from(grab_offset)
}

/// New bounds for a resize in progress.
///
/// Each active edge is applied independently. Right/bottom grow from the
/// fixed origin and are floored at the minimum; left/top move the origin but
/// never past the point where the opposite edge would have to move.
pub fn apply_resize(
    origin_position: Point,
    origin_size: Size,
    handle: ResizeHandle,
    delta: Point,
) -> (Point, Size) {
    let mut position = origin_position;
    let mut size = origin_size;

    if handle.moves_right() {
        size.width = origin_size
            .width
            .saturating_add(delta.x)
            .max(MIN_WINDOW_WIDTH);
    }
    if handle.moves_left() {
        let change = delta
            .x
            .min(origin_size.width.saturating_sub(MIN_WINDOW_WIDTH));
        size.width = origin_size.width.saturating_sub(change);
        position.x = origin_position.x.saturating_add(change);
    }
    if handle.moves_bottom() {
        size.height = origin_size
            .height
            .saturating_add(delta.y)
            .max(MIN_WINDOW_HEIGHT);
    }
    if handle.moves_top() {
        let change = delta
            .y
            .min(origin_size.height.saturating_sub(MIN_WINDOW_HEIGHT));
        size.height = origin_size.height.saturating_sub(change);
        position.y = origin_position.y.saturating_add(change);
    }

    (position, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(100, 100);
    const SIZE: Size = Size::new(500, 600);

    #[test]
    fn left_handle_clamps_and_moves_origin() {
        let (pos, size) = apply_resize(ORIGIN, SIZE, ResizeHandle::Left, Point::new(250, 0));
        assert_eq!(size.width, 300);
        assert_eq!(pos.x, 300);
        assert_eq!(size.height, 600);
        assert_eq!(pos.y, 100);
    }

    #[test]
    fn left_handle_grows_when_dragged_outward() {
        let (pos, size) = apply_resize(ORIGIN, SIZE, ResizeHandle::Left, Point::new(-40, 0));
        assert_eq!(size.width, 540);
        assert_eq!(pos.x, 60);
    }

    #[test]
    fn top_handle_clamps_symmetrically() {
        let (pos, size) = apply_resize(ORIGIN, SIZE, ResizeHandle::Top, Point::new(0, 1000));
        assert_eq!(size.height, 200);
        assert_eq!(pos.y, 500);
    }

    #[test]
    fn right_and_bottom_floor_at_minimum() {
        let (pos, size) = apply_resize(
            ORIGIN,
            SIZE,
            ResizeHandle::BottomRight,
            Point::new(-10_000, -10_000),
        );
        assert_eq!(size, Size::new(300, 200));
        assert_eq!(pos, ORIGIN);
    }

    #[test]
    fn corner_moves_both_edges() {
        let (pos, size) = apply_resize(ORIGIN, SIZE, ResizeHandle::TopLeft, Point::new(-20, 30));
        assert_eq!(size, Size::new(520, 570));
        assert_eq!(pos, Point::new(80, 130));
    }

    #[test]
    fn extreme_deltas_never_break_the_floor() {
        for handle in ResizeHandle::ALL {
            for delta in [
                Point::new(i32::MIN, i32::MIN),
                Point::new(i32::MAX, i32::MAX),
                Point::new(i32::MIN, i32::MAX),
            ] {
                let (_, size) = apply_resize(ORIGIN, SIZE, handle, delta);
                assert!(size.width >= MIN_WINDOW_WIDTH, "{handle:?} {delta:?}");
                assert!(size.height >= MIN_WINDOW_HEIGHT, "{handle:?} {delta:?}");
            }
        }
    }

    #[test]
    fn drag_subtracts_grab_offset() {
        assert_eq!(
            apply_drag(Point::new(250, 140), Point::new(30, 10)),
            Point::new(220, 130)
        );
    }

    #[test]
    fn hit_test_prefers_corners_then_edges_then_close() {
        let m = ChromeMetrics::pointer();
        let bounds = PixelRect::new(0, 0, 500, 600);
        assert_eq!(
            m.hit_test(bounds, Point::new(2, 2)),
            Some(ChromeHit::Resize(ResizeHandle::TopLeft))
        );
        assert_eq!(
            m.hit_test(bounds, Point::new(250, 1)),
            Some(ChromeHit::Resize(ResizeHandle::Top))
        );
        assert_eq!(
            m.hit_test(bounds, Point::new(498, 300)),
            Some(ChromeHit::Resize(ResizeHandle::Right))
        );
        assert_eq!(
            m.hit_test(bounds, Point::new(470, 16)),
            Some(ChromeHit::Close)
        );
        assert_eq!(
            m.hit_test(bounds, Point::new(200, 16)),
            Some(ChromeHit::TitleBar)
        );
        assert_eq!(
            m.hit_test(bounds, Point::new(200, 300)),
            Some(ChromeHit::Body)
        );
        assert_eq!(m.hit_test(bounds, Point::new(600, 300)), None);
    }

    #[test]
    fn cell_metrics_put_title_on_second_row() {
        let m = ChromeMetrics::cells(8, 16);
        let bounds = PixelRect::new(0, 0, 496, 592);
        // centre of row 1, column 10
        assert_eq!(
            m.hit_test(bounds, Point::new(84, 24)),
            Some(ChromeHit::TitleBar)
        );
        // centre of row 0 is the top edge
        assert_eq!(
            m.hit_test(bounds, Point::new(84, 8)),
            Some(ChromeHit::Resize(ResizeHandle::Top))
        );
        assert_eq!(m.title_bar_height(), 32);
        assert_eq!(m.content_height(Size::new(500, 600)), 568);
        assert_eq!(ChromeMetrics::pointer().content_height(Size::new(300, 20)), 0);
    }
}
