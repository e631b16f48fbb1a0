pub mod floating;

use ratatui::prelude::Rect;

/// A position in logical pixels. Signed so windows can sit partially or fully
/// off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point {
            x: self.x.saturating_sub(origin.x),
            y: self.y.saturating_sub(origin.y),
        }
    }

    pub fn translate(self, delta: Point) -> Point {
        Point {
            x: self.x.saturating_add(delta.x),
            y: self.y.saturating_add(delta.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Signed pixel rectangle: window bounds and the hit regions derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Signed cell rectangle used when compositing windows onto the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    /// Local rect of the same size anchored at the origin, for offscreen buffers.
    pub fn local(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> CellRect {
        CellRect {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// The part of this rect that lies inside `bounds`.
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let x0 = self.x.max(bounds.x as i32);
        let y0 = self.y.max(bounds.y as i32);
        let x1 = (self.x + self.width as i32).min(bounds.x as i32 + bounds.width as i32);
        let y1 = (self.y + self.height as i32).min(bounds.y as i32 + bounds.height as i32);
        (x1 > x0 && y1 > y0).then(|| Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }

    /// Screen cell relative to this rect's origin, if it lies inside.
    pub fn to_local(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let dx = column as i32 - self.x;
        let dy = row as i32 - self.y;
        ((0..self.width as i32).contains(&dx) && (0..self.height as i32).contains(&dy))
            .then_some((dx as u16, dy as u16))
    }
}

pub const DEFAULT_CELL_WIDTH: i32 = 8;
pub const DEFAULT_CELL_HEIGHT: i32 = 16;
/// Upper bound for either cell dimension.
pub const MAX_CELL_SIZE: i32 = 256;

/// Pixel size of one terminal cell.
///
/// Pointer positions map to the centre of the cell under the pointer, and a
/// pixel span maps to the cells whose centres fall inside it. Using the same
/// rule for both directions keeps hit testing consistent with what is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    cell_width: i32,
    cell_height: i32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

impl CellMetrics {
    pub fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: cell_width.clamp(1, MAX_CELL_SIZE),
            cell_height: cell_height.clamp(1, MAX_CELL_SIZE),
        }
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Point {
        Point {
            x: (column as i32)
                .saturating_mul(self.cell_width)
                .saturating_add(self.cell_width / 2),
            y: (row as i32)
                .saturating_mul(self.cell_height)
                .saturating_add(self.cell_height / 2),
        }
    }

    pub fn rect_to_cells(&self, rect: PixelRect) -> CellRect {
        let (x, width) = span_to_cells(rect.x, rect.width, self.cell_width);
        let (y, height) = span_to_cells(rect.y, rect.height, self.cell_height);
        CellRect {
            x,
            y,
            width,
            height,
        }
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    -((-value).div_euclid(divisor))
}

fn span_to_cells(start: i32, len: i32, cell: i32) -> (i32, u16) {
    let half = cell / 2;
    let first = ceil_div(start.saturating_sub(half), cell);
    let end = ceil_div(start.saturating_add(len.max(0)).saturating_sub(half), cell);
    let count = end.saturating_sub(first).clamp(0, u16::MAX as i32);
    (first, count as u16)
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_metrics_are_bounded() {
        let m = CellMetrics::new(i32::MAX, 0);
        assert_eq!(m.cell_width(), MAX_CELL_SIZE);
        assert_eq!(m.cell_height(), 1);
        let far = m.cell_to_pixel(u16::MAX, u16::MAX);
        assert_eq!(far, Point::new(65_535 * 256 + 128, 65_535));
    }

    #[test]
    fn pixel_rect_contains_is_half_open() {
        let r = PixelRect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!PixelRect::new(0, 0, 0, 5).contains(Point::new(0, 0)));
    }

    #[test]
    fn cell_to_pixel_uses_cell_centre() {
        let m = CellMetrics::new(8, 16);
        assert_eq!(m.cell_to_pixel(0, 0), Point::new(4, 8));
        assert_eq!(m.cell_to_pixel(3, 2), Point::new(28, 40));
    }

    #[test]
    fn rect_to_cells_matches_pointer_mapping() {
        let m = CellMetrics::new(8, 16);
        let rect = PixelRect::new(100, 100, 500, 600);
        let cells = m.rect_to_cells(rect);
        // every covered cell's centre lies inside the pixel rect
        let first = m.cell_to_pixel(cells.x as u16, cells.y as u16);
        let last = m.cell_to_pixel(
            (cells.x + cells.width as i32 - 1) as u16,
            (cells.y + cells.height as i32 - 1) as u16,
        );
        assert!(rect.contains(first));
        assert!(rect.contains(last));
        let beyond = m.cell_to_pixel(
            (cells.x + cells.width as i32) as u16,
            (cells.y + cells.height as i32) as u16,
        );
        assert!(!rect.contains(beyond));
    }

    #[test]
    fn rect_to_cells_handles_negative_origin() {
        let m = CellMetrics::new(8, 16);
        let cells = m.rect_to_cells(PixelRect::new(-20, -40, 40, 80));
        assert_eq!(cells.x, -3);
        assert_eq!(cells.y, -3);
        assert_eq!(cells.width, 5);
        assert_eq!(cells.height, 5);
    }

    #[test]
    fn rect_contains_edge_cases() {
        let r = Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 5,
        };
        assert!(!rect_contains(r, 0, 0));
        let r2 = Rect {
            x: 1,
            y: 1,
            width: 3,
            height: 3,
        };
        assert!(rect_contains(r2, 1, 1));
        assert!(!rect_contains(r2, 4, 1));
    }

    #[test]
    fn cell_rect_clips_and_localizes() {
        let rect = CellRect {
            x: -2,
            y: 3,
            width: 6,
            height: 4,
        };
        let screen = Rect::new(0, 0, 10, 5);
        assert_eq!(rect.clip_to(screen), Some(Rect::new(0, 3, 4, 2)));
        assert_eq!(rect.shifted(20, 0).clip_to(screen), None);
        assert_eq!(rect.to_local(0, 3), Some((2, 0)));
        assert_eq!(rect.to_local(4, 6), None);
        assert_eq!(rect.to_local(3, 6), Some((5, 3)));
    }
}
