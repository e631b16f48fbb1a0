//! Ephemeral pointer sessions.
//!
//! A session exists only between a pointer-down on a title bar or resize
//! handle and the matching pointer-up. While it exists it owns a
//! [`PointerGrab`], the stand-in for the global move/up listeners: the grab
//! is released when the session value is dropped, so every way of ending a
//! session (release, close, focus loss, replacement) gives the listeners back.

use std::cell::Cell;
use std::rc::Rc;

use crate::layout::floating::{ResizeHandle, apply_drag, apply_resize};
use crate::layout::{Point, Size};

use super::WindowId;

/// Counts live pointer grabs. Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct GrabCounter {
    live: Rc<Cell<usize>>,
}

impl GrabCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> PointerGrab {
        self.live.set(self.live.get() + 1);
        PointerGrab {
            live: Rc::clone(&self.live),
        }
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// Global pointer listeners held for the lifetime of a session.
#[derive(Debug)]
pub struct PointerGrab {
    live: Rc<Cell<usize>>,
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub id: WindowId,
    /// Pointer position minus window origin at press time.
    pub grab_offset: Point,
    pub origin_pointer: Point,
    pub origin_position: Point,
}

impl DragSession {
    pub fn begin(id: WindowId, pointer: Point, window_position: Point) -> Self {
        Self {
            id,
            grab_offset: pointer.offset_from(window_position),
            origin_pointer: pointer,
            origin_position: window_position,
        }
    }

    pub fn position_at(&self, pointer: Point) -> Point {
        apply_drag(pointer, self.grab_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub id: WindowId,
    pub handle: ResizeHandle,
    pub origin_pointer: Point,
    pub origin_position: Point,
    pub origin_size: Size,
}

impl ResizeSession {
    pub fn begin(
        id: WindowId,
        handle: ResizeHandle,
        pointer: Point,
        window_position: Point,
        window_size: Size,
    ) -> Self {
        Self {
            id,
            handle,
            origin_pointer: pointer,
            origin_position: window_position,
            origin_size: window_size,
        }
    }

    pub fn bounds_at(&self, pointer: Point) -> (Point, Size) {
        let delta = pointer.offset_from(self.origin_pointer);
        apply_resize(self.origin_position, self.origin_size, self.handle, delta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Drag(DragSession),
    Resize(ResizeSession),
}

/// The single active interaction plus the grab it holds.
#[derive(Debug)]
pub struct PointerSession {
    kind: SessionKind,
    _grab: PointerGrab,
}

impl PointerSession {
    pub fn new(kind: SessionKind, grab: PointerGrab) -> Self {
        Self { kind, _grab: grab }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn window(&self) -> WindowId {
        match self.kind {
            SessionKind::Drag(drag) => drag.id,
            SessionKind::Resize(resize) => resize.id,
        }
    }

    pub fn is_drag(&self) -> bool {
        matches!(self.kind, SessionKind::Drag(_))
    }

    pub fn is_resize(&self) -> bool {
        matches!(self.kind, SessionKind::Resize(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_released_when_session_dropped() {
        let counter = GrabCounter::new();
        let session = PointerSession::new(
            SessionKind::Drag(DragSession::begin(
                WindowId::new(1),
                Point::new(10, 10),
                Point::new(0, 0),
            )),
            counter.acquire(),
        );
        assert_eq!(counter.live(), 1);
        assert_eq!(session.window(), WindowId::new(1));
        drop(session);
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let drag = DragSession::begin(WindowId::new(0), Point::new(150, 120), Point::new(100, 100));
        assert_eq!(drag.grab_offset, Point::new(50, 20));
        assert_eq!(drag.position_at(Point::new(175, 90)), Point::new(125, 70));
    }

    #[test]
    fn resize_measures_delta_from_origin_pointer() {
        let resize = ResizeSession::begin(
            WindowId::new(0),
            ResizeHandle::Left,
            Point::new(100, 300),
            Point::new(100, 100),
            Size::new(500, 600),
        );
        let (pos, size) = resize.bounds_at(Point::new(350, 300));
        assert_eq!(size.width, 300);
        assert_eq!(pos.x, 300);
    }
}
