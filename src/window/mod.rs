pub mod decorator;
pub mod registry;
pub mod session;

mod window_manager;

use std::fmt;

use crate::layout::{PixelRect, Point, Size};

pub use registry::{FixedPlacement, PlacementSource, RandomPlacement, WindowRegistry};
pub use session::{
    DragSession, GrabCounter, PointerGrab, PointerSession, ResizeSession, SessionKind,
};
pub use window_manager::{PointerOutcome, WindowManager};

/// Opaque window token. Handed out in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn new(seq: u64) -> Self {
        Self(seq)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win-{}", self.0)
    }
}

/// Theme-resolved icon captured when the window was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef {
    name: String,
    path: String,
}

impl IconRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    id: WindowId,
    title: String,
    icon: IconRef,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) z_index: u64,
}

impl WindowRecord {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_parts(self.position, self.size)
    }
}
