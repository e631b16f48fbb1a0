//! Ordered store of open windows and the stacking counter.
//!
//! Records are kept in insertion order, which is also the order the renderer
//! walks them in; the visual stacking is decided only by each record's
//! `z_index`. Every `open` and every `focus` of a live window consumes one
//! value of the counter, so the most recently touched window always carries
//! the largest value and no two open windows share one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{IconRef, WindowId, WindowRecord};
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, INITIAL_ORIGIN_X, INITIAL_ORIGIN_Y,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, PLACEMENT_JITTER_X, PLACEMENT_JITTER_Y, Z_INDEX_SEED,
};
use crate::layout::{Point, Size};

/// Source of the offset added to a new window's origin.
pub trait PlacementSource {
    /// Returns an offset in `[0, max_x) x [0, max_y)`.
    fn jitter(&mut self, max_x: i32, max_y: i32) -> Point;
}

#[derive(Debug, Clone)]
pub struct RandomPlacement<R: Rng = StdRng> {
    rng: R,
}

impl RandomPlacement<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPlacement<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlacementSource for RandomPlacement<R> {
    fn jitter(&mut self, max_x: i32, max_y: i32) -> Point {
        Point {
            x: self.rng.random_range(0..max_x.max(1)),
            y: self.rng.random_range(0..max_y.max(1)),
        }
    }
}

/// Deterministic placement: hands out the given offsets in a cycle.
#[derive(Debug, Clone)]
pub struct FixedPlacement {
    offsets: Vec<Point>,
    next: usize,
}

impl FixedPlacement {
    pub fn new(offset: Point) -> Self {
        Self::sequence(vec![offset])
    }

    pub fn sequence(offsets: Vec<Point>) -> Self {
        Self { offsets, next: 0 }
    }
}

impl Default for FixedPlacement {
    fn default() -> Self {
        Self::new(Point::default())
    }
}

impl PlacementSource for FixedPlacement {
    fn jitter(&mut self, max_x: i32, max_y: i32) -> Point {
        let Some(offset) = self.offsets.get(self.next).copied() else {
            return Point::default();
        };
        self.next = (self.next + 1) % self.offsets.len();
        Point {
            x: offset.x.clamp(0, (max_x - 1).max(0)),
            y: offset.y.clamp(0, (max_y - 1).max(0)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowRegistry<P = RandomPlacement> {
    windows: Vec<WindowRecord>,
    next_z_index: u64,
    next_seq: u64,
    placement: P,
}

impl Default for WindowRegistry<RandomPlacement> {
    fn default() -> Self {
        Self::with_placement(RandomPlacement::from_entropy())
    }
}

impl<P: PlacementSource> WindowRegistry<P> {
    pub fn with_placement(placement: P) -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: Z_INDEX_SEED,
            next_seq: 0,
            placement,
        }
    }

    fn take_z_index(&mut self) -> u64 {
        let z = self.next_z_index;
        self.next_z_index = z.saturating_add(1);
        z
    }

    /// Create a window at a jittered origin with the default size and put it
    /// on top of the stack.
    pub fn open(&mut self, title: impl Into<String>, icon: IconRef) -> WindowId {
        let id = WindowId::new(self.next_seq);
        self.next_seq = self.next_seq.saturating_add(1);
        let jitter = self
            .placement
            .jitter(PLACEMENT_JITTER_X, PLACEMENT_JITTER_Y);
        let position = Point::new(INITIAL_ORIGIN_X, INITIAL_ORIGIN_Y).translate(jitter);
        let z_index = self.take_z_index();
        let record = WindowRecord {
            id,
            title: title.into(),
            icon,
            position,
            size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            z_index,
        };
        tracing::debug!(
            window_id = %id,
            title = record.title(),
            x = position.x,
            y = position.y,
            z_index,
            "opened window"
        );
        self.windows.push(record);
        id
    }

    /// Remove the window. Unknown ids are ignored.
    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(idx) = self.windows.iter().position(|w| w.id == id) else {
            return false;
        };
        self.windows.remove(idx);
        tracing::debug!(window_id = %id, "closed window");
        true
    }

    /// Raise the window above every other one. Raising the window that is
    /// already on top still consumes a counter value.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let z = self.take_z_index();
        if let Some(record) = self.windows.iter_mut().find(|w| w.id == id) {
            record.z_index = z;
        }
        tracing::trace!(window_id = %id, z_index = z, "focused window");
        true
    }

    /// Open windows in insertion order.
    pub fn list(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn next_z_index(&self) -> u64 {
        self.next_z_index
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.windows.iter().max_by_key(|w| w.z_index).map(|w| w.id)
    }

    /// Ids from bottom to top: the order windows must be painted in.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered.into_iter().map(|w| w.id).collect()
    }

    pub fn move_to(&mut self, id: WindowId, position: Point) {
        if let Some(record) = self.windows.iter_mut().find(|w| w.id == id) {
            record.position = position;
        }
    }

    /// Replace position and size, flooring the size at the minimum.
    pub fn set_bounds(&mut self, id: WindowId, position: Point, size: Size) {
        if let Some(record) = self.windows.iter_mut().find(|w| w.id == id) {
            record.position = position;
            record.size = Size {
                width: size.width.max(MIN_WINDOW_WIDTH),
                height: size.height.max(MIN_WINDOW_HEIGHT),
            };
        }
    }
}
