//! Shared crate-wide constants.

/// Smallest width (in pixels) a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 300;

/// Smallest height (in pixels) a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Size given to every newly opened window.
pub const DEFAULT_WINDOW_WIDTH: i32 = 500;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Base origin of a newly opened window before the random offset is added.
pub const INITIAL_ORIGIN_X: i32 = 100;
pub const INITIAL_ORIGIN_Y: i32 = 100;

/// Exclusive upper bounds of the random placement offset. Two windows opened
/// from the same dock item rarely land exactly on top of each other.
pub const PLACEMENT_JITTER_X: i32 = 200;
pub const PLACEMENT_JITTER_Y: i32 = 100;

/// First stacking value handed out by the registry.
pub const Z_INDEX_SEED: u64 = 1000;

/// Two presses on the same dock item within this window count as a
/// double-activation.
pub const DOUBLE_ACTIVATION_MS: u64 = 500;

/// MLS listing shown in the property window.
pub const MLS_NUMBER: &str = "25000227";
