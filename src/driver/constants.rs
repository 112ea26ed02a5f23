// Constants for the sorting driver

pub use crate::buffer::VALUE_RANGE;

/// Bar count bounds, applied by clamping
pub const MIN_BARS: usize = 4;
pub const MAX_BARS: usize = 256;
pub const DEFAULT_BARS: usize = 64;

/// Tick rate bounds in steps per second, applied by clamping
pub const MIN_TICK_RATE: u32 = 4;
pub const MAX_TICK_RATE: u32 = 256;
pub const DEFAULT_TICK_RATE: u32 = 64;
