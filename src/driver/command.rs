//! Operator commands understood by the driver

use crate::buffer::Order;
use crate::sorting::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Reset,
    SetOrder(Order),
    /// Double the bar count
    Grow,
    /// Halve the bar count
    Shrink,
    /// Double the tick rate
    Faster,
    /// Halve the tick rate
    Slower,
    Select(Algorithm),
    Quit,
}
