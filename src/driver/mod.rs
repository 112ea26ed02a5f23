//! Step scheduling for sorting sessions
//!
//! This module provides the machinery between input and the algorithms:
//! - [`engine`]: the [`Driver`](engine::Driver), which owns the buffer and
//!   advances the active session once per tick
//! - [`session`]: one producer bound to one buffer generation and order
//! - [`command`]: operator commands applied through [`Driver::apply`](engine::Driver::apply)
//! - [`constants`]: value range and clamping bounds
//!
//! # Execution Model
//!
//! Everything runs on one thread. The driver is the only caller of
//! [`Session::advance`](session::Session::advance), once per tick. Any
//! reconfiguration (reset, resize, order or algorithm change) drops the
//! session without finishing its current step; the next tick builds a new one
//! over the buffer exactly as it was left.

pub mod command;
pub mod constants;
pub mod engine;
pub mod session;

pub use command::Command;
pub use engine::{Driver, RunState, Settings, Status};
pub use session::Session;
