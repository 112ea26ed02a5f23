//! # Introduction
//!
//! sortty animates sorting algorithms in the terminal. Each algorithm runs as
//! a resumable state machine that applies one mutation to the working buffer
//! per tick, and the buffer is redrawn as a bar chart after every step through
//! a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Keys → Command → Driver → Session → Step Producer → WorkingBuffer → Snapshot → TUI
//! ```
//!
//! 1. [`buffer`] — the single mutable array and its ascending/descending [`buffer::Order`].
//! 2. [`sorting`] — bubble, insertion, selection, merge, quick and crazy sort as
//!    [`sorting::StepProducer`]s, plus the [`sorting::Algorithm`] registry.
//! 3. [`driver`] — the tick-driven [`driver::Driver`] and its [`driver::Session`]s.
//! 4. [`snapshot`] — the read-only view the renderer draws from.
//! 5. [`config`] and [`errors`] — command line, logging and process-level errors.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Driving without a terminal
//!
//! ```
//! use sortty::buffer::{Order, WorkingBuffer};
//! use sortty::driver::Driver;
//! use sortty::sorting::{Algorithm, Progress};
//!
//! let buffer = WorkingBuffer::from_values(vec![5, 3, 4, 1, 2], Order::Ascending);
//! let mut driver = Driver::from_buffer(buffer, Algorithm::Bubble, 0);
//! driver.set_playing(true);
//!
//! let mut steps = 0;
//! while let Some(Progress::Progressed(_)) = driver.tick() {
//!     steps += 1;
//! }
//! assert_eq!(steps, 8);
//! assert_eq!(driver.buffer().values(), &[1, 2, 3, 4, 5]);
//! ```

pub mod buffer;
pub mod config;
pub mod driver;
pub mod errors;
pub mod snapshot;
pub mod sorting;
pub mod ui;
