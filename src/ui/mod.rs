//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — the event loop: tick timing, key handling, drawing
//! - **[`keymap`]** — key events to [`Command`](crate::driver::Command)s
//! - **[`panes`]** — stateless render functions for the controls, bars and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Driver`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Driver`]: crate::driver::Driver
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
