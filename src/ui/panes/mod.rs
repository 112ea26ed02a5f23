//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`controls`]: key legend with the selected algorithm and order highlighted
//! - [`bars`]: the working buffer drawn as a bar chart
//! - [`status`]: status bar with step counter, keybindings and run state
//!
//! Every pane is a free `render_*` function over a [`Snapshot`](crate::snapshot::Snapshot);
//! none of them can reach the driver mutably.

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::render_controls_pane;
pub use status::render_status_bar;
