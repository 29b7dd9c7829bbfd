//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: the script with the current statement's line marked
//! - [`generated`]: the Go translation with the current statement's lines marked
//! - [`variables`]: the demonstration run's variable table
//! - [`terminal`]: output printed by `bol`
//! - [`status`]: status bar with keybindings and execution state
//! - `highlight`: keyword highlighting and border styles shared by the panes
//!
//! Each pane exports one `render_*` function. Scroll offsets live in the
//! [`App`](crate::ui::App) and are clamped by the renderers.

mod highlight;

pub mod generated;
pub mod source;
pub mod status;
pub mod terminal;
pub mod variables;

pub use generated::render_generated_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;
pub use variables::render_variables_pane;
