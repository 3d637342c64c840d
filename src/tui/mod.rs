//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: the daily grid, the recap and
//! the running totals side by side, with in-place cell editing.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
