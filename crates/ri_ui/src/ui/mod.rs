//! UI modules for the map window.

pub mod app_shell;
pub mod constants;
pub mod logging;
pub mod map_panel;
pub mod markers;
pub mod results;
