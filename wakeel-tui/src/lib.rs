//! WAKEEL TUI library exports.

pub mod actions;
pub mod api_client;
pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod lists;
pub mod loader;
pub mod logging;
pub mod nav;
pub mod notifications;
pub mod pages;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
