//! GUI module for the Isolation game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::IsolationApp;
pub use session::{GameMode, GameResult, Session};
