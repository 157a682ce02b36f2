//! Weather card TUI - a sunny/rainy toggle card built on tui-dispatch
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod components;
pub mod effect;
pub mod particles;
pub mod reducer;
pub mod sprites;
pub mod state;
pub mod theme;
