//! Day/night weather board
//!
//! This library exposes the board's modules for testing.

pub mod action;
pub mod components;
pub mod effect;
pub mod error;
pub mod logging;
pub mod provider;
pub mod reducer;
pub mod sprites;
pub mod state;
pub mod theme;
