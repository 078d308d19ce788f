//! Musou Kokaton: a terminal shoot-'em-up.
//!
//! The library holds the whole simulation and knows nothing about the
//! terminal. The binary feeds it input, asks it for draw calls, and paints
//! them with crossterm.

pub mod assets;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod render;
pub mod spawner;
