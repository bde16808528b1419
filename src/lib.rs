//! Sky Dodger: drag the bird, dodge what falls, grab the coins.
//!
//! The simulation (`compute`, `spawn`) is pure and terminal-agnostic; the
//! binary wires it to crossterm through `input` and `display`.

pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod input;
pub mod layout;
pub mod logging;
pub mod spawn;
