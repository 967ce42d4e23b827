pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod life;
pub mod pattern;
pub mod render;
pub mod rule_set;
