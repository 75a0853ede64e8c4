//! Render the terminal's current ANSI color theme as grids of labeled,
//! colored cells.
//!
//! The library is a set of pure formatting and enumeration functions:
//! [`attr`] maps symbolic color names to SGR codes, [`combo`] enumerates the
//! fixed color/weight/reverse-video order, [`cell`] renders single
//! escape-wrapped cells, [`grid`] drives equal-length cell columns in
//! lockstep, and [`cuboid`] lays out the 8-bit palette blocks via base-N
//! positional encoding. The binary in `main.rs` is a thin clap front end
//! over [`commands`].

pub mod attr;
pub mod cell;
pub mod cli;
pub mod combo;
pub mod commands;
pub mod config;
pub mod cuboid;
pub mod error;
pub mod grid;

pub use attr::AttrTables;
pub use config::Config;
