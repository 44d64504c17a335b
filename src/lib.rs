//! # Connect Four Server
//!
//! A two-player Connect Four game served over HTTP. One authoritative game
//! lives behind a single lock; moves arrive as requests while a background
//! clock charges the player on turn one second at a time.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, player, win detection, presets, state machine
//! - [`session`] - Lock-protected shared handle and state snapshots
//! - [`clock`] - Background per-player countdown
//! - [`server`] - axum routes, error mapping, listener with port fallback
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod server;
pub mod session;
