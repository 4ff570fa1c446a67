//! Network layer: wire types and REST helpers for the game server.

pub mod api;
pub mod types;
