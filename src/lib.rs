//! # big2-client
//!
//! Leptos + WASM frontend for a Big Two card game server.
//!
//! The server owns all game rules and state; this crate binds two controls
//! (start game, reset) to its REST endpoints and re-renders the table
//! display from whatever snapshot the server returns. Each successful
//! response fully replaces the displayed state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
