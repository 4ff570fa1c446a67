//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The table owns exactly one piece of state: the most recently resolved
//! game snapshot. Rendering is a pure projection of that snapshot, so the
//! display can never drift from it.

pub mod game;
