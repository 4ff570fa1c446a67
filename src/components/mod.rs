pub mod controls;
pub mod game_view;
