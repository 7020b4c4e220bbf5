pub mod game_view;
pub mod screen;

pub use game_view::GameView;
pub use screen::{Panel, Scoreboard, Screen};
