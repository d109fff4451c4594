//! Terminal UI: main menu, the race view with ticket and dice tents, and the
//! leg and game result popups.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
