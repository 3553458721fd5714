pub mod easter_egg;
pub mod routes;
pub mod scroll;
pub mod ui;
pub mod window_listener;
