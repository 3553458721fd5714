pub mod about;
pub mod connect;
pub mod header;
pub mod hero;
pub mod navbar;
pub mod pages;
pub mod projects;
pub mod terminal_overlay;
