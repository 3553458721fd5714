pub mod easter_egg;
pub mod konami;
pub mod profile;
