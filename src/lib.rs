pub mod catalog;
pub mod config;
pub mod event;
pub mod library;
pub mod location;
pub mod model;
pub mod ui;
pub mod util;
