pub mod app;
pub mod context;
pub mod input;
pub mod message;
pub mod router;
pub mod selection;
pub mod startup;
pub mod state;
pub mod util;
