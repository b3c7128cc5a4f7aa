pub mod animation;
pub mod app;
pub mod components;
pub mod events;
pub mod input_handler;
pub mod selection;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
