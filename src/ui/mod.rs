pub mod app;
pub mod app_context;
pub mod components;

pub use app::*;
pub use app_context::*;
pub use components::*;
