pub mod api_client;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod presenter;
pub mod render;
pub mod view;

pub use error::{ClientError, Result};
pub use orchestrator::{Controller, Operation};
pub use view::View;
