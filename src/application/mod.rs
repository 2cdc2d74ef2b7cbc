mod application;
pub mod data;
mod render;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use render::{format_outcome, print_error, print_outcome};
pub use runtime_config::RuntimeConfig;
