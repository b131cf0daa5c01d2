pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod sink;

pub use context::AppContext;
