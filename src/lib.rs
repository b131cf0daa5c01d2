//! issuekit: generate GitHub issue templates from a category list and keep
//! labels and milestones in sync.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::AppError;
