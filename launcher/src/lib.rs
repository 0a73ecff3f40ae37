pub mod compose;
mod error;
pub mod form;
pub mod notice;
pub mod pools;
pub mod session;
pub mod submit;
pub mod summary;

#[cfg(test)]
mod tests;

pub use crate::error::LaunchError;
