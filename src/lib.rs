mod views;
mod theme;
mod routes;
mod error;

#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::theme::*;
pub use crate::error::StorageError;
