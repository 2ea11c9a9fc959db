//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod expense_repository;
mod participant_repository;

pub use expense_repository::*;
pub use participant_repository::*;
