//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod cents;
mod split_policy;

pub use cents::*;
pub use split_policy::*;
