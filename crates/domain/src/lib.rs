//! Domain layer for WalkNav
//!
//! Contains the value objects shared by the navigation client and the
//! command-line front end. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
