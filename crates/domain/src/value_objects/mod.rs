//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod coordinate;

pub use address::Address;
pub use coordinate::Coordinate;
