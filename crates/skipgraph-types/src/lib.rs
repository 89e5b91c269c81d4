//! Identifier and membership-vector algebra for the skip graph routing core.
//!
//! This crate defines the value types the rest of the workspace builds on:
//! [`Identifier`] and [`MembershipVector`] (the ordered, random 256-bit keys
//! that give the graph its shape), [`Address`] (an opaque network address),
//! [`Identity`] (the triple identifying one participant), [`Direction`], and
//! the `Level` validation helper.

mod address;
mod direction;
mod identifier;
mod identity;
mod level;
mod membership_vector;

pub use address::Address;
pub use direction::Direction;
pub use identifier::{CompareResult, Identifier, IDENTIFIER_BYTES};
pub use identity::Identity;
pub use level::validate_level;
pub use membership_vector::{MembershipVector, MAX_LEVEL, MEMBERSHIP_VECTOR_BYTES};
