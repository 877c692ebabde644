//! `airpack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the shipping and
//! reporting crates (no storage, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CityId, ClientId, PackageId};
pub use value_object::Money;
