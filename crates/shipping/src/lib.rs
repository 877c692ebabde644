//! Shipping domain module (clients, cities, packages and the registry).
//!
//! This crate contains the package lifecycle: references are validated against
//! a caller-owned [`Registry`] when a package is created, and a package moves
//! from `LabelCreated` to `Shipped` through an explicit call. No IO, no storage.

pub mod city;
pub mod client;
pub mod config;
pub mod error;
pub mod package;
pub mod registry;

pub use airpack_core::Entity;
pub use city::{City, CityRole};
pub use client::Client;
pub use config::{PACKAGE_FEE, ShippingConfig};
pub use error::ShippingError;
pub use package::{Package, PackageStatus};
pub use registry::Registry;
