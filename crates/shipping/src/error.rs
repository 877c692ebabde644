use thiserror::Error;

use airpack_core::{CityId, ClientId, DomainError, PackageId};

/// Failures of the package lifecycle.
///
/// The first three are construction-time reference checks, reported in the
/// order they are evaluated (client, origin, destination).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShippingError {
    #[error("client {0} is not registered")]
    InvalidClient(ClientId),

    #[error("origin city {0} is not registered")]
    InvalidOrigin(CityId),

    #[error("destination city {0} is not registered")]
    InvalidDestination(CityId),

    #[error("package {0} is not registered")]
    UnknownPackage(PackageId),
}

impl From<ShippingError> for DomainError {
    fn from(value: ShippingError) -> Self {
        DomainError::not_found(value.to_string())
    }
}
