use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use airpack_core::{CityId, ClientId, Entity, Money, PackageId};

/// Package status lifecycle.
///
/// `LabelCreated` is the initial state ("booked, not yet shipped"). There is
/// no way back from `Shipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageStatus {
    #[serde(rename = "Label Created")]
    LabelCreated,
    Shipped,
}

impl core::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackageStatus::LabelCreated => f.write_str("Label Created"),
            PackageStatus::Shipped => f.write_str("Shipped"),
        }
    }
}

/// A package booked with the airline.
///
/// Only [`Registry`](crate::Registry) constructs packages, after checking that
/// the client, origin and destination are registered. References are held by
/// id; removing the referenced entity later leaves the package intact.
/// Serialize-only: a package is never rebuilt from outside data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    id: PackageId,
    client: ClientId,
    origin: CityId,
    destination: CityId,
    created_at: DateTime<Utc>,
    fee: Money,
    status: PackageStatus,
}

impl Package {
    pub(crate) fn new(
        client: ClientId,
        origin: CityId,
        destination: CityId,
        created_at: DateTime<Utc>,
        fee: Money,
    ) -> Self {
        Self {
            id: PackageId::new(),
            client,
            origin,
            destination,
            created_at,
            fee,
            status: PackageStatus::LabelCreated,
        }
    }

    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn origin(&self) -> CityId {
        self.origin
    }

    pub fn destination(&self) -> CityId {
        self.destination
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Calendar day (UTC) the package was created on.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn fee(&self) -> Money {
        self.fee
    }

    pub fn status(&self) -> PackageStatus {
        self.status
    }

    pub fn is_shipped(&self) -> bool {
        self.status == PackageStatus::Shipped
    }

    /// Mark the package as shipped.
    ///
    /// Unconditional: shipping an already shipped package is a no-op.
    pub fn ship(&mut self) {
        if self.status != PackageStatus::Shipped {
            tracing::debug!(package_id = %self.id, "package shipped");
        }
        self.status = PackageStatus::Shipped;
    }
}

impl Entity for Package {
    type Id = PackageId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
