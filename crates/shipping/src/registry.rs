//! Caller-owned store of clients, cities and packages.

use chrono::{DateTime, Utc};

use airpack_core::{Entity, PackageId};

use crate::city::{City, CityRole};
use crate::client::Client;
use crate::config::ShippingConfig;
use crate::error::ShippingError;
use crate::package::Package;

/// The shipping ledger: four independent, append-only-by-default collections.
///
/// Membership is by identity (entity id), never by value. Registering the same
/// entity twice stores it twice; nothing is deduplicated or indexed.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    config: ShippingConfig,
    clients: Vec<Client>,
    origins: Vec<City>,
    destinations: Vec<City>,
    packages: Vec<Package>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShippingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    // Registration

    pub fn register_client(&mut self, client: Client) {
        tracing::debug!(client_id = %client.id(), username = client.username(), "client registered");
        self.clients.push(client);
    }

    /// Register a city into the collection matching its role.
    pub fn register_city(&mut self, city: City) {
        tracing::debug!(city_id = %city.id(), name = city.name(), role = %city.role(), "city registered");
        match city.role() {
            CityRole::Origin => self.origins.push(city),
            CityRole::Destination => self.destinations.push(city),
        }
    }

    /// Create and register a client in one step.
    pub fn add_client(&mut self, username: impl Into<String>) -> Client {
        let client = Client::new(username);
        self.register_client(client.clone());
        client
    }

    /// Create and register an origin city in one step.
    pub fn add_origin(&mut self, name: impl Into<String>) -> City {
        let city = City::origin(name);
        self.register_city(city.clone());
        city
    }

    /// Create and register a destination city in one step.
    pub fn add_destination(&mut self, name: impl Into<String>) -> City {
        let city = City::destination(name);
        self.register_city(city.clone());
        city
    }

    // Membership

    pub fn contains_client(&self, client: &Client) -> bool {
        contains(&self.clients, client)
    }

    pub fn contains_origin(&self, city: &City) -> bool {
        contains(&self.origins, city)
    }

    pub fn contains_destination(&self, city: &City) -> bool {
        contains(&self.destinations, city)
    }

    // Removal (resets)

    /// Remove the first entry with the client's identity.
    ///
    /// Packages already referencing the client are left untouched.
    pub fn remove_client(&mut self, client: &Client) -> bool {
        remove_first(&mut self.clients, client)
    }

    pub fn remove_origin(&mut self, city: &City) -> bool {
        remove_first(&mut self.origins, city)
    }

    pub fn remove_destination(&mut self, city: &City) -> bool {
        remove_first(&mut self.destinations, city)
    }

    /// Drop every client, city and package. The configuration is kept.
    pub fn clear(&mut self) {
        self.clients.clear();
        self.origins.clear();
        self.destinations.clear();
        self.packages.clear();
    }

    // Package lifecycle

    /// Create a package stamped with the current UTC instant.
    pub fn create_package(
        &mut self,
        client: &Client,
        origin: &City,
        destination: &City,
    ) -> Result<PackageId, ShippingError> {
        self.create_package_at(client, origin, destination, Utc::now())
    }

    /// Create a package with an explicit creation timestamp.
    ///
    /// References are checked client first, then origin, then destination;
    /// the first unregistered one is reported and nothing is stored.
    pub fn create_package_at(
        &mut self,
        client: &Client,
        origin: &City,
        destination: &City,
        created_at: DateTime<Utc>,
    ) -> Result<PackageId, ShippingError> {
        self.validate_references(client, origin, destination)
            .inspect_err(|err| tracing::warn!(error = %err, "package rejected"))?;

        let package = Package::new(
            client.id(),
            origin.id(),
            destination.id(),
            created_at,
            self.config.package_fee,
        );
        let package_id = package.id();

        tracing::info!(
            package_id = %package_id,
            client_id = %client.id(),
            origin = origin.name(),
            destination = destination.name(),
            fee = %package.fee(),
            "package created"
        );

        self.packages.push(package);
        Ok(package_id)
    }

    /// Ship a registered package. Idempotent.
    pub fn ship_package(&mut self, package_id: PackageId) -> Result<(), ShippingError> {
        let package = self
            .package_mut(package_id)
            .ok_or(ShippingError::UnknownPackage(package_id))?;
        package.ship();
        Ok(())
    }

    fn validate_references(
        &self,
        client: &Client,
        origin: &City,
        destination: &City,
    ) -> Result<(), ShippingError> {
        if !self.contains_client(client) {
            return Err(ShippingError::InvalidClient(client.id()));
        }
        if !self.contains_origin(origin) {
            return Err(ShippingError::InvalidOrigin(origin.id()));
        }
        if !self.contains_destination(destination) {
            return Err(ShippingError::InvalidDestination(destination.id()));
        }
        Ok(())
    }

    // Read access

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn origins(&self) -> &[City] {
        &self.origins
    }

    pub fn destinations(&self) -> &[City] {
        &self.destinations
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn package(&self, package_id: PackageId) -> Option<&Package> {
        self.packages.iter().find(|p| p.id() == package_id)
    }

    pub fn package_mut(&mut self, package_id: PackageId) -> Option<&mut Package> {
        self.packages.iter_mut().find(|p| p.id() == package_id)
    }
}

fn contains<E: Entity>(collection: &[E], entity: &E) -> bool {
    collection.iter().any(|e| e.same_entity(entity))
}

fn remove_first<E: Entity>(collection: &mut Vec<E>, entity: &E) -> bool {
    match collection.iter().position(|e| e.same_entity(entity)) {
        Some(index) => {
            collection.remove(index);
            true
        }
        None => false,
    }
}
