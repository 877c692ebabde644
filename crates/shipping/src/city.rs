use serde::{Deserialize, Serialize};

use airpack_core::{CityId, Entity};

/// Which side of a route a city serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityRole {
    Origin,
    Destination,
}

impl core::fmt::Display for CityRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CityRole::Origin => f.write_str("origin"),
            CityRole::Destination => f.write_str("destination"),
        }
    }
}

/// A city served by the airline, tagged with its role.
///
/// The same name may exist once as an origin and once as a destination; the
/// two are unrelated entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    id: CityId,
    name: String,
    role: CityRole,
}

impl City {
    pub fn new(name: impl Into<String>, role: CityRole) -> Self {
        Self {
            id: CityId::new(),
            name: name.into(),
            role,
        }
    }

    pub fn origin(name: impl Into<String>) -> Self {
        Self::new(name, CityRole::Origin)
    }

    pub fn destination(name: impl Into<String>) -> Self {
        Self::new(name, CityRole::Destination)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> CityRole {
        self.role
    }
}

impl Entity for City {
    type Id = CityId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_role() {
        let origin = City::origin("La Pampa");
        let destination = City::destination("Jujuy");

        assert_eq!(origin.name(), "La Pampa");
        assert_eq!(origin.role(), CityRole::Origin);
        assert_eq!(destination.name(), "Jujuy");
        assert_eq!(destination.role(), CityRole::Destination);
    }

    #[test]
    fn same_name_in_both_roles_are_distinct_entities() {
        let origin = City::origin("Buenos Aires");
        let destination = City::destination("Buenos Aires");
        assert!(!origin.same_entity(&destination));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&CityRole::Destination).unwrap();
        assert_eq!(json, "\"destination\"");
    }
}
