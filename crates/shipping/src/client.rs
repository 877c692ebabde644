use serde::{Deserialize, Serialize};

use airpack_core::{ClientId, Entity};

/// An airline client (the sender of packages).
///
/// Usernames are not unique; identity is carried by the generated [`ClientId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    username: String,
}

impl Client {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
