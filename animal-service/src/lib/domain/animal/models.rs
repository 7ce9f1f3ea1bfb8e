use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::animal::errors::AnimalIdError;

/// Reference animal entity users can like/save.
#[derive(Debug, Clone)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub created_at: DateTime<Utc>,
}

/// Animal unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimalId(pub Uuid);

impl AnimalId {
    /// Generate a new random animal ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an animal ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AnimalIdError> {
        Uuid::parse_str(s)
            .map(AnimalId)
            .map_err(|e| AnimalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AnimalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new reference animal
#[derive(Debug)]
pub struct CreateAnimalCommand {
    pub name: String,
    pub species: String,
}
