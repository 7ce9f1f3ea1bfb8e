use async_trait::async_trait;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalId;
use crate::domain::animal::models::CreateAnimalCommand;
use crate::domain::user::models::UserId;

/// Port for animal collection operations.
#[async_trait]
pub trait AnimalServicePort: Send + Sync + 'static {
    /// Register a new reference animal.
    async fn create_animal(&self, command: CreateAnimalCommand) -> Result<Animal, AnimalError>;

    /// List all reference animals.
    async fn list_animals(&self) -> Result<Vec<Animal>, AnimalError>;

    /// Add an animal to a user's liked collection.
    ///
    /// # Errors
    /// * `AnimalNotFound` - No such animal
    /// * `AlreadyLiked` - The pair already exists
    async fn like_animal(&self, user_id: &UserId, animal_id: &AnimalId)
        -> Result<(), AnimalError>;

    /// Remove an animal from a user's liked collection.
    ///
    /// # Errors
    /// * `LikeNotFound` - The animal was not in the user's collection
    async fn unlike_animal(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError>;

    /// List the animals a user has liked.
    async fn list_liked(&self, user_id: &UserId) -> Result<Vec<Animal>, AnimalError>;
}

/// Persistence operations for animals and likes.
#[async_trait]
pub trait AnimalRepository: Send + Sync + 'static {
    /// Persist a new animal.
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError>;

    /// Retrieve an animal by identifier.
    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError>;

    /// Retrieve all animals.
    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError>;

    /// Record a (user, animal) like.
    ///
    /// # Errors
    /// * `AlreadyLiked` - Pair uniqueness constraint violated
    async fn insert_like(&self, user_id: &UserId, animal_id: &AnimalId)
        -> Result<(), AnimalError>;

    /// Remove a (user, animal) like.
    ///
    /// # Errors
    /// * `LikeNotFound` - No such pair recorded
    async fn delete_like(&self, user_id: &UserId, animal_id: &AnimalId)
        -> Result<(), AnimalError>;

    /// Retrieve the animals a user has liked.
    async fn list_liked_by_user(&self, user_id: &UserId) -> Result<Vec<Animal>, AnimalError>;
}
