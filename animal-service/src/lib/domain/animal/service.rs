use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalId;
use crate::domain::animal::models::CreateAnimalCommand;
use crate::domain::animal::ports::AnimalRepository;
use crate::domain::animal::ports::AnimalServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for animal collection operations.
pub struct AnimalService<AR>
where
    AR: AnimalRepository,
{
    repository: Arc<AR>,
}

impl<AR> AnimalService<AR>
where
    AR: AnimalRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AnimalServicePort for AnimalService<AR>
where
    AR: AnimalRepository,
{
    async fn create_animal(&self, command: CreateAnimalCommand) -> Result<Animal, AnimalError> {
        let animal = Animal {
            id: AnimalId::new(),
            name: command.name,
            species: command.species,
            created_at: Utc::now(),
        };

        self.repository.create(animal).await
    }

    async fn list_animals(&self) -> Result<Vec<Animal>, AnimalError> {
        self.repository.list_all().await
    }

    async fn like_animal(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        // The animal must exist before the like is recorded
        self.repository
            .find_by_id(animal_id)
            .await?
            .ok_or(AnimalError::AnimalNotFound)?;

        self.repository.insert_like(user_id, animal_id).await
    }

    async fn unlike_animal(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        self.repository.delete_like(user_id, animal_id).await
    }

    async fn list_liked(&self, user_id: &UserId) -> Result<Vec<Animal>, AnimalError> {
        self.repository.list_liked_by_user(user_id).await
    }
}
