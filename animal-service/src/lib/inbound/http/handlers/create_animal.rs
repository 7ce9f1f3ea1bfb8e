use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::CreateAnimalCommand;
use crate::inbound::http::router::AppState;

pub async fn create_animal(
    State(state): State<AppState>,
    Json(body): Json<CreateAnimalRequest>,
) -> Result<ApiSuccess<AnimalData>, ApiError> {
    if body.name.trim().is_empty() || body.species.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Animal name and species must not be empty".to_string(),
        ));
    }

    state
        .animal_service
        .create_animal(CreateAnimalCommand {
            name: body.name,
            species: body.species,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::CREATED, animal.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAnimalRequest {
    name: String,
    species: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalData {
    pub id: String,
    pub name: String,
    pub species: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Animal> for AnimalData {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id.to_string(),
            name: animal.name.clone(),
            species: animal.species.clone(),
            created_at: animal.created_at,
        }
    }
}
