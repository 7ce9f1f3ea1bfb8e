use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::animal::models::AnimalId;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn unlike_animal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(animal_id): Path<String>,
) -> Result<ApiSuccess<UnlikeAnimalResponseData>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .animal_service
        .unlike_animal(&user.id, &animal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UnlikeAnimalResponseData {
            animal_id: animal_id.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlikeAnimalResponseData {
    pub animal_id: String,
}
