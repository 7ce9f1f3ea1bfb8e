use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::animal::models::AnimalId;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn like_animal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<LikeAnimalRequest>,
) -> Result<ApiSuccess<LikeAnimalResponseData>, ApiError> {
    let animal_id = AnimalId::from_string(&body.animal_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .animal_service
        .like_animal(&user.id, &animal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LikeAnimalResponseData {
            animal_id: animal_id.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LikeAnimalRequest {
    animal_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeAnimalResponseData {
    pub animal_id: String,
}
