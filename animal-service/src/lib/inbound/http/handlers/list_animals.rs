use axum::extract::State;
use axum::http::StatusCode;

use super::create_animal::AnimalData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_animals(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AnimalData>>, ApiError> {
    let animals = state
        .animal_service
        .list_animals()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        animals.iter().map(AnimalData::from).collect(),
    ))
}
