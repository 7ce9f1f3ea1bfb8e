use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_animal::AnimalData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_liked(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<AnimalData>>, ApiError> {
    let animals = state
        .animal_service
        .list_liked(&user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        animals.iter().map(AnimalData::from).collect(),
    ))
}
